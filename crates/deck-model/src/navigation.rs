//! Current-slide index for a presentation.

/// Index into a deck of fixed length, clamped to `[0, len - 1]`.
///
/// Transitions saturate at both ends; they never wrap and never fail. An
/// empty deck keeps index 0 and every transition is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    index: usize,
    len: usize,
}

impl Navigator {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn last(&self) -> usize {
        self.len.saturating_sub(1)
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index == self.last()
    }

    /// Move to the next slide. Returns whether the index changed.
    pub fn advance(&mut self) -> bool {
        if self.index < self.last() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Move to the previous slide. Returns whether the index changed.
    pub fn retreat(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to `index`, clamped into range. Returns whether the index changed.
    pub fn go_to(&mut self, index: usize) -> bool {
        let target = index.min(self.last());
        let moved = target != self.index;
        self.index = target;
        moved
    }

    /// 1-based position and total, `(0, 0)` for an empty deck.
    pub fn position(&self) -> (usize, usize) {
        if self.len == 0 {
            (0, 0)
        } else {
            (self.index + 1, self.len)
        }
    }
}
