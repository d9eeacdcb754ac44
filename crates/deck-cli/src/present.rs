//! Line-driven presentation in a terminal.
//!
//! Reads one command per line and redraws the current frame after each:
//! `n` or an empty line moves forward, `p` moves back, `g <k>` jumps to
//! slide `k` (1-based, clamped) and `q` ends the session, as does end of
//! input.

use std::io::{self, BufRead, Write};

use deck_model::{Deck, Navigator};
use deck_render::{RendererRegistry, Theme, render_frame_with};
use tracing::debug;

pub const PROMPT: &str = "[n]ext [p]revious [g N] go to [q]uit > ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Next,
    Previous,
    /// 1-based slide number.
    GoTo(usize),
    Quit,
    Invalid(String),
}

impl Action {
    pub fn parse(line: &str) -> Action {
        let mut words = line.split_whitespace();
        let command = words.next().map(str::to_ascii_lowercase);
        let argument = words.next();
        match (command.as_deref(), argument) {
            (None | Some("n" | "next"), None) => Action::Next,
            (Some("p" | "prev" | "previous"), None) => Action::Previous,
            (Some("q" | "quit"), None) => Action::Quit,
            (Some("g" | "go"), Some(number)) => match number.parse() {
                Ok(number) => Action::GoTo(number),
                Err(_) => Action::Invalid(line.trim().to_string()),
            },
            _ => Action::Invalid(line.trim().to_string()),
        }
    }
}

/// Apply one action; returns `false` when the session should end.
pub fn apply(navigator: &mut Navigator, action: &Action) -> bool {
    match action {
        Action::Next => {
            navigator.advance();
        }
        Action::Previous => {
            navigator.retreat();
        }
        Action::GoTo(number) => {
            navigator.go_to(number.saturating_sub(1));
        }
        Action::Quit => return false,
        Action::Invalid(_) => {}
    }
    true
}

/// Run a session starting at `start` (0-based) and return the final position.
pub fn run_session<R, W>(
    deck: &Deck,
    theme: &Theme,
    registry: &RendererRegistry,
    start: usize,
    input: R,
    mut output: W,
) -> io::Result<Navigator>
where
    R: BufRead,
    W: Write,
{
    let mut navigator = Navigator::new(deck.len());
    navigator.go_to(start);
    let mut lines = input.lines();
    loop {
        let frame = render_frame_with(deck, &navigator, theme, registry);
        write!(output, "{}\n{PROMPT}", frame.to_text())?;
        output.flush()?;
        let Some(line) = lines.next().transpose()? else {
            writeln!(output)?;
            break;
        };
        let action = Action::parse(&line);
        if let Action::Invalid(command) = &action {
            writeln!(output, "unrecognized command: {command}")?;
        }
        if !apply(&mut navigator, &action) {
            break;
        }
        debug!(
            deck = %deck.name(),
            slide_index = navigator.index(),
            ?action,
            "navigated"
        );
    }
    Ok(navigator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(Action::parse(""), Action::Next);
        assert_eq!(Action::parse(" N "), Action::Next);
        assert_eq!(Action::parse("p"), Action::Previous);
        assert_eq!(Action::parse("g 4"), Action::GoTo(4));
        assert_eq!(Action::parse("q"), Action::Quit);
        assert_eq!(Action::parse("g x"), Action::Invalid("g x".to_string()));
        assert_eq!(Action::parse("jump"), Action::Invalid("jump".to_string()));
    }

    #[test]
    fn go_to_is_one_based_and_clamped() {
        let mut nav = Navigator::new(5);
        assert!(apply(&mut nav, &Action::GoTo(3)));
        assert_eq!(nav.index(), 2);
        apply(&mut nav, &Action::GoTo(0));
        assert_eq!(nav.index(), 0);
        apply(&mut nav, &Action::GoTo(99));
        assert_eq!(nav.index(), 4);
        assert!(!apply(&mut nav, &Action::Quit));
    }
}
