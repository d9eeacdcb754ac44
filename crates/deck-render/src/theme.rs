//! Colour presets for rendered decks.

use std::fmt;

use tracing::debug;

/// Accent colours and font used by both renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub accent: &'static str,
    pub accent_dark: &'static str,
    pub font_family: &'static str,
}

const FONT_FAMILY: &str = "Arial, sans-serif";

const PRESETS: [Theme; 6] = [
    Theme::preset("blue", "#2563eb", "#1e40af"),
    Theme::preset("red", "#dc2626", "#991b1b"),
    Theme::preset("sky", "#0ea5e9", "#0369a1"),
    Theme::preset("indigo", "#4f46e5", "#3730a3"),
    Theme::preset("violet", "#6f42c1", "#4c2a85"),
    Theme::preset("emerald", "#059669", "#065f46"),
];

impl Theme {
    const fn preset(name: &'static str, accent: &'static str, accent_dark: &'static str) -> Self {
        Self {
            name,
            accent,
            accent_dark,
            font_family: FONT_FAMILY,
        }
    }

    pub fn presets() -> &'static [Theme] {
        &PRESETS
    }

    /// Preset by name (case-insensitive).
    pub fn lookup(name: &str) -> Option<Theme> {
        let name = name.trim();
        PRESETS
            .iter()
            .find(|theme| theme.name.eq_ignore_ascii_case(name))
            .copied()
    }

    /// Preset by name, falling back to the default (blue) for unknown names.
    pub fn named(name: &str) -> Theme {
        Self::lookup(name).unwrap_or_else(|| {
            debug!(theme = %name, fallback = PRESETS[0].name, "unknown theme name");
            Theme::default()
        })
    }

    /// Theme for a deck: explicit override, then the deck's own theme, then the default.
    pub fn resolve(override_name: Option<&str>, deck_theme: Option<&str>) -> Theme {
        override_name
            .or(deck_theme)
            .map_or_else(Theme::default, Theme::named)
    }

    /// Inline stylesheet for the export document.
    ///
    /// Contains no `<`, `>` or `&` so it can be written unescaped.
    pub fn stylesheet(&self) -> String {
        let Theme {
            accent,
            accent_dark,
            font_family,
            ..
        } = *self;
        format!(
            "
body {{ font-family: {font_family}; margin: 0; padding: 20px; background: #f5f5f5; color: #1f2937; }}
.slide {{ background: white; margin: 20px auto; padding: 40px; max-width: 900px; box-shadow: 0 2px 8px rgba(0,0,0,0.1); page-break-after: always; }}
h1 {{ color: {accent_dark}; font-size: 32px; margin-top: 0; }}
h2 {{ color: {accent}; font-size: 22px; }}
table {{ border-collapse: collapse; width: 100%; margin: 16px 0; }}
th, td {{ border: 1px solid #d1d5db; padding: 8px; text-align: left; }}
th {{ background: {accent}; color: white; }}
.callout {{ border-left: 4px solid {accent}; background: #f9fafb; padding: 12px 16px; margin: 16px 0; }}
.emphasis {{ font-weight: bold; }}
.meta {{ color: #6b7280; }}
.columns {{ display: flex; gap: 24px; }}
.columns .column {{ flex: 1; }}
.formula {{ font-family: monospace; font-size: 20px; color: {accent_dark}; }}
@media print {{ .slide {{ page-break-after: always; box-shadow: none; }} body {{ background: white; }} }}
"
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        PRESETS[0]
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
