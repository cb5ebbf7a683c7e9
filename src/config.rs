//! Printer configuration.

use crate::terminal::Modifiers;
use crate::text::WidthMode;
use log::warn;
use std::env;

/// Environment variable selecting the highlight style (`reverse`, `bold`,
/// `underline`, combinable with `+`).
pub const ENV_HIGHLIGHT: &str = "DIFFPRINT_HIGHLIGHT";
/// Environment variable selecting the width table (`ranges` or `unicode`).
pub const ENV_WIDTH: &str = "DIFFPRINT_WIDTH";
/// Environment variable that disables the screen clear in `start()` when `1`.
pub const ENV_NO_CLEAR: &str = "DIFFPRINT_NO_CLEAR";

/// Configuration for a [`DiffPrinter`](crate::DiffPrinter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Style applied to changed segments.
    pub highlight: Modifiers,
    /// How column widths are measured for trailing padding.
    pub width_mode: WidthMode,
    /// Whether `start()` clears the screen and homes the cursor.
    pub clear_on_start: bool,
    /// Whether `start()` hides the cursor.
    pub hide_cursor: bool,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            highlight: Modifiers::REVERSED,
            width_mode: WidthMode::Ranges,
            clear_on_start: true,
            hide_cursor: true,
        }
    }
}

impl PrinterConfig {
    /// Defaults overridden by `DIFFPRINT_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    ///
    /// Unparseable values are ignored with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(raw) = value(ENV_HIGHLIGHT) {
            match Modifiers::parse(&raw) {
                Some(highlight) => config.highlight = highlight,
                None => warn!("ignoring {ENV_HIGHLIGHT}={raw:?}: unknown style"),
            }
        }
        if let Some(raw) = value(ENV_WIDTH) {
            match WidthMode::parse(&raw) {
                Some(mode) => config.width_mode = mode,
                None => warn!("ignoring {ENV_WIDTH}={raw:?}: expected `ranges` or `unicode`"),
            }
        }
        if let Some(raw) = value(ENV_NO_CLEAR) {
            config.clear_on_start = raw.trim() != "1";
        }

        config
    }

    /// Set the highlight style.
    #[must_use]
    pub const fn with_highlight(mut self, highlight: Modifiers) -> Self {
        self.highlight = highlight;
        self
    }

    /// Set the width mode.
    #[must_use]
    pub const fn with_width_mode(mut self, width_mode: WidthMode) -> Self {
        self.width_mode = width_mode;
        self
    }

    /// Render inline: `start()` neither clears the screen nor homes the cursor.
    #[must_use]
    pub const fn inline(mut self) -> Self {
        self.clear_on_start = false;
        self
    }
}
