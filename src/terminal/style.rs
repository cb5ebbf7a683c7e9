//! Text style modifiers used to highlight changed segments.

use bitflags::bitflags;
use crossterm::style::Attribute;

bitflags! {
    /// Text style modifiers.
    ///
    /// These can be combined using bitwise OR.
    ///
    /// # Example
    /// ```
    /// use diffprint::Modifiers;
    /// let highlight = Modifiers::REVERSED | Modifiers::BOLD;
    /// assert!(highlight.contains(Modifiers::BOLD));
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Underlined text
        const UNDERLINE = 0b0000_0010;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0000_0100;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

impl Modifiers {
    /// SGR attributes for this set, in emission order.
    pub fn attributes(self) -> impl Iterator<Item = Attribute> {
        [
            (Self::BOLD, Attribute::Bold),
            (Self::UNDERLINE, Attribute::Underlined),
            (Self::REVERSED, Attribute::Reverse),
        ]
        .into_iter()
        .filter(move |(flag, _)| self.contains(*flag))
        .map(|(_, attr)| attr)
    }

    /// Parse a `+`-separated list such as `reverse+bold`.
    ///
    /// Returns `None` if any name is unknown or the list is empty.
    pub fn parse(spec: &str) -> Option<Self> {
        let mut modifiers = Self::empty();
        for name in spec.split('+') {
            modifiers |= match name.trim().to_ascii_lowercase().as_str() {
                "bold" => Self::BOLD,
                "underline" => Self::UNDERLINE,
                "reverse" | "reversed" | "inverse" => Self::REVERSED,
                _ => return None,
            };
        }
        Some(modifiers)
    }
}
