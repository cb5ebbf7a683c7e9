//! Terminal module: control-sequence vocabulary and frame output buffer.

mod output;
mod style;

pub use output::OutputBuffer;
pub use style::Modifiers;
