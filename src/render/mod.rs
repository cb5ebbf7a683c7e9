//! Render module: on-screen state and the session lifecycle.
//!
//! - [`RenderState`]: previously rendered and current lines
//! - [`DiffPrinter`]: `start` / `set_lines` / `close` over any [`std::io::Write`]

mod printer;
mod state;

pub use printer::{DiffPrinter, Lifecycle, RenderStats};
pub use state::RenderState;
