//! # Diffprint
//!
//! An incremental terminal line printer.
//!
//! Diffprint repeatedly displays a block of text lines, redrawing only the
//! rows that changed since the previous frame and highlighting the changed
//! characters. It is built for progress tables and status blocks that tick
//! many times per second.
//!
//! ## Core Concepts
//!
//! - **Positional diff**: each row is compared index by index with its old
//!   content and split into fixed and changed runs
//! - **Display width**: wide CJK characters count as two columns when padding
//!   away leftovers of a longer old row
//! - **Single-buffer frames**: every frame is composed into one byte buffer and
//!   written with one call, so control sequences are never reordered
//! - **Best-effort output**: write failures are logged and recorded, never
//!   raised, and rendering carries on
//!
//! ## Example
//!
//! ```rust,no_run
//! use diffprint::{format_table, DiffPrinter};
//!
//! let mut printer = DiffPrinter::stdout();
//! printer.start();
//! for pct in (0..=100).step_by(10) {
//!     let rows = vec![
//!         vec!["任务".to_string(), "进度".to_string()],
//!         vec!["download".to_string(), format!("{pct}%")],
//!     ];
//!     printer.set_lines(&format_table(&rows, None));
//! }
//! printer.close();
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod render;
pub mod terminal;
pub mod text;

// Re-exports for convenience
pub use config::PrinterConfig;
pub use error::{Phase, PrintError};
pub use render::{DiffPrinter, Lifecycle, RenderState, RenderStats};
pub use terminal::{Modifiers, OutputBuffer};
pub use text::{diff_segments, display_width, format_table, Segment, TableLayout, WidthMode};
