//! Text module: pure functions over line content.
//!
//! This module contains:
//! - [`width`]: display width of strings with wide (CJK) characters
//! - [`segment`]: positional fixed/changed diff between two lines
//! - [`table`]: column-aligned table layout producing printer lines

pub mod segment;
pub mod table;
pub mod width;

pub use segment::{diff_segments, Segment};
pub use table::{format_table, TableLayout};
pub use width::{char_width, display_width, is_wide, WidthMode, WIDE_RANGES};
