//! `OutputBuffer`: Single-syscall output buffer for ANSI sequences.
//!
//! Every control sequence the printer needs is a method here. Sequences are
//! appended in call order and only reach the terminal through
//! [`OutputBuffer::flush_to`], so a frame is never interleaved or reordered.

use super::style::Modifiers;
use crossterm::{
    cursor, queue,
    style::{Attribute, SetAttribute},
    terminal::{Clear, ClearType},
};
use std::io::Write;

/// Row separator. Carriage return first so raw-mode terminals also land on
/// column 1.
const NEWLINE: &[u8] = b"\r\n";

/// Clamp a row/column count to what a CSI parameter can carry.
#[inline]
fn csi_count(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// All output is accumulated here, then flushed in a single `write()` syscall
/// to prevent terminal flickering.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical frame (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write text as-is.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Write `count` spaces.
    pub fn pad(&mut self, count: usize) {
        self.data.resize(self.data.len() + count, b' ');
    }

    /// Advance to column 1 of the next row.
    #[inline]
    pub fn newline(&mut self) {
        self.data.extend_from_slice(NEWLINE);
    }

    // Vec<u8> writes cannot fail, so the io::Result from queue! is dropped below.

    /// Clear all text attributes.
    #[inline]
    pub fn reset_style(&mut self) {
        let _ = queue!(self.data, SetAttribute(Attribute::Reset));
    }

    /// Swap foreground and background.
    #[inline]
    pub fn reverse_style(&mut self) {
        let _ = queue!(self.data, SetAttribute(Attribute::Reverse));
    }

    /// Bold text.
    #[inline]
    pub fn bold_style(&mut self) {
        let _ = queue!(self.data, SetAttribute(Attribute::Bold));
    }

    /// Switch on every attribute in `modifiers`.
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        for attr in modifiers.attributes() {
            let _ = queue!(self.data, SetAttribute(attr));
        }
    }

    /// Move the cursor up `n` rows. Zero emits nothing.
    pub fn cursor_up(&mut self, n: usize) {
        if n > 0 {
            let _ = queue!(self.data, cursor::MoveUp(csi_count(n)));
        }
    }

    /// Move the cursor down `n` rows. Zero emits nothing.
    pub fn cursor_down(&mut self, n: usize) {
        if n > 0 {
            let _ = queue!(self.data, cursor::MoveDown(csi_count(n)));
        }
    }

    /// Move the cursor left `n` columns. Zero emits nothing.
    pub fn cursor_left(&mut self, n: usize) {
        if n > 0 {
            let _ = queue!(self.data, cursor::MoveLeft(csi_count(n)));
        }
    }

    /// Move the cursor right `n` columns. Zero emits nothing.
    pub fn cursor_right(&mut self, n: usize) {
        if n > 0 {
            let _ = queue!(self.data, cursor::MoveRight(csi_count(n)));
        }
    }

    /// Bookmark the cursor position.
    #[inline]
    pub fn save_cursor(&mut self) {
        let _ = queue!(self.data, cursor::SavePosition);
    }

    /// Return to the last bookmarked position.
    #[inline]
    pub fn restore_cursor(&mut self) {
        let _ = queue!(self.data, cursor::RestorePosition);
    }

    /// Erase the current row.
    #[inline]
    pub fn clear_line(&mut self) {
        let _ = queue!(self.data, Clear(ClearType::CurrentLine));
    }

    /// Erase the entire viewport.
    #[inline]
    pub fn clear_screen(&mut self) {
        let _ = queue!(self.data, Clear(ClearType::All));
    }

    /// Move the cursor to row 1, column 1.
    #[inline]
    pub fn cursor_home(&mut self) {
        let _ = queue!(self.data, cursor::MoveTo(0, 0));
    }

    /// Move to column `col` (1-indexed, as in ANSI) of the current row.
    #[inline]
    pub fn cursor_to_column(&mut self, col: usize) {
        let _ = queue!(self.data, cursor::MoveToColumn(csi_count(col.saturating_sub(1))));
    }

    /// Hide cursor.
    #[inline]
    pub fn hide_cursor(&mut self) {
        let _ = queue!(self.data, cursor::Hide);
    }

    /// Show cursor.
    #[inline]
    pub fn show_cursor(&mut self) {
        let _ = queue!(self.data, cursor::Show);
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}
