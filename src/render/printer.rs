//! `DiffPrinter`: incremental line printer for one render session.
//!
//! The printer owns a block of terminal rows between [`DiffPrinter::start`]
//! and [`DiffPrinter::close`]. Each [`DiffPrinter::set_lines`] call moves the
//! cursor back to the top of the block, redraws only rows whose content
//! changed (highlighting the changed runs), pads away leftovers of longer old
//! rows, and clears rows that no longer exist.
//!
//! ```
//! use diffprint::DiffPrinter;
//!
//! let mut printer = DiffPrinter::new(Vec::<u8>::new());
//! printer.start();
//! printer.set_lines(&["downloading  10%"]);
//! printer.set_lines(&["downloading  20%"]);
//! printer.close();
//! assert!(!printer.get_ref().is_empty());
//! ```
//!
//! # Single writer
//!
//! Frames are composed into one buffer and written with a single call, but
//! the printer assumes nothing else writes to the terminal during the
//! session. There is no internal locking; use one printer per thread of
//! control.

use super::state::RenderState;
use crate::config::PrinterConfig;
use crate::error::{Phase, PrintError};
use crate::terminal::OutputBuffer;
use crate::text::diff_segments;
use log::{debug, trace, warn};
use std::io::{self, Stdout, Write};

/// Where a printer is in its session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Created, `start()` not called yet. Frames render inline.
    Idle,
    /// Between `start()` and `close()`.
    Running,
    /// `close()` was called. Every further call is ignored.
    Closed,
}

/// Render statistics for debugging/profiling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames composed by `set_lines`.
    pub frames: u64,
    /// Rows written (new or changed).
    pub rows_redrawn: u64,
    /// Rows left alone because their content did not change.
    pub rows_skipped: u64,
    /// Vanished rows that were cleared.
    pub rows_cleared: u64,
    /// Total bytes written to the terminal.
    pub bytes_written: u64,
    /// Writes that failed.
    pub write_errors: u64,
}

/// Per-frame counters, folded into [`RenderStats`].
#[derive(Debug, Clone, Copy, Default)]
struct FrameSummary {
    redrawn: usize,
    skipped: usize,
    cleared: usize,
}

/// Incremental line printer writing to `W`.
pub struct DiffPrinter<W: Write> {
    /// Output stream.
    writer: W,
    /// Configuration.
    config: PrinterConfig,
    /// On-screen content.
    state: RenderState,
    /// Pre-allocated frame buffer.
    output: OutputBuffer,
    /// Session phase.
    lifecycle: Lifecycle,
    /// Render statistics.
    stats: RenderStats,
    /// Most recent write failure.
    last_error: Option<PrintError>,
}

impl DiffPrinter<Stdout> {
    /// Printer on the process's stdout with configuration from the environment.
    pub fn stdout() -> Self {
        Self::with_config(io::stdout(), PrinterConfig::from_env())
    }
}

impl<W: Write> DiffPrinter<W> {
    /// Create a printer with default configuration.
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, PrinterConfig::default())
    }

    /// Create a printer with custom configuration.
    pub fn with_config(writer: W, config: PrinterConfig) -> Self {
        Self {
            writer,
            config,
            state: RenderState::new(),
            output: OutputBuffer::new(),
            lifecycle: Lifecycle::Idle,
            stats: RenderStats::default(),
            last_error: None,
        }
    }

    /// Take over the terminal: hide the cursor, clear the screen and home the
    /// cursor (each as configured).
    ///
    /// Ignored if the session is already running or closed.
    pub fn start(&mut self) {
        match self.lifecycle {
            Lifecycle::Idle => {}
            Lifecycle::Running => {
                debug!("start ignored: session already running");
                return;
            }
            Lifecycle::Closed => {
                debug!("start ignored: printer is closed");
                return;
            }
        }

        self.output.clear();
        if self.config.hide_cursor {
            self.output.hide_cursor();
        }
        if self.config.clear_on_start {
            self.output.clear_screen();
            self.output.cursor_home();
            // Anything drawn before start() is gone now.
            self.state.reset();
        }
        self.flush(Phase::Start);
        self.lifecycle = Lifecycle::Running;
        debug!("render session started");
    }

    /// Display `lines`, redrawing only what changed since the last call.
    ///
    /// Each element is one terminal row and must not contain a newline.
    /// Write failures are logged and recorded, never returned.
    pub fn set_lines<S: AsRef<str>>(&mut self, lines: &[S]) {
        if self.lifecycle == Lifecycle::Closed {
            debug!("set_lines ignored: printer is closed");
            return;
        }
        debug_assert!(
            lines.iter().all(|line| !line.as_ref().contains('\n')),
            "lines must not contain newlines"
        );

        self.state.begin(lines);
        let summary = self.compose_frame();
        self.flush(Phase::Frame);
        self.state.commit();

        self.stats.frames += 1;
        self.stats.rows_redrawn += summary.redrawn as u64;
        self.stats.rows_skipped += summary.skipped as u64;
        self.stats.rows_cleared += summary.cleared as u64;
        trace!(
            "frame {}: {} redrawn, {} skipped, {} cleared, {} bytes",
            self.stats.frames,
            summary.redrawn,
            summary.skipped,
            summary.cleared,
            self.output.len()
        );
    }

    /// End the session: show the cursor and move past the block.
    ///
    /// The on-screen state is discarded. Calling `close()` again, or any
    /// other operation afterwards, does nothing.
    pub fn close(&mut self) {
        if self.lifecycle == Lifecycle::Closed {
            debug!("close ignored: printer is already closed");
            return;
        }

        self.output.clear();
        self.output.show_cursor();
        self.output.newline();
        self.flush(Phase::Close);
        self.state.reset();
        self.lifecycle = Lifecycle::Closed;
        debug!("render session closed after {} frames", self.stats.frames);
    }

    /// Lines currently on screen, as last committed by `set_lines`.
    pub fn previous_lines(&self) -> &[String] {
        self.state.previous()
    }

    /// Session phase.
    pub const fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Render statistics.
    pub const fn stats(&self) -> &RenderStats {
        &self.stats
    }

    /// Most recent write failure, if any.
    pub const fn last_error(&self) -> Option<&PrintError> {
        self.last_error.as_ref()
    }

    /// Configuration in use.
    pub const fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Reference to the output stream.
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutable reference to the output stream.
    ///
    /// Writing to it directly desynchronizes the printer from the screen.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Compose the transition from `previous` to `current` into `output`.
    fn compose_frame(&mut self) -> FrameSummary {
        let mut summary = FrameSummary::default();
        let out = &mut self.output;
        let state = &self.state;
        let lines = state.current();
        let old_len = state.previous().len();

        out.clear();
        out.cursor_up(state.cursor_row());

        for (row, line) in lines.iter().enumerate() {
            if row > 0 {
                out.newline();
            }
            match state.previous_line(row) {
                None => {
                    // Nothing to diff against: plain write.
                    out.cursor_to_column(1);
                    out.write_str(line);
                    summary.redrawn += 1;
                }
                Some(old) if old == line.as_str() => summary.skipped += 1,
                Some(old) => {
                    redraw_row(out, &self.config, old, line);
                    summary.redrawn += 1;
                }
            }
        }

        if lines.len() < old_len {
            for row in lines.len()..old_len {
                if row > 0 {
                    out.newline();
                }
                out.clear_line();
                summary.cleared += 1;
            }
            // Back to the last remaining row (row 0 if none remain).
            out.cursor_up(old_len - 1 - lines.len().saturating_sub(1));
        }

        summary
    }

    /// Write the composed buffer. Failures are recorded, not returned.
    fn flush(&mut self, phase: Phase) {
        match self.output.flush_to(&mut self.writer) {
            Ok(()) => self.stats.bytes_written += self.output.len() as u64,
            Err(source) => {
                let err = PrintError::Write {
                    phase,
                    bytes: self.output.len(),
                    source,
                };
                warn!("{err}");
                self.stats.write_errors += 1;
                self.last_error = Some(err);
            }
        }
    }
}

/// Redraw one changed row from column 1: fixed runs plain, changed runs
/// highlighted, then blanks over whatever the old content left behind.
fn redraw_row(out: &mut OutputBuffer, config: &PrinterConfig, old: &str, new: &str) {
    out.cursor_to_column(1);
    out.reset_style();

    for segment in diff_segments(old, new) {
        if segment.is_fixed() {
            out.write_str(&segment.content);
        } else {
            out.set_modifiers(config.highlight);
            out.write_str(&segment.content);
            out.reset_style();
        }
    }

    let old_width = config.width_mode.str_width(old);
    let new_width = config.width_mode.str_width(new);
    if old_width > new_width {
        out.pad(old_width - new_width);
    }
}

impl<W: Write> Drop for DiffPrinter<W> {
    fn drop(&mut self) {
        // Restore terminal state
        if self.lifecycle == Lifecycle::Running && self.config.hide_cursor {
            self.output.clear();
            self.output.show_cursor();
            let _ = self.output.flush_to(&mut self.writer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::Modifiers;

    /// Writer that fails every write.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn take_output(printer: &mut DiffPrinter<Vec<u8>>) -> String {
        String::from_utf8(std::mem::take(printer.get_mut())).unwrap()
    }

    #[test]
    fn test_start_hides_clears_and_homes() {
        let mut printer = DiffPrinter::new(Vec::new());
        printer.start();
        assert_eq!(take_output(&mut printer), "\x1b[?25l\x1b[2J\x1b[1;1H");
        assert_eq!(printer.lifecycle(), Lifecycle::Running);
    }

    #[test]
    fn test_inline_start_only_hides_cursor() {
        let mut printer = DiffPrinter::with_config(Vec::new(), PrinterConfig::default().inline());
        printer.start();
        assert_eq!(take_output(&mut printer), "\x1b[?25l");
    }

    #[test]
    fn test_first_frame_is_plain() {
        let mut printer = DiffPrinter::new(Vec::new());
        printer.start();
        take_output(&mut printer);
        printer.set_lines(&["abc"]);
        let out = take_output(&mut printer);
        assert_eq!(out, "\x1b[1Gabc");
        assert!(!out.contains("\x1b[7m"));
        assert_eq!(printer.previous_lines(), ["abc"]);
    }

    #[test]
    fn test_changed_tail_is_highlighted() {
        let mut printer = DiffPrinter::new(Vec::new());
        printer.set_lines(&["abc"]);
        take_output(&mut printer);
        printer.set_lines(&["abd"]);
        assert_eq!(
            take_output(&mut printer),
            "\x1b[1G\x1b[0mab\x1b[7md\x1b[0m"
        );
    }

    #[test]
    fn test_shorter_line_is_padded() {
        let mut printer = DiffPrinter::new(Vec::new());
        printer.set_lines(&["abcdef"]);
        take_output(&mut printer);
        printer.set_lines(&["ab"]);
        let out = take_output(&mut printer);
        assert!(out.ends_with("\x1b[0mab    "), "{out:?}");
        assert!(!out.contains("\x1b[7m"));
    }

    #[test]
    fn test_wide_padding_uses_display_width() {
        let mut printer = DiffPrinter::new(Vec::new());
        printer.set_lines(&["中文字"]);
        take_output(&mut printer);
        printer.set_lines(&["中"]);
        let out = take_output(&mut printer);
        assert!(out.ends_with("\x1b[0m中    "), "{out:?}");
    }

    #[test]
    fn test_unchanged_rows_are_skipped() {
        let mut printer = DiffPrinter::new(Vec::new());
        printer.set_lines(&["same", "old"]);
        take_output(&mut printer);
        printer.set_lines(&["same", "new"]);
        let out = take_output(&mut printer);
        assert!(out.starts_with("\x1b[1A\r\n"), "{out:?}");
        assert!(!out.contains("same"));
        assert_eq!(printer.stats().rows_skipped, 1);
        assert_eq!(printer.stats().rows_redrawn, 3);
    }

    #[test]
    fn test_shrink_clears_and_returns() {
        let mut printer = DiffPrinter::new(Vec::new());
        printer.set_lines(&["a", "b", "c"]);
        take_output(&mut printer);
        printer.set_lines(&["a", "b"]);
        assert_eq!(
            take_output(&mut printer),
            "\x1b[2A\r\n\r\n\x1b[2K\x1b[1A"
        );
        assert_eq!(printer.stats().rows_cleared, 1);
    }

    #[test]
    fn test_shrink_to_nothing() {
        let mut printer = DiffPrinter::new(Vec::new());
        printer.set_lines(&["a", "b"]);
        take_output(&mut printer);
        printer.set_lines::<&str>(&[]);
        assert_eq!(
            take_output(&mut printer),
            "\x1b[1A\x1b[2K\r\n\x1b[2K\x1b[1A"
        );
        assert!(printer.previous_lines().is_empty());
    }

    #[test]
    fn test_custom_highlight() {
        let config = PrinterConfig::default().with_highlight(Modifiers::BOLD);
        let mut printer = DiffPrinter::with_config(Vec::new(), config);
        printer.set_lines(&["x"]);
        take_output(&mut printer);
        printer.set_lines(&["y"]);
        let out = take_output(&mut printer);
        assert!(out.contains("\x1b[1my\x1b[0m"), "{out:?}");
        assert!(!out.contains("\x1b[7m"));
    }

    #[test]
    fn test_close_shows_cursor_and_discards_state() {
        let mut printer = DiffPrinter::new(Vec::new());
        printer.start();
        printer.set_lines(&["x"]);
        take_output(&mut printer);
        printer.close();
        assert_eq!(take_output(&mut printer), "\x1b[?25h\r\n");
        assert!(printer.previous_lines().is_empty());
        assert_eq!(printer.lifecycle(), Lifecycle::Closed);
    }

    #[test]
    fn test_calls_after_close_are_ignored() {
        let mut printer = DiffPrinter::new(Vec::new());
        printer.start();
        printer.close();
        take_output(&mut printer);

        printer.set_lines(&["late"]);
        printer.start();
        printer.close();

        assert!(take_output(&mut printer).is_empty());
        assert!(printer.previous_lines().is_empty());
        assert_eq!(printer.stats().frames, 0);
    }

    #[test]
    fn test_second_start_is_ignored() {
        let mut printer = DiffPrinter::new(Vec::new());
        printer.start();
        printer.set_lines(&["kept"]);
        take_output(&mut printer);
        printer.start();
        assert!(take_output(&mut printer).is_empty());
        assert_eq!(printer.previous_lines(), ["kept"]);
    }

    #[test]
    fn test_write_failure_is_recorded_not_raised() {
        let mut printer = DiffPrinter::new(BrokenPipe);
        printer.start();
        printer.set_lines(&["a"]);
        printer.set_lines(&["b"]);

        assert_eq!(printer.stats().write_errors, 3);
        assert_eq!(printer.stats().frames, 2);
        assert_eq!(printer.stats().bytes_written, 0);
        assert_eq!(printer.last_error().map(PrintError::phase), Some(Phase::Frame));
        // Rendering continues optimistically.
        assert_eq!(printer.previous_lines(), ["b"]);
    }

    #[test]
    fn test_drop_restores_cursor() {
        let mut sink = Vec::new();
        {
            let mut printer = DiffPrinter::new(&mut sink);
            printer.start();
        }
        assert!(String::from_utf8(sink).unwrap().ends_with("\x1b[?25h"));
    }
}
