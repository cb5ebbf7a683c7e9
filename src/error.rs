//! Error types.
//!
//! Printer operations never return these to the caller. A failed write is
//! logged, counted, and kept as [`DiffPrinter::last_error`](crate::DiffPrinter::last_error)
//! while rendering carries on.

use std::fmt;
use std::io;
use thiserror::Error;

/// Which printer operation was flushing when a write failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// `start()`: hiding the cursor and clearing the viewport.
    Start,
    /// `set_lines()`: a diff frame.
    Frame,
    /// `close()`: restoring the cursor.
    Close,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::Frame => "frame",
            Self::Close => "close",
        })
    }
}

/// A terminal output failure.
#[derive(Debug, Error)]
pub enum PrintError {
    /// Writing or flushing the output stream failed.
    #[error("terminal write failed during {phase} ({bytes} bytes): {source}")]
    Write {
        /// Operation that produced the bytes.
        phase: Phase,
        /// Size of the frame that was being written.
        bytes: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl PrintError {
    /// Operation the failure happened in.
    pub const fn phase(&self) -> Phase {
        match self {
            Self::Write { phase, .. } => *phase,
        }
    }
}
