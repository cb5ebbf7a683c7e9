//! Segment differ: split a new line into fixed and changed runs.
//!
//! The comparison is positional. Characters are matched index by index, so a
//! character inserted near the start of a line marks the rest of the line as
//! changed. That keeps the scan linear and the highlighting predictable.
//!
//! # Example
//!
//! ```
//! use diffprint::{diff_segments, Segment};
//!
//! let segments = diff_segments("abc", "abd");
//! assert_eq!(segments, vec![Segment::fixed("ab"), Segment::changed("d")]);
//! ```

/// A maximal run of the new line that is either unchanged or changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// `true` when every character matches the old line at the same index.
    pub fixed: bool,
    /// Characters of the new line covered by this run. Never empty.
    pub content: String,
}

impl Segment {
    /// An unchanged run.
    pub fn fixed(content: impl Into<String>) -> Self {
        Self {
            fixed: true,
            content: content.into(),
        }
    }

    /// A changed run.
    pub fn changed(content: impl Into<String>) -> Self {
        Self {
            fixed: false,
            content: content.into(),
        }
    }

    /// Whether this run is unchanged.
    #[inline]
    pub const fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Whether this run differs from the old line.
    #[inline]
    pub const fn is_changed(&self) -> bool {
        !self.fixed
    }
}

/// Partition `new` into alternating fixed/changed runs relative to `old`.
///
/// Concatenating the returned contents reproduces `new` exactly. Positions
/// that only exist in `old` contribute nothing: if `new` is empty the result
/// is empty, and the caller is responsible for erasing the old tail.
pub fn diff_segments(old: &str, new: &str) -> Vec<Segment> {
    let old: Vec<char> = old.chars().collect();
    let new: Vec<char> = new.chars().collect();
    let end = old.len().max(new.len());
    let same = |i: usize| i < old.len() && i < new.len() && old[i] == new[i];

    let mut segments = Vec::new();
    let mut idx = 0;

    while idx < end {
        let start = idx;
        while same(idx) {
            idx += 1;
        }
        push_run(&mut segments, true, &new, start, idx);

        let start = idx;
        while idx < end && !same(idx) {
            idx += 1;
        }
        push_run(&mut segments, false, &new, start, idx);
    }

    segments
}

/// Append `new[start..end]` as a run, clipped to the new line's length.
fn push_run(segments: &mut Vec<Segment>, fixed: bool, new: &[char], start: usize, end: usize) {
    let end = end.min(new.len());
    if start >= end {
        return;
    }
    segments.push(Segment {
        fixed,
        content: new[start..end].iter().collect(),
    });
}
