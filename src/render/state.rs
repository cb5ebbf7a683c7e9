//! Render state: what is on screen and what is being drawn.

/// Lines committed by the last frame plus the frame in progress.
///
/// `previous` mirrors the terminal rows this printer last wrote. Anything
/// else writing to the same rows breaks that assumption until the next full
/// frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderState {
    /// Lines of the frame being drawn (equal to `previous` between frames).
    current: Vec<String>,
    /// Lines currently on screen.
    previous: Vec<String>,
    /// Row of the block the cursor rests on after the last frame.
    cursor_row: usize,
}

impl RenderState {
    /// Empty state: nothing on screen, cursor at the top of the block.
    pub const fn new() -> Self {
        Self {
            current: Vec::new(),
            previous: Vec::new(),
            cursor_row: 0,
        }
    }

    /// Lines currently on screen.
    pub fn previous(&self) -> &[String] {
        &self.previous
    }

    /// Lines of the latest frame.
    pub fn current(&self) -> &[String] {
        &self.current
    }

    /// On-screen content of `row`, if that row was drawn.
    pub fn previous_line(&self, row: usize) -> Option<&str> {
        self.previous.get(row).map(String::as_str)
    }

    /// Rows between the top of the block and the resting cursor.
    pub const fn cursor_row(&self) -> usize {
        self.cursor_row
    }

    /// Whether any frame has been committed.
    pub fn is_empty(&self) -> bool {
        self.previous.is_empty()
    }

    /// Start a frame with an owned copy of `lines`.
    pub fn begin<S: AsRef<str>>(&mut self, lines: &[S]) {
        self.current.clear();
        self.current
            .extend(lines.iter().map(|line| line.as_ref().to_owned()));
    }

    /// Record the frame as on screen. The cursor is left on its last row.
    pub fn commit(&mut self) {
        self.previous.clone_from(&self.current);
        self.cursor_row = self.previous.len().saturating_sub(1);
    }

    /// Forget everything, e.g. after the screen was cleared.
    pub fn reset(&mut self) {
        self.current.clear();
        self.previous.clear();
        self.cursor_row = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let state = RenderState::new();
        assert!(state.is_empty());
        assert_eq!(state.cursor_row(), 0);
        assert_eq!(state.previous_line(0), None);
    }

    #[test]
    fn test_commit_round_trip() {
        let mut state = RenderState::new();
        state.begin(&["a", "b", "c"]);
        assert!(state.is_empty());
        state.commit();
        assert_eq!(state.previous(), ["a", "b", "c"]);
        assert_eq!(state.current(), state.previous());
        assert_eq!(state.cursor_row(), 2);
        assert_eq!(state.previous_line(1), Some("b"));
    }

    #[test]
    fn test_commit_owns_its_copy() {
        let mut lines = vec![String::from("x")];
        let mut state = RenderState::new();
        state.begin(&lines);
        state.commit();
        lines[0].push('!');
        assert_eq!(state.previous(), ["x"]);
    }

    #[test]
    fn test_commit_empty_frame() {
        let mut state = RenderState::new();
        state.begin(&["a", "b"]);
        state.commit();
        state.begin::<&str>(&[]);
        state.commit();
        assert!(state.is_empty());
        assert_eq!(state.cursor_row(), 0);
    }

    #[test]
    fn test_reset() {
        let mut state = RenderState::new();
        state.begin(&["a"]);
        state.commit();
        state.reset();
        assert_eq!(state, RenderState::new());
    }
}
