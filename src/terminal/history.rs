/// Submitted lines, oldest first, with a cursor for arrow-key recall.
///
/// The cursor sits at `entries.len()` while the user is typing a fresh line.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
        self.cursor = self.entries.len();
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Steps to the previous entry; `None` when already at the oldest.
    pub fn up(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }

        self.cursor -= 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Steps to the next entry, or to an empty line past the newest.
    pub fn down(&mut self) -> Option<&str> {
        let len = self.entries.len();

        if self.cursor + 1 < len {
            self.cursor += 1;
            self.entries.get(self.cursor).map(String::as_str)
        } else if self.cursor + 1 == len {
            self.cursor = len;
            Some("")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> History {
        let mut history = History::default();
        history.push("A");
        history.push("B");
        history.push("C");
        history
    }

    #[test]
    fn up_walks_back_and_stops_at_oldest() {
        let mut history = abc();

        assert_eq!(history.up(), Some("C"));
        assert_eq!(history.up(), Some("B"));
        assert_eq!(history.up(), Some("A"));
        assert_eq!(history.up(), None);
        assert_eq!(history.down(), Some("B"));
    }

    #[test]
    fn down_past_newest_clears_then_stops() {
        let mut history = abc();

        history.up();
        assert_eq!(history.down(), Some(""));
        assert_eq!(history.down(), None);
    }

    #[test]
    fn empty_history_never_moves() {
        let mut history = History::default();

        assert_eq!(history.up(), None);
        assert_eq!(history.down(), None);
    }

    #[test]
    fn push_resets_cursor_to_fresh_line() {
        let mut history = abc();
        history.up();
        history.up();
        history.push("D");

        assert_eq!(history.up(), Some("D"));
        assert_eq!(history.entries().len(), 4);
    }
}
