//! Single-line text input with a cursor, shared by the booking form and the
//! catalog filter sidebar.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Input {
    value: String,
    cursor: usize,
}

impl Input {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    // Cursor positions are char indices so arrow keys behave on non-ASCII
    // input (addresses, names).
    fn byte_offset(&self, chars: usize) -> usize {
        self.value
            .char_indices()
            .nth(chars)
            .map(|(offset, _)| offset)
            .unwrap_or(self.value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_edit() {
        let mut input = Input::default();
        for c in "Ada".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "Ada");
        assert_eq!(input.cursor(), 3);

        input.left();
        input.insert('n');
        assert_eq!(input.value(), "Adna");

        input.backspace();
        assert_eq!(input.value(), "Ada");
        assert_eq!(input.cursor(), 2);

        input.home();
        input.delete();
        assert_eq!(input.value(), "da");
    }

    #[test]
    fn test_cursor_is_char_based() {
        let mut input = Input::default();
        input.set("Abújá");
        assert_eq!(input.cursor(), 5);
        input.backspace();
        assert_eq!(input.value(), "Abúj");
        input.left();
        input.left();
        input.delete();
        assert_eq!(input.value(), "Abj");
    }

    #[test]
    fn test_edges_are_saturating() {
        let mut input = Input::default();
        input.left();
        input.backspace();
        input.delete();
        assert_eq!(input.value(), "");
        input.set("x");
        input.right();
        input.right();
        assert_eq!(input.cursor(), 1);
    }
}
