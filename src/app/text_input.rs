/// Single-line editable field with a character cursor, used by the signup
/// email box
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    content: String,
    cursor: usize,
    max_chars: Option<usize>,
}

impl TextInput {
    /// Field that refuses input past `max_chars` characters
    pub fn with_limit(max_chars: usize) -> Self {
        Self {
            max_chars: Some(max_chars),
            ..Self::default()
        }
    }

    /// Inserts at the cursor. Control characters are dropped.
    pub fn add_char(&mut self, character: char) {
        if character.is_control() {
            return;
        }
        if self
            .max_chars
            .is_some_and(|limit| self.char_count() >= limit)
        {
            return;
        }
        let at = byte_offset(&self.content, self.cursor);
        self.content.insert(at, character);
        self.cursor += 1;
    }

    /// Backspace
    pub fn remove_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = byte_offset(&self.content, self.cursor);
        self.content.remove(at);
    }

    /// Delete
    pub fn delete_char(&mut self) {
        if self.cursor < self.char_count() {
            let at = byte_offset(&self.content, self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Cursor position in characters
    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}

fn byte_offset(value: &str, char_index: usize) -> usize {
    value
        .char_indices()
        .nth(char_index)
        .map_or(value.len(), |(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> TextInput {
        let mut input = TextInput::default();
        text.chars().for_each(|character| input.add_char(character));
        input
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = typed("mya@x.io");
        input.move_to_start();
        input.move_right();
        input.add_char('a');
        assert_eq!(input.content(), "maya@x.io");
        assert_eq!(input.cursor_position(), 2);
    }

    #[test]
    fn test_backspace_and_delete_handle_multibyte() {
        let mut input = typed("grüße");
        input.remove_char();
        assert_eq!(input.content(), "grüß");
        input.move_to_start();
        input.move_right();
        input.move_right();
        input.delete_char();
        assert_eq!(input.content(), "grß");
    }

    #[test]
    fn test_limit_and_control_chars() {
        let mut input = TextInput::with_limit(3);
        for character in ['a', '\t', 'b', 'c', 'd'] {
            input.add_char(character);
        }
        assert_eq!(input.content(), "abc");
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut input = typed("abc");
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor_position(), 0);
        input.move_right();
        assert_eq!(input.cursor_position(), 0);
    }
}
