use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Single-line message editor. `cursor` is a byte offset on a grapheme
/// boundary.
#[derive(Debug, Default, Clone)]
pub struct InputBuffer {
    text: String,
    cursor: usize,
}

impl InputBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn take_text(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Pasted line breaks become spaces.
    pub fn insert_str(&mut self, value: &str) {
        let flattened: String = value
            .chars()
            .map(|ch| if ch == '\n' || ch == '\r' { ' ' } else { ch })
            .collect();
        let pos = self.cursor.min(self.text.len());
        self.text.insert_str(pos, &flattened);
        self.cursor = pos + flattened.len();
    }

    pub fn insert_char(&mut self, ch: char) {
        let pos = self.cursor.min(self.text.len());
        self.text.insert(pos, ch);
        self.cursor = pos + ch.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_grapheme_start() {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = self.next_grapheme_start() {
            self.text.replace_range(self.cursor..next, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_grapheme_start() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_grapheme_start() {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Display column of the cursor.
    pub fn cursor_column(&self) -> u16 {
        self.text[..self.cursor].width() as u16
    }

    /// Text visible in `width` columns, scrolled so the cursor stays in view,
    /// and the cursor column relative to it.
    pub fn visible(&self, width: u16) -> (&str, u16) {
        let width = width as usize;
        let column = self.cursor_column() as usize;
        if width == 0 || column < width {
            return (&self.text, column as u16);
        }
        let skip = column + 1 - width;
        let mut skipped = 0usize;
        let mut start = 0usize;
        for (idx, grapheme) in self.text.grapheme_indices(true) {
            if skipped >= skip {
                start = idx;
                break;
            }
            skipped += grapheme.width();
            start = idx + grapheme.len();
        }
        let visible = &self.text[start..];
        let offset = self.text[start..self.cursor].width() as u16;
        (visible, offset)
    }

    fn prev_grapheme_start(&self) -> Option<usize> {
        if self.cursor == 0 {
            return None;
        }
        self.text[..self.cursor]
            .grapheme_indices(true)
            .next_back()
            .map(|(idx, _)| idx)
    }

    fn next_grapheme_start(&self) -> Option<usize> {
        if self.cursor >= self.text.len() {
            return None;
        }
        let remaining = &self.text[self.cursor..];
        remaining
            .grapheme_indices(true)
            .nth(1)
            .map(|(idx, _)| self.cursor + idx)
            .or(Some(self.text.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_at_cursor() {
        let mut buffer = InputBuffer::default();
        for ch in "hllo".chars() {
            buffer.insert_char(ch);
        }
        buffer.move_home();
        buffer.move_right();
        buffer.insert_char('e');
        assert_eq!(buffer.text(), "hello");
        buffer.move_end();
        buffer.backspace();
        assert_eq!(buffer.text(), "hell");
        buffer.move_home();
        buffer.delete();
        assert_eq!(buffer.text(), "ell");
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        let mut buffer = InputBuffer::default();
        buffer.insert_str("ae\u{301}");
        buffer.backspace();
        assert_eq!(buffer.text(), "a");
    }

    #[test]
    fn paste_flattens_newlines() {
        let mut buffer = InputBuffer::default();
        buffer.insert_str("one\ntwo\r\nthree");
        assert_eq!(buffer.text(), "one two  three");
        assert_eq!(buffer.cursor_column(), 14);
    }

    #[test]
    fn take_text_resets() {
        let mut buffer = InputBuffer::default();
        buffer.insert_str("hi");
        assert_eq!(buffer.take_text(), "hi");
        assert!(buffer.is_empty());
        assert_eq!(buffer.cursor_column(), 0);
    }

    #[test]
    fn visible_scrolls_to_cursor() {
        let mut buffer = InputBuffer::default();
        buffer.insert_str("abcdefghij");
        let (text, column) = buffer.visible(4);
        assert_eq!(text, "hij");
        assert_eq!(column, 3);
        buffer.move_home();
        let (text, column) = buffer.visible(4);
        assert_eq!(text, "abcdefghij");
        assert_eq!(column, 0);
    }
}
