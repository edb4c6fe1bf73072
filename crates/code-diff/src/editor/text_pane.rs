//! Single editable text pane
//!
//! Holds the text as lines plus a character-based cursor. The text is kept
//! byte-exact: `TextPane::from_text(s).text() == s` for every input,
//! including trailing newlines and `\r\n` line endings.

/// An edit or cursor movement applied to a pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Paste(String),
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

impl TextEdit {
    /// Whether this edit can change the pane's content
    pub fn modifies_content(&self) -> bool {
        !matches!(
            self,
            Self::Left | Self::Right | Self::Up | Self::Down | Self::Home | Self::End
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPane {
    lines: Vec<String>,
    row: usize,
    /// Cursor column in characters
    col: usize,
    scroll: usize,
}

impl Default for TextPane {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
            scroll: 0,
        }
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

fn char_len(line: &str) -> usize {
    line.chars().count()
}

fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}

impl TextPane {
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: split_lines(text),
            ..Self::default()
        }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// `(row, column)` of the cursor, column counted in characters
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// First visible line
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Replace the whole content. Returns `false` when the text is unchanged.
    ///
    /// The cursor is kept where it was, clamped to the new content.
    pub fn set_value(&mut self, text: &str) -> bool {
        if self.text() == text {
            return false;
        }
        self.lines = split_lines(text);
        self.row = self.row.min(self.lines.len() - 1);
        self.col = self.col.min(char_len(&self.lines[self.row]));
        self.scroll = self.scroll.min(self.row);
        true
    }

    /// Apply an edit. Returns `true` when the content changed.
    pub fn apply(&mut self, edit: &TextEdit) -> bool {
        match edit {
            TextEdit::Insert(c) => {
                self.insert_char(*c);
                true
            }
            TextEdit::Paste(text) => {
                let mut changed = false;
                for c in text.chars() {
                    match c {
                        '\r' => continue,
                        '\n' => self.split_line(),
                        c => self.insert_char(c),
                    }
                    changed = true;
                }
                changed
            }
            TextEdit::Newline => {
                self.split_line();
                true
            }
            TextEdit::Backspace => self.backspace(),
            TextEdit::Delete => self.delete(),
            TextEdit::Left => {
                if self.col > 0 {
                    self.col -= 1;
                } else if self.row > 0 {
                    self.row -= 1;
                    self.col = char_len(&self.lines[self.row]);
                }
                false
            }
            TextEdit::Right => {
                if self.col < char_len(&self.lines[self.row]) {
                    self.col += 1;
                } else if self.row + 1 < self.lines.len() {
                    self.row += 1;
                    self.col = 0;
                }
                false
            }
            TextEdit::Up => {
                if self.row > 0 {
                    self.row -= 1;
                    self.col = self.col.min(char_len(&self.lines[self.row]));
                }
                false
            }
            TextEdit::Down => {
                if self.row + 1 < self.lines.len() {
                    self.row += 1;
                    self.col = self.col.min(char_len(&self.lines[self.row]));
                }
                false
            }
            TextEdit::Home => {
                self.col = 0;
                false
            }
            TextEdit::End => {
                self.col = char_len(&self.lines[self.row]);
                false
            }
        }
    }

    /// Adjust the scroll offset so the cursor row is inside `height` lines
    pub fn scroll_to_cursor(&mut self, height: usize) {
        let height = height.max(1);
        if self.row < self.scroll {
            self.scroll = self.row;
        } else if self.row >= self.scroll + height {
            self.scroll = self.row + 1 - height;
        }
    }

    fn insert_char(&mut self, c: char) {
        let line = &mut self.lines[self.row];
        let at = byte_index(line, self.col);
        line.insert(at, c);
        self.col += 1;
    }

    fn split_line(&mut self) {
        let line = &mut self.lines[self.row];
        let at = byte_index(line, self.col);
        let rest = line.split_off(at);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    fn backspace(&mut self) -> bool {
        if self.col > 0 {
            let line = &mut self.lines[self.row];
            let at = byte_index(line, self.col - 1);
            line.remove(at);
            self.col -= 1;
            true
        } else if self.row > 0 {
            let current = self.lines.remove(self.row);
            self.row -= 1;
            self.col = char_len(&self.lines[self.row]);
            self.lines[self.row].push_str(&current);
            true
        } else {
            false
        }
    }

    fn delete(&mut self) -> bool {
        let len = char_len(&self.lines[self.row]);
        if self.col < len {
            let line = &mut self.lines[self.row];
            let at = byte_index(line, self.col);
            line.remove(at);
            true
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
            true
        } else {
            false
        }
    }
}
