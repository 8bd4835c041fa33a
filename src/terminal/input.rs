//! Line editing for the raw-mode prompt.
//!
//! Key events are first mapped to a [`KeyAction`], then applied to an
//! [`InputState`]. Both steps are pure so they can be tested without a tty.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthChar;

/// What a key press means to the line editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Insert a character at the cursor.
    Insert(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Delete the character under the cursor.
    Delete,
    /// Move the cursor one character left.
    Left,
    /// Move the cursor one character right.
    Right,
    /// Move the cursor to the start of the line.
    Home,
    /// Move the cursor to the end of the line.
    End,
    /// Clear the whole line (Ctrl-U).
    ClearLine,
    /// Delete the word before the cursor (Ctrl-W).
    DeleteWord,
    /// Recall the previous history entry.
    HistoryPrev,
    /// Recall the next history entry.
    HistoryNext,
    /// Submit the line.
    Submit,
    /// Abandon the session (Ctrl-C).
    Interrupt,
    /// End of input on an empty line, otherwise delete under the cursor (Ctrl-D).
    EndOfInput,
    /// Key has no meaning to the editor.
    Ignore,
}

impl KeyAction {
    /// Maps a key event to an editor action.
    pub fn from_key(key: KeyEvent) -> Self {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => Self::Interrupt,
            KeyCode::Char('d') if ctrl => Self::EndOfInput,
            KeyCode::Char('a') if ctrl => Self::Home,
            KeyCode::Char('e') if ctrl => Self::End,
            KeyCode::Char('u') if ctrl => Self::ClearLine,
            KeyCode::Char('w') if ctrl => Self::DeleteWord,
            KeyCode::Char('p') if ctrl => Self::HistoryPrev,
            KeyCode::Char('n') if ctrl => Self::HistoryNext,
            KeyCode::Char(_) if ctrl => Self::Ignore,
            KeyCode::Char(c) => Self::Insert(c),
            KeyCode::Tab => Self::Insert(' '),
            KeyCode::Backspace => Self::Backspace,
            KeyCode::Delete => Self::Delete,
            KeyCode::Left => Self::Left,
            KeyCode::Right => Self::Right,
            KeyCode::Home => Self::Home,
            KeyCode::End => Self::End,
            KeyCode::Up => Self::HistoryPrev,
            KeyCode::Down => Self::HistoryNext,
            KeyCode::Enter => Self::Submit,
            _ => Self::Ignore,
        }
    }
}

/// State of the line being edited.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputState {
    /// Current input text.
    pub text: String,
    /// Cursor position (character index).
    pub cursor: usize,
}

impl InputState {
    /// Creates a new empty input state.
    pub fn new() -> Self {
        Self::default()
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of a character index.
    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Inserts a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Deletes the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    /// Deletes the character at the cursor (delete key).
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    /// Deletes the word before the cursor, plus any whitespace after it.
    pub fn delete_word(&mut self) {
        let start = find_word_start_backward(&self.text, self.cursor);
        let from = self.byte_index(start);
        let to = self.byte_index(self.cursor);
        self.text.replace_range(from..to, "");
        self.cursor = start;
    }

    /// Moves the cursor left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Moves the cursor to the start of the input.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor to the end of the input.
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Replaces the text and puts the cursor at the end.
    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
        self.move_end();
    }

    /// Clears the input.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Clears the input and returns the previous text.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    /// Returns true if the input is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Terminal column of the cursor, counting double-width characters as two.
    pub fn cursor_column(&self) -> usize {
        self.text
            .chars()
            .take(self.cursor)
            .filter_map(UnicodeWidthChar::width)
            .sum()
    }

    /// Applies an editing action. Submit, history and interrupt are left to
    /// the caller and do nothing here.
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Insert(c) => self.insert(c),
            KeyAction::Backspace => self.backspace(),
            KeyAction::Delete => self.delete(),
            KeyAction::Left => self.move_left(),
            KeyAction::Right => self.move_right(),
            KeyAction::Home => self.move_home(),
            KeyAction::End => self.move_end(),
            KeyAction::ClearLine => self.clear(),
            KeyAction::DeleteWord => self.delete_word(),
            _ => {}
        }
    }
}

/// Find the start position of the word before the cursor.
///
/// Words are delimited by whitespace; punctuation is part of the word.
/// Returns 0 if cursor is at start or only whitespace precedes it.
fn find_word_start_backward(text: &str, cursor: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut pos = cursor.min(chars.len());

    // Skip whitespace moving left
    while pos > 0 && chars[pos - 1].is_whitespace() {
        pos -= 1;
    }

    // Skip the word itself
    while pos > 0 && !chars[pos - 1].is_whitespace() {
        pos -= 1;
    }

    pos
}
