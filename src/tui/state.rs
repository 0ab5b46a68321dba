// File: ./src/tui/state.rs
// Manages the application state for the TUI.
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Derek,
}

pub struct AppState {
    pub session: Session,
    pub transcript: Vec<(Speaker, String)>,

    pub input_buffer: String,
    pub cursor_position: usize,
    /// Transcript lines scrolled back from the bottom.
    pub scroll_back: u16,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        let greeting = session.greeting();
        Self {
            session,
            transcript: vec![(Speaker::Derek, greeting)],
            input_buffer: String::new(),
            cursor_position: 0,
            scroll_back: 0,
        }
    }

    /// Sends `line` to the session and records both sides. Returns true on `bye`.
    pub fn submit(&mut self, line: String) -> bool {
        let reply = self.session.handle(&line);
        self.transcript.push((Speaker::User, line));
        self.transcript.push((Speaker::Derek, reply.text));
        self.scroll_back = 0;
        reply.exit
    }

    pub fn transcript_line_count(&self) -> usize {
        self.transcript.iter().map(|(_, text)| text.lines().count().max(1)).sum()
    }

    pub fn scroll_up(&mut self, step: u16) {
        let max = self.transcript_line_count().min(u16::MAX as usize) as u16;
        self.scroll_back = self.scroll_back.saturating_add(step).min(max);
    }

    pub fn scroll_down(&mut self, step: u16) {
        self.scroll_back = self.scroll_back.saturating_sub(step);
    }

    pub fn move_cursor_left(&mut self) {
        let cursor_moved_left = self.cursor_position.saturating_sub(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_left);
    }

    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor_position.saturating_add(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_right);
    }

    pub fn enter_char(&mut self, new_char: char) {
        // Safe insertion for UTF-8 strings
        let byte_index = self
            .input_buffer
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor_position)
            .unwrap_or(self.input_buffer.len());

        self.input_buffer.insert(byte_index, new_char);
        self.move_cursor_right();
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position != 0 {
            let current_index = self.cursor_position;
            let before = self.input_buffer.chars().take(current_index - 1);
            let after = self.input_buffer.chars().skip(current_index);
            self.input_buffer = before.chain(after).collect();
            self.move_cursor_left();
        }
    }

    /// Clears the input line and returns what was in it.
    pub fn take_input(&mut self) -> String {
        self.cursor_position = 0;
        std::mem::take(&mut self.input_buffer)
    }

    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.clamp(0, self.input_buffer.chars().count())
    }
}
