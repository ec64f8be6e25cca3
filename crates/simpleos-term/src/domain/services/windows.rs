use std::path::PathBuf;

use chrono::DateTime;
use chrono::Local;
use ratatui::style::Style;
use ratatui::widgets::Block;
use simpleos_core::interpret;
use simpleos_core::Transcript;
use tui_textarea::TextArea;

use super::Scroll;
use crate::domain::models::WindowId;
use crate::domain::models::WindowKind;

#[derive(Debug)]
pub struct NotepadWindow<'a> {
    pub textarea: TextArea<'a>,
    pub path: Option<PathBuf>,
}

impl<'a> NotepadWindow<'a> {
    pub fn new() -> NotepadWindow<'a> {
        return NotepadWindow {
            textarea: TextArea::default(),
            path: None,
        };
    }

    pub fn text(&self) -> String {
        return self.textarea.lines().join("\n");
    }

    pub fn set_text(&mut self, text: &str) {
        self.textarea = TextArea::from(text.split('\n'));
    }

    /// File > New. Empties the buffer and forgets where it came from.
    pub fn reset(&mut self) {
        self.textarea = TextArea::default();
        self.path = None;
    }
}

#[derive(Debug)]
pub struct TerminalWindow<'a> {
    pub input: TextArea<'a>,
    pub scroll: Scroll,
    pub transcript: Transcript,
}

impl<'a> TerminalWindow<'a> {
    pub fn new(transcript_limit: usize) -> TerminalWindow<'a> {
        return TerminalWindow {
            input: TerminalWindow::new_input(),
            scroll: Scroll::default(),
            transcript: Transcript::new(transcript_limit),
        };
    }

    fn new_input() -> TextArea<'a> {
        let mut input = TextArea::default();
        input.set_cursor_line_style(Style::default());
        input.set_block(Block::bordered().title("Command"));
        return input;
    }

    pub fn input_line(&self) -> String {
        return self.input.lines().join("");
    }

    /// Runs the typed line, appends the result to the transcript, clears the
    /// input, and jumps the view to the newest output.
    pub fn submit(&mut self, now: DateTime<Local>) -> String {
        let line = self.input_line();
        self.transcript.push_block(interpret(&line, now));
        self.input = TerminalWindow::new_input();
        self.follow();
        return line;
    }

    fn follow(&mut self) {
        let viewport_length = self.scroll.viewport_length();
        self.scroll
            .set_state(self.transcript.len(), viewport_length);
        self.scroll.last();
    }

    pub fn set_viewport(&mut self, viewport_length: usize) {
        self.scroll
            .set_state(self.transcript.len(), viewport_length);
    }
}

#[derive(Debug)]
pub enum WindowContent<'a> {
    Notepad(NotepadWindow<'a>),
    Terminal(TerminalWindow<'a>),
}

#[derive(Debug)]
pub struct Window<'a> {
    pub id: WindowId,
    pub content: WindowContent<'a>,
}

impl<'a> Window<'a> {
    pub fn kind(&self) -> WindowKind {
        match self.content {
            WindowContent::Notepad(_) => WindowKind::Notepad,
            WindowContent::Terminal(_) => WindowKind::Terminal,
        }
    }

    pub fn title(&self) -> String {
        if let WindowContent::Notepad(notepad) = &self.content {
            if let Some(name) = notepad.path.as_ref().and_then(|e| return e.file_name()) {
                return format!("{} - {}", self.kind(), name.to_string_lossy());
            }
        }

        return self.kind().to_string();
    }
}
