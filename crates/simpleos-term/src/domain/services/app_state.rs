use anyhow::Result;
use simpleos_core::status::status_text;
use simpleos_core::status::READY_TEXT;
use simpleos_core::ClockBox;
use simpleos_core::PowerAction;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;
use tui_textarea::TextArea;

use super::MenuBar;
use super::NotepadWindow;
use super::TerminalWindow;
use super::Window;
use super::WindowContent;
use crate::domain::models::Action;
use crate::domain::models::Dialog;
use crate::domain::models::Event;
use crate::domain::models::FilePromptMode;
use crate::domain::models::MenuItem;
use crate::domain::models::MenuTitle;
use crate::domain::models::WindowId;
use crate::domain::models::WindowKind;

#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

pub struct AppStateProps {
    pub clock: ClockBox,
    pub transcript_limit: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

pub struct AppState<'a> {
    pub clock: ClockBox,
    pub dialog: Option<Dialog<'a>>,
    pub focused: Option<usize>,
    pub menu: MenuBar,
    pub next_window_id: WindowId,
    pub status: String,
    pub transcript_limit: usize,
    pub windows: Vec<Window<'a>>,
}

impl<'a> AppState<'a> {
    pub fn new(props: AppStateProps) -> AppState<'a> {
        return AppState {
            clock: props.clock,
            dialog: None,
            focused: None,
            menu: MenuBar::default(),
            next_window_id: 1,
            status: READY_TEXT.to_string(),
            transcript_limit: props.transcript_limit,
            windows: vec![],
        };
    }

    pub fn handle_event(
        &mut self,
        event: Event,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<LoopControl> {
        match event {
            Event::UITick => {
                self.tick();
            }
            Event::KeyboardInput(input) => {
                return self.handle_input(input, tx);
            }
            Event::KeyboardPaste(text) => {
                self.handle_paste(&text);
            }
            Event::UIScrollUp => {
                if let Some(terminal) = self.focused_terminal_mut() {
                    terminal.scroll.up();
                }
            }
            Event::UIScrollDown => {
                if let Some(terminal) = self.focused_terminal_mut() {
                    terminal.scroll.down();
                }
            }
            Event::FileOpened {
                window_id,
                path,
                text,
            } => {
                if let Some(notepad) = self.notepad_mut(window_id) {
                    notepad.set_text(&text);
                    notepad.path = Some(path);
                } else {
                    tracing::debug!(window_id, "opened file for a closed window");
                }
            }
            Event::FileSaved { window_id, path } => {
                if let Some(notepad) = self.notepad_mut(window_id) {
                    notepad.path = Some(path);
                }
            }
            Event::FileError(window_id, err) => {
                tracing::warn!(window_id, error = err.as_str(), "file operation failed");
                self.dialog = Some(Dialog::notice("Error", &err));
            }
        }

        return Ok(LoopControl::Continue);
    }

    pub fn tick(&mut self) {
        self.status = status_text(self.clock.now());
    }

    fn handle_input(
        &mut self,
        input: Input,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<LoopControl> {
        if self.dialog.is_some() {
            return self.handle_dialog_input(input, tx);
        }

        if self.menu.is_open() {
            return Ok(self.handle_menu_input(input));
        }

        match input {
            Input {
                key: Key::Char('c'),
                ctrl: true,
                ..
            } => {
                self.dialog = Some(Dialog::Confirm(PowerAction::Shutdown));
                return Ok(LoopControl::Continue);
            }
            Input { key: Key::F(10), .. } => {
                self.menu.open(MenuTitle::System);
                return Ok(LoopControl::Continue);
            }
            Input {
                key: Key::Char(c),
                alt: true,
                ..
            } => {
                if let Some(title) = self
                    .menu_titles()
                    .into_iter()
                    .find(|e| return e.hotkey() == c.to_ascii_lowercase())
                {
                    self.menu.open(title);
                }
                return Ok(LoopControl::Continue);
            }
            Input { key: Key::F(6), .. } => {
                self.focus_next();
                return Ok(LoopControl::Continue);
            }
            Input {
                key: Key::Char('w'),
                ctrl: true,
                ..
            } => {
                self.close_focused();
                return Ok(LoopControl::Continue);
            }
            _ => {}
        }

        if matches!(
            self.focused_window().map(|e| return e.kind()),
            Some(WindowKind::Notepad)
        ) {
            match input {
                Input {
                    key: Key::Char('s'),
                    ctrl: true,
                    ..
                } => return Ok(self.activate(MenuItem::Save)),
                Input {
                    key: Key::Char('o'),
                    ctrl: true,
                    ..
                } => return Ok(self.activate(MenuItem::Open)),
                _ => {}
            }
        }

        let now = self.clock.now();
        let Some(window) = self.focused_window_mut() else {
            return Ok(LoopControl::Continue);
        };
        let window_id = window.id;

        match &mut window.content {
            WindowContent::Notepad(notepad) => {
                notepad.textarea.input(input);
            }
            WindowContent::Terminal(terminal) => match input {
                Input {
                    key: Key::Enter, ..
                } => {
                    let line = terminal.submit(now);
                    tracing::debug!(window_id, line = line.as_str(), "command submitted");
                }
                Input { key: Key::Up, .. } => terminal.scroll.up(),
                Input { key: Key::Down, .. } => terminal.scroll.down(),
                Input {
                    key: Key::PageUp, ..
                } => terminal.scroll.up_page(),
                Input {
                    key: Key::PageDown,
                    ..
                } => terminal.scroll.down_page(),
                input => {
                    terminal.input.input(input);
                }
            },
        }

        return Ok(LoopControl::Continue);
    }

    fn handle_menu_input(&mut self, input: Input) -> LoopControl {
        match input.key {
            Key::Esc | Key::F(10) => self.menu.close(),
            Key::Up => self.menu.up(),
            Key::Down => self.menu.down(),
            Key::Left => {
                let titles = self.menu_titles();
                self.menu.step(&titles, false);
            }
            Key::Right => {
                let titles = self.menu_titles();
                self.menu.step(&titles, true);
            }
            Key::Enter => {
                let selected = self.menu.selected();
                self.menu.close();
                if let Some(item) = selected {
                    return self.activate(item);
                }
            }
            _ => {}
        }

        return LoopControl::Continue;
    }

    fn handle_dialog_input(
        &mut self,
        input: Input,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<LoopControl> {
        let Some(dialog) = self.dialog.take() else {
            return Ok(LoopControl::Continue);
        };

        match dialog {
            Dialog::Confirm(power) => match input.key {
                Key::Char('y') | Key::Char('Y') | Key::Enter => {
                    tracing::info!(action = power.title(), "power action confirmed");
                    self.dialog = Some(Dialog::Notice {
                        title: power.title().to_string(),
                        text: power.notice().to_string(),
                        then: Some(power),
                    });
                }
                Key::Char('n') | Key::Char('N') | Key::Esc => {}
                _ => self.dialog = Some(Dialog::Confirm(power)),
            },
            Dialog::Notice { title, text, then } => match input.key {
                Key::Enter | Key::Esc | Key::Char(' ') => match then {
                    Some(PowerAction::Shutdown) => return Ok(LoopControl::Quit),
                    Some(PowerAction::Restart) => self.restart(),
                    None => {}
                },
                _ => self.dialog = Some(Dialog::Notice { title, text, then }),
            },
            Dialog::FilePrompt {
                mode,
                window_id,
                mut input_area,
            } => match input.key {
                Key::Esc => {}
                Key::Enter => {
                    let path = input_area.lines().join("").trim().to_string();
                    // An empty path behaves like a cancelled dialog.
                    if !path.is_empty() {
                        self.request_file_action(mode, window_id, path.into(), tx)?;
                    }
                }
                _ => {
                    input_area.input(input);
                    self.dialog = Some(Dialog::FilePrompt {
                        mode,
                        window_id,
                        input_area,
                    });
                }
            },
        }

        return Ok(LoopControl::Continue);
    }

    fn handle_paste(&mut self, text: &str) {
        if let Some(Dialog::FilePrompt { input_area, .. }) = self.dialog.as_mut() {
            input_area.insert_str(text.replace(['\r', '\n'], ""));
            return;
        }
        if self.dialog.is_some() || self.menu.is_open() {
            return;
        }

        if let Some(window) = self.focused_window_mut() {
            match &mut window.content {
                WindowContent::Notepad(notepad) => {
                    notepad.textarea.insert_str(text.replace('\r', ""));
                }
                WindowContent::Terminal(terminal) => {
                    terminal
                        .input
                        .insert_str(text.replace(['\r', '\n'], " "));
                }
            }
        }
    }

    fn request_file_action(
        &mut self,
        mode: FilePromptMode,
        window_id: WindowId,
        path: std::path::PathBuf,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        match mode {
            FilePromptMode::Open => {
                tx.send(Action::OpenFile { window_id, path })?;
            }
            FilePromptMode::Save => {
                let Some(notepad) = self.notepad_mut(window_id) else {
                    return Ok(());
                };
                tx.send(Action::SaveFile {
                    window_id,
                    path,
                    text: notepad.text(),
                })?;
            }
        }

        return Ok(());
    }

    fn prompt_for_file(&mut self, mode: FilePromptMode, window_id: WindowId, initial: &str) {
        let mut input_area = TextArea::default();
        input_area.set_cursor_line_style(ratatui::style::Style::default());
        input_area.insert_str(initial);
        self.dialog = Some(Dialog::FilePrompt {
            mode,
            window_id,
            input_area,
        });
    }

    pub fn activate(&mut self, item: MenuItem) -> LoopControl {
        match item {
            MenuItem::Shutdown => self.dialog = Some(Dialog::Confirm(PowerAction::Shutdown)),
            MenuItem::Restart => self.dialog = Some(Dialog::Confirm(PowerAction::Restart)),
            MenuItem::Notepad => self.open_window(WindowKind::Notepad),
            MenuItem::Terminal => self.open_window(WindowKind::Terminal),
            MenuItem::New => {
                if let Some(notepad) = self.focused_notepad_mut() {
                    notepad.reset();
                }
            }
            MenuItem::Save | MenuItem::Open => {
                let Some(window) = self.focused_window() else {
                    return LoopControl::Continue;
                };
                let window_id = window.id;
                let WindowContent::Notepad(notepad) = &window.content else {
                    return LoopControl::Continue;
                };

                if item == MenuItem::Save {
                    let initial = notepad
                        .path
                        .as_ref()
                        .map(|e| return e.to_string_lossy().to_string())
                        .unwrap_or_default();
                    self.prompt_for_file(FilePromptMode::Save, window_id, &initial);
                } else {
                    self.prompt_for_file(FilePromptMode::Open, window_id, "");
                }
            }
        }

        return LoopControl::Continue;
    }

    pub fn open_window(&mut self, kind: WindowKind) {
        let content = match kind {
            WindowKind::Notepad => WindowContent::Notepad(NotepadWindow::new()),
            WindowKind::Terminal => {
                WindowContent::Terminal(TerminalWindow::new(self.transcript_limit))
            }
        };

        let id = self.next_window_id;
        self.next_window_id += 1;
        self.windows.push(Window { id, content });
        self.focused = Some(self.windows.len() - 1);
        tracing::info!(window_id = id, kind = %kind, "window opened");
    }

    pub fn close_focused(&mut self) {
        let Some(idx) = self.focused else {
            return;
        };

        let window = self.windows.remove(idx);
        tracing::info!(window_id = window.id, "window closed");

        if self.windows.is_empty() {
            self.focused = None;
        } else {
            self.focused = Some(idx.min(self.windows.len() - 1));
        }
    }

    pub fn focus_next(&mut self) {
        if let Some(idx) = self.focused {
            self.focused = Some((idx + 1) % self.windows.len());
        }
    }

    /// Rebuilds the desktop as it was at start-up.
    pub fn restart(&mut self) {
        tracing::info!(windows = self.windows.len(), "restarting desktop");
        self.windows.clear();
        self.focused = None;
        self.menu.close();
        self.dialog = None;
        self.status = READY_TEXT.to_string();
    }

    /// The File menu is only offered while a notepad has focus.
    pub fn menu_titles(&self) -> Vec<MenuTitle> {
        let mut titles = vec![MenuTitle::System, MenuTitle::Apps];
        if matches!(
            self.focused_window().map(|e| return e.kind()),
            Some(WindowKind::Notepad)
        ) {
            titles.push(MenuTitle::File);
        }

        return titles;
    }

    pub fn focused_window(&self) -> Option<&Window<'a>> {
        return self.focused.and_then(|idx| return self.windows.get(idx));
    }

    pub fn focused_window_mut(&mut self) -> Option<&mut Window<'a>> {
        return self.focused.and_then(|idx| return self.windows.get_mut(idx));
    }

    fn focused_terminal_mut(&mut self) -> Option<&mut TerminalWindow<'a>> {
        match self.focused_window_mut() {
            Some(Window {
                content: WindowContent::Terminal(terminal),
                ..
            }) => return Some(terminal),
            _ => return None,
        }
    }

    fn focused_notepad_mut(&mut self) -> Option<&mut NotepadWindow<'a>> {
        match self.focused_window_mut() {
            Some(Window {
                content: WindowContent::Notepad(notepad),
                ..
            }) => return Some(notepad),
            _ => return None,
        }
    }

    fn notepad_mut(&mut self, window_id: WindowId) -> Option<&mut NotepadWindow<'a>> {
        return self
            .windows
            .iter_mut()
            .find(|e| return e.id == window_id)
            .and_then(|e| match &mut e.content {
                WindowContent::Notepad(notepad) => return Some(notepad),
                WindowContent::Terminal(_) => return None,
            });
    }
}
