use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::Backend;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Alignment;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Clear;
use ratatui::widgets::List;
use ratatui::widgets::ListItem;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Tabs;
use ratatui::widgets::Wrap;
use ratatui::Frame;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Dialog;
use crate::domain::models::Event;
use crate::domain::models::MenuTitle;
use crate::domain::services::ActionsService;
use crate::domain::services::AppState;
use crate::domain::services::AppStateProps;
use crate::domain::services::EventsService;
use crate::domain::services::LoopControl;
use crate::domain::services::TerminalWindow;
use crate::domain::services::WindowContent;

#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

const DESKTOP_COLOR: Color = Color::Blue;
const MENU_HINT: &str = "F10 menu  F6 next window  Ctrl+W close  Ctrl+C shutdown";

fn menu_label(title: MenuTitle) -> String {
    return format!(" {title} ");
}

/// Column where each title starts in the menu bar.
fn menu_offsets(titles: &[MenuTitle]) -> Vec<u16> {
    let mut offsets = vec![];
    let mut x = 0;
    for title in titles {
        offsets.push(x);
        x += menu_label(*title).len() as u16;
    }
    return offsets;
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    return Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };
}

fn render_menu_bar(frame: &mut Frame, app_state: &AppState, area: Rect) {
    let open = app_state.menu.open_title();
    let spans = app_state
        .menu_titles()
        .into_iter()
        .map(|title| {
            let mut style = Style::default().fg(Color::Black).bg(Color::Gray);
            if open == Some(title) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            return Span::styled(menu_label(title), style);
        })
        .collect::<Vec<Span>>();

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Gray)),
        area,
    );
}

fn render_menu_dropdown(frame: &mut Frame, app_state: &AppState, area: Rect) {
    let (Some(title), Some(highlighted)) =
        (app_state.menu.open_title(), app_state.menu.highlighted())
    else {
        return;
    };

    let titles = app_state.menu_titles();
    let offsets = menu_offsets(&titles);
    let x = titles
        .iter()
        .position(|e| return *e == title)
        .map(|idx| return offsets[idx])
        .unwrap_or(0);

    let items = title
        .items()
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let mut style = Style::default();
            if idx == highlighted {
                style = style.add_modifier(Modifier::REVERSED);
            }
            return ListItem::new(format!(" {item} ")).style(style);
        })
        .collect::<Vec<ListItem>>();

    let width = 14u16.min(area.width.saturating_sub(x));
    let height = (title.items().len() as u16 + 2).min(area.height);
    let rect = Rect {
        x: area.x + x,
        y: area.y,
        width,
        height,
    };

    frame.render_widget(Clear, rect);
    frame.render_widget(
        List::new(items).block(
            Block::bordered().style(Style::default().fg(Color::Black).bg(Color::Gray)),
        ),
        rect,
    );
}

fn render_terminal_window(frame: &mut Frame, terminal: &mut TerminalWindow, area: Rect) {
    let [transcript_area, input_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);

    terminal.set_viewport(transcript_area.height.into());

    let lines = terminal
        .transcript
        .lines()
        .map(|e| return Line::from(e.to_string()))
        .collect::<Vec<Line>>();
    let position = u16::try_from(terminal.scroll.position()).unwrap_or(u16::MAX);

    frame.render_widget(Paragraph::new(lines).scroll((position, 0)), transcript_area);
    frame.render_widget(&terminal.input, input_area);
}

fn render_windows(frame: &mut Frame, app_state: &mut AppState, area: Rect) {
    let Some(focused) = app_state.focused else {
        frame.render_widget(
            Paragraph::new(MENU_HINT)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::White).bg(DESKTOP_COLOR)),
            centered_rect(area.width, 1, area),
        );
        return;
    };

    let [tabs_area, window_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let titles = app_state
        .windows
        .iter()
        .map(|e| return e.title())
        .collect::<Vec<String>>();
    frame.render_widget(
        Tabs::new(titles)
            .select(focused)
            .style(Style::default().fg(Color::White).bg(DESKTOP_COLOR))
            .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)),
        tabs_area,
    );

    let Some(window) = app_state.windows.get_mut(focused) else {
        return;
    };

    let block = Block::bordered()
        .title(window.title())
        .style(Style::default().fg(Color::White).bg(Color::Black));
    let inner = block.inner(window_area);
    frame.render_widget(block, window_area);

    match &mut window.content {
        WindowContent::Notepad(notepad) => {
            frame.render_widget(&notepad.textarea, inner);
        }
        WindowContent::Terminal(terminal) => {
            render_terminal_window(frame, terminal, inner);
        }
    }
}

fn render_dialog(frame: &mut Frame, dialog: &Dialog, area: Rect) {
    let block = Block::bordered()
        .title(dialog.title())
        .style(Style::default().fg(Color::Black).bg(Color::Gray));

    match dialog {
        Dialog::Confirm(power) => {
            let rect = centered_rect(48, 5, area);
            frame.render_widget(Clear, rect);
            frame.render_widget(
                Paragraph::new(vec![
                    Line::from(power.confirm_prompt()),
                    Line::from(""),
                    Line::from("[y] Yes   [n] No"),
                ])
                .alignment(Alignment::Center)
                .block(block),
                rect,
            );
        }
        Dialog::Notice { text, .. } => {
            let rect = centered_rect(48, 5, area);
            frame.render_widget(Clear, rect);
            frame.render_widget(
                Paragraph::new(vec![
                    Line::from(text.to_string()),
                    Line::from(""),
                    Line::from("[Enter] OK"),
                ])
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block),
                rect,
            );
        }
        Dialog::FilePrompt { input_area, .. } => {
            let rect = centered_rect(60, 3, area);
            frame.render_widget(Clear, rect);
            let inner = block.inner(rect);
            frame.render_widget(block, rect);
            frame.render_widget(input_area, inner);
        }
    }
}

pub fn render(frame: &mut Frame, app_state: &mut AppState) {
    let area = frame.area();
    let [menu_area, desktop_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Block::default().style(Style::default().bg(DESKTOP_COLOR)),
        desktop_area,
    );
    render_menu_bar(frame, app_state, menu_area);
    render_windows(frame, app_state, desktop_area);
    frame.render_widget(
        Paragraph::new(app_state.status.as_str())
            .style(Style::default().fg(Color::Black).bg(Color::Gray)),
        status_area,
    );

    if app_state.menu.is_open() {
        render_menu_dropdown(frame, app_state, desktop_area);
    }
    if let Some(dialog) = &app_state.dialog {
        render_dialog(frame, dialog, area);
    }
}

pub async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state_props: AppStateProps,
    clock_interval: Duration,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

    let worker = tokio::spawn(async move {
        return ActionsService::start(event_tx, &mut action_rx).await;
    });

    let mut app_state = AppState::new(app_state_props);
    let mut events = EventsService::new(event_rx, clock_interval);

    loop {
        terminal.draw(|frame| render(frame, &mut app_state))?;

        let event = events.next().await?;
        if app_state.handle_event(event, &action_tx)? == LoopControl::Quit {
            tracing::info!("shutting down");
            break;
        }
    }

    worker.abort();
    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

/// Takes over the terminal, runs the desktop until shutdown, and hands the
/// terminal back.
pub async fn run(app_state_props: AppStateProps, clock_interval: Duration) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;

    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let result = start_loop(&mut terminal, app_state_props, clock_interval).await;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    crossterm::execute!(io::stdout(), cursor::Show)?;

    return result;
}
