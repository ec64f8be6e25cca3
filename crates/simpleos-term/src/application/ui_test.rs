use anyhow::Result;
use chrono::Local;
use chrono::TimeZone;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use simpleos_core::FixedClock;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use super::render;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::MenuItem;
use crate::domain::models::MenuTitle;
use crate::domain::services::AppState;
use crate::domain::services::AppStateProps;

fn create_app_state<'a>() -> AppState<'a> {
    let now = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
    return AppState::new(AppStateProps {
        clock: Box::new(FixedClock::new(now)),
        transcript_limit: 100,
    });
}

fn draw(app_state: &mut AppState) -> Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(80, 24))?;
    terminal.draw(|frame| render(frame, app_state))?;

    let buffer = terminal.backend().buffer();
    let mut screen = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            screen.push_str(buffer[(x, y)].symbol());
        }
        screen.push('\n');
    }
    return Ok(screen);
}

#[test]
fn test_empty_desktop() -> Result<()> {
    let mut app_state = create_app_state();
    let screen = draw(&mut app_state)?;

    assert!(screen.starts_with(" System  Apps "));
    assert!(screen.contains("F10 menu"));
    assert!(screen.contains("SimpleOS Ready"));
    return Ok(());
}

#[test]
fn test_status_bar_shows_clock_after_tick() -> Result<()> {
    let mut app_state = create_app_state();
    app_state.tick();
    let screen = draw(&mut app_state)?;

    let last_line = screen.lines().last().unwrap_or_default();
    assert!(last_line.starts_with("SimpleOS | 2024-03-09 07:05:01"));
    return Ok(());
}

#[test]
fn test_terminal_window_shows_transcript() -> Result<()> {
    let (tx, _rx) = mpsc::unbounded_channel::<Action>();
    let mut app_state = create_app_state();
    app_state.activate(MenuItem::Terminal);

    for c in "echo hello".chars() {
        app_state.handle_event(
            Event::KeyboardInput(Input {
                key: Key::Char(c),
                ctrl: false,
                alt: false,
                shift: false,
            }),
            &tx,
        )?;
    }
    app_state.handle_event(
        Event::KeyboardInput(Input {
            key: Key::Enter,
            ctrl: false,
            alt: false,
            shift: false,
        }),
        &tx,
    )?;

    let screen = draw(&mut app_state)?;
    assert!(screen.contains("SimpleOS Terminal"));
    assert!(screen.contains(">>> echo hello"));
    assert!(screen.contains("Command"));
    return Ok(());
}

#[test]
fn test_open_menu_lists_items() -> Result<()> {
    let mut app_state = create_app_state();
    app_state.menu.open(MenuTitle::Apps);
    let screen = draw(&mut app_state)?;

    assert!(screen.contains("Notepad"));
    assert!(screen.contains("Terminal"));
    return Ok(());
}

#[test]
fn test_confirm_dialog_is_drawn() -> Result<()> {
    let mut app_state = create_app_state();
    app_state.activate(MenuItem::Shutdown);
    let screen = draw(&mut app_state)?;

    assert!(screen.contains("Are you sure you want to shutdown?"));
    assert!(screen.contains("[y] Yes"));
    return Ok(());
}
