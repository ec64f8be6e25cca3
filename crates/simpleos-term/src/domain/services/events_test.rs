use crossterm::event::Event as CrosstermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;
use tui_textarea::Input;
use tui_textarea::Key;

use super::map_crossterm_event;
use crate::domain::models::Event;

fn key(code: KeyCode, modifiers: KeyModifiers) -> CrosstermEvent {
    return CrosstermEvent::Key(KeyEvent::new(code, modifiers));
}

fn mouse(kind: MouseEventKind) -> CrosstermEvent {
    return CrosstermEvent::Mouse(MouseEvent {
        kind,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    });
}

#[test]
fn test_maps_keys_with_modifiers() {
    match map_crossterm_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)) {
        Some(Event::KeyboardInput(Input {
            key: Key::Char('c'),
            ctrl: true,
            alt: false,
            ..
        })) => {}
        other => panic!("unexpected event {other:?}"),
    }

    match map_crossterm_event(key(KeyCode::F(10), KeyModifiers::NONE)) {
        Some(Event::KeyboardInput(Input {
            key: Key::F(10), ..
        })) => {}
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn test_arrow_keys_stay_keyboard_input() {
    assert!(matches!(
        map_crossterm_event(key(KeyCode::Up, KeyModifiers::NONE)),
        Some(Event::KeyboardInput(Input { key: Key::Up, .. }))
    ));
}

#[test]
fn test_key_release_is_ignored() {
    let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    assert!(map_crossterm_event(CrosstermEvent::Key(release)).is_none());
}

#[test]
fn test_mouse_wheel_scrolls() {
    assert!(matches!(
        map_crossterm_event(mouse(MouseEventKind::ScrollUp)),
        Some(Event::UIScrollUp)
    ));
    assert!(matches!(
        map_crossterm_event(mouse(MouseEventKind::ScrollDown)),
        Some(Event::UIScrollDown)
    ));
    assert!(map_crossterm_event(mouse(MouseEventKind::Moved)).is_none());
}

#[test]
fn test_paste_and_unsupported_events() {
    assert!(matches!(
        map_crossterm_event(CrosstermEvent::Paste("hi".to_string())),
        Some(Event::KeyboardPaste(text)) if text == "hi"
    ));
    assert!(map_crossterm_event(CrosstermEvent::FocusGained).is_none());
    assert!(map_crossterm_event(key(KeyCode::Insert, KeyModifiers::NONE)).is_none());
}
