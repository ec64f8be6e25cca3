use std::time::Duration;

use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyEventKind;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::domain::models::Event;

#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

pub fn map_crossterm_event(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Paste(text) => {
            return Some(Event::KeyboardPaste(text));
        }
        CrosstermEvent::Mouse(mouseevent) => match mouseevent.kind {
            crossterm::event::MouseEventKind::ScrollUp => {
                return Some(Event::UIScrollUp);
            }
            crossterm::event::MouseEventKind::ScrollDown => {
                return Some(Event::UIScrollDown);
            }
            _ => {
                return None;
            }
        },
        CrosstermEvent::Key(keyevent) => {
            // Windows reports releases too.
            if keyevent.kind == KeyEventKind::Release {
                return None;
            }

            let key = match keyevent.code {
                crossterm::event::KeyCode::Char(c) => Key::Char(c),
                crossterm::event::KeyCode::Enter => Key::Enter,
                crossterm::event::KeyCode::Left => Key::Left,
                crossterm::event::KeyCode::Right => Key::Right,
                crossterm::event::KeyCode::Up => Key::Up,
                crossterm::event::KeyCode::Down => Key::Down,
                crossterm::event::KeyCode::Home => Key::Home,
                crossterm::event::KeyCode::End => Key::End,
                crossterm::event::KeyCode::PageUp => Key::PageUp,
                crossterm::event::KeyCode::PageDown => Key::PageDown,
                crossterm::event::KeyCode::Tab => Key::Tab,
                crossterm::event::KeyCode::Delete => Key::Delete,
                crossterm::event::KeyCode::F(n) => Key::F(n),
                crossterm::event::KeyCode::Backspace => Key::Backspace,
                crossterm::event::KeyCode::Esc => Key::Esc,
                _ => return None,
            };

            return Some(Event::KeyboardInput(Input {
                key,
                ctrl: keyevent
                    .modifiers
                    .contains(crossterm::event::KeyModifiers::CONTROL),
                alt: keyevent
                    .modifiers
                    .contains(crossterm::event::KeyModifiers::ALT),
                shift: keyevent
                    .modifiers
                    .contains(crossterm::event::KeyModifiers::SHIFT),
            }));
        }
        _ => return None,
    }
}

pub struct EventsService {
    crossterm_events: EventStream,
    events: mpsc::UnboundedReceiver<Event>,
    clock: time::Interval,
}

impl EventsService {
    pub fn new(events: mpsc::UnboundedReceiver<Event>, clock_interval: Duration) -> EventsService {
        let mut clock = time::interval(clock_interval);
        clock.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

        return EventsService {
            crossterm_events: EventStream::new(),
            events,
            clock,
        };
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.events.recv() => event,
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => map_crossterm_event(input),
                    Some(Err(_)) => None,
                    None => None
                },
                _ = self.clock.tick() => Some(Event::UITick)
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
