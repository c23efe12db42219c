use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};

use crate::viewport::frame_duration;

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    /// Click, wheel or pointer motion
    Mouse(MouseEvent),
    /// New terminal size (columns, rows)
    Resize(u16, u16),
    /// Nothing arrived before the timeout
    Tick,
}

/// Polls the terminal, idling at the tick rate and speeding up to the
/// animation frame rate while the track is sliding
pub struct EventHandler {
    idle_timeout: Duration,
    frame_timeout: Duration,
}

impl EventHandler {
    pub fn with_animation_fps(tick_rate_ms: u64, animation_fps: u32) -> Self {
        Self {
            idle_timeout: Duration::from_millis(tick_rate_ms),
            frame_timeout: frame_duration(animation_fps),
        }
    }

    /// Wait up to one idle tick
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.wait(self.idle_timeout)
    }

    /// Wait up to one animation frame
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        self.wait(self.frame_timeout)
    }

    fn wait(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if !event::poll(timeout)? {
            return Ok(Some(AppEvent::Tick));
        }
        Ok(translate(event::read()?))
    }
}

/// Keep the terminal events the app reacts to
fn translate(event: Event) -> Option<AppEvent> {
    match event {
        // some terminals also report releases and repeats
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
        // drags would flood the hover logic with no effect
        Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Drag(_)) => None,
        Event::Mouse(mouse) => Some(AppEvent::Mouse(mouse)),
        Event::Resize(columns, rows) => Some(AppEvent::Resize(columns, rows)),
        _ => None,
    }
}
