//! Input poller: dedicated thread republishing terminal events.
//!
//! The poller blocks on crossterm's event poll with a short bounded timeout
//! and writes what it sees straight into [`EventState`] — no queueing, no
//! channel. It never touches the frame lock, so a stalled renderer cannot
//! delay input. It exits within one poll timeout of the termination flag
//! going up, and raises the flag itself if the event source fails.

use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseEventKind};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::state::{Context, EventState};

/// Input poller thread handle.
pub struct InputPoller {
    handle: Option<JoinHandle<()>>,
}

impl InputPoller {
    /// Spawn the input polling thread.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Shared run state; the poller writes its event fields.
    /// * `poll_timeout` - How long to wait for events before re-checking the
    ///   termination flag.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the thread.
    pub fn spawn(ctx: Arc<Context>, poll_timeout: Duration) -> Self {
        let handle = thread::Builder::new()
            .name("pixelloop-input".to_string())
            .spawn(move || {
                Self::run_loop(&ctx, poll_timeout);
            })
            .expect("failed to spawn input thread");

        Self {
            handle: Some(handle),
        }
    }

    /// Wait for the input thread to finish.
    ///
    /// The thread only stops once the context's termination flag is set.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main polling loop.
    fn run_loop(ctx: &Context, poll_timeout: Duration) {
        loop {
            if ctx.events.is_terminated() {
                break;
            }

            match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(ev) => apply_event(&ctx.events, &ev),
                    Err(_) => {
                        // Unrecoverable read failure is a stop request, not
                        // a distinct error.
                        ctx.events.set_terminated();
                        break;
                    }
                },
                Ok(false) => {
                    // Timeout, loop back to check the termination flag.
                }
                Err(_) => {
                    ctx.events.set_terminated();
                    break;
                }
            }
        }
    }
}

/// Dispatch one terminal event into the shared event state.
pub(crate) fn apply_event(events: &EventState, ev: &Event) {
    match ev {
        Event::Key(key) => {
            // Presses only; releases and repeats are ignored.
            if key.kind == KeyEventKind::Press {
                if let Some(code) = key_value(key.code) {
                    events.set_key(code);
                }
            }
        }
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Moved
            | MouseEventKind::Drag(_)
            | MouseEventKind::Down(_) => {
                events.set_mouse(mouse.column, mouse.row);
            }
            _ => {}
        },
        Event::Resize(width, height) => {
            // One row stays reserved for the status line.
            events.set_size(*width, height.saturating_sub(1));
        }
        _ => {}
    }
}

/// Map a key code to the scalar value stored in [`EventState`].
///
/// Printable characters map to their Unicode scalar, a few control keys to
/// their ASCII codes. Everything else is dropped.
pub(crate) fn key_value(code: KeyCode) -> Option<u32> {
    match code {
        KeyCode::Char(c) => Some(u32::from(c)),
        KeyCode::Enter => Some(13),
        KeyCode::Esc => Some(27),
        KeyCode::Backspace => Some(8),
        KeyCode::Tab => Some(9),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState, KeyModifiers, MouseButton, MouseEvent};
    use std::time::Instant;

    fn state() -> EventState {
        EventState::new(80, 23)
    }

    #[test]
    fn test_resize_reserves_status_row() {
        let events = state();
        apply_event(&events, &Event::Resize(100, 30));
        assert_eq!(events.size(), (100, 29));
    }

    #[test]
    fn test_resize_to_one_row_saturates() {
        let events = state();
        apply_event(&events, &Event::Resize(40, 0));
        assert_eq!(events.size(), (40, 0));
    }

    #[test]
    fn test_key_press_recorded() {
        let events = state();
        apply_event(
            &events,
            &Event::Key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE)),
        );
        assert_eq!(events.key(), u32::from('w'));
    }

    #[test]
    fn test_key_release_ignored() {
        let events = state();
        let release = KeyEvent {
            code: KeyCode::Char('w'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        apply_event(&events, &Event::Key(release));
        assert_eq!(events.key(), 0);
    }

    #[test]
    fn test_unmapped_key_keeps_previous() {
        let events = state();
        events.set_key(u32::from('q'));
        apply_event(
            &events,
            &Event::Key(KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE)),
        );
        assert_eq!(events.key(), u32::from('q'));
    }

    #[test]
    fn test_mouse_position_tracked() {
        let events = state();
        let moved = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 17,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        apply_event(&events, &Event::Mouse(moved));
        assert_eq!(events.mouse(), (17, 4));

        let scrolled = MouseEvent {
            kind: MouseEventKind::ScrollUp,
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        apply_event(&events, &Event::Mouse(scrolled));
        // Scroll carries no position update.
        assert_eq!(events.mouse(), (17, 4));
    }

    #[test]
    fn test_mouse_down_tracked() {
        let events = state();
        let down = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 5,
            row: 9,
            modifiers: KeyModifiers::NONE,
        };
        apply_event(&events, &Event::Mouse(down));
        assert_eq!(events.mouse(), (5, 9));
    }

    #[test]
    fn test_poller_exits_after_termination() {
        let ctx = Arc::new(Context::new(80, 23));
        let poller = InputPoller::spawn(ctx.clone(), Duration::from_millis(5));

        ctx.events.set_terminated();
        let start = Instant::now();
        poller.join();
        // One poll timeout plus scheduling slack.
        assert!(start.elapsed() < Duration::from_millis(500));
    }
}
