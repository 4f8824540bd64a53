//! Event state: lock-free input and dimension tracking.
//!
//! One instance lives for the whole run, shared by every loop. Each field is
//! an independent atomic: a reader never sees a half-written field, but there
//! is deliberately no consistency guarantee *across* fields (the mouse
//! position and the last key may reflect different instants). The input
//! poller is the only writer for input fields; the termination flag may be
//! set from anywhere, including the signal handler.

use std::sync::atomic::{AtomicBool, AtomicU16, AtomicU32, Ordering};

/// Snapshot of the input fields, passed by value to the update callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Event {
    /// Last reported mouse column.
    pub mouse_x: u16,
    /// Last reported mouse row.
    pub mouse_y: u16,
    /// Last pressed key as a Unicode scalar value (0 = none observed).
    ///
    /// Last-write-wins: keys pressed between two reads are lost, never
    /// queued.
    pub key: u32,
}

/// Process-wide mutable state shared by all three loops.
#[derive(Debug)]
pub struct EventState {
    width: AtomicU16,
    height: AtomicU16,
    mouse_x: AtomicU16,
    mouse_y: AtomicU16,
    key: AtomicU32,
    terminated: AtomicBool,
}

impl EventState {
    /// Create the state with initial grid dimensions.
    ///
    /// `height` is the grid height, i.e. the terminal height with the status
    /// row already subtracted.
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            width: AtomicU16::new(width),
            height: AtomicU16::new(height),
            mouse_x: AtomicU16::new(0),
            mouse_y: AtomicU16::new(0),
            key: AtomicU32::new(0),
            terminated: AtomicBool::new(false),
        }
    }

    /// Current grid width in columns.
    #[inline]
    pub fn width(&self) -> u16 {
        self.width.load(Ordering::Relaxed)
    }

    /// Current grid height in rows (status row excluded).
    #[inline]
    pub fn height(&self) -> u16 {
        self.height.load(Ordering::Relaxed)
    }

    /// Current grid dimensions as `(width, height)`.
    #[inline]
    pub fn size(&self) -> (u16, u16) {
        (self.width(), self.height())
    }

    /// Record new grid dimensions.
    pub fn set_size(&self, width: u16, height: u16) {
        self.width.store(width, Ordering::Relaxed);
        self.height.store(height, Ordering::Relaxed);
    }

    /// Last reported mouse cell coordinates.
    #[inline]
    pub fn mouse(&self) -> (u16, u16) {
        (
            self.mouse_x.load(Ordering::Relaxed),
            self.mouse_y.load(Ordering::Relaxed),
        )
    }

    /// Record a mouse position.
    pub fn set_mouse(&self, x: u16, y: u16) {
        self.mouse_x.store(x, Ordering::Relaxed);
        self.mouse_y.store(y, Ordering::Relaxed);
    }

    /// Last pressed key (0 = none observed).
    #[inline]
    pub fn key(&self) -> u32 {
        self.key.load(Ordering::Relaxed)
    }

    /// Record a key press, overwriting any unread one.
    pub fn set_key(&self, key: u32) {
        self.key.store(key, Ordering::Relaxed);
    }

    /// Snapshot the input fields for one tick.
    pub fn snapshot(&self) -> Event {
        let (mouse_x, mouse_y) = self.mouse();
        Event {
            mouse_x,
            mouse_y,
            key: self.key(),
        }
    }

    /// Request termination of all loops.
    ///
    /// Idempotent and safe from any thread, including the signal handler.
    /// The transition is monotonic: once true, the flag is never reset.
    pub fn set_terminated(&self) {
        self.terminated.store(true, Ordering::Relaxed);
    }

    /// Whether termination has been requested.
    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.terminated.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_snapshot_reflects_writes() {
        let state = EventState::new(80, 23);
        state.set_mouse(12, 7);
        state.set_key(u32::from('q'));

        let event = state.snapshot();
        assert_eq!(event.mouse_x, 12);
        assert_eq!(event.mouse_y, 7);
        assert_eq!(event.key, u32::from('q'));
    }

    #[test]
    fn test_key_last_write_wins() {
        let state = EventState::new(80, 23);
        state.set_key(u32::from('a'));
        state.set_key(u32::from('b'));
        assert_eq!(state.key(), u32::from('b'));
    }

    #[test]
    fn test_terminated_idempotent_and_concurrent() {
        let state = Arc::new(EventState::new(80, 23));
        assert!(!state.is_terminated());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let state = state.clone();
                thread::spawn(move || state.set_terminated())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert!(state.is_terminated());
        // Setting again is a no-op.
        state.set_terminated();
        assert!(state.is_terminated());
    }

    #[test]
    fn test_terminated_monotonic() {
        let state = EventState::new(80, 23);
        state.set_terminated();
        for _ in 0..1000 {
            assert!(state.is_terminated());
        }
    }
}
