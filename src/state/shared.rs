//! Shared frame: the mutex-guarded handoff buffer between simulator and
//! renderer.
//!
//! The simulator replaces the contents wholesale once per tick; the renderer
//! copies them out wholesale once per pass. Neither side ever holds the lock
//! across callback execution or terminal I/O, so the critical section is
//! bounded by a memory copy. Delivery is last-write-wins: the renderer may
//! see the same frame twice or skip one, but never a torn mix of two.

use std::sync::Mutex;

use crate::buffer::{Cell, Frame};

/// The frame currently visible to the renderer.
#[derive(Debug, Default)]
pub struct SharedFrame {
    inner: Mutex<Frame>,
}

impl SharedFrame {
    /// Create an empty shared frame.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Frame::new()),
        }
    }

    /// Publish `frame` as the new visible frame.
    ///
    /// Copies into the guarded buffer so the caller keeps ownership of its
    /// working frame across ticks.
    pub fn publish(&self, frame: &Frame) {
        self.lock().clone_from(frame);
    }

    /// Copy the visible frame's cells into `out`, reusing its allocation.
    pub fn snapshot_into(&self, out: &mut Vec<Cell>) {
        let guard = self.lock();
        out.clear();
        out.extend_from_slice(guard.cells());
    }

    /// Clone the visible frame.
    pub fn snapshot(&self) -> Frame {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Frame> {
        // A panicking publisher leaves a fully-written frame behind, so a
        // poisoned lock is still safe to read.
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
