//! Shared run state: the context object every loop hangs off.
//!
//! There are no statics. The [`Context`] is built once by the engine and
//! handed to each worker behind an `Arc`; the input poller writes
//! [`EventState`], the simulator publishes into [`SharedFrame`], the
//! renderer reads both.

mod events;
mod shared;

pub use events::{Event, EventState};
pub use shared::SharedFrame;

/// All state shared between the input, simulation, and render loops.
#[derive(Debug)]
pub struct Context {
    /// Dimensions, input, and the termination flag. Lock-free.
    pub events: EventState,
    /// The published frame. The only mutex in the system.
    pub frame: SharedFrame,
}

impl Context {
    /// Create a context with initial grid dimensions (status row already
    /// excluded from `height`).
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            events: EventState::new(width, height),
            frame: SharedFrame::new(),
        }
    }
}
