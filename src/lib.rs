//! # Pixelloop
//!
//! A threaded pixel-grid rendering loop for terminal games, demos, and
//! dashboards.
//!
//! Pixelloop owns a rectangular grid of colored cells, refreshes the
//! terminal at high frequency, and feeds input to a user-supplied update
//! callback — without the caller managing threads, locks, or escape
//! sequences.
//!
//! ## Core Concepts
//!
//! - **Three loops, one context**: input polling, simulation, and rendering
//!   progress independently, sharing lock-free event state and one
//!   mutex-guarded frame
//! - **Last-write-wins frames**: the renderer always sees the most recently
//!   published frame, never a torn one, and never blocks the simulator
//! - **Cooperative shutdown**: a single monotonic termination flag, raised
//!   by the signal handler or any loop, unwinds everything and restores the
//!   terminal
//! - **Callbacks as behavior**: an init and an update closure are the whole
//!   application surface
//!
//! ## Example
//!
//! ```rust,ignore
//! use pixelloop::{Cell, Color, Engine};
//!
//! let engine = Engine::new()?;
//! engine.run(
//!     |frame, _w, _h| {
//!         frame.fill(Cell::new(Color::Blue));
//!         true
//!     },
//!     |frame, w, _h, _elapsed, event| {
//!         frame.set(event.mouse_x, event.mouse_y, w, Cell::new(Color::White));
//!         event.key != u32::from('q')
//!     },
//! )?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod buffer;
mod error;
pub mod state;
pub mod terminal;

// Re-exports for convenience
pub use actor::{Engine, EngineConfig, InputPoller, RenderActor};
pub use buffer::{Cell, Color, Frame};
pub use error::Error;
pub use state::{Context, Event, EventState, SharedFrame};
pub use terminal::{OutputBuffer, Session};
