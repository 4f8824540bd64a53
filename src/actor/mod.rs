//! The three loops: input polling, simulation, and rendering.
//!
//! Each worker runs on its own named thread and shares one
//! [`Context`](crate::state::Context):
//!
//! ```text
//! ┌──────────────┐   EventState (atomics)   ┌──────────────┐
//! │ Input Thread │ ───────────────────────▶ │  Simulator   │
//! └──────────────┘            │             │ (run caller) │
//!                             │             └──────┬───────┘
//!                             ▼                    │ SharedFrame (mutex)
//!                      ┌──────────────┐            ▼
//!                      │Render Thread │ ◀── last published frame
//!                      └──────────────┘
//! ```
//!
//! Cancellation is a single monotonic flag in `EventState`; every loop
//! checks it once per iteration, and any loop (or the signal handler) may
//! raise it.

mod engine;
mod input;
mod renderer;

pub use engine::{Engine, EngineConfig};
pub use input::InputPoller;
pub use renderer::RenderActor;
