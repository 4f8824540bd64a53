//! Engine: the orchestrator and primary simulation loop.
//!
//! The engine owns the terminal session, builds the shared [`Context`],
//! spawns the input and render workers, and runs the simulation loop on the
//! caller's thread. Behavior is injected as two plain closures: an init
//! callback sizing the first frame, and an update callback producing each
//! subsequent one.
//!
//! Lifecycle: `Uninitialized -> SessionActive -> Running -> ShuttingDown ->
//! Restored`. Whatever stops the run — the update callback returning
//! `false`, an interrupt signal, an I/O failure in either worker — the
//! engine sets the termination flag, joins both workers, and restores the
//! terminal exactly once.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use super::{InputPoller, RenderActor};
use crate::buffer::Frame;
use crate::error::Error;
use crate::state::{Context, Event};
use crate::terminal::Session;

/// Configuration for the engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// How long the input poller waits for events before re-checking the
    /// termination flag.
    pub input_poll_timeout: Duration,
    /// Settle time between entering the alternate screen and the init
    /// callback.
    pub warmup: Duration,
    /// Minimum time between status-line recomputes.
    pub status_interval: Duration,
    /// Whether to capture mouse events.
    pub enable_mouse: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            input_poll_timeout: Duration::from_millis(5),
            warmup: Duration::from_millis(512),
            status_interval: Duration::from_secs(1) / 30,
            enable_mouse: true,
        }
    }
}

/// The pixelloop engine.
///
/// Constructing one switches the terminal into raw mode on the alternate
/// screen; [`run`](Self::run) drives the loops and restores the terminal on
/// the way out.
pub struct Engine {
    config: EngineConfig,
    ctx: Arc<Context>,
    session: Session,
}

impl Engine {
    /// Create an engine with default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Setup`] if terminal acquisition fails; any partially
    /// acquired terminal state is released before returning.
    pub fn new() -> Result<Self, Error> {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Setup`] if terminal acquisition fails.
    pub fn with_config(config: EngineConfig) -> Result<Self, Error> {
        let (width, height) = Session::size().map_err(Error::Setup)?;
        let session = Session::enter(config.enable_mouse).map_err(Error::Setup)?;

        // The top row belongs to the status line.
        let ctx = Arc::new(Context::new(width, height.saturating_sub(1)));

        Ok(Self {
            config,
            ctx,
            session,
        })
    }

    /// The shared run state, for callers that want to observe or terminate
    /// the run from another thread.
    pub fn context(&self) -> Arc<Context> {
        self.ctx.clone()
    }

    /// Run the loop until the update callback returns `false` or termination
    /// is requested.
    ///
    /// `init` receives a frame already sized to the grid and must populate
    /// it; returning `false` aborts the run before the renderer starts.
    /// `update` runs once per tick with the previous frame, the current
    /// dimensions, the elapsed seconds since the previous tick, and an input
    /// snapshot; returning `false` stops the run cleanly.
    ///
    /// # Errors
    ///
    /// [`Error::Signal`] if the interrupt handler cannot be installed,
    /// [`Error::InitAborted`] if `init` returns `false`, and
    /// [`Error::Restore`] if the terminal cannot be restored after the loops
    /// have exited.
    pub fn run<I, U>(mut self, mut init: I, mut update: U) -> Result<(), Error>
    where
        I: FnMut(&mut Frame, u16, u16) -> bool,
        U: FnMut(&mut Frame, u16, u16, f32, Event) -> bool,
    {
        // The handler only flips the flag; cleanup stays down here where the
        // loops can be joined first.
        let signal_ctx = self.ctx.clone();
        ctrlc::set_handler(move || signal_ctx.events.set_terminated())?;

        let input = InputPoller::spawn(self.ctx.clone(), self.config.input_poll_timeout);

        // Let the terminal settle after the mode switches (and give the
        // poller a chance to observe an initial resize).
        thread::sleep(self.config.warmup);

        let (width, height) = self.ctx.events.size();
        let mut frame = Frame::sized(width, height);
        if !init(&mut frame, width, height) {
            self.ctx.events.set_terminated();
            input.join();
            self.session.restore().map_err(Error::Restore)?;
            return Err(Error::InitAborted);
        }
        self.ctx.frame.publish(&frame);

        let renderer = RenderActor::spawn(self.ctx.clone(), self.config.status_interval);

        simulate(&self.ctx, &mut frame, &mut update);

        self.ctx.events.set_terminated();
        input.join();
        renderer.join();

        self.session.restore().map_err(Error::Restore)
    }
}

/// The steady-state simulation loop.
///
/// Runs until the update callback returns `false` or termination is
/// requested. Returns the number of frames published, which excludes the
/// initial post-init publish done by [`Engine::run`].
pub(crate) fn simulate<U>(ctx: &Context, frame: &mut Frame, update: &mut U) -> u64
where
    U: FnMut(&mut Frame, u16, u16, f32, Event) -> bool,
{
    let mut last_tick = Instant::now();
    let mut publishes = 0;

    loop {
        if ctx.events.is_terminated() {
            break;
        }

        let now = Instant::now();
        let elapsed = (now - last_tick).as_secs_f32();
        last_tick = now;

        let (width, height) = ctx.events.size();
        if frame.len() != usize::from(width) * usize::from(height) {
            frame.resize(width, height);
        }

        if !update(frame, width, height, elapsed, ctx.events.snapshot()) {
            break;
        }

        ctx.frame.publish(frame);
        publishes += 1;
    }

    publishes
}
