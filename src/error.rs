//! Error taxonomy for the run lifecycle.
//!
//! Runtime I/O failures inside the loops are never surfaced here; they are
//! downgraded to the termination flag and the run unwinds normally. What
//! remains is setup (before any loop starts), the init callback refusing to
//! start, and restoration (after every loop has exited).

use std::io;

/// Errors surfaced by [`Engine`](crate::Engine) setup and shutdown.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Terminal acquisition failed; no loops were started and any partially
    /// acquired terminal state has been released.
    #[error("terminal setup failed: {0}")]
    Setup(#[source] io::Error),

    /// Installing the interrupt handler failed.
    #[error("failed to install signal handler: {0}")]
    Signal(#[from] ctrlc::Error),

    /// The init callback returned `false`; the run was aborted before the
    /// render loop started.
    #[error("init callback aborted startup")]
    InitAborted,

    /// Restoring the terminal failed after the loops had already exited.
    #[error("terminal restore failed: {0}")]
    Restore(#[source] io::Error),
}
