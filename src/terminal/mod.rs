//! Terminal access: session lifecycle and the single-syscall output buffer.

mod output;
mod session;

pub use output::OutputBuffer;
pub use session::Session;
