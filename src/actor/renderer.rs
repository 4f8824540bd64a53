//! Render actor: dedicated thread flushing frames to the terminal.
//!
//! Each pass snapshots the shared frame (copy under lock, never I/O under
//! lock), encodes it with the status line into one pre-allocated buffer,
//! and flushes it in a single write. The status line is recomputed at a
//! capped rate from the renderer's own pass counter, so it doubles as a
//! refresh-rate gauge independent of the simulator's tick rate.
//!
//! The renderer tolerates a frame whose dimensions lag the event state
//! during a resize: the body reflects the last published frame, the status
//! line the current dimensions, and the mismatch resolves on the next
//! publish.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use unicode_width::UnicodeWidthChar;

use crate::buffer::Cell;
use crate::state::{Context, EventState};
use crate::terminal::OutputBuffer;

/// Render thread handle.
pub struct RenderActor {
    handle: Option<JoinHandle<()>>,
}

impl RenderActor {
    /// Spawn the render thread.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Shared run state; the renderer reads the frame and events.
    /// * `status_interval` - Minimum time between status-line recomputes.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the thread.
    pub fn spawn(ctx: Arc<Context>, status_interval: Duration) -> Self {
        let handle = thread::Builder::new()
            .name("pixelloop-render".to_string())
            .spawn(move || {
                Self::run_loop(&ctx, status_interval);
            })
            .expect("failed to spawn render thread");

        Self {
            handle: Some(handle),
        }
    }

    /// Wait for the render thread to finish.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main render loop.
    fn run_loop(ctx: &Context, status_interval: Duration) {
        let mut stdout = io::stdout().lock();
        let mut out = OutputBuffer::new();
        let mut cells: Vec<Cell> = Vec::new();
        let mut status = String::new();

        let mut last_recompute = Instant::now();
        let mut passes = 0u32;

        loop {
            if ctx.events.is_terminated() {
                break;
            }

            passes += 1;
            let elapsed = last_recompute.elapsed();
            if elapsed >= status_interval {
                #[allow(clippy::cast_precision_loss)]
                let fps = passes as f32 / elapsed.as_secs_f32();
                status = format_status(fps, &ctx.events);
                passes = 0;
                last_recompute = Instant::now();
            }

            let line = fit_width(&status, usize::from(ctx.events.width()));
            ctx.frame.snapshot_into(&mut cells);

            encode_pass(&mut out, &cells, &line);
            if out.flush_to(&mut stdout).is_err() {
                // Output failure is a stop request like any other.
                ctx.events.set_terminated();
                break;
            }
        }
    }
}

/// Encode one full pass: grid body followed by the status line.
pub(crate) fn encode_pass(out: &mut OutputBuffer, cells: &[Cell], status_line: &str) {
    out.clear();
    out.frame_home();
    for &cell in cells {
        out.push_cell(cell);
    }
    out.status_home();
    out.write_str(status_line);
}

/// Build the status text from the renderer's fps estimate and the current
/// event state.
pub(crate) fn format_status(fps: f32, events: &EventState) -> String {
    let (width, height) = events.size();
    let (mouse_x, mouse_y) = events.mouse();
    format!(
        " {fps:.1} fps | {width}x{height} | key {key} | mouse {mouse_x},{mouse_y}",
        key = events.key(),
    )
}

/// Pad or truncate `text` to exactly `width` columns.
pub(crate) fn fit_width(text: &str, width: usize) -> String {
    let mut line = String::with_capacity(width);
    let mut columns = 0;

    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if columns + w > width {
            break;
        }
        line.push(c);
        columns += w;
    }
    while columns < width {
        line.push(' ');
        columns += 1;
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{Color, Frame};

    #[test]
    fn test_fit_width_exact_for_all_widths() {
        let status = " 60.0 fps | 80x23 | key 0 | mouse 0,0";
        for width in [0, 1, 10, status.len(), 80, 200] {
            assert_eq!(fit_width(status, width).chars().count(), width);
        }
    }

    #[test]
    fn test_fit_width_truncates_and_pads() {
        assert_eq!(fit_width("abcdef", 3), "abc");
        assert_eq!(fit_width("ab", 4), "ab  ");
        assert_eq!(fit_width("", 2), "  ");
    }

    #[test]
    fn test_format_status_reports_event_state() {
        let events = EventState::new(80, 23);
        events.set_mouse(3, 9);
        events.set_key(u32::from('x'));

        let status = format_status(30.0, &events);
        assert!(status.contains("30.0 fps"));
        assert!(status.contains("80x23"));
        assert!(status.contains(&format!("key {}", u32::from('x'))));
        assert!(status.contains("mouse 3,9"));
    }

    #[test]
    fn test_encode_pass_layout() {
        let mut out = OutputBuffer::new();
        let mut frame = Frame::sized(2, 1);
        frame.cells_mut()[0] = Cell::new(Color::Red);
        frame.cells_mut()[1] = Cell::new(Color::BrightBlue);

        encode_pass(&mut out, frame.cells(), "st");

        let expected = b"\x1b[2;1f\x1b[31;41m \x1b[94;104m \x1b[1;1f\x1b[30;47mst";
        assert_eq!(out.as_bytes(), expected.as_slice());
    }

    #[test]
    fn test_encode_pass_reuses_buffer() {
        let mut out = OutputBuffer::new();
        encode_pass(&mut out, &[Cell::default()], "a");
        let first = out.as_bytes().to_vec();
        encode_pass(&mut out, &[Cell::default()], "a");
        assert_eq!(out.as_bytes(), first.as_slice());
    }
}
