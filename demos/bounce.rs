//! Bouncing pixel: a minimal animation driven by the update callback.
//!
//! Press `q` or Esc to quit. Resize the terminal freely; the ball clamps
//! itself back into the grid.

use pixelloop::{Cell, Color, Engine, Error};

struct Ball {
    x: f32,
    y: f32,
    dx: f32,
    dy: f32,
}

fn main() -> Result<(), Error> {
    let mut ball = Ball {
        x: 1.0,
        y: 1.0,
        dx: 24.0,
        dy: 9.0,
    };

    let engine = Engine::new()?;
    engine.run(
        |frame, _width, _height| {
            frame.fill(Cell::new(Color::Blue));
            true
        },
        move |frame, width, height, elapsed, event| {
            if event.key == u32::from('q') || event.key == 27 {
                return false;
            }
            if width == 0 || height == 0 {
                return true;
            }

            ball.x += ball.dx * elapsed;
            ball.y += ball.dy * elapsed;
            let max_x = f32::from(width) - 1.0;
            let max_y = f32::from(height) - 1.0;
            if ball.x <= 0.0 || ball.x >= max_x {
                ball.dx = -ball.dx;
                ball.x = ball.x.clamp(0.0, max_x);
            }
            if ball.y <= 0.0 || ball.y >= max_y {
                ball.dy = -ball.dy;
                ball.y = ball.y.clamp(0.0, max_y);
            }

            frame.fill(Cell::new(Color::Blue));
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            frame.set(
                ball.x as u16,
                ball.y as u16,
                width,
                Cell::new(Color::BrightYellow),
            );
            true
        },
    )
}
