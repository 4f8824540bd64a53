//! Mouse paint: drag to draw, digits 0-9 pick a color, `c` clears, `q`
//! quits.
//!
//! The mouse row in the event snapshot is terminal-relative; row 0 is the
//! status line, so painting shifts it up by one to land on the grid.

use pixelloop::{Cell, Color, Engine, Error};

fn main() -> Result<(), Error> {
    let mut brush = Color::BrightWhite;
    let mut cleared = false;

    let engine = Engine::new()?;
    engine.run(
        |frame, _width, _height| {
            frame.fill(Cell::new(Color::Black));
            true
        },
        move |frame, width, _height, _elapsed, event| {
            match char::from_u32(event.key) {
                Some('q') => return false,
                Some('c') => {
                    if !cleared {
                        frame.fill(Cell::new(Color::Black));
                        cleared = true;
                    }
                }
                Some(digit @ '0'..='9') => {
                    if let Some(color) =
                        Color::from_index(digit as u8 - b'0')
                    {
                        brush = color.bright();
                        cleared = false;
                    }
                }
                _ => cleared = false,
            }

            if event.mouse_y > 0 {
                frame.set(event.mouse_x, event.mouse_y - 1, width, Cell::new(brush));
            }
            true
        },
    )
}
