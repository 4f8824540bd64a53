//! Cell: The atomic unit of the pixel grid.
//!
//! A "pixel" on screen is a single space glyph whose background carries the
//! color. Each [`Color`] therefore maps to one SGR sequence that sets the
//! foreground and background to the same palette entry, so the cell reads as
//! a solid block regardless of the glyph underneath.

/// The fixed 16-entry palette.
///
/// Indices 0-7 are the eight base ANSI colors at normal intensity, 8-15 the
/// same colors at bright intensity. Out-of-range values are unrepresentable;
/// the enum is the palette.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Black (palette index 0).
    #[default]
    Black = 0,
    /// Red.
    Red = 1,
    /// Green.
    Green = 2,
    /// Yellow.
    Yellow = 3,
    /// Blue.
    Blue = 4,
    /// Magenta.
    Magenta = 5,
    /// Cyan.
    Cyan = 6,
    /// White.
    White = 7,
    /// Bright black (dark gray).
    BrightBlack = 8,
    /// Bright red.
    BrightRed = 9,
    /// Bright green.
    BrightGreen = 10,
    /// Bright yellow.
    BrightYellow = 11,
    /// Bright blue.
    BrightBlue = 12,
    /// Bright magenta.
    BrightMagenta = 13,
    /// Bright cyan.
    BrightCyan = 14,
    /// Bright white.
    BrightWhite = 15,
}

/// SGR sequences indexed by palette position. Foreground and background are
/// set to the same color so the space glyph renders as a solid pixel.
const SGR: [&str; 16] = [
    "\x1b[30;40m",
    "\x1b[31;41m",
    "\x1b[32;42m",
    "\x1b[33;43m",
    "\x1b[34;44m",
    "\x1b[35;45m",
    "\x1b[36;46m",
    "\x1b[37;47m",
    "\x1b[90;100m",
    "\x1b[91;101m",
    "\x1b[92;102m",
    "\x1b[93;103m",
    "\x1b[94;104m",
    "\x1b[95;105m",
    "\x1b[96;106m",
    "\x1b[97;107m",
];

impl Color {
    /// All palette entries in index order.
    pub const ALL: [Self; 16] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
        Self::BrightBlack,
        Self::BrightRed,
        Self::BrightGreen,
        Self::BrightYellow,
        Self::BrightBlue,
        Self::BrightMagenta,
        Self::BrightCyan,
        Self::BrightWhite,
    ];

    /// Palette index of this color (0-15).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Look up a color by palette index.
    ///
    /// Returns `None` for indices outside 0-15.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 16 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// The bright counterpart of a base color (identity for bright colors).
    #[inline]
    pub const fn bright(self) -> Self {
        Self::ALL[(self as u8 | 0x08) as usize]
    }

    /// The SGR sequence selecting this color for both foreground and
    /// background.
    #[inline]
    pub const fn sgr(self) -> &'static str {
        SGR[self as usize]
    }
}

/// A single grid cell.
///
/// Pure value type: one palette color, no identity beyond it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    /// The cell's palette color.
    pub color: Color,
}

impl Cell {
    /// Create a cell of the given color.
    #[inline]
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}

impl From<Color> for Cell {
    #[inline]
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_indices_round_trip() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index() as usize, i);
            assert_eq!(Color::from_index(color.index()), Some(*color));
        }
        assert_eq!(Color::from_index(16), None);
        assert_eq!(Color::from_index(255), None);
    }

    #[test]
    fn test_sgr_encoding() {
        assert_eq!(Color::Black.sgr(), "\x1b[30;40m");
        assert_eq!(Color::White.sgr(), "\x1b[37;47m");
        assert_eq!(Color::BrightBlack.sgr(), "\x1b[90;100m");
        assert_eq!(Color::BrightWhite.sgr(), "\x1b[97;107m");
    }

    #[test]
    fn test_bright_mapping() {
        assert_eq!(Color::Red.bright(), Color::BrightRed);
        assert_eq!(Color::BrightCyan.bright(), Color::BrightCyan);
    }

    #[test]
    fn test_default_cell_is_black() {
        assert_eq!(Cell::default(), Cell::new(Color::Black));
    }
}
