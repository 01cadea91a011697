use std::fmt;

use serde::Serialize;

/// Board width in pixel units.
pub const GAME_WIDTH: i32 = 600;

/// Board height in pixel units.
pub const GAME_HEIGHT: i32 = 400;

/// Edge length of one grid cell in pixel units.
pub const SPACE_SIZE: i32 = 20;

/// Segment count of a freshly created snake.
pub const BODY_PARTS: usize = 3;

/// Tick period in milliseconds.
pub const SPEED_MS: u64 = 100;

pub const SNAKE_COLOR: Rgb = Rgb(0x00, 0xFF, 0x00);
pub const FOOD_COLOR: Rgb = Rgb(0xFF, 0x00, 0x00);
pub const BACKGROUND_COLOR: Rgb = Rgb(0x00, 0x00, 0x00);

/// Plain 24-bit color carried by draw effects.
///
/// Serializes as a `#RRGGBB` string.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(into = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

impl From<Rgb> for ratatui::style::Color {
    fn from(color: Rgb) -> Self {
        Self::Rgb(color.0, color.1, color.2)
    }
}

/// What happens when the head crosses the board edge.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// Re-enter from the opposite edge.
    #[default]
    Wrap,
    /// Leaving the board is a fatal collision.
    HardWall,
}

/// Board geometry plus the boundary rule applied to it.
///
/// `width` and `height` are in pixel units and must be multiples of
/// `cell_size`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Playfield {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
    pub policy: BoundaryPolicy,
}

impl Playfield {
    /// The fixed 600x400 board with 20-unit cells.
    #[must_use]
    pub fn standard(policy: BoundaryPolicy) -> Self {
        Self {
            width: GAME_WIDTH,
            height: GAME_HEIGHT,
            cell_size: SPACE_SIZE,
            policy,
        }
    }

    #[must_use]
    pub fn columns(self) -> i32 {
        self.width / self.cell_size
    }

    #[must_use]
    pub fn rows(self) -> i32 {
        self.height / self.cell_size
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::try_from(self.columns() * self.rows()).unwrap_or(0)
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::standard(BoundaryPolicy::default())
    }
}
