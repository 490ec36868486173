//! Button pages and grid positions.

use std::fmt;

use crate::button::{BackgroundColor, Button, FunctionAction};
use crate::error::{PageError, Result};

/// Number of button rows on the panel.
pub const GRID_ROWS: u8 = 4;
/// Number of button columns on the panel.
pub const GRID_COLS: u8 = 8;

/// A 1-based position on the panel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Checked constructor.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::OutOfGrid`] if the position is not on the panel.
    pub fn new(row: u8, col: u8) -> Result<Self> {
        if Self::in_grid(row, col) {
            Ok(Self { row, col })
        } else {
            Err(PageError::OutOfGrid {
                row,
                col,
                rows: GRID_ROWS,
                cols: GRID_COLS,
            })
        }
    }

    pub fn in_grid(row: u8, col: u8) -> bool {
        (1..=GRID_ROWS).contains(&row) && (1..=GRID_COLS).contains(&col)
    }

    /// Every grid position in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=GRID_ROWS).flat_map(|row| (1..=GRID_COLS).map(move |col| Position { row, col }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A page of buttons addressed by grid position.
///
/// Lookups return a fresh [`Button`] each time; callers own the result.
pub trait ButtonPage {
    /// Page name shown by tools.
    fn name(&self) -> &str;

    /// Button at the 1-based `(row, col)` position, or `None` for empty slots
    /// and positions outside the grid.
    fn button(&self, row: u8, col: u8) -> Option<Button>;

    /// Every placed button in row-major order.
    fn buttons(&self) -> Vec<(Position, Button)> {
        Position::all()
            .filter_map(|pos| self.button(pos.row, pos.col).map(|button| (pos, button)))
            .collect()
    }
}

/// The built-in page, one column per camera.
///
/// | row | column 1       | columns 2..=8                             |
/// |-----|----------------|-------------------------------------------|
/// | 1   | HOME           | select camera `col`                       |
/// | 2   | VIEWS ACTIVE   | view of camera `col`, type 1, index `col` |
/// | 3   | VIEWS INACTIVE | view of camera `col`, type 2, index `col` |
///
/// Cameras are numbered after the column they sit in, so every camera on
/// columns 2 to 8 can be selected and has both view buttons. Row 4 holds
/// zoom, focus, record, tally and brightness functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CameraPage;

impl CameraPage {
    pub const NAME: &'static str = "camera";

    fn function_row(col: u8) -> Option<Button> {
        use BackgroundColor::*;
        use FunctionAction::*;

        let button = match col {
            1 => Button::function(["ZOOM", "IN"], Blue, Zoom, 1),
            2 => Button::function(["ZOOM", "OUT"], Blue, Zoom, -1),
            3 => Button::function(["AUTO", "FOCUS"], Gray, Autofocus, 1),
            4 => Button::function(["REC", "START"], Red, Record, 1),
            5 => Button::function(["REC", "STOP"], Red, Record, 0),
            6 => Button::function(["TALLY"], Yellow, Tally, 1),
            7 => Button::function(["BRIGHT", "+"], White, Brightness, 10),
            8 => Button::function(["BRIGHT", "-"], White, Brightness, -10),
            _ => return None,
        };
        Some(button)
    }
}

impl ButtonPage for CameraPage {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn button(&self, row: u8, col: u8) -> Option<Button> {
        if !Position::in_grid(row, col) {
            trace!("no button outside the grid at ({row}, {col})");
            return None;
        }

        let button = match (row, col) {
            (1, 1) => Button::function(
                ["HOME"],
                BackgroundColor::Blue,
                FunctionAction::Home,
                0,
            ),
            (1, c) => Button::camera_state(
                [String::from("CAM"), c.to_string()],
                BackgroundColor::Green,
                c,
            ),
            (2, 1) => Button::function(
                ["VIEWS", "ACTIVE"],
                BackgroundColor::Orange,
                FunctionAction::ViewsActive,
                1,
            ),
            (2, c) => Button::camera_view(
                [format!("CAM {c}"), "ACTIVE".to_string()],
                BackgroundColor::Orange,
                c,
                1,
                c,
            ),
            (3, 1) => Button::function(
                ["VIEWS", "INACTIVE"],
                BackgroundColor::Purple,
                FunctionAction::ViewsActive,
                0,
            ),
            (3, c) => Button::camera_view(
                [format!("CAM {c}"), "INACTIVE".to_string()],
                BackgroundColor::Purple,
                c,
                2,
                c,
            ),
            (_, c) => return Self::function_row(c),
        };
        Some(button)
    }
}
