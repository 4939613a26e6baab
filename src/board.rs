//! Immutable board state.
//!
//! A [`Board`] is a value: cloning it is O(1) because the grid is held
//! behind an [`Arc`], and operations that "change" a board build a new one
//! with copy-on-write, leaving every earlier board valid. Old boards can be
//! kept for history or undo and shared across threads without locking.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::constants::{CHAR_BLACK, CHAR_EMPTY, CHAR_WHITE};
use crate::error::{GoError, Result};
use crate::geometry::{Coordinate, all_positions, in_bounds};

/// The occupant of an intersection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    #[default]
    Empty,
    Black,
    White,
}

impl Color {
    /// The other stone color. Empty has no opponent and maps to itself.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
            Color::Empty => Color::Empty,
        }
    }

    /// True for Black and White.
    pub fn is_stone(self) -> bool {
        self != Color::Empty
    }

    fn to_char(self) -> char {
        match self {
            Color::Black => CHAR_BLACK,
            Color::White => CHAR_WHITE,
            Color::Empty => CHAR_EMPTY,
        }
    }

    fn from_char(c: char) -> Option<Color> {
        match c.to_ascii_uppercase() {
            CHAR_BLACK => Some(Color::Black),
            CHAR_WHITE => Some(Color::White),
            CHAR_EMPTY => Some(Color::Empty),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Black => "black",
            Color::White => "white",
            Color::Empty => "empty",
        };
        f.write_str(name)
    }
}

/// A `size`x`size` Go board.
///
/// Every in-bounds coordinate holds exactly one [`Color`]; off-board
/// coordinates are never stored.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: i32,
    cells: Arc<Vec<Color>>,
}

impl Board {
    /// An empty board. Fails with [`GoError::InvalidArgument`] for a negative size.
    pub fn new(size: i32) -> Result<Self> {
        Self::with_stones(size, std::iter::empty())
    }

    /// A board pre-populated with `stones`. Coordinates not listed are Empty.
    ///
    /// Stones outside the board are rejected with [`GoError::OutOfBounds`].
    pub fn with_stones<I>(size: i32, stones: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Coordinate, Color)>,
    {
        if size < 0 {
            return Err(GoError::InvalidArgument(format!(
                "board size must be non-negative (got {size})"
            )));
        }
        let area = (size as usize).checked_mul(size as usize).ok_or_else(|| {
            GoError::InvalidArgument(format!("board size {size} is too large"))
        })?;
        let mut cells = vec![Color::Empty; area];
        for (coord, color) in stones {
            if !in_bounds(size, coord) {
                return Err(GoError::OutOfBounds { coord, size });
            }
            cells[Self::idx_for(size, coord)] = color;
        }
        Ok(Self {
            size,
            cells: Arc::new(cells),
        })
    }

    #[inline]
    fn idx_for(size: i32, coord: Coordinate) -> usize {
        coord.row as usize * size as usize + coord.col as usize
    }

    #[inline]
    fn idx(&self, coord: Coordinate) -> usize {
        Self::idx_for(self.size, coord)
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// The color at `coord`. Off-board coordinates have no entry and read as Empty.
    pub fn get_stone(&self, coord: Coordinate) -> Color {
        if !in_bounds(self.size, coord) {
            return Color::Empty;
        }
        self.cells[self.idx(coord)]
    }

    /// All coordinates holding `color`, in row-major order.
    pub fn get_stones(&self, color: Color) -> Vec<Coordinate> {
        all_positions(self.size)
            .filter(|&c| self.get_stone(c) == color)
            .collect()
    }

    /// A `[row][col]` snapshot of the grid.
    pub fn intersections(&self) -> Vec<Vec<Color>> {
        self.cells
            .chunks(self.size.max(1) as usize)
            .map(<[Color]>::to_vec)
            .collect()
    }

    /// Number of intersections holding `color`.
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == color).count()
    }

    /// True when no Empty intersection remains.
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Color::Empty)
    }

    /// Derive a new board with `changes` applied; `self` is left untouched.
    ///
    /// Callers must pass in-bounds coordinates only.
    pub(crate) fn with_changes<I>(&self, changes: I) -> Board
    where
        I: IntoIterator<Item = (Coordinate, Color)>,
    {
        let mut next = self.clone();
        let cells = Arc::make_mut(&mut next.cells);
        for (coord, color) in changes {
            debug_assert!(in_bounds(self.size, coord), "{coord} off board");
            cells[Self::idx_for(self.size, coord)] = color;
        }
        next
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let ch = self.get_stone(Coordinate::new(row, col)).to_char();
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses a diagram such as `"X.O/.X./..."`: rows separated by newlines or
/// `/`, top row first, whitespace between cells ignored.
impl FromStr for Board {
    type Err = GoError;

    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<Vec<Color>> = s
            .split(['\n', '/'])
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| {
                        Color::from_char(c)
                            .ok_or_else(|| GoError::InvalidDiagram(format!("unknown cell '{c}'")))
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<_>>()?;

        if rows.is_empty() {
            return Err(GoError::InvalidDiagram("no rows".to_string()));
        }
        let size = rows.len();
        if let Some(bad) = rows.iter().position(|r| r.len() != size) {
            return Err(GoError::InvalidDiagram(format!(
                "row {bad} has {} cells, expected {size}",
                rows[bad].len()
            )));
        }

        let size = size as i32;
        let stones = rows.into_iter().enumerate().flat_map(|(row, cells)| {
            cells
                .into_iter()
                .enumerate()
                .map(move |(col, color)| (Coordinate::new(row as i32, col as i32), color))
        });
        Self::with_stones(size, stones)
    }
}
