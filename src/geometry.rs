//! Grid geometry: coordinates, bounds checking and adjacency.
//!
//! Coordinates are `(row, col)` pairs, 0-indexed from the top-left corner.
//! They are signed so that off-board values (including negative ones) can be
//! represented and rejected rather than wrapping.

use std::fmt;

use crate::constants::{COLUMN_LETTERS, DELTA, MAX_VERTEX_SIZE};
use crate::error::{GoError, Result};

/// An intersection on the board. Equality and ordering are structural
/// (row-major).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// True iff `0 <= row < size` and `0 <= col < size`.
#[inline]
pub fn in_bounds(size: i32, coord: Coordinate) -> bool {
    (0..size).contains(&coord.row) && (0..size).contains(&coord.col)
}

/// The up to 4 orthogonal neighbors of `coord` that lie on the board,
/// in the order up, right, down, left.
pub fn adjacent(size: i32, coord: Coordinate) -> impl Iterator<Item = Coordinate> {
    DELTA
        .into_iter()
        .map(move |(dr, dc)| Coordinate::new(coord.row + dr, coord.col + dc))
        .filter(move |&n| in_bounds(size, n))
}

/// Every coordinate of a `size`x`size` board in row-major order.
pub fn all_positions(size: i32) -> impl Iterator<Item = Coordinate> {
    let size = size.max(0);
    (0..size).flat_map(move |row| (0..size).map(move |col| Coordinate::new(row, col)))
}

/// Parse a vertex string (e.g. `"D4"`) for a board of the given size.
///
/// Columns are letters `A`-`Z` skipping `I`; rows are numbered from the
/// bottom edge starting at 1, so `A1` is the bottom-left corner.
pub fn parse_vertex(size: i32, s: &str) -> Result<Coordinate> {
    let invalid = || GoError::InvalidVertex(s.to_string());
    let s = s.trim();
    let mut chars = s.chars();
    let col_char = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
    let col = COLUMN_LETTERS
        .iter()
        .position(|&b| b as char == col_char)
        .ok_or_else(invalid)? as i32;

    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let number: i32 = digits.parse().map_err(|_| invalid())?;

    let coord = Coordinate::new(size.saturating_sub(number), col);
    if number < 1 || !in_bounds(size, coord) {
        return Err(GoError::OutOfBounds { coord, size });
    }
    Ok(coord)
}

/// Convert a coordinate to vertex notation (e.g. `"D4"`).
pub fn format_vertex(size: i32, coord: Coordinate) -> Result<String> {
    if !in_bounds(size, coord) {
        return Err(GoError::OutOfBounds { coord, size });
    }
    if size > MAX_VERTEX_SIZE {
        return Err(GoError::InvalidArgument(format!(
            "board size {size} exceeds vertex notation limit {MAX_VERTEX_SIZE}"
        )));
    }
    let letter = COLUMN_LETTERS[coord.col as usize] as char;
    Ok(format!("{letter}{}", size - coord.row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds() {
        assert!(in_bounds(5, Coordinate::new(0, 0)));
        assert!(in_bounds(5, Coordinate::new(4, 4)));
        assert!(!in_bounds(5, Coordinate::new(5, 0)));
        assert!(!in_bounds(5, Coordinate::new(0, -1)));
        assert!(!in_bounds(0, Coordinate::new(0, 0)));
    }

    #[test]
    fn test_adjacent_order_center() {
        let n: Vec<_> = adjacent(5, Coordinate::new(2, 2)).collect();
        assert_eq!(
            n,
            vec![
                Coordinate::new(1, 2),
                Coordinate::new(2, 3),
                Coordinate::new(3, 2),
                Coordinate::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_adjacent_corner_and_edge() {
        let corner: Vec<_> = adjacent(5, Coordinate::new(0, 0)).collect();
        assert_eq!(corner, vec![Coordinate::new(0, 1), Coordinate::new(1, 0)]);

        let edge: Vec<_> = adjacent(5, Coordinate::new(4, 2)).collect();
        assert_eq!(edge.len(), 3);

        assert_eq!(adjacent(1, Coordinate::new(0, 0)).count(), 0);
    }

    #[test]
    fn test_all_positions_row_major() {
        let all: Vec<_> = all_positions(3).collect();
        assert_eq!(all.len(), 9);
        assert_eq!(all[0], Coordinate::new(0, 0));
        assert_eq!(all[1], Coordinate::new(0, 1));
        assert_eq!(all[3], Coordinate::new(1, 0));
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(all_positions(0).count(), 0);
    }

    #[test]
    fn test_parse_vertex_corners() {
        assert_eq!(parse_vertex(9, "A1").unwrap(), Coordinate::new(8, 0));
        assert_eq!(parse_vertex(9, "J9").unwrap(), Coordinate::new(0, 8));
        assert_eq!(parse_vertex(9, "a9").unwrap(), Coordinate::new(0, 0));
    }

    #[test]
    fn test_parse_vertex_skips_i() {
        assert!(matches!(parse_vertex(9, "I5"), Err(GoError::InvalidVertex(_))));
        assert_eq!(parse_vertex(9, "H5").unwrap().col, 7);
        assert_eq!(parse_vertex(9, "J5").unwrap().col, 8);
    }

    #[test]
    fn test_parse_vertex_rejects_garbage() {
        assert!(matches!(parse_vertex(9, ""), Err(GoError::InvalidVertex(_))));
        assert!(matches!(parse_vertex(9, "pass"), Err(GoError::InvalidVertex(_))));
        assert!(matches!(parse_vertex(9, "D"), Err(GoError::InvalidVertex(_))));
        assert!(matches!(parse_vertex(9, "K1"), Err(GoError::OutOfBounds { .. })));
        assert!(matches!(parse_vertex(9, "A10"), Err(GoError::OutOfBounds { .. })));
        assert!(matches!(parse_vertex(9, "A0"), Err(GoError::OutOfBounds { .. })));
    }

    #[test]
    fn test_parse_format_vertex_roundtrip() {
        for coord in all_positions(13) {
            let s = format_vertex(13, coord).unwrap();
            assert_eq!(parse_vertex(13, &s).unwrap(), coord, "failed for {s}");
        }
    }

    #[test]
    fn test_format_vertex_limits() {
        assert!(format_vertex(9, Coordinate::new(9, 0)).is_err());
        assert!(format_vertex(26, Coordinate::new(0, 0)).is_err());
        assert_eq!(format_vertex(19, Coordinate::new(3, 3)).unwrap(), "D16");
    }
}
