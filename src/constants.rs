//! Constants for board geometry, notation and the random playout driver.
//!
//! Board size is a runtime property of every [`Board`](crate::board::Board),
//! so nothing here fixes the grid dimensions; [`DEFAULT_SIZE`] only seeds the
//! CLI.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN) used by the CLI when `--size` is not given.
pub const DEFAULT_SIZE: i32 = 9;

/// Offsets to the orthogonal neighbors as `(row, col)` deltas.
/// Order: up, right, down, left. Traversals rely on this order being fixed.
pub const DELTA: [(i32, i32); 4] = [
    (-1, 0), // up (previous row)
    (0, 1),  // right (next column)
    (1, 0),  // down (next row)
    (0, -1), // left (previous column)
];

// =============================================================================
// Vertex Notation
// =============================================================================

/// Column letters used in vertex notation. `I` is skipped by Go convention.
pub const COLUMN_LETTERS: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Largest board size expressible in vertex notation.
pub const MAX_VERTEX_SIZE: i32 = COLUMN_LETTERS.len() as i32;

// =============================================================================
// Diagram Characters
// =============================================================================

/// Black stone in a board diagram.
pub const CHAR_BLACK: char = 'X';

/// White stone in a board diagram.
pub const CHAR_WHITE: char = 'O';

/// Empty intersection in a board diagram.
pub const CHAR_EMPTY: char = '.';

// =============================================================================
// Playout Parameters
// =============================================================================

/// Game length limit for random playouts, as a multiple of the board area
/// (captures let a game run longer than one stone per point).
pub const MAX_GAME_LEN_FACTOR: usize = 3;

/// Default seed for the demo playout.
pub const DEFAULT_SEED: u64 = 1;
