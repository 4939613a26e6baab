//! Goban: a rules core for the game of Go.
//!
//! This crate models a square board of intersections, enforces legal stone
//! placement, resolves captures and computes area scores. Boards are
//! immutable values: playing a move returns a new [`Board`] and leaves the
//! old one intact, so callers can keep any history they like.
//!
//! ## Modules
//!
//! - [`constants`] - Neighbor offsets, notation and playout parameters
//! - [`geometry`] - Coordinates, bounds and adjacency
//! - [`board`] - Immutable board state and text diagrams
//! - [`group`] - Connected-group discovery (liberties and borders)
//! - [`rules`] - Move execution with captures and self-capture
//! - [`scoring`] - Area scoring
//! - [`playout`] - Random self-play built on the rules core
//! - [`error`] - Error taxonomy
//!
//! ## Example
//!
//! ```
//! use goban::{Board, Color, Coordinate};
//!
//! let board = Board::new(5)?;
//! let board = board.play(Color::Black, Coordinate::new(2, 2))?;
//! let board = board.play(Color::White, Coordinate::new(1, 2))?;
//!
//! let score = board.area_score();
//! assert_eq!(score.black + score.white, 2);
//! # Ok::<(), goban::GoError>(())
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod group;
pub mod playout;
pub mod rules;
pub mod scoring;

pub use board::{Board, Color};
pub use error::{GoError, Result};
pub use geometry::{Coordinate, adjacent, all_positions, in_bounds};
pub use group::{Group, find_group};
pub use rules::{Placement, play, play_detailed};
pub use scoring::{Score, area_score};
