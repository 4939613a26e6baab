//! Move execution: placement, capture resolution and self-capture.
//!
//! [`play`] is a pure state transition. It checks that the point is on the
//! board and empty, places the stone, removes every adjacent opposing group
//! left without liberties and returns the resulting [`Board`]. If nothing
//! was captured and the placed stone's own group has no liberties, that
//! group is removed instead: self-capture is legal here and not rejected.
//!
//! Turn order, ko and positional repetition are the caller's business.

use std::collections::BTreeSet;

use log::{debug, trace};

use crate::board::{Board, Color};
use crate::error::{GoError, Result};
use crate::geometry::{Coordinate, adjacent, in_bounds};
use crate::group::find_group;

/// Outcome of a successful play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Board after placement and removals.
    pub board: Board,
    /// Every coordinate emptied by the move, in row-major order.
    pub captured: Vec<Coordinate>,
    /// True when the removed group was the mover's own.
    pub self_capture: bool,
}

/// Place `color` at `coord` and return the resulting board.
///
/// # Errors
/// - [`GoError::InvalidArgument`] if `color` is Empty
/// - [`GoError::OutOfBounds`] if `coord` is off the board
/// - [`GoError::OccupiedIntersection`] if `coord` already holds a stone
pub fn play(board: &Board, color: Color, coord: Coordinate) -> Result<Board> {
    play_detailed(board, color, coord).map(|p| p.board)
}

/// Like [`play`], but also reports which stones were removed.
pub fn play_detailed(board: &Board, color: Color, coord: Coordinate) -> Result<Placement> {
    let size = board.size();
    if !in_bounds(size, coord) {
        return Err(GoError::OutOfBounds { coord, size });
    }
    if !color.is_stone() {
        return Err(GoError::InvalidArgument(
            "only Black or White stones can be played".to_string(),
        ));
    }
    if board.get_stone(coord) != Color::Empty {
        return Err(GoError::OccupiedIntersection(coord));
    }

    let candidate = board.with_changes([(coord, color)]);

    // Opposing groups are resolved independently, so a move touching
    // several colors captures each of them on its own liberties.
    let mut captured = BTreeSet::new();
    for n in adjacent(size, coord) {
        let c = candidate.get_stone(n);
        if c == color || !c.is_stone() || captured.contains(&n) {
            continue;
        }
        let group = find_group(&candidate, n);
        if group.liberties == 0 {
            trace!("{} group of {} at {n} loses its last liberty", group.color, group.len());
            captured.extend(group.stones);
        }
    }

    let mut self_capture = false;
    if captured.is_empty() {
        let own = find_group(&candidate, coord);
        if own.liberties == 0 {
            debug!("{color} at {coord} removes its own group of {}", own.len());
            captured = own.stones;
            self_capture = true;
        }
    } else {
        debug!("{color} at {coord} captures {} stone(s)", captured.len());
    }

    let board = candidate.with_changes(captured.iter().map(|&c| (c, Color::Empty)));
    Ok(Placement {
        board,
        captured: captured.into_iter().collect(),
        self_capture,
    })
}

impl Board {
    /// Method form of [`play`].
    pub fn play(&self, color: Color, coord: Coordinate) -> Result<Board> {
        play(self, color, coord)
    }
}
