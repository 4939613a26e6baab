//! Random self-play.
//!
//! A playout alternates colors from a starting board, each side picking a
//! uniformly random move among the empty points that are legal, do not fill
//! one of its own single-point eyes and do not self-capture. A side with no
//! such move passes; two passes in a row or the length limit end the game.
//!
//! Turn order lives here, not in [`rules`](crate::rules): the core itself
//! only judges one move at a time.

use fastrand::Rng;

use crate::board::{Board, Color};
use crate::constants::MAX_GAME_LEN_FACTOR;
use crate::geometry::{Coordinate, adjacent, all_positions};
use crate::rules::{Placement, play_detailed};
use crate::scoring::{Score, area_score};

/// A finished playout.
#[derive(Clone, Debug)]
pub struct Playout {
    /// Moves in order, `None` for a pass.
    pub moves: Vec<(Color, Option<Coordinate>)>,
    /// Final position.
    pub board: Board,
}

impl Playout {
    pub fn score(&self) -> Score {
        area_score(&self.board)
    }
}

/// Check if an empty point is "eyeish": every on-board neighbor is a stone of
/// one color. Returns that color. May be a false eye.
pub fn is_eyeish(board: &Board, pt: Coordinate) -> Option<Color> {
    if board.get_stone(pt) != Color::Empty {
        return None;
    }
    let mut eyecolor = None;
    for n in adjacent(board.size(), pt) {
        match (board.get_stone(n), eyecolor) {
            (Color::Empty, _) => return None,
            (c, None) => eyecolor = Some(c),
            (c, Some(e)) if c != e => return None,
            _ => {}
        }
    }
    eyecolor
}

/// Default length limit for a board of `size`.
pub fn max_game_len(size: i32) -> usize {
    let side = size.max(0) as usize;
    side * side * MAX_GAME_LEN_FACTOR
}

/// Play random moves from `board`, `to_move` first, for at most `max_moves`
/// moves (passes included).
pub fn random_playout(board: &Board, to_move: Color, rng: &mut Rng, max_moves: usize) -> Playout {
    let mut board = board.clone();
    let mut color = to_move;
    let mut moves = Vec::new();
    let mut passes = 0;

    while passes < 2 && moves.len() < max_moves {
        match choose_random_move(&board, color, rng) {
            Some((pt, placement)) => {
                board = placement.board;
                moves.push((color, Some(pt)));
                passes = 0;
            }
            None => {
                moves.push((color, None));
                passes += 1;
            }
        }
        color = color.opponent();
    }

    log::debug!(
        "playout ended after {} moves ({} passes at end)",
        moves.len(),
        passes
    );
    Playout { moves, board }
}

/// Choose a random acceptable move for `color`, or `None` to pass.
fn choose_random_move(
    board: &Board,
    color: Color,
    rng: &mut Rng,
) -> Option<(Coordinate, Placement)> {
    if board.is_full() {
        return None;
    }
    let mut candidates: Vec<Coordinate> = all_positions(board.size())
        .filter(|&pt| board.get_stone(pt) == Color::Empty && is_eyeish(board, pt) != Some(color))
        .collect();

    // Fisher-Yates, stopping at the first move that does not self-capture.
    let n = candidates.len();
    for i in 0..n {
        let j = rng.usize(i..n);
        candidates.swap(i, j);
        let pt = candidates[i];
        match play_detailed(board, color, pt) {
            Ok(placement) if !placement.self_capture => return Some((pt, placement)),
            _ => continue,
        }
    }
    None
}
