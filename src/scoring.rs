//! Area scoring.
//!
//! Every intersection counts at most once: a stone for its own color, an
//! empty point for the single color that borders its whole empty region, or
//! for nobody when the region touches both colors or no stones at all.
//! Komi is not applied.

use std::collections::HashSet;
use std::fmt;
use std::ops::Index;

use crate::board::{Board, Color};
use crate::geometry::all_positions;
use crate::group::find_group;

/// Area totals for Black and White.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    /// Points credited to either side. Never exceeds the board area.
    pub fn total(&self) -> usize {
        self.black + self.white
    }

    /// Black minus White.
    pub fn margin(&self) -> i64 {
        self.black as i64 - self.white as i64
    }

    fn credit(&mut self, color: Color, points: usize) {
        match color {
            Color::Black => self.black += points,
            Color::White => self.white += points,
            Color::Empty => {}
        }
    }
}

/// Score lookup by color. Empty always reads 0.
impl Index<Color> for Score {
    type Output = usize;

    fn index(&self, color: Color) -> &usize {
        match color {
            Color::Black => &self.black,
            Color::White => &self.white,
            Color::Empty => &0,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = match self.margin() {
            0 => "jigo".to_string(),
            m if m > 0 => format!("B+{m}"),
            m => format!("W+{}", -m),
        };
        write!(f, "black {} white {} ({result})", self.black, self.white)
    }
}

/// Compute the area score of `board`.
pub fn area_score(board: &Board) -> Score {
    let mut score = Score::default();
    let mut visited = HashSet::new();

    for pt in all_positions(board.size()) {
        if visited.contains(&pt) {
            continue;
        }
        let group = find_group(board, pt);
        if group.color.is_stone() {
            score.credit(group.color, group.len());
        } else {
            let mut owners = group.bordering_colors().into_iter();
            if let (Some(owner), None) = (owners.next(), owners.next()) {
                score.credit(owner, group.len());
            }
        }
        visited.extend(group.stones);
    }
    score
}

impl Board {
    /// Method form of [`area_score`].
    pub fn area_score(&self) -> Score {
        area_score(self)
    }
}
