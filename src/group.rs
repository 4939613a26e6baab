//! Connected-group discovery.
//!
//! [`find_group`] flood-fills from a seed over every intersection sharing the
//! seed's color. The same traversal serves stone groups (capture checks) and
//! empty regions (territory), since it only ever compares against whatever
//! occupies the seed.

use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

use crate::board::{Board, Color};
use crate::geometry::{Coordinate, adjacent, in_bounds};

/// A maximal 4-connected component of one color, plus what borders it.
///
/// Groups are query results: compute them against the board you care about
/// and drop them afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    /// Color of the seed, shared by every member.
    pub color: Color,
    /// Members of the component.
    pub stones: BTreeSet<Coordinate>,
    /// Every distinct neighboring coordinate outside the component, with its color.
    pub surrounding: BTreeMap<Coordinate, Color>,
    /// Number of distinct Empty coordinates in `surrounding`.
    pub liberties: usize,
}

impl Group {
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.stones.contains(&coord)
    }

    /// Distinct stone colors bordering the component.
    pub fn bordering_colors(&self) -> BTreeSet<Color> {
        self.surrounding
            .values()
            .copied()
            .filter(|c| c.is_stone())
            .collect()
    }
}

/// Breadth-first search from `seed` for the group containing it.
///
/// An Empty seed yields the maximal empty region; its `surrounding` then
/// holds only stones and `liberties` is 0. An off-board seed yields an
/// empty group.
pub fn find_group(board: &Board, seed: Coordinate) -> Group {
    let size = board.size();
    let color = board.get_stone(seed);
    if !in_bounds(size, seed) {
        return Group {
            color,
            stones: BTreeSet::new(),
            surrounding: BTreeMap::new(),
            liberties: 0,
        };
    }

    let mut visited = HashSet::new();
    let mut stones = BTreeSet::new();
    let mut surrounding = BTreeMap::new();
    let mut queue = VecDeque::from([seed]);

    while let Some(pt) = queue.pop_front() {
        if !visited.insert(pt) {
            continue;
        }
        stones.insert(pt);

        for n in adjacent(size, pt) {
            let c = board.get_stone(n);
            if c == color {
                queue.push_back(n);
            } else {
                surrounding.insert(n, c);
            }
        }
    }

    let liberties = surrounding.values().filter(|&&c| c == Color::Empty).count();
    Group {
        color,
        stones,
        surrounding,
        liberties,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(diagram: &str) -> Board {
        diagram.parse().unwrap()
    }

    #[test]
    fn test_single_stone_liberties() {
        let b = board(".../.X./...");
        let g = find_group(&b, Coordinate::new(1, 1));
        assert_eq!(g.color, Color::Black);
        assert_eq!(g.len(), 1);
        assert_eq!(g.liberties, 4);
        assert!(g.bordering_colors().is_empty());
    }

    #[test]
    fn test_corner_stone_liberties() {
        let b = board("X../.../...");
        let g = find_group(&b, Coordinate::new(0, 0));
        assert_eq!(g.liberties, 2);
    }

    #[test]
    fn test_shared_liberty_counted_once() {
        let b = board("XX./X../...");
        let g = find_group(&b, Coordinate::new(0, 0));
        assert_eq!(g.len(), 3);
        // (0,2), (1,1), (2,0): (1,1) touches two members but counts once.
        assert_eq!(g.liberties, 3);
    }

    #[test]
    fn test_group_with_opponent_neighbors() {
        let b = board(".O./OXO/.O.");
        let g = find_group(&b, Coordinate::new(1, 1));
        assert_eq!(g.liberties, 0);
        assert_eq!(g.bordering_colors(), BTreeSet::from([Color::White]));
        assert_eq!(g.surrounding.len(), 4);
    }

    #[test]
    fn test_empty_region_group() {
        let b = board("..X/..X/XXX");
        let g = find_group(&b, Coordinate::new(0, 0));
        assert_eq!(g.color, Color::Empty);
        assert_eq!(g.len(), 4);
        assert_eq!(g.liberties, 0);
        assert!(g.surrounding.values().all(|&c| c == Color::Black));
        assert_eq!(g.bordering_colors(), BTreeSet::from([Color::Black]));
    }

    #[test]
    fn test_off_board_seed_is_empty_group() {
        let b = Board::new(3).unwrap();
        for seed in [Coordinate::new(-1, 0), Coordinate::new(0, 3), Coordinate::new(3, 3)] {
            let g = find_group(&b, seed);
            assert!(g.is_empty(), "seed {seed}");
            assert!(g.surrounding.is_empty());
            assert_eq!(g.liberties, 0);
        }
    }

    #[test]
    fn test_empty_board_is_one_region() {
        let b = Board::new(4).unwrap();
        let g = find_group(&b, Coordinate::new(2, 1));
        assert_eq!(g.len(), 16);
        assert!(g.surrounding.is_empty());
    }

    #[test]
    fn test_large_chain() {
        let b = board("XXXX/X..X/XXXX/....");
        let g = find_group(&b, Coordinate::new(2, 3));
        assert_eq!(g.len(), 10);
        assert!(g.contains(Coordinate::new(1, 0)));
        assert!(!g.contains(Coordinate::new(1, 1)));
        // Inner eye (2 points) plus the bottom row (4 points).
        assert_eq!(g.liberties, 6);
    }
}
