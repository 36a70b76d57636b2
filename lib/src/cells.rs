//! Cells and generations of the automaton.

use std::ops::{Not, Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible states of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct State(pub u8);

/// The Dead state.
pub const DEAD: State = State(0);
/// The Alive state.
pub const ALIVE: State = State(1);

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            ALIVE => DEAD,
            _ => ALIVE,
        }
    }
}

/// The coordinates of a cell.
///
/// `(x-coordinate, generation)`. The generation is 0-indexed;
/// x-coordinate 0 is the cell the `center` seed starts from.
pub type Coord = (i32, i32);

/// The live set of a single generation.
///
/// Cell states are stored for the overscan range `[-width, 2 * width)`,
/// three times the visible width, as a direct-indexed array, so that
/// membership tests during the evolution sweep are O(1). Every position
/// outside the overscan range reads as [`DEAD`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    /// The visible width. The overscan range is three times as wide.
    width: i32,

    /// Cell states over the overscan range.
    ///
    /// The cell at x-coordinate `x` lives at index `x + width`.
    cells: Vec<bool>,
}

impl Generation {
    /// Creates an all-dead generation for the given visible width.
    pub fn new(width: i32) -> Self {
        Self {
            width,
            cells: vec![false; 3 * width.max(0) as usize],
        }
    }

    /// The visible width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// The overscan range `[-width, 2 * width)`.
    #[inline]
    pub fn range(&self) -> Range<i32> {
        -self.width..2 * self.width
    }

    #[inline]
    fn index(&self, x: i32) -> Option<usize> {
        if self.range().contains(&x) {
            Some((x + self.width) as usize)
        } else {
            None
        }
    }

    /// The state of the cell at `x`.
    ///
    /// Positions outside the overscan range are [`DEAD`].
    #[inline]
    pub fn get(&self, x: i32) -> State {
        match self.index(x) {
            Some(i) if self.cells[i] => ALIVE,
            _ => DEAD,
        }
    }

    /// Sets the state of the cell at `x`.
    ///
    /// Positions outside the overscan range are ignored.
    #[inline]
    pub fn set(&mut self, x: i32, state: State) {
        if let Some(i) = self.index(x) {
            self.cells[i] = state == ALIVE;
        }
    }

    /// The 3-bit neighborhood pattern of the cell at `x`.
    ///
    /// `left * 4 + center * 2 + right`, with absent neighbors dead.
    #[inline]
    pub fn neighborhood(&self, x: i32) -> u8 {
        self.get(x - 1).0 << 2 | self.get(x).0 << 1 | self.get(x + 1).0
    }

    /// Iterates over the x-coordinates of the live cells,
    /// in increasing order.
    pub fn live_cells(&self) -> impl Iterator<Item = i32> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &alive)| alive)
            .map(move |(i, _)| i as i32 - width)
    }

    /// The number of live cells in the overscan range.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overscan_bounds() {
        let mut generation = Generation::new(100);
        generation.set(-100, ALIVE);
        generation.set(199, ALIVE);
        // Outside the overscan range: ignored on write, dead on read.
        generation.set(-101, ALIVE);
        generation.set(200, ALIVE);
        assert_eq!(generation.get(-100), ALIVE);
        assert_eq!(generation.get(199), ALIVE);
        assert_eq!(generation.get(-101), DEAD);
        assert_eq!(generation.get(200), DEAD);
        assert_eq!(generation.live_count(), 2);
    }

    #[test]
    fn neighborhood_patterns() {
        let mut generation = Generation::new(100);
        generation.set(-1, ALIVE);
        generation.set(1, ALIVE);
        assert_eq!(generation.neighborhood(0), 0b101);
        assert_eq!(generation.neighborhood(-1), 0b010);
        assert_eq!(generation.neighborhood(-2), 0b001);
        assert_eq!(generation.neighborhood(2), 0b100);
        assert_eq!(generation.neighborhood(50), 0b000);
    }

    #[test]
    fn live_cells_in_order() {
        let mut generation = Generation::new(100);
        for x in [7, -3, 0] {
            generation.set(x, ALIVE);
        }
        let live: Vec<_> = generation.live_cells().collect();
        assert_eq!(live, vec![-3, 0, 7]);
    }
}
