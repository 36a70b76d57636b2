//! The world.

use crate::{
    cells::{Coord, Generation, State, ALIVE},
    config::{Config, Seed},
    rule::Rule,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of a call to [`World::run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// More generations remain; the row budget was exhausted.
    Evolving,
    /// The last generation has been reached.
    Done,
}

/// The world: a configuration plus the current generation.
///
/// Evolution streams row by row. Only the current generation's live set
/// is retained, since each generation depends only on its immediate
/// predecessor; a front end reads each row as it is produced.
///
/// Every mutation (a new rule, a new seed mode, a whole new
/// configuration) re-seeds generation 0 and invalidates everything
/// computed so far. A mutation builds fresh generation state, so a
/// sweep abandoned half-way can never leak rows into the next
/// configuration's output.
#[derive(Clone, Debug)]
pub struct World {
    /// World configuration.
    config: Config,

    /// The current generation's live set.
    current: Generation,

    /// The index of the current generation, in `[0, height)`.
    generation: i32,
}

impl World {
    /// Creates a new world from the configuration
    /// and seeds generation 0.
    pub fn new(config: &Config) -> Self {
        let config = config.normalized();
        let current = Generation::new(config.width);
        let mut world = Self {
            config,
            current,
            generation: 0,
        };
        world.reset();
        world
    }

    /// The effective (post-clamp) configuration.
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The visible width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.config.width
    }

    /// The number of generations.
    #[inline]
    pub fn height(&self) -> i32 {
        self.config.height
    }

    /// The current rule.
    #[inline]
    pub fn rule(&self) -> Rule {
        self.config.rule
    }

    /// The current seed mode.
    #[inline]
    pub fn seed(&self) -> Seed {
        self.config.seed
    }

    /// The index of the current generation.
    #[inline]
    pub fn generation(&self) -> i32 {
        self.generation
    }

    /// Rebuilds generation 0 from the current configuration.
    ///
    /// For [`Seed::Center`] this is idempotent. For [`Seed::Random`]
    /// each call draws a fresh Bernoulli(0.1) trial per overscan
    /// position; two calls only agree when
    /// [`rng_seed`](Config::rng_seed) is set.
    pub fn reset(&mut self) {
        let mut seed = Generation::new(self.config.width);
        match self.config.seed {
            Seed::Center => seed.set(0, ALIVE),
            Seed::Random => {
                let mut rng = match self.config.rng_seed {
                    Some(rng_seed) => StdRng::seed_from_u64(rng_seed),
                    None => StdRng::from_entropy(),
                };
                for x in seed.range() {
                    if rng.gen_bool(0.1) {
                        seed.set(x, ALIVE);
                    }
                }
            }
        }
        self.current = seed;
        self.generation = 0;
    }

    /// Advances the world by one generation.
    ///
    /// Sweeps the whole overscan range `[-width, 2 * width)`: for each
    /// position, the 3-bit neighborhood pattern of the previous
    /// generation indexes the rule's transition table. The previous
    /// generation is then discarded.
    pub fn step(&mut self) {
        let mut next = Generation::new(self.config.width);
        for x in self.current.range() {
            let pattern = self.current.neighborhood(x);
            if self.config.rule.lookup(pattern) == ALIVE {
                next.set(x, ALIVE);
            }
        }
        self.current = next;
        self.generation += 1;
    }

    /// Evolves until the last generation, or until `max_rows` rows
    /// have been computed.
    ///
    /// `None` runs to completion. A bounded budget gives the caller a
    /// cancellation point between rows: a front end can interleave
    /// rendering, or abandon the world entirely when the user changes
    /// the configuration mid-sweep.
    pub fn run(&mut self, max_rows: Option<u32>) -> Status {
        let mut budget = max_rows;
        while self.generation < self.config.height - 1 {
            if let Some(rows) = budget.as_mut() {
                if *rows == 0 {
                    return Status::Evolving;
                }
                *rows -= 1;
            }
            self.step();
        }
        Status::Done
    }

    /// The state of the cell at `x` in the current generation.
    ///
    /// Positions outside the overscan range are dead.
    #[inline]
    pub fn get_cell_state(&self, x: i32) -> State {
        self.current.get(x)
    }

    /// The state of the cell at `coord`, if its generation is the one
    /// currently materialized.
    ///
    /// Only one row is retained during the sweep, so queries into any
    /// other generation return `None`.
    pub fn get(&self, coord: Coord) -> Option<State> {
        let (x, generation) = coord;
        (generation == self.generation).then(|| self.current.get(x))
    }

    /// The live x-coordinates of the current generation over the whole
    /// overscan range, in increasing order.
    pub fn live_cells(&self) -> impl Iterator<Item = i32> + '_ {
        self.current.live_cells()
    }

    /// The live x-coordinates of the current generation within the
    /// visible window `[0, width)`, in increasing order.
    ///
    /// Any offset needed to center x-coordinate 0 is up to the
    /// renderer.
    pub fn visible_cells(&self) -> impl Iterator<Item = i32> + '_ {
        let width = self.config.width;
        self.current.live_cells().filter(move |&x| (0..width).contains(&x))
    }

    /// The number of live cells in the current generation,
    /// over the whole overscan range.
    pub fn live_count(&self) -> usize {
        self.current.live_count()
    }

    /// Renders the visible window of the current generation,
    /// with `.` for dead cells and `o` for live ones.
    pub fn display_row(&self) -> String {
        let mut row = String::with_capacity(self.config.width as usize);
        for x in 0..self.config.width {
            row.push(if self.get_cell_state(x) == ALIVE { 'o' } else { '.' });
        }
        row
    }

    /// Replaces the whole configuration and re-seeds.
    pub fn configure(&mut self, config: &Config) {
        self.config = config.normalized();
        self.reset();
    }

    /// Sets the rule and re-seeds.
    pub fn set_rule(&mut self, rule: Rule) {
        self.config.rule = rule;
        self.reset();
    }

    /// Steps to the previous rule, saturating at 0, and re-seeds.
    pub fn previous_rule(&mut self) {
        self.set_rule(self.config.rule.previous());
    }

    /// Steps to the next rule, saturating at 255, and re-seeds.
    pub fn next_rule(&mut self) {
        self.set_rule(self.config.rule.next());
    }

    /// Sets the seed mode and re-seeds.
    pub fn set_seed(&mut self, seed: Seed) {
        self.config.seed = seed;
        self.reset();
    }
}
