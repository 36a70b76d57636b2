//! __automata-lib__ is an engine for
//! [elementary cellular automata](https://conwaylife.com/wiki/OCA:Elementary_cellular_automata)
//! in Wolfram numbering.
//!
//! Given a rule number in `[0, 255]`, a seed mode and a bounded extent,
//! it deterministically evolves the automaton one generation at a time,
//! keeping only the current row's live set in memory. Cell states are
//! computed over an overscan margin of three times the visible width,
//! so that influence from outside the visible window propagates inward
//! correctly instead of being read as dead.
//!
//! The engine itself does no rendering. A front end builds a [`Config`],
//! calls [`Config::world`], and pulls live cells row by row:
//!
//! ```
//! use automata_lib::{Config, Rule, Status};
//!
//! let mut world = Config::default().set_rule(Rule::new(90)).world();
//! loop {
//!     let _live: Vec<i32> = world.visible_cells().collect();
//!     if world.run(Some(1)) == Status::Done {
//!         break;
//!     }
//! }
//! ```

mod cells;
mod config;
mod error;
mod rule;
mod world;

pub use cells::{Coord, Generation, State, ALIVE, DEAD};
pub use config::{Config, Seed};
pub use error::Error;
pub use rule::Rule;
pub use world::{Status, World};
