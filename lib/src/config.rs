//! World configuration.

use crate::{error::Error, rule::Rule, world::World};
use std::{
    fmt::{self, Debug, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default visible width.
pub(crate) const DEFAULT_WIDTH: i32 = 300;
/// Default number of generations.
pub(crate) const DEFAULT_HEIGHT: i32 = 150;
/// Bounds for both width and height.
pub(crate) const EXTENT_RANGE: std::ops::RangeInclusive<i32> = 100..=1000;

/// How generation 0 is constructed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Seed {
    /// A single live cell at x-coordinate 0.
    #[default]
    Center,
    /// Every position in the overscan range is independently live
    /// with probability 0.1.
    Random,
}

impl Seed {
    /// Parses a widget-style attribute value.
    ///
    /// Exactly `"random"` selects [`Seed::Random`];
    /// anything else falls back to [`Seed::Center`].
    pub fn from_attr(value: &str) -> Self {
        if value == "random" {
            Seed::Random
        } else {
            Seed::Center
        }
    }
}

impl FromStr for Seed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "center" => Ok(Seed::Center),
            "random" => Ok(Seed::Random),
            _ => Err(Error::ParseSeed(s.to_string())),
        }
    }
}

impl Display for Seed {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            Seed::Center => "center",
            Seed::Random => "random",
        };
        write!(f, "{}", s)
    }
}

/// World configuration.
///
/// The world will be generated from this configuration.
///
/// All setters clamp: width and height to `[100, 1000]`, the rule to
/// `[0, 255]`. The engine re-normalizes on construction, so a
/// configuration with hand-edited fields can never put the world in an
/// out-of-range state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// The visible width, in cells.
    ///
    /// Cell states are computed over the overscan range
    /// `[-width, 2 * width)`.
    pub width: i32,

    /// The number of generations to compute.
    pub height: i32,

    /// The rule of the cellular automaton.
    pub rule: Rule,

    /// How generation 0 is constructed.
    pub seed: Seed,

    /// Seed for the random source used by [`Seed::Random`].
    ///
    /// `None` draws from entropy, so two runs differ. Set it to make
    /// the `random` seed mode reproducible bit for bit.
    pub rng_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            rule: Rule::default(),
            seed: Seed::default(),
            rng_seed: None,
        }
    }
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(width: i32, height: i32) -> Self {
        Config::default().set_width(width).set_height(height)
    }

    /// Sets the visible width, clamped to `[100, 1000]`.
    #[must_use]
    pub fn set_width(mut self, width: i32) -> Self {
        self.width = width.clamp(*EXTENT_RANGE.start(), *EXTENT_RANGE.end());
        self
    }

    /// Sets the number of generations, clamped to `[100, 1000]`.
    #[must_use]
    pub fn set_height(mut self, height: i32) -> Self {
        self.height = height.clamp(*EXTENT_RANGE.start(), *EXTENT_RANGE.end());
        self
    }

    /// Sets the rule.
    #[must_use]
    pub fn set_rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }

    /// Sets the seed mode.
    #[must_use]
    pub fn set_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the seed of the random source.
    #[must_use]
    pub fn set_rng_seed(mut self, rng_seed: Option<u64>) -> Self {
        self.rng_seed = rng_seed;
        self
    }

    /// Builds a configuration from widget-style embedding attributes.
    ///
    /// Missing or non-numeric width, height and rule fall back to their
    /// defaults (300, 150 and 0); numeric values are clamped as with
    /// the setters. Any seed value other than `"random"` means
    /// [`Seed::Center`].
    pub fn from_attrs(
        width: Option<&str>,
        height: Option<&str>,
        rule: Option<&str>,
        seed: Option<&str>,
    ) -> Self {
        let mut config = Config::default();
        if let Some(width) = width.and_then(parse_number) {
            config = config.set_width(width);
        }
        if let Some(height) = height.and_then(parse_number) {
            config = config.set_height(height);
        }
        if let Some(rule) = rule {
            config = config.set_rule(rule.parse().unwrap_or_default());
        }
        if let Some(seed) = seed {
            config = config.set_seed(Seed::from_attr(seed));
        }
        config
    }

    /// Re-applies every clamp, for configurations whose fields were
    /// set directly instead of through the setters.
    pub(crate) fn normalized(&self) -> Self {
        self.clone().set_width(self.width).set_height(self.height)
    }

    /// Creates a new world from the configuration.
    pub fn world(&self) -> World {
        World::new(self)
    }
}

/// Lossy numeric attribute parsing: rounds to the nearest integer,
/// rejects anything non-numeric.
fn parse_number(s: &str) -> Option<i32> {
    let number: f64 = s.trim().parse().ok()?;
    if number.is_nan() {
        return None;
    }
    Some(number.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_from_attr_is_lossy() {
        assert_eq!(Seed::from_attr("random"), Seed::Random);
        assert_eq!(Seed::from_attr("center"), Seed::Center);
        assert_eq!(Seed::from_attr("RANDOM"), Seed::Center);
        assert_eq!(Seed::from_attr(""), Seed::Center);
    }

    #[test]
    fn from_attrs_defaults_and_clamps() {
        let config = Config::from_attrs(None, None, None, None);
        assert_eq!(config, Config::default());

        let config = Config::from_attrs(Some("5"), Some("5000"), Some("abc"), Some("bogus"));
        assert_eq!(config.width, 100);
        assert_eq!(config.height, 1000);
        assert_eq!(config.rule.number(), 0);
        assert_eq!(config.seed, Seed::Center);

        let config = Config::from_attrs(Some("x"), Some("y"), Some("999"), Some("random"));
        assert_eq!(config.width, 300);
        assert_eq!(config.height, 150);
        assert_eq!(config.rule.number(), 255);
        assert_eq!(config.seed, Seed::Random);
    }

    #[test]
    fn normalized_repairs_direct_writes() {
        let mut config = Config::default();
        config.width = 7;
        config.height = 9999;
        let config = config.normalized();
        assert_eq!(config.width, 100);
        assert_eq!(config.height, 1000);
    }
}
