//! Elementary cellular automaton rules.
//!
//! A rule is identified by its
//! [Wolfram number](https://conwaylife.com/wiki/OCA:Elementary_cellular_automata),
//! an integer in `[0, 255]` whose binary representation is the full
//! transition table of the automaton.

use crate::{
    cells::{State, ALIVE, DEAD},
    error::Error,
};
use std::{
    fmt::{self, Debug, Display, Formatter},
    str::FromStr,
};

/// An elementary cellular automaton rule.
///
/// Bit `p` of the rule number gives the next state of a cell whose
/// neighborhood pattern is `p`, where the pattern is the 3-bit value
/// `left * 4 + center * 2 + right` of the previous generation.
/// Pattern `000` is the least significant bit, `111` the most.
///
/// The 8-entry transition table is materialized once, when the rule is
/// created, so that the evolution sweep is a plain array lookup.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8", into = "u8"))]
pub struct Rule {
    /// The rule number.
    number: u8,

    /// The transition table, indexed by neighborhood pattern.
    table: [State; 8],
}

impl Rule {
    /// Creates a rule from its Wolfram number.
    pub fn new(number: u8) -> Self {
        let mut table = [DEAD; 8];
        for (pattern, state) in table.iter_mut().enumerate() {
            if number >> pattern & 1 == 1 {
                *state = ALIVE;
            }
        }
        Self { number, table }
    }

    /// Creates a rule from an unclamped number,
    /// saturating into `[0, 255]`.
    pub fn clamped(number: i64) -> Self {
        Self::new(number.clamp(0, 255) as u8)
    }

    /// The Wolfram number of the rule.
    #[inline]
    pub fn number(self) -> u8 {
        self.number
    }

    /// The next state of a cell with the given neighborhood pattern.
    ///
    /// Only the low 3 bits of the pattern are used.
    #[inline]
    pub fn lookup(self, pattern: u8) -> State {
        self.table[(pattern & 7) as usize]
    }

    /// The rule with the previous number, saturating at 0.
    #[must_use]
    pub fn previous(self) -> Self {
        Self::new(self.number.saturating_sub(1))
    }

    /// The rule with the next number, saturating at 255.
    #[must_use]
    pub fn next(self) -> Self {
        Self::new(self.number.saturating_add(1))
    }
}

/// Rule 0: everything dies.
impl Default for Rule {
    fn default() -> Self {
        Self::new(0)
    }
}

impl From<u8> for Rule {
    fn from(number: u8) -> Self {
        Self::new(number)
    }
}

impl From<Rule> for u8 {
    fn from(rule: Rule) -> Self {
        rule.number
    }
}

/// Parses a rule number.
///
/// Any numeric input is accepted: it is rounded to the nearest integer
/// and then clamped to `[0, 255]`, the same normalization the
/// configuration setters apply. Non-numeric input is an error, which
/// callers at lossy boundaries default to rule 0.
impl FromStr for Rule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: f64 = s
            .trim()
            .parse()
            .map_err(|_| Error::ParseRule(s.to_string()))?;
        if number.is_nan() {
            return Err(Error::ParseRule(s.to_string()));
        }
        // `as` saturates, so infinities clamp like any other overflow.
        Ok(Self::clamped(number.round() as i64))
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.number)
    }
}

impl Debug for Rule {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.debug_tuple("Rule").field(&self.number).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_rule_bits() {
        for number in 0..=255 {
            let rule = Rule::new(number);
            for pattern in 0..8 {
                let expected = if number >> pattern & 1 == 1 { ALIVE } else { DEAD };
                assert_eq!(rule.lookup(pattern), expected);
            }
        }
    }

    #[test]
    fn stepping_saturates() {
        assert_eq!(Rule::new(0).previous().number(), 0);
        assert_eq!(Rule::new(255).next().number(), 255);
        assert_eq!(Rule::new(90).next().number(), 91);
        assert_eq!(Rule::new(90).previous().number(), 89);
    }

    #[test]
    fn parse_rounds_and_clamps() {
        assert_eq!("90".parse::<Rule>().unwrap().number(), 90);
        assert_eq!(" 30 ".parse::<Rule>().unwrap().number(), 30);
        assert_eq!("89.6".parse::<Rule>().unwrap().number(), 90);
        assert_eq!("-10".parse::<Rule>().unwrap().number(), 0);
        assert_eq!("999".parse::<Rule>().unwrap().number(), 255);
        assert!("abc".parse::<Rule>().is_err());
        assert!("".parse::<Rule>().is_err());
        assert_eq!("abc".parse::<Rule>().unwrap_or_default().number(), 0);
    }
}
