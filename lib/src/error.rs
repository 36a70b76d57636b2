//! All kinds of errors in this crate.
//!
//! The engine itself is total: invalid numeric inputs are normalized by
//! clamping, so errors only arise when parsing free-form text.

use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Invalid rule number: {0:?}.
    ParseRule(String),
    /// Invalid seed mode: {0:?}.
    ParseSeed(String),
}
