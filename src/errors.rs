// Copyright 2025 Cowboy AI, LLC.

//! Error types for container access

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which branch of an [`Either`](crate::Either) a value lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Side {
    /// Failure branch
    Left,
    /// Success branch
    Right,
}

impl Side {
    /// The opposite branch.
    pub fn flip(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("Left"),
            Side::Right => f.write_str("Right"),
        }
    }
}

/// Errors raised when reading a container the wrong way.
///
/// These are the only failures the library reports. Every transformation
/// (`map`, `bind`, `filter`, ...) is total and simply propagates absence or
/// failure instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FpError {
    /// The value of a `Nothing` was requested
    #[error("Empty access: called get on Nothing")]
    EmptyAccess,

    /// One side of an `Either` was requested while the other is populated
    #[error("Wrong side access: requested {requested} on a {actual} value")]
    WrongSideAccess {
        /// Side the caller asked for
        requested: Side,
        /// Side actually populated
        actual: Side,
    },
}

/// Result type for checked container access
pub type FpResult<T> = Result<T, FpError>;

impl FpError {
    /// Build a wrong-side error for a request against the opposite branch.
    pub fn wrong_side(requested: Side) -> Self {
        FpError::WrongSideAccess {
            requested,
            actual: requested.flip(),
        }
    }

    /// Check if this is an empty access error
    pub fn is_empty_access(&self) -> bool {
        matches!(self, FpError::EmptyAccess)
    }

    /// Check if this is a wrong side access error
    pub fn is_wrong_side_access(&self) -> bool {
        matches!(self, FpError::WrongSideAccess { .. })
    }
}
