// Copyright (c) 2025 - Cowboy AI, LLC.

//! Maybe - an optional value as a functor and monad
//!
//! `Maybe<T>` is either `Just(value)` or `Nothing`. Transformations never
//! inspect or mutate in place; each one consumes the container and returns a
//! new one, carrying `Nothing` through unchanged.
//!
//! # Functor Laws
//!
//! 1. Identity: `m.map(id) ≡ m`
//! 2. Composition: `m.map(f).map(g) ≡ m.map(|x| g(f(x)))`
//!
//! # Monad Laws
//!
//! 1. Left Identity: `just(a).flat_map(f) ≡ f(a)`
//! 2. Right Identity: `m.flat_map(just) ≡ m`
//! 3. Associativity: `m.flat_map(f).flat_map(g) ≡ m.flat_map(|x| f(x).flat_map(g))`

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::{FpError, FpResult};

/// A value that is either present (`Just`) or absent (`Nothing`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "value")]
pub enum Maybe<T> {
    /// A present value
    Just(T),
    /// No value
    Nothing,
}

impl<T> Maybe<T> {
    /// return/pure: Lift a value into the container
    ///
    /// # Example
    /// ```rust
    /// use cim_fp::Maybe;
    ///
    /// let m = Maybe::just(42);
    /// assert!(m.is_just());
    /// ```
    pub fn just(value: T) -> Maybe<T> {
        Maybe::Just(value)
    }

    /// The empty container
    pub fn nothing() -> Maybe<T> {
        Maybe::Nothing
    }

    /// True when a value is present.
    pub fn is_just(&self) -> bool {
        matches!(self, Maybe::Just(_))
    }

    /// True when no value is present.
    pub fn is_nothing(&self) -> bool {
        matches!(self, Maybe::Nothing)
    }

    /// Read the contained value.
    ///
    /// Returns [`FpError::EmptyAccess`] for `Nothing`. Check with
    /// [`is_just`](Self::is_just) first or use [`get_or_else`](Self::get_or_else)
    /// when absence is expected.
    ///
    /// # Example
    /// ```rust
    /// use cim_fp::{FpError, Maybe};
    ///
    /// assert_eq!(Maybe::just(5).get(), Ok(5));
    /// assert_eq!(Maybe::<i32>::nothing().get(), Err(FpError::EmptyAccess));
    /// ```
    pub fn get(self) -> FpResult<T> {
        match self {
            Maybe::Just(value) => Ok(value),
            Maybe::Nothing => {
                tracing::trace!("get called on Nothing");
                Err(FpError::EmptyAccess)
            }
        }
    }

    /// Read the contained value, aborting when absent.
    ///
    /// # Panics
    ///
    /// Panics with the [`FpError::EmptyAccess`] message if this is `Nothing`.
    pub fn unwrap(self) -> T {
        match self.get() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// The contained value, or `default` when absent. Never fails.
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Maybe::Just(value) => value,
            Maybe::Nothing => default,
        }
    }

    /// Borrow the contained value.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Just(value) => Maybe::Just(value),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// map: Functor operation
    ///
    /// # Example
    /// ```rust
    /// use cim_fp::Maybe;
    ///
    /// assert_eq!(Maybe::just(5).map(|x| x * 2), Maybe::just(10));
    /// assert_eq!(Maybe::<i32>::nothing().map(|x| x * 2), Maybe::nothing());
    /// ```
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Just(value) => Maybe::Just(f(value)),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// bind/flatMap: Maybe(T) -> (T -> Maybe(U)) -> Maybe(U)
    ///
    /// The result of `f` is returned as-is, so there is no nesting.
    ///
    /// # Example
    /// ```rust
    /// use cim_fp::Maybe;
    ///
    /// let safe_divide = |x: i32| if x == 0 { Maybe::nothing() } else { Maybe::just(100 / x) };
    /// assert_eq!(Maybe::just(5).flat_map(safe_divide), Maybe::just(20));
    /// assert_eq!(Maybe::just(0).flat_map(safe_divide), Maybe::nothing());
    /// ```
    pub fn flat_map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Just(value) => f(value),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Keep the value only if it satisfies `pred`.
    pub fn filter<P>(self, pred: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Just(value) if pred(&value) => Maybe::Just(value),
            _ => Maybe::Nothing,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Just(value),
            None => Maybe::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}
