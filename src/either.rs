// Copyright (c) 2025 - Cowboy AI, LLC.

//! Either - a disjoint union for computations that can fail.
//!
//! `Left(E)` carries the failure, `Right(A)` carries the success value. All
//! combinators are right-biased: `map` and `bind` act on `Right` and carry a
//! `Left` through untouched.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::{FpError, FpResult, Side};

/// A standard Either ADT: Left(E) or Right(A).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "value")]
pub enum Either<E, A> {
    /// Failure branch
    Left(E),
    /// Success branch
    Right(A),
}

impl<E, A> Either<E, A> {
    /// Construct a failure.
    pub fn failure(error: E) -> Self {
        Either::Left(error)
    }

    /// Construct a success.
    pub fn success(value: A) -> Self {
        Either::Right(value)
    }

    /// Construct from an optional value, failing with `error` when it is `None`.
    ///
    /// Presence is explicit, so a zero or empty success value stays a success.
    ///
    /// # Example
    /// ```rust
    /// use cim_fp::Either;
    ///
    /// assert_eq!(Either::from_option(Some(0), "missing"), Either::Right(0));
    /// assert_eq!(Either::<_, i32>::from_option(None, "missing"), Either::Left("missing"));
    /// ```
    pub fn from_option(value: Option<A>, error: E) -> Self {
        match value {
            Some(value) => Either::Right(value),
            None => Either::Left(error),
        }
    }

    /// Construct a success unless `value` equals `A::default()`.
    ///
    /// This treats the default ("zero") value as absent, so a legitimate `0`
    /// or `""` becomes a failure. Prefer [`from_option`](Self::from_option)
    /// unless that conflation is what the caller wants.
    pub fn from_non_default(value: A, error: E) -> Self
    where
        A: Default + PartialEq,
    {
        if value == A::default() {
            Either::Left(error)
        } else {
            Either::Right(value)
        }
    }

    /// True for a failure.
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// True for a success.
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Which side is populated.
    pub fn side(&self) -> Side {
        match self {
            Either::Left(_) => Side::Left,
            Either::Right(_) => Side::Right,
        }
    }

    /// Get a reference to the Left value if present.
    pub fn left(&self) -> Option<&E> {
        match self {
            Either::Left(l) => Some(l),
            _ => None,
        }
    }

    /// Get a reference to the Right value if present.
    pub fn right(&self) -> Option<&A> {
        match self {
            Either::Right(r) => Some(r),
            _ => None,
        }
    }

    /// Take the failure payload, or [`FpError::WrongSideAccess`] on a success.
    pub fn get_left(self) -> FpResult<E> {
        match self {
            Either::Left(l) => Ok(l),
            Either::Right(_) => {
                tracing::trace!("get_left called on Right");
                Err(FpError::wrong_side(Side::Left))
            }
        }
    }

    /// Take the success payload, or [`FpError::WrongSideAccess`] on a failure.
    pub fn get_right(self) -> FpResult<A> {
        match self {
            Either::Right(r) => Ok(r),
            Either::Left(_) => {
                tracing::trace!("get_right called on Left");
                Err(FpError::wrong_side(Side::Right))
            }
        }
    }

    /// Take the failure payload.
    ///
    /// # Panics
    ///
    /// Panics with the [`FpError::WrongSideAccess`] message on a `Right`.
    pub fn unwrap_left(self) -> E {
        match self.get_left() {
            Ok(l) => l,
            Err(err) => panic!("{err}"),
        }
    }

    /// Take the success payload.
    ///
    /// # Panics
    ///
    /// Panics with the [`FpError::WrongSideAccess`] message on a `Left`.
    pub fn unwrap_right(self) -> A {
        match self.get_right() {
            Ok(r) => r,
            Err(err) => panic!("{err}"),
        }
    }

    /// Map over the Right value.
    pub fn map<B, F>(self, f: F) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Map over the Left value.
    pub fn map_left<E2, F>(self, f: F) -> Either<E2, A>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// bind/flatMap: chain a computation that may itself fail.
    ///
    /// A `Left` short-circuits: `f` is not called and the error is returned
    /// re-typed to the new success type.
    ///
    /// # Example
    /// ```rust
    /// use cim_fp::Either;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Either::Right(x / 2) } else { Either::Left("odd") };
    /// assert_eq!(Either::Right(8).bind(half).bind(half), Either::Right(2));
    /// assert_eq!(Either::Right(6).bind(half).bind(half), Either::Left("odd"));
    /// ```
    pub fn bind<B, F>(self, f: F) -> Either<E, B>
    where
        F: FnOnce(A) -> Either<E, B>,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r),
        }
    }

    /// Eliminate the union: run exactly one handler and return its result.
    pub fn match_with<R, L, Rt>(self, on_left: L, on_right: Rt) -> R
    where
        L: FnOnce(E) -> R,
        Rt: FnOnce(A) -> R,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    /// Transform whichever side is populated.
    pub fn bi_map<E2, A2, L, R>(self, on_left: L, on_right: R) -> Either<E2, A2>
    where
        L: FnOnce(E) -> E2,
        R: FnOnce(A) -> A2,
    {
        match self {
            Either::Left(l) => Either::Left(on_left(l)),
            Either::Right(r) => Either::Right(on_right(r)),
        }
    }

    /// Reduce to a single value: `initial` on a failure, `combine(initial, a)`
    /// on a success.
    pub fn fold<B, F>(self, initial: B, combine: F) -> B
    where
        F: FnOnce(B, A) -> B,
    {
        match self {
            Either::Left(_) => initial,
            Either::Right(r) => combine(initial, r),
        }
    }

    /// Convert into a std `Result`, `Right` becoming `Ok`.
    pub fn into_result(self) -> Result<A, E> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }
}

impl<E, A> From<Result<A, E>> for Either<E, A> {
    fn from(value: Result<A, E>) -> Self {
        match value {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}
