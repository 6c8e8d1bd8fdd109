// Copyright (c) 2025 - Cowboy AI, LLC.

//! # CIM FP
//!
//! Functional building blocks for the Composable Information Machine.
//!
//! This crate provides three independent abstractions:
//! - **Maybe**: a value that may be absent
//! - **Either**: a computation that succeeds with a value or fails with an error
//! - **Category**: labelled objects with composable, typed morphisms
//!
//! ## Design Principles
//!
//! 1. **Immutability**: containers and morphisms are never mutated in place
//! 2. **Totality**: transformations propagate absence and failure instead of erroring
//! 3. **Explicit access**: reading a missing value returns an [`FpError`]; the
//!    panicking `unwrap*` variants say so in their name
//! 4. **Lawfulness**: functor, monad and category laws hold and are tested
//!
//! The `test-utils` feature exposes the `laws` module of assertion helpers for
//! downstream test suites.
//!
//! ## Example
//!
//! ```rust
//! use cim_fp::{Either, Maybe};
//!
//! let safe_divide = |x: i32| if x == 0 { Maybe::nothing() } else { Maybe::just(100 / x) };
//! let result = Maybe::just(20)
//!     .map(|x| x * 2)
//!     .flat_map(safe_divide)
//!     .filter(|x| *x > 0);
//! assert_eq!(result, Maybe::just(2));
//!
//! let parsed: Either<String, i32> = "42".parse::<i32>().map_err(|e| e.to_string()).into();
//! assert_eq!(parsed.map(|x| x / 2), Either::Right(21));
//! ```

#![warn(missing_docs)]

mod either;
mod errors;
mod maybe;
pub mod category;
#[cfg(any(test, feature = "test-utils"))]
pub mod laws;

pub use category::{compose, identity, Category, Morphism};
pub use either::Either;
pub use errors::{FpError, FpResult, Side};
pub use maybe::Maybe;
