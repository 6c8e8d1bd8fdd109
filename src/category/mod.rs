// Copyright 2025 Cowboy AI, LLC.

//! Category theory building blocks
//!
//! - Objects are plain labelled values
//! - Morphisms are typed transformations between objects
//! - Composition chains morphisms, identity is the no-op morphism
//!
//! Composition is associative and identity is neutral on both sides; the
//! `laws` helpers (feature `test-utils`) check both for concrete morphisms.

pub mod morphism;
pub mod registry;

pub use morphism::{compose, identity, Morphism, Transform};
pub use registry::Category;
