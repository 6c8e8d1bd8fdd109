// Copyright 2025 Cowboy AI, LLC.

//! Morphisms - typed, composable transformations between labelled objects
//!
//! A morphism carries its source and target labels alongside a pure function
//! from `A` to `B`. Composition and identity build new morphisms; nothing is
//! mutated, so composites can be shared freely.

use std::fmt;
use std::sync::Arc;

/// Shared, thread-safe transformation function
pub type Transform<A, B> = Arc<dyn Fn(A) -> B + Send + Sync>;

/// A morphism from a source object to a target object
pub struct Morphism<A, B> {
    source: A,
    target: B,
    transform: Transform<A, B>,
    name: Option<String>,
}

impl<A, B> Morphism<A, B> {
    /// Create a morphism from its endpoints and transformation
    ///
    /// # Example
    /// ```rust
    /// use cim_fp::Morphism;
    ///
    /// let double = Morphism::new(1, 2, |x: i32| x * 2);
    /// assert_eq!(double.apply(21), 42);
    /// ```
    pub fn new<F>(source: A, target: B, transform: F) -> Self
    where
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        Self {
            source,
            target,
            transform: Arc::new(transform),
            name: None,
        }
    }

    /// Attach a human-readable name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Source object label
    pub fn source(&self) -> &A {
        &self.source
    }

    /// Target object label
    pub fn target(&self) -> &B {
        &self.target
    }

    /// Name, if one was given
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Apply the transformation
    pub fn apply(&self, input: A) -> B {
        (self.transform)(input)
    }

    /// Human-readable description, `anonymous` when unnamed
    pub fn description(&self) -> String {
        self.name().unwrap_or("anonymous").to_string()
    }

    /// Compose with a following morphism: `self` first, then `next`.
    ///
    /// Equivalent to [`compose(self, next)`](compose).
    pub fn then<C>(&self, next: &Morphism<B, C>) -> Morphism<A, C>
    where
        A: Clone + 'static,
        B: 'static,
        C: Clone + 'static,
    {
        compose(self, next)
    }
}

impl<A: Clone, B: Clone> Clone for Morphism<A, B> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            target: self.target.clone(),
            transform: Arc::clone(&self.transform),
            name: self.name.clone(),
        }
    }
}

impl<A: fmt::Debug, B: fmt::Debug> fmt::Debug for Morphism<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Morphism")
            .field("source", &self.source)
            .field("target", &self.target)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Compose `f: A → B` with `g: B → C` into `g ∘ f: A → C`.
///
/// The result runs `f` then `g`; its source is `f`'s source and its target is
/// `g`'s target. Whether `f`'s target and `g`'s source name the same object is
/// up to the caller.
///
/// # Example
/// ```rust
/// use cim_fp::category::{compose, Morphism};
///
/// let f = Morphism::new(1, 2, |x: i32| x * 2);
/// let g = Morphism::new(2, 3, |x: i32| x + 1);
/// let h = compose(&f, &g);
///
/// assert_eq!(h.apply(1), 3);
/// assert_eq!((*h.source(), *h.target()), (1, 3));
/// ```
pub fn compose<A, B, C>(f: &Morphism<A, B>, g: &Morphism<B, C>) -> Morphism<A, C>
where
    A: Clone + 'static,
    B: 'static,
    C: Clone + 'static,
{
    let first = Arc::clone(&f.transform);
    let second = Arc::clone(&g.transform);
    let name = match (f.name(), g.name()) {
        (Some(f_name), Some(g_name)) => Some(format!("{g_name} ∘ {f_name}")),
        _ => None,
    };

    Morphism {
        source: f.source.clone(),
        target: g.target.clone(),
        transform: Arc::new(move |a: A| second(first(a))),
        name,
    }
}

/// Identity morphism on `obj`: returns its input unchanged.
pub fn identity<T>(obj: T) -> Morphism<T, T>
where
    T: Clone + 'static,
{
    Morphism::new(obj.clone(), obj, |t| t).named("id")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double(source: i32, target: i32) -> Morphism<i32, i32> {
        Morphism::new(source, target, |x| x * 2).named("double")
    }

    #[test]
    fn test_identity_morphism() {
        let id = identity("test".to_string());
        let input = "value".to_string();
        assert_eq!(id.apply(input.clone()), input);
        assert_eq!(id.source(), id.target());
        assert_eq!(id.name(), Some("id"));
    }

    #[test]
    fn test_morphism_composition() {
        let add = Morphism::new(1, 2, |x: i32| x + 1).named("add_one");
        let mul = Morphism::new(2, 3, |x: i32| x * 2).named("multiply_two");

        let composition = compose(&add, &mul);

        // (5 + 1) * 2 = 12
        assert_eq!(composition.apply(5), 12);
        assert_eq!(composition.description(), "multiply_two ∘ add_one");
        assert_eq!(*composition.source(), 1);
        assert_eq!(*composition.target(), 3);
    }

    #[test]
    fn test_composition_across_types() {
        let len = Morphism::new("abcd".to_string(), 4, |s: String| s.len());
        let even = Morphism::new(4, true, |n: usize| n % 2 == 0);

        let composed = len.then(&even);
        assert!(composed.apply("abcd".to_string()));
        assert!(!composed.apply("abc".to_string()));
        assert_eq!(composed.source(), "abcd");
        assert!(*composed.target());
        assert_eq!(composed.name(), None);
    }

    #[test]
    fn test_composition_leaves_inputs_usable() {
        let f = double(1, 2);
        let g = double(2, 4);
        let h = compose(&f, &g);

        assert_eq!(h.apply(1), 4);
        assert_eq!(f.apply(1), 2);
        assert_eq!(g.apply(2), 4);
    }

    #[test]
    fn test_clone_shares_transform() {
        let f = double(1, 2);
        let copy = f.clone();
        assert_eq!(copy.apply(7), f.apply(7));
        assert_eq!(copy.description(), "double");
    }

    #[test]
    fn test_unnamed_description() {
        let f = Morphism::new((), (), |_: ()| ());
        assert_eq!(f.description(), "anonymous");
        assert!(format!("{f:?}").starts_with("Morphism"));
    }
}
