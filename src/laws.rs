// Copyright (c) 2025 - Cowboy AI, LLC.

//! Law assertions for morphisms, shared by unit and integration tests.
//!
//! Each helper panics with a descriptive message when a law does not hold
//! for the given input, so they can be dropped straight into `#[test]`
//! functions or proptest bodies.

use std::fmt::Debug;

use crate::category::{compose, identity, Category, Morphism};

/// Assert that `g ∘ f` maps `input` to `expected`.
pub fn assert_composition<A, B, C>(
    f: &Morphism<A, B>,
    g: &Morphism<B, C>,
    input: A,
    expected: &C,
) where
    A: Clone + 'static,
    B: 'static,
    C: Clone + PartialEq + Debug + 'static,
{
    let composed = compose(f, g);
    let result = composed.apply(input);
    assert_eq!(
        &result,
        expected,
        "composition {} failed",
        composed.description()
    );
}

/// Assert `id ∘ f ≡ f` and `f ∘ id ≡ f` at `input`.
pub fn assert_identity_laws<A, B>(f: &Morphism<A, B>, input: A)
where
    A: Clone + 'static,
    B: Clone + PartialEq + Debug + 'static,
{
    let left = compose(&identity(f.source().clone()), f);
    let right = compose(f, &identity(f.target().clone()));

    let expected = f.apply(input.clone());
    assert_eq!(
        left.apply(input.clone()),
        expected,
        "left identity law failed for {}",
        f.description()
    );
    assert_eq!(
        right.apply(input),
        expected,
        "right identity law failed for {}",
        f.description()
    );
}

/// Assert `(h ∘ g) ∘ f ≡ h ∘ (g ∘ f)` at `input`.
pub fn assert_associativity<A, B, C, D>(
    f: &Morphism<A, B>,
    g: &Morphism<B, C>,
    h: &Morphism<C, D>,
    input: A,
) where
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    D: Clone + PartialEq + Debug + 'static,
{
    let grouped_left = compose(&compose(f, g), h);
    let grouped_right = compose(f, &compose(g, h));

    assert_eq!(
        grouped_left.apply(input.clone()),
        grouped_right.apply(input),
        "composition is not associative"
    );
    assert_eq!(grouped_left.target(), grouped_right.target());
}

/// Small fixture: objects `1, 2, 3` with `double: 1 → 2` and `increment: 2 → 3`.
pub fn sample_category() -> Category<i32> {
    let mut cat = Category::new();
    cat.add_object(1);
    cat.add_object(2);
    cat.add_object(3);

    cat.insert_morphism(Morphism::new(1, 2, |x| x * 2).named("double"));
    cat.insert_morphism(Morphism::new(2, 3, |x| x + 1).named("increment"));
    cat
}
