// Copyright (c) 2025 - Cowboy AI, LLC.

//! A guided tour of cim-fp: category composition, Maybe pipelines and Either chains.
//!
//! Run with `cargo run --example fp_tour`; set `RUST_LOG=debug` to see registry events.

use anyhow::Result;
use cim_fp::{compose, identity, Category, Either, Maybe, Morphism};
use tracing_subscriber::EnvFilter;

fn safe_divide(x: i32) -> Maybe<i32> {
    if x == 0 {
        Maybe::nothing()
    } else {
        Maybe::just(100 / x)
    }
}

fn divide_by(x: i32, y: i32) -> Either<String, i32> {
    if y == 0 {
        Either::Left("division by zero".to_string())
    } else {
        Either::Right(x / y)
    }
}

fn parse_int(s: &str) -> Either<String, i32> {
    s.parse::<i32>()
        .map_err(|e| format!("parse error: {e}"))
        .into()
}

fn double(x: i32) -> i32 {
    x * 2
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    basic_category_compose();
    maybe_examples()?;
    either_examples()?;
    Ok(())
}

fn basic_category_compose() {
    println!("=== Category Composition ===");
    let mut cat = Category::new();
    cat.add_object(1);
    cat.add_object(2);
    cat.add_object(4);

    cat.add_morphism(1, 2, double);
    cat.add_morphism(2, 4, double);

    let f = Morphism::new(1, 2, double).named("f");
    let g = Morphism::new(2, 4, double).named("g");
    let h = compose(&f, &g);

    let input = 1;
    println!("Input: {input}");
    println!("f(input): {}", f.apply(input));
    println!("{}(input): {}", h.description(), h.apply(input));

    let id = identity(input);
    println!("identity(input): {}", id.apply(input));
    println!(
        "Registered {} objects and {} morphisms",
        cat.object_count(),
        cat.morphism_count()
    );
}

fn maybe_examples() -> Result<()> {
    println!("\n=== Maybe Pipeline ===");
    let result = Maybe::just(20)
        .map(double)
        .flat_map(safe_divide)
        .filter(|x| *x > 0);
    println!("Result: {}", result.get()?);

    let no_result = Maybe::just(0)
        .map(double)
        .flat_map(safe_divide)
        .filter(|x| *x > 0);
    println!("Has result: {}", no_result.is_just());
    Ok(())
}

fn either_examples() -> Result<()> {
    println!("\n=== Basic Either Example ===");
    let quotient = divide_by(10, 2);
    if quotient.is_right() {
        println!("10/2 = {}", quotient.get_right()?);
    }

    let err_result = divide_by(10, 0);
    if err_result.is_left() {
        println!("Error: {}", err_result.get_left()?);
    }

    println!("\n=== Chaining Computations ===");
    let chained = parse_int("42").bind(|x| divide_by(x, 2));
    println!("42/2 = {}", chained.get_right()?);

    let bad_chain = parse_int("not a number").bind(|x| divide_by(x, 2));
    println!("Error: {}", bad_chain.get_left()?);

    println!("\n=== From Option Example ===");
    let missing = Either::<_, i32>::from_option(None, "missing value");
    println!("Error: {}", missing.get_left()?);

    let present = Either::from_option(Some(42), "missing value");
    println!("Value: {}", present.get_right()?);

    println!("\n=== Map Transformation Example ===");
    let doubled = Either::<String, i32>::Right(21).map(double);
    println!("21 * 2 = {}", doubled.get_right()?);

    println!("\n=== Complex Chain Example ===");
    let report = parse_int("63")
        .bind(|x| divide_by(x, 3))
        .map(double)
        .match_with(|e| format!("Error: {e}"), |v| format!("(63 / 3) * 2 = {v}"));
    println!("{report}");
    Ok(())
}
