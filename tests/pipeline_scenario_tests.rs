// Copyright (c) 2025 - Cowboy AI, LLC.

use cim_fp::{Either, FpError, Maybe};

fn safe_divide(x: i32) -> Maybe<i32> {
    if x == 0 {
        Maybe::nothing()
    } else {
        Maybe::just(100 / x)
    }
}

fn pipeline(start: i32) -> Maybe<i32> {
    Maybe::just(start)
        .map(|x| x * 2)
        .flat_map(safe_divide)
        .filter(|x| *x > 0)
}

#[test]
fn pipeline_from_twenty_yields_two() {
    // 20 -> 40 -> 100 / 40 = 2 -> kept since 2 > 0
    assert_eq!(pipeline(20), Maybe::just(2));
    assert_eq!(pipeline(20).get(), Ok(2));
}

#[test]
fn pipeline_from_zero_is_nothing() {
    let result = pipeline(0);
    assert!(result.is_nothing());
    assert_eq!(result.get(), Err(FpError::EmptyAccess));
}

#[test]
fn pipeline_filters_out_non_positive_quotients() {
    // -20 -> -40 -> 100 / -40 = -2 -> dropped by the filter
    assert_eq!(pipeline(-20), Maybe::nothing());
}

#[test]
fn maybe_and_either_agree_through_std_types() {
    let maybe: Option<i32> = pipeline(20).into();
    let either = Either::from_option(maybe, "no result");
    assert_eq!(either, Either::Right(2));

    let missing: Option<i32> = pipeline(0).into();
    assert_eq!(Either::from_option(missing, "no result"), Either::Left("no result"));
}
