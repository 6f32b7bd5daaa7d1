//! Unit tests for the `Outcome<A, E>` type and the derived algebra.
//!
//! Outcome represents a value that is either:
//! - `Success(A)`: the operation produced a value
//! - `Failure(E)`: the operation produced an error
//!
//! These tests exercise the accessors, the derived algebra, and the
//! laziness/exactly-once contracts of the recovery operations, using
//! `Cell`-based invocation counters where a contract forbids or bounds
//! evaluation.

use resultant::contract::{OutcomeExt, OutcomeLike};
use resultant::control::Outcome;
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Construction and Accessors
// =============================================================================

#[rstest]
fn success_value_accessor_returns_value() {
    let outcome: Outcome<i32, String> = Outcome::from_value(42);
    assert_eq!(outcome.value(), Some(42));
}

#[rstest]
fn success_error_accessor_returns_none() {
    let outcome: Outcome<i32, String> = Outcome::from_value(42);
    assert_eq!(outcome.error(), None);
}

#[rstest]
fn failure_value_accessor_returns_none() {
    let outcome: Outcome<i32, String> = Outcome::from_error("boom".to_string());
    assert_eq!(outcome.value(), None);
}

#[rstest]
fn failure_error_accessor_returns_error() {
    let outcome: Outcome<i32, String> = Outcome::from_error("boom".to_string());
    assert_eq!(outcome.error(), Some("boom".to_string()));
}

#[rstest]
fn constructors_match_variants() {
    assert!(Outcome::<i32, String>::from_value(1).is_success());
    assert!(Outcome::<i32, String>::from_error("e".to_string()).is_failure());
}

// =============================================================================
// Analysis
// =============================================================================

#[rstest]
fn analysis_applies_success_branch_only() {
    let outcome: Outcome<i32, String> = Outcome::Success(42);
    let failure_calls = Cell::new(0);
    let result = outcome.analysis(
        |value| value * 2,
        |_| {
            failure_calls.set(failure_calls.get() + 1);
            0
        },
    );
    assert_eq!(result, 84);
    assert_eq!(failure_calls.get(), 0);
}

#[rstest]
fn analysis_applies_failure_branch_only() {
    let outcome: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    let success_calls = Cell::new(0);
    let result = outcome.analysis(
        |_| {
            success_calls.set(success_calls.get() + 1);
            String::new()
        },
        |error| error,
    );
    assert_eq!(result, "boom");
    assert_eq!(success_calls.get(), 0);
}

// =============================================================================
// Map
// =============================================================================

#[rstest]
fn map_transforms_success_exactly_once() {
    let calls = Cell::new(0);
    let outcome: Outcome<i32, String> = Outcome::Success(21);
    let mapped = outcome.map(|n| {
        calls.set(calls.get() + 1);
        n * 2
    });
    assert_eq!(mapped.value(), Some(42));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn map_passes_failure_through_untouched() {
    let calls = Cell::new(0);
    let outcome: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    let mapped = outcome.map(|n| {
        calls.set(calls.get() + 1);
        n * 2
    });
    assert_eq!(mapped.error(), Some("boom".to_string()));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn map_changes_the_value_type() {
    let outcome: Outcome<i32, String> = Outcome::Success(42);
    let described: Outcome<String, String> = outcome.map(|n| format!("n = {n}"));
    assert_eq!(described.value(), Some("n = 42".to_string()));
}

// =============================================================================
// Flat Map
// =============================================================================

fn half(n: i32) -> Outcome<i32, String> {
    if n % 2 == 0 {
        Outcome::Success(n / 2)
    } else {
        Outcome::Failure(format!("{n} is odd"))
    }
}

#[rstest]
fn flat_map_returns_transform_outcome_without_double_wrapping() {
    let outcome: Outcome<i32, String> = Outcome::Success(12);
    let result: Result<i32, String> = outcome.flat_map(half).into();
    assert_eq!(result, Ok(6));
}

#[rstest]
fn flat_map_propagates_transform_failure() {
    let outcome: Outcome<i32, String> = Outcome::Success(7);
    assert_eq!(outcome.flat_map(half).error(), Some("7 is odd".to_string()));
}

#[rstest]
fn flat_map_never_invokes_transform_on_failure() {
    let calls = Cell::new(0);
    let outcome: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    let chained = outcome.flat_map(|n| {
        calls.set(calls.get() + 1);
        half(n)
    });
    assert_eq!(chained.error(), Some("boom".to_string()));
    assert_eq!(calls.get(), 0);
}

// =============================================================================
// Recovery
// =============================================================================

#[rstest]
fn recover_returns_value_without_evaluating_fallback() {
    let calls = Cell::new(0);
    let outcome: Outcome<i32, String> = Outcome::Success(42);
    let value = outcome.recover(|| {
        calls.set(calls.get() + 1);
        0
    });
    assert_eq!(value, 42);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn recover_invokes_fallback_exactly_once_on_failure() {
    let calls = Cell::new(0);
    let outcome: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    let value = outcome.recover(|| {
        calls.set(calls.get() + 1);
        7
    });
    assert_eq!(value, 7);
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn recover_with_passes_success_through() {
    let outcome: Outcome<i32, String> = Outcome::Success(42);
    let recovered = outcome.recover_with(|| Outcome::Success(0));
    assert_eq!(recovered.value(), Some(42));
}

#[rstest]
fn recover_with_replaces_failure_with_alternative() {
    let outcome: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    let recovered = outcome.recover_with(|| Outcome::Failure("still bad".to_string()));
    assert_eq!(recovered.error(), Some("still bad".to_string()));
}

// =============================================================================
// Error Channel Discipline
// =============================================================================

#[rstest]
fn map_and_recovery_never_alter_the_error_value() {
    let outcome: Outcome<i32, String> = Outcome::Failure("original".to_string());
    let touched = outcome
        .map(|n| n + 1)
        .map(|n| n * 2)
        .recover_with(|| Outcome::Failure("original".to_string()));
    assert_eq!(touched.error(), Some("original".to_string()));
}

// =============================================================================
// Serde (feature-gated)
// =============================================================================

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;

    #[rstest]
    fn outcome_serializes_and_deserializes() {
        let outcome: Outcome<i32, String> = Outcome::Success(42);
        let json = serde_json::to_string(&outcome).expect("serialization failed");
        let back: Outcome<i32, String> = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(back.value(), Some(42));
    }
}
