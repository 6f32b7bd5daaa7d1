//! Conformance tests for alternate outcome representations.
//!
//! The capability contract promises that any representation exposing the
//! two constructors and `analysis` participates in the derived algebra
//! with identical behavior. These tests define two shapes beside the
//! plain tagged union, a boxed allocation and a deferred thunk, drive
//! all three through the same generic pipeline, and assert the results
//! agree.

use resultant::contract::{OutcomeExt, OutcomeLike};
use resultant::control::Outcome;
use rstest::rstest;

// =============================================================================
// A boxed representation
// =============================================================================

enum Inner<A, E> {
    Value(A),
    Error(E),
}

/// An outcome whose payload lives behind a heap allocation.
struct Boxed<A, E>(Box<Inner<A, E>>);

impl<A, E> OutcomeLike for Boxed<A, E> {
    type Value = A;
    type Error = E;
    type WithValue<B> = Boxed<B, E>;

    fn from_value(value: A) -> Self {
        Self(Box::new(Inner::Value(value)))
    }

    fn from_error(error: E) -> Self {
        Self(Box::new(Inner::Error(error)))
    }

    fn analysis<U, S, F>(self, if_success: S, if_failure: F) -> U
    where
        S: FnOnce(A) -> U,
        F: FnOnce(E) -> U,
    {
        match *self.0 {
            Inner::Value(value) => if_success(value),
            Inner::Error(error) => if_failure(error),
        }
    }
}

// =============================================================================
// A deferred-thunk representation
// =============================================================================

/// An outcome that computes its case on demand. Case analysis forces the
/// thunk; derived operations land in the strict `Outcome` representation,
/// which the contract permits because `WithValue` only has to stay within
/// *a* conforming family with the same error type.
struct Deferred<A, E>(Box<dyn FnOnce() -> Result<A, E>>);

impl<A: 'static, E: 'static> Deferred<A, E> {
    fn new(compute: impl FnOnce() -> Result<A, E> + 'static) -> Self {
        Self(Box::new(compute))
    }
}

impl<A: 'static, E: 'static> OutcomeLike for Deferred<A, E> {
    type Value = A;
    type Error = E;
    type WithValue<B> = Outcome<B, E>;

    fn from_value(value: A) -> Self {
        Self::new(move || Ok(value))
    }

    fn from_error(error: E) -> Self {
        Self::new(move || Err(error))
    }

    fn analysis<U, S, F>(self, if_success: S, if_failure: F) -> U
    where
        S: FnOnce(A) -> U,
        F: FnOnce(E) -> U,
    {
        match (self.0)() {
            Ok(value) => if_success(value),
            Err(error) => if_failure(error),
        }
    }
}

// =============================================================================
// Shared pipeline
// =============================================================================

// A pipeline touching map, flat_map, and analysis, generic over the
// contract alone. Every conforming representation must produce the same
// answer for the same logical input.
fn describe<T>(outcome: T) -> String
where
    T: OutcomeLike<Value = i32, Error = String>,
{
    outcome
        .map(|n| n * 2)
        .flat_map(|n| {
            if n > 100 {
                OutcomeLike::from_error("too large".to_string())
            } else {
                OutcomeLike::from_value(n + 1)
            }
        })
        .analysis(|n| format!("value: {n}"), |e| format!("error: {e}"))
}

#[rstest]
#[case(21, "value: 43")]
#[case(60, "error: too large")]
fn representations_agree_on_success_input(#[case] input: i32, #[case] expected: &str) {
    let plain = describe(Outcome::<i32, String>::from_value(input));
    let boxed = describe(Boxed::<i32, String>::from_value(input));
    let deferred = describe(Deferred::<i32, String>::from_value(input));

    assert_eq!(plain, expected);
    assert_eq!(boxed, expected);
    assert_eq!(deferred, expected);
}

#[rstest]
fn representations_agree_on_failure_input() {
    let plain = describe(Outcome::<i32, String>::from_error("boom".to_string()));
    let boxed = describe(Boxed::<i32, String>::from_error("boom".to_string()));
    let deferred = describe(Deferred::<i32, String>::from_error("boom".to_string()));

    assert_eq!(plain, "error: boom");
    assert_eq!(boxed, "error: boom");
    assert_eq!(deferred, "error: boom");
}

#[rstest]
fn boxed_representation_supports_recovery() {
    let failure = Boxed::<i32, String>::from_error("boom".to_string());
    assert_eq!(failure.recover(|| 7), 7);

    let success = Boxed::<i32, String>::from_value(42);
    let recovered = success.recover_with(|| Boxed::from_value(0));
    assert_eq!(recovered.value(), Some(42));
}

#[rstest]
fn deferred_thunk_is_not_forced_before_analysis() {
    use std::cell::Cell;
    use std::rc::Rc;

    let forced = Rc::new(Cell::new(false));
    let observer = Rc::clone(&forced);
    let deferred = Deferred::<i32, String>::new(move || {
        observer.set(true);
        Ok(5)
    });
    assert!(!forced.get());

    let value = deferred.value();
    assert!(forced.get());
    assert_eq!(value, Some(5));
}
