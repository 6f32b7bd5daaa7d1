//! Equality - the algebra's asymmetric comparison.

use crate::contract::{OutcomeExt, OutcomeLike};

/// Returns `true` iff `left` and `right` are both successes and their
/// values are equal.
///
/// This relation is deliberately asymmetric: only success carries
/// comparable identity. Two failures are *never* equal, even when their
/// errors are equal (note the absence of any bound on the error type),
/// and a success is never equal to a failure. The relation is therefore
/// not reflexive across failure instances.
///
/// # Examples
///
/// ```rust
/// use resultant::combinator::outcome_eq;
/// use resultant::control::Outcome;
///
/// let one: Outcome<i32, String> = Outcome::Success(1);
/// let another: Outcome<i32, String> = Outcome::Success(1);
/// assert!(outcome_eq(one, another));
///
/// let failed: Outcome<i32, String> = Outcome::Failure("boom".to_string());
/// let same: Outcome<i32, String> = Outcome::Failure("boom".to_string());
/// assert!(!outcome_eq(failed, same));
/// ```
#[inline]
pub fn outcome_eq<T>(left: T, right: T) -> bool
where
    T: OutcomeLike,
    T::Value: PartialEq,
{
    match (left.value(), right.value()) {
        (Some(first), Some(second)) => first == second,
        _ => false,
    }
}

/// Returns `true` if `left` and `right` represent different cases, or
/// the same case but different values.
///
/// Logical negation of [`outcome_eq`], inheriting its asymmetry: two
/// failures are always unequal.
///
/// # Examples
///
/// ```rust
/// use resultant::combinator::outcome_ne;
/// use resultant::control::Outcome;
///
/// let success: Outcome<i32, String> = Outcome::Success(1);
/// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
/// assert!(outcome_ne(success, failure));
/// ```
#[inline]
pub fn outcome_ne<T>(left: T, right: T) -> bool
where
    T: OutcomeLike,
    T::Value: PartialEq,
{
    !outcome_eq(left, right)
}
