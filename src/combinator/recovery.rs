//! Recovery coalescing - supplier-based fallbacks.

use crate::contract::{OutcomeExt, OutcomeLike};

/// Returns the success value of `outcome`, or the result of `fallback`
/// otherwise.
///
/// Synonym for [`recover`](crate::contract::OutcomeExt::recover) as a
/// free function, with the same laziness contract: `fallback` is never
/// evaluated when the outcome is a success, and is invoked exactly once
/// when it is a failure.
///
/// # Examples
///
/// ```rust
/// use resultant::combinator::coalesce_value;
/// use resultant::control::Outcome;
///
/// let success: Outcome<i32, String> = Outcome::Success(42);
/// assert_eq!(coalesce_value(success, || 0), 42);
///
/// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
/// assert_eq!(coalesce_value(failure, || 0), 0);
/// ```
#[inline]
pub fn coalesce_value<T, F>(outcome: T, fallback: F) -> T::Value
where
    T: OutcomeLike,
    F: FnOnce() -> T::Value,
{
    outcome.recover(fallback)
}

/// Returns `outcome` if it is a success, or the result of `alternative`
/// otherwise.
///
/// Synonym for
/// [`recover_with`](crate::contract::OutcomeExt::recover_with) as a free
/// function, with the same laziness contract: `alternative` is never
/// evaluated when the outcome is a success, and is invoked exactly once
/// when it is a failure.
///
/// # Examples
///
/// ```rust
/// use resultant::combinator::coalesce_outcome;
/// use resultant::control::Outcome;
///
/// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
/// let recovered = coalesce_outcome(failure, || Outcome::Success(7));
/// assert_eq!(recovered.into_value(), Some(7));
/// ```
#[inline]
pub fn coalesce_outcome<T, F>(outcome: T, alternative: F) -> T
where
    T: OutcomeLike,
    F: FnOnce() -> T,
{
    outcome.recover_with(alternative)
}
