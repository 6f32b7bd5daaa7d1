//! Bind - the chaining combinator.

use crate::contract::{OutcomeExt, OutcomeLike};

/// Returns the result of applying `transform` to a success value, or a
/// new failure carrying the same error.
///
/// This is a synonym for
/// [`flat_map`](crate::contract::OutcomeExt::flat_map), provided as a
/// free function for call sites that prefer pipeline-style composition.
/// Chains group from the left: `bind(bind(outcome, f), g)` applies `f`
/// first, then `g`, matching the left-associative infix form this
/// operation traditionally takes.
///
/// On failure, `transform` is never invoked.
///
/// # Examples
///
/// ```rust
/// use resultant::combinator::bind;
/// use resultant::control::Outcome;
///
/// fn half(n: i32) -> Outcome<i32, String> {
///     if n % 2 == 0 {
///         Outcome::Success(n / 2)
///     } else {
///         Outcome::Failure(format!("{n} is odd"))
///     }
/// }
///
/// let quarter = bind(bind(Outcome::Success(12), half), half);
/// assert_eq!(quarter.into_value(), Some(3));
///
/// let stuck = bind(bind(Outcome::Success(6), half), half);
/// assert_eq!(stuck.into_error(), Some("3 is odd".to_string()));
/// ```
#[inline]
pub fn bind<T, B, F>(outcome: T, transform: F) -> T::WithValue<B>
where
    T: OutcomeLike,
    F: FnOnce(T::Value) -> T::WithValue<B>,
{
    outcome.flat_map(transform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::OutcomeExt;
    use crate::control::Outcome;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn bind_applies_transform_on_success() {
        let outcome = bind(Outcome::<i32, String>::Success(5), |n| {
            Outcome::Success(n * 2)
        });
        assert_eq!(outcome.value(), Some(10));
    }

    #[rstest]
    fn bind_never_invokes_transform_on_failure() {
        let calls = Cell::new(0);
        let outcome = bind(Outcome::<i32, String>::Failure("boom".to_string()), |n| {
            calls.set(calls.get() + 1);
            Outcome::Success(n * 2)
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(outcome.error(), Some("boom".to_string()));
    }
}
