//! Conjunction - short-circuiting AND over outcomes.

use crate::contract::OutcomeLike;

/// Returns a success carrying the pair of both values if `left` succeeds
/// and `right` succeeds, or the earliest failure otherwise.
///
/// `right` is a supplier, mirroring the short-circuit behavior of boolean
/// AND: it is evaluated only if `left` is a success, and at most once.
/// If `left` fails, its failure is returned immediately and `right` is
/// never evaluated. If `left` succeeds but the supplied right outcome
/// fails, the right failure is returned.
///
/// Both operands belong to the left operand's representation family; the
/// right supplier produces `L::WithValue<B>`.
///
/// # Examples
///
/// ```rust
/// use resultant::combinator::conjoin;
/// use resultant::control::Outcome;
///
/// let both = conjoin(Outcome::<i32, String>::Success(1), || {
///     Outcome::Success("a")
/// });
/// assert_eq!(both.into_value(), Some((1, "a")));
///
/// let first_failed = conjoin(Outcome::<i32, String>::Failure("boom".to_string()), || {
///     Outcome::Success("a")
/// });
/// assert_eq!(first_failed.into_error(), Some("boom".to_string()));
/// ```
#[inline]
pub fn conjoin<L, B, F>(left: L, right: F) -> L::WithValue<(L::Value, B)>
where
    L: OutcomeLike,
    F: FnOnce() -> L::WithValue<B>,
{
    left.analysis(
        |first| {
            right().analysis(
                |second| <L::WithValue<(L::Value, B)> as OutcomeLike>::from_value((first, second)),
                <L::WithValue<(L::Value, B)> as OutcomeLike>::from_error,
            )
        },
        <L::WithValue<(L::Value, B)> as OutcomeLike>::from_error,
    )
}
