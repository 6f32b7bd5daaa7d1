//! Derived algebra over the capability contract.
//!
//! This module provides [`OutcomeExt`], an extension trait whose
//! operations are defined purely in terms of the [`OutcomeLike`]
//! primitives. The algebra is supplied once, through a blanket
//! implementation, and reused by every conforming type: a new
//! representation gets `map`, `flat_map`, and the recovery operations for
//! free by implementing the three primitives.
//!
//! # Laws
//!
//! The algebra satisfies the monad laws, with `from_value` as `pure`:
//!
//! ## Left Identity Law
//!
//! ```text
//! T::from_value(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! outcome.flat_map(T::from_value) == outcome
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! outcome.flat_map(f).flat_map(g) == outcome.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Error propagation
//!
//! `map`, `recover`, and `recover_with` never alter the error value: when
//! the failure branch is taken, the original error passes through
//! untouched (or, for the recovery operations, the caller's supplier
//! decides what replaces the whole outcome). `flat_map` is the only
//! operation that may change the error *value*, and only because the
//! caller's transform produced a different failure; the error *type*
//! stays fixed. No error is ever silently discarded.

use super::capability::OutcomeLike;

/// Derived operations available on every [`OutcomeLike`] type.
///
/// All provided methods are expressible via `analysis` and the two
/// constructors; none of them may depend on internal representation.
/// The blanket implementation below is the only implementation.
///
/// # Examples
///
/// ```rust
/// use resultant::contract::{OutcomeExt, OutcomeLike};
/// use resultant::control::Outcome;
///
/// let outcome: Outcome<i32, String> = Outcome::from_value(2);
/// let chained = outcome
///     .map(|n| n + 1)
///     .flat_map(|n| Outcome::Success(n * 10));
/// assert_eq!(chained.value(), Some(30));
/// ```
pub trait OutcomeExt: OutcomeLike {
    /// Returns the value if this outcome represents a success, `None`
    /// otherwise.
    ///
    /// Defined as `analysis(Some, |_| None)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::contract::{OutcomeExt, OutcomeLike};
    /// use resultant::control::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::from_value(42);
    /// assert_eq!(success.value(), Some(42));
    ///
    /// let failure: Outcome<i32, String> = Outcome::from_error("boom".to_string());
    /// assert_eq!(failure.value(), None);
    /// ```
    #[inline]
    fn value(self) -> Option<Self::Value> {
        self.analysis(Some, |_| None)
    }

    /// Returns the error if this outcome represents a failure, `None`
    /// otherwise.
    ///
    /// Defined as `analysis(|_| None, Some)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::contract::{OutcomeExt, OutcomeLike};
    /// use resultant::control::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::from_error("boom".to_string());
    /// assert_eq!(failure.error(), Some("boom".to_string()));
    ///
    /// let success: Outcome<i32, String> = Outcome::from_value(42);
    /// assert_eq!(success.error(), None);
    /// ```
    #[inline]
    fn error(self) -> Option<Self::Error> {
        self.analysis(|_| None, Some)
    }

    /// Returns a new outcome by mapping a success value through
    /// `transform`, or re-wrapping a failure's error unchanged.
    ///
    /// On success, `transform` is applied exactly once. On failure,
    /// `transform` is never invoked. Implemented as
    /// `flat_map(|value| from_value(transform(value)))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::contract::{OutcomeExt, OutcomeLike};
    /// use resultant::control::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::from_value(21);
    /// assert_eq!(success.map(|n| n * 2).value(), Some(42));
    ///
    /// let failure: Outcome<i32, String> = Outcome::from_error("boom".to_string());
    /// assert_eq!(failure.map(|n| n * 2).error(), Some("boom".to_string()));
    /// ```
    #[inline]
    fn map<B, F>(self, transform: F) -> Self::WithValue<B>
    where
        F: FnOnce(Self::Value) -> B,
    {
        self.flat_map(|value| <Self::WithValue<B> as OutcomeLike>::from_value(transform(value)))
    }

    /// Returns the result of applying `transform` to a success value, or
    /// a new failure carrying the same error.
    ///
    /// On success, `transform` is invoked exactly once and its outcome is
    /// returned directly (no double-wrapping). On failure, `transform` is
    /// never invoked and a failure is constructed from the original
    /// error. Defined as `analysis(transform, from_error)`.
    ///
    /// The error type is fixed between the input and output outcome; see
    /// the [`OutcomeLike`] trait-level docs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::contract::{OutcomeExt, OutcomeLike};
    /// use resultant::control::Outcome;
    ///
    /// fn reciprocal(n: i32) -> Outcome<f64, String> {
    ///     if n == 0 {
    ///         Outcome::Failure("division by zero".to_string())
    ///     } else {
    ///         Outcome::Success(1.0 / f64::from(n))
    ///     }
    /// }
    ///
    /// let outcome: Outcome<i32, String> = Outcome::from_value(4);
    /// assert_eq!(outcome.flat_map(reciprocal).value(), Some(0.25));
    ///
    /// let zero: Outcome<i32, String> = Outcome::from_value(0);
    /// assert_eq!(
    ///     zero.flat_map(reciprocal).error(),
    ///     Some("division by zero".to_string()),
    /// );
    /// ```
    #[inline]
    fn flat_map<B, F>(self, transform: F) -> Self::WithValue<B>
    where
        F: FnOnce(Self::Value) -> Self::WithValue<B>,
    {
        self.analysis(transform, <Self::WithValue<B> as OutcomeLike>::from_error)
    }

    /// Returns the contained value, or the result of `fallback` if this
    /// outcome represents a failure.
    ///
    /// `fallback` is a supplier, not a value: it is never evaluated when
    /// the outcome is a success, and it is invoked exactly once,
    /// synchronously, when the outcome is a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::contract::{OutcomeExt, OutcomeLike};
    /// use resultant::control::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::from_value(42);
    /// assert_eq!(success.recover(|| 0), 42);
    ///
    /// let failure: Outcome<i32, String> = Outcome::from_error("boom".to_string());
    /// assert_eq!(failure.recover(|| 0), 0);
    /// ```
    #[inline]
    fn recover<F>(self, fallback: F) -> Self::Value
    where
        F: FnOnce() -> Self::Value,
    {
        self.analysis(|value| value, |_| fallback())
    }

    /// Returns this outcome if it represents a success, or the result of
    /// `alternative` otherwise.
    ///
    /// `alternative` is never evaluated when the outcome is a success,
    /// and it is invoked exactly once when the outcome is a failure. A
    /// success is passed through by rebuilding it from its value, which
    /// the contract makes indistinguishable from returning it untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::contract::{OutcomeExt, OutcomeLike};
    /// use resultant::control::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::from_error("boom".to_string());
    /// let recovered = failure.recover_with(|| Outcome::Success(7));
    /// assert_eq!(recovered.value(), Some(7));
    ///
    /// let success: Outcome<i32, String> = Outcome::from_value(42);
    /// let untouched = success.recover_with(|| Outcome::Success(7));
    /// assert_eq!(untouched.value(), Some(42));
    /// ```
    #[inline]
    fn recover_with<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        self.analysis(Self::from_value, |_| alternative())
    }
}

impl<T: OutcomeLike> OutcomeExt for T {}
