//! The capability contract for outcome types.
//!
//! This module provides the [`OutcomeLike`] trait: the irreducible
//! interface a concrete outcome type must implement. It consists of two
//! constructors and a single observation primitive, `analysis`. Everything
//! else in this crate (the derived algebra and the combinators) is
//! defined purely in terms of these three operations, so a conforming
//! type never has to reimplement the algebra and client code never
//! depends on a particular internal representation.

/// A type that can represent either failure with an error or success with
/// a result value.
///
/// The contract is structural, not behavioral: there are no runtime
/// checks and no failure modes at this layer. A conforming type declares
/// its `Value` and `Error` payloads, provides the two constructors, and
/// provides `analysis` as its only observation. The representation is
/// free: a tagged union, a boxed allocation, and a deferred thunk can
/// all conform.
///
/// # Associated Types
///
/// - `Value`: the success payload.
/// - `Error`: the failure payload. The error type is fixed across the
///   derived algebra: [`flat_map`](crate::contract::OutcomeExt::flat_map)
///   may change `Value` but never `Error`. Call sites that need to unify
///   heterogeneous error types do so explicitly through
///   [`NormalizeError`](crate::contract::NormalizeError) before
///   constructing an outcome.
/// - `WithValue<B>`: the same representation holding a different success
///   type `B` and the same `Error`. This generic associated type is what
///   lets `map` and `flat_map` change the value type while staying inside
///   one representation family.
///
/// # Laws
///
/// For any conforming type `T`:
///
/// 1. **Exclusivity**: every outcome is, at any observation point, exactly
///    one of success or failure, and `analysis` applies exactly one of its
///    two arguments, exactly once.
/// 2. **Construction**: `T::from_value(v).analysis(s, f) == s(v)` and
///    `T::from_error(e).analysis(s, f) == f(e)`.
/// 3. **Consistency**: `T::WithValue<T::Value>` is the same representation
///    as `T` (up to type equality), so rebinding is chainable.
///
/// Which case holds is determined solely by `analysis`, never by
/// inspecting fields of a concrete representation. Outcomes are immutable
/// once constructed; every derived operation consumes its input and
/// produces a new outcome, which is also why concurrent reads need no
/// synchronization.
///
/// # Examples
///
/// ```rust
/// use resultant::contract::OutcomeLike;
/// use resultant::control::Outcome;
///
/// let success: Outcome<i32, String> = Outcome::from_value(42);
/// let described = success.analysis(
///     |value| format!("value: {value}"),
///     |error| format!("error: {error}"),
/// );
/// assert_eq!(described, "value: 42");
/// ```
pub trait OutcomeLike: Sized {
    /// The success payload type.
    type Value;

    /// The failure payload type.
    ///
    /// Fixed across the derived algebra; see the trait-level docs.
    type Error;

    /// The same representation with the success type rebound to `B`.
    ///
    /// For example, for `Outcome<i32, String>`, `WithValue<bool>` is
    /// `Outcome<bool, String>`. The constraint keeps the error channel
    /// and the representation family intact across `map` and `flat_map`.
    type WithValue<B>: OutcomeLike<Value = B, Error = Self::Error>;

    /// Constructs a successful outcome wrapping `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::contract::{OutcomeExt, OutcomeLike};
    /// use resultant::control::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::from_value(7);
    /// assert_eq!(success.value(), Some(7));
    /// ```
    fn from_value(value: Self::Value) -> Self;

    /// Constructs a failed outcome wrapping `error`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::contract::{OutcomeExt, OutcomeLike};
    /// use resultant::control::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::from_error("boom".to_string());
    /// assert_eq!(failure.error(), Some("boom".to_string()));
    /// ```
    fn from_error(error: Self::Error) -> Self;

    /// Case analysis: the single observation primitive.
    ///
    /// Applies `if_success` to the value if this outcome represents a
    /// success, or `if_failure` to the error if it represents a failure,
    /// and returns the result. Exactly one of the two functions is
    /// invoked, exactly once.
    ///
    /// Every derived operation in this crate is expressible through this
    /// primitive alone.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::contract::OutcomeLike;
    /// use resultant::control::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::from_error("timeout".to_string());
    /// let length = failure.analysis(|value| value as usize, |error| error.len());
    /// assert_eq!(length, 7);
    /// ```
    fn analysis<U, S, F>(self, if_success: S, if_failure: F) -> U
    where
        S: FnOnce(Self::Value) -> U,
        F: FnOnce(Self::Error) -> U;
}
