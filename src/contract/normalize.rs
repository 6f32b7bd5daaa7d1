//! Error normalization - folding foreign errors into a canonical type.
//!
//! Call sites frequently face heterogeneous error sources: a parse error
//! here, an I/O error there, all wanting to flow through one outcome type.
//! The derived algebra keeps the error channel fixed (see
//! [`OutcomeLike`]), so unification has to happen *before* an outcome is
//! constructed. This module provides the capability for that:
//!
//! - [`NormalizeError`]: a canonical error type declares how it absorbs
//!   any [`ForeignError`]
//! - [`normalized`]: builds a failure outcome directly from a foreign
//!   error
//! - [`absorb`]: folds a `Result` with a foreign error type into a
//!   conforming outcome
//!
//! The core supplies no default mapping; each conforming error type
//! decides its own folding rule, typically by wrapping unknown errors in
//! a generic "unclassified" case.

use super::capability::OutcomeLike;

/// An arbitrary externally-sourced error, boxed and type-erased.
///
/// Anything that converts into a boxed error trait object qualifies,
/// including `String` and `&str`, which matches the set of types the
/// `?` operator can erase into.
pub type ForeignError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A capability for error types that can absorb any foreign error.
///
/// Implementing this trait makes a type a *canonical* error: code that
/// encounters an error of an unrelated type can fold it into the
/// canonical one and keep the outcome's error channel uniform.
///
/// # Examples
///
/// ```rust
/// use resultant::contract::{ForeignError, NormalizeError};
///
/// #[derive(Debug)]
/// enum ApiError {
///     Unclassified(String),
/// }
///
/// impl NormalizeError for ApiError {
///     fn normalize(foreign: ForeignError) -> Self {
///         Self::Unclassified(foreign.to_string())
///     }
/// }
///
/// let folded = ApiError::normalize("connection reset".into());
/// assert!(matches!(folded, ApiError::Unclassified(_)));
/// ```
pub trait NormalizeError: Sized {
    /// Folds an arbitrary foreign error into this canonical error type.
    fn normalize(foreign: ForeignError) -> Self;
}

/// Constructs a failure outcome by normalizing a foreign error.
///
/// # Examples
///
/// ```rust
/// use resultant::contract::{ForeignError, NormalizeError, OutcomeExt, normalized};
/// use resultant::control::Outcome;
///
/// #[derive(Debug)]
/// enum ApiError {
///     Unclassified(String),
/// }
///
/// impl NormalizeError for ApiError {
///     fn normalize(foreign: ForeignError) -> Self {
///         Self::Unclassified(foreign.to_string())
///     }
/// }
///
/// let outcome: Outcome<i32, ApiError> = normalized("connection reset");
/// assert!(matches!(
///     outcome.error(),
///     Some(ApiError::Unclassified(message)) if message == "connection reset",
/// ));
/// ```
#[inline]
pub fn normalized<T, E>(foreign: E) -> T
where
    T: OutcomeLike,
    T::Error: NormalizeError,
    E: Into<ForeignError>,
{
    T::from_error(<T::Error as NormalizeError>::normalize(foreign.into()))
}

/// Folds a `Result` with a foreign error type into a conforming outcome.
///
/// `Ok` becomes a success; `Err` is normalized into the outcome's
/// canonical error type.
///
/// # Examples
///
/// ```rust
/// use resultant::contract::{ForeignError, NormalizeError, OutcomeExt, absorb};
/// use resultant::control::Outcome;
///
/// #[derive(Debug)]
/// enum ApiError {
///     Unclassified(String),
/// }
///
/// impl NormalizeError for ApiError {
///     fn normalize(foreign: ForeignError) -> Self {
///         Self::Unclassified(foreign.to_string())
///     }
/// }
///
/// let parsed: Outcome<i32, ApiError> = absorb("42".parse::<i32>());
/// assert_eq!(parsed.value(), Some(42));
///
/// let failed: Outcome<i32, ApiError> = absorb("forty-two".parse::<i32>());
/// assert!(matches!(failed.error(), Some(ApiError::Unclassified(_))));
/// ```
#[inline]
pub fn absorb<T, E>(result: Result<T::Value, E>) -> T
where
    T: OutcomeLike,
    T::Error: NormalizeError,
    E: Into<ForeignError>,
{
    match result {
        Ok(value) => T::from_value(value),
        Err(error) => normalized(error),
    }
}
