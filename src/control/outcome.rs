//! Outcome type - a success-or-failure tagged union.
//!
//! This module provides the `Outcome<A, E>` type, the reference
//! representation for the capability contract: a value that is either a
//! `Success(A)` or a `Failure(E)`. It is commonly used for:
//!
//! - Reporting the result of a fallible operation as a value
//! - Composing fallbacks and transformations through the derived algebra
//!   instead of ad hoc control flow
//!
//! # Examples
//!
//! ```rust
//! use resultant::control::Outcome;
//!
//! // Creating Outcome values
//! let success: Outcome<i32, String> = Outcome::Success(42);
//! let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
//!
//! // Pattern matching
//! match success {
//!     Outcome::Success(value) => println!("Got value: {value}"),
//!     Outcome::Failure(error) => println!("Got error: {error}"),
//! }
//!
//! // Extracting through the accessors
//! assert_eq!(failure.into_error(), Some("boom".to_string()));
//! ```

use std::fmt;

use crate::contract::OutcomeLike;

/// A value that is either a success carrying a value or a failure
/// carrying an error.
///
/// `Outcome<A, E>` is a plain tagged union and the simplest type
/// conforming to [`OutcomeLike`]. It is immutable once constructed:
/// every operation of the derived algebra consumes an outcome and
/// produces a new one, which also makes concurrent reads safe without
/// synchronization.
///
/// # Type Parameters
///
/// * `A` - The type of the success value
/// * `E` - The type of the failure error
///
/// # Equality
///
/// `Outcome` implements a deliberately asymmetric [`PartialEq`]: two
/// outcomes are equal iff *both* are successes and their values are
/// equal. Two failures never compare equal, even when they carry equal
/// errors. See the `PartialEq` implementation below.
///
/// # Examples
///
/// ```rust
/// use resultant::contract::OutcomeExt;
/// use resultant::control::Outcome;
///
/// let success: Outcome<i32, String> = Outcome::Success(42);
/// let doubled = success.map(|n| n * 2);
/// assert_eq!(doubled.into_value(), Some(84));
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<A, E> {
    /// The success case, carrying the operation's value.
    Success(A),
    /// The failure case, carrying the operation's error.
    Failure(E),
}

impl<A, E> Outcome<A, E> {
    // =========================================================================
    // Case Checking
    // =========================================================================

    /// Returns `true` if this is a `Success` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::control::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert!(success.is_success());
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    /// assert!(!failure.is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::control::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    /// assert!(failure.is_failure());
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert!(!success.is_failure());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Converts the outcome into an `Option<A>`, consuming the outcome.
    ///
    /// Returns `Some(value)` if this is `Success(value)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::control::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(success.into_value(), Some(42));
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    /// assert_eq!(failure.into_value(), None);
    /// ```
    #[inline]
    pub fn into_value(self) -> Option<A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts the outcome into an `Option<E>`, consuming the outcome.
    ///
    /// Returns `Some(error)` if this is `Failure(error)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::control::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    /// assert_eq!(failure.into_error(), Some("boom".to_string()));
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(success.into_error(), None);
    /// ```
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    // =========================================================================
    // Reference Extraction
    // =========================================================================

    /// Returns a reference to the success value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::control::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(success.value_ref(), Some(&42));
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    /// assert_eq!(failure.value_ref(), None);
    /// ```
    #[inline]
    pub const fn value_ref(&self) -> Option<&A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the failure error, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::control::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    /// assert_eq!(failure.error_ref(), Some(&"boom".to_string()));
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(success.error_ref(), None);
    /// ```
    #[inline]
    pub const fn error_ref(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the success value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::control::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(success.unwrap_success(), 42);
    /// ```
    #[inline]
    pub fn unwrap_success(self) -> A {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("called `Outcome::unwrap_success()` on a `Failure` value"),
        }
    }

    /// Returns the failure error, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::control::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    /// assert_eq!(failure.unwrap_failure(), "boom".to_string());
    /// ```
    #[inline]
    pub fn unwrap_failure(self) -> E {
        match self {
            Self::Success(_) => panic!("called `Outcome::unwrap_failure()` on a `Success` value"),
            Self::Failure(error) => error,
        }
    }
}

// =============================================================================
// Capability Contract Implementation
// =============================================================================

impl<A, E> OutcomeLike for Outcome<A, E> {
    type Value = A;
    type Error = E;
    type WithValue<B> = Outcome<B, E>;

    #[inline]
    fn from_value(value: A) -> Self {
        Self::Success(value)
    }

    #[inline]
    fn from_error(error: E) -> Self {
        Self::Failure(error)
    }

    #[inline]
    fn analysis<U, S, F>(self, if_success: S, if_failure: F) -> U
    where
        S: FnOnce(A) -> U,
        F: FnOnce(E) -> U,
    {
        match self {
            Self::Success(value) => if_success(value),
            Self::Failure(error) => if_failure(error),
        }
    }
}

// =============================================================================
// Equality (deliberately asymmetric)
// =============================================================================

/// Asymmetric equality: only successes carry comparable identity.
///
/// Two outcomes are equal iff *both* are successes and their values are
/// equal under `A`'s own equality. Two failures are never equal, even
/// when their errors are equal; note the absence of a `PartialEq` bound
/// on `E`. A success is never equal to a failure.
///
/// As a consequence this relation is not reflexive across failure
/// instances, so `Outcome` has no `Eq` implementation and must not be
/// used as a key in hashed or ordered collections. For structural
/// comparison, convert through [`Result`] first.
///
/// # Examples
///
/// ```rust
/// use resultant::control::Outcome;
///
/// let one: Outcome<i32, String> = Outcome::Success(1);
/// let another: Outcome<i32, String> = Outcome::Success(1);
/// assert!(one == another);
///
/// let failed: Outcome<i32, String> = Outcome::Failure("boom".to_string());
/// let same: Outcome<i32, String> = Outcome::Failure("boom".to_string());
/// assert!(failed != same);
/// ```
impl<A: PartialEq, E> PartialEq for Outcome<A, E> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Success(first), Self::Success(second)) => first == second,
            _ => false,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<A: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<A, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<A, E> From<Result<A, E>> for Outcome<A, E> {
    /// Converts a `Result` to an `Outcome`.
    ///
    /// `Ok(value)` becomes `Success(value)`, and `Err(error)` becomes
    /// `Failure(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::control::Outcome;
    ///
    /// let ok: Result<i32, String> = Ok(42);
    /// let outcome: Outcome<i32, String> = ok.into();
    /// assert_eq!(outcome.into_value(), Some(42));
    /// ```
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<A, E> From<Outcome<A, E>> for Result<A, E> {
    /// Converts an `Outcome` to a `Result`.
    ///
    /// `Success(value)` becomes `Ok(value)`, and `Failure(error)` becomes
    /// `Err(error)`. Useful for structural comparison, since `Result`'s
    /// equality compares failures too while `Outcome`'s deliberately does
    /// not.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::control::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    /// let result: Result<i32, String> = failure.into();
    /// assert_eq!(result, Err("boom".to_string()));
    /// ```
    #[inline]
    fn from(outcome: Outcome<A, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

// =============================================================================
// Compile-time Assertions
// =============================================================================

static_assertions::assert_impl_all!(Outcome<i32, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Outcome<u8, u8>: Copy);
