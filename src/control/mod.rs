//! Concrete outcome representations.
//!
//! This module provides [`Outcome`], the reference conforming type for
//! the capability contract in [`crate::contract`]: a plain tagged union
//! of a success case and a failure case. It is the representation most
//! client code will reach for; alternative shapes (boxed allocations,
//! deferred thunks) can conform to the same contract and interoperate
//! through the shared algebra.
//!
//! # Examples
//!
//! ```rust
//! use resultant::contract::OutcomeExt;
//! use resultant::control::Outcome;
//!
//! let outcome: Outcome<i32, String> = Outcome::Success(21);
//! assert_eq!(outcome.map(|n| n * 2).into_value(), Some(42));
//! ```

mod outcome;

pub use outcome::Outcome;
