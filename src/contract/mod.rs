//! Capability contract and derived algebra for outcome types.
//!
//! This module specifies what it means to *be* an outcome (a value that
//! is either a success carrying a value or a failure carrying an error)
//! without fixing a representation:
//!
//! - [`OutcomeLike`]: the irreducible contract (two constructors plus the
//!   `analysis` case-analysis primitive)
//! - [`OutcomeExt`]: the derived algebra, supplied once via a blanket
//!   implementation and expressible purely in terms of `analysis`
//! - [`NormalizeError`]: the capability letting a canonical error type
//!   absorb arbitrary foreign errors
//!
//! Independent concrete outcome types with different internal shapes all
//! participate in the same algebra by implementing [`OutcomeLike`]; every
//! derived operation behaves identically across them because none of them
//! may inspect the representation directly.
//!
//! # Examples
//!
//! ```rust
//! use resultant::contract::{OutcomeExt, OutcomeLike};
//! use resultant::control::Outcome;
//!
//! let parsed: Outcome<i32, String> = Outcome::from_value(21);
//! let doubled = parsed.map(|n| n * 2);
//! assert_eq!(doubled.value(), Some(42));
//! ```

mod algebra;
mod capability;

#[cfg(feature = "normalize")]
mod normalize;

pub use algebra::OutcomeExt;
pub use capability::OutcomeLike;

#[cfg(feature = "normalize")]
pub use normalize::{ForeignError, NormalizeError, absorb, normalized};
