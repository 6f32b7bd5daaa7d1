//! Free combinators over the outcome algebra.
//!
//! The original formulation of this algebra surfaced these operations as
//! custom infix operators. Rust has no user-defined operator precedence,
//! so they are provided as named functions with the evaluation-order,
//! laziness, and chaining contracts documented explicitly:
//!
//! - [`bind`]: synonym for `flat_map`; chains left-associatively, so
//!   `bind(bind(outcome, f), g)` is the intended grouping
//! - [`conjoin`]: short-circuiting conjunction, mirroring boolean AND
//! - [`outcome_eq`] / [`outcome_ne`]: the algebra's deliberately
//!   asymmetric equality and its negation
//! - [`coalesce_value`] / [`coalesce_outcome`]: synonyms for the two
//!   recovery operations, with the same laziness contract
//!
//! Every combinator is a pure function from immutable inputs to an
//! immutable output; suppliers are invoked at most once, synchronously,
//! and only when the branch that needs them is taken.
//!
//! # Examples
//!
//! ```rust
//! use resultant::combinator::{bind, conjoin};
//! use resultant::control::Outcome;
//!
//! fn half(n: i32) -> Outcome<i32, String> {
//!     if n % 2 == 0 {
//!         Outcome::Success(n / 2)
//!     } else {
//!         Outcome::Failure(format!("{n} is odd"))
//!     }
//! }
//!
//! let quarter = bind(bind(Outcome::Success(12), half), half);
//! assert_eq!(quarter.into_value(), Some(3));
//!
//! let pair = conjoin(half(12), || half(20));
//! assert_eq!(pair.into_value(), Some((6, 10)));
//! ```

mod bind;
mod conjunction;
mod equality;
mod recovery;

pub use bind::bind;
pub use conjunction::conjoin;
pub use equality::{outcome_eq, outcome_ne};
pub use recovery::{coalesce_outcome, coalesce_value};
