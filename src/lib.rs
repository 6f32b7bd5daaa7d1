//! # resultant
//!
//! A representation-agnostic success-or-failure algebra built on a single
//! case-analysis primitive.
//!
//! ## Overview
//!
//! An outcome is a value that is either a success carrying a value or a
//! failure carrying an error. This crate deliberately does not fix one
//! representation for that idea. Instead it specifies a small capability
//! contract, two constructors and one case-analysis primitive, and
//! derives the entire algebra (`map`, `flat_map`, recovery, conjunction,
//! equality) from that primitive alone:
//!
//! - **Contract**: [`contract::OutcomeLike`], the irreducible interface a
//!   concrete outcome type implements.
//! - **Derived algebra**: [`contract::OutcomeExt`], supplied once and
//!   reused by every conforming type.
//! - **Error normalization**: [`contract::NormalizeError`], letting a
//!   canonical error type absorb arbitrary foreign errors.
//! - **Combinators**: free functions in [`combinator`] with documented
//!   short-circuiting and laziness contracts.
//! - **Reference representation**: [`control::Outcome`], a plain tagged
//!   union conforming to the contract.
//!
//! Because every derived operation goes through case analysis, a boxed
//! allocation, a deferred thunk, or any other shape can conform and
//! participate in the same algebra with identical behavior.
//!
//! ## Feature Flags
//!
//! - `combinator` (default): free-function combinators (`bind`, `conjoin`,
//!   `coalesce_value`, `coalesce_outcome`, `outcome_eq`, `outcome_ne`)
//! - `normalize` (default): the error-normalization capability
//! - `serde`: `Serialize`/`Deserialize` for [`control::Outcome`]
//! - `full`: enable all features
//!
//! ## Example
//!
//! A request-execution layer reports through the algebra, and callers
//! compose fallbacks and transformations instead of writing ad hoc
//! control flow:
//!
//! ```rust
//! use resultant::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => Outcome::Success(port),
//!         Err(error) => Outcome::Failure(error.to_string()),
//!     }
//! }
//!
//! let address = parse_port("8080")
//!     .map(|port| format!("api.example.com:{port}"))
//!     .recover(|| "api.example.com:443".to_string());
//! assert_eq!(address, "api.example.com:8080");
//!
//! let fallback = parse_port("not-a-port")
//!     .map(|port| format!("api.example.com:{port}"))
//!     .recover(|| "api.example.com:443".to_string());
//! assert_eq!(fallback, "api.example.com:443");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use resultant::prelude::*;
/// ```
pub mod prelude {

    pub use crate::contract::*;

    pub use crate::control::*;

    #[cfg(feature = "combinator")]
    pub use crate::combinator::*;
}

pub mod contract;

pub mod control;

#[cfg(feature = "combinator")]
pub mod combinator;

#[cfg(test)]
mod tests {
    #[test]
    fn library_compiles() {
        // Basic smoke test to ensure the library compiles
        assert!(true);
    }
}
