//! # bipoly-fields
//!
//! Finite field capability traits for the bipoly kernel.
//!
//! This crate provides:
//! - Abstract traits: `Field`, `Element`
//! - Prime fields GF(p) with a compile-time modulus
//! - Extension fields GF(p^k) defined by an irreducible modulus
//! - Binary fields GF(2^k) with bit-packed elements
//!
//! The polynomial kernel only ever talks to the traits, so any of the
//! concrete fields (or a user-supplied one) can be plugged in.
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Field ──(type Elem)──> Element
//!                         ├── num_traits::Zero
//!                         └── num_traits::One
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod binary;
pub mod error;
pub mod extension;
pub mod prime;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use binary::{BinaryElem, BinaryField, BinarySpec, GF16, GF256};
pub use error::FieldError;
pub use extension::{ExtElem, ExtensionField, ExtensionSpec, GF27, GF9};
pub use prime::{PrimeElem, PrimeField, GF2, GF3, GF7};
pub use traits::{Element, Elements, Field};
