//! # bipoly-poly
//!
//! Bivariate polynomial rings over finite fields, their ideals, and
//! Gröbner bases.
//!
//! This crate provides:
//! - Exponent pairs (`Degree`) with overflow-checked arithmetic
//! - Monomial orders: Lex, DegLex, DegRevLex and weighted variants
//! - Sparse polynomials owned by a `Ring`, optionally a quotient ring
//! - The multivariate division algorithm
//! - Ideals with Buchberger's algorithm, minimization and reduction
//!
//! ## Example
//!
//! ```ignore
//! use bipoly_fields::GF7;
//! use bipoly_poly::{Ideal, Order, Ring, Var};
//!
//! let ring = Ring::new(GF7::new(), ["x", "y"], Order::Lex(Var::X));
//! let f = ring.from_ints([((1, 2), 1), ((0, 3), 6)])?;
//! let g = ring.from_ints([((0, 3), 1), ((0, 2), 6)])?;
//!
//! let mut gb = Ideal::new(&ring, vec![f, g])?.groebner_basis()?;
//! gb.reduce_basis()?;
//! let quotient = ring.quotient(&gb)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod degree;
mod division;
pub mod error;
pub mod groebner;
pub mod ideal;
pub mod ordering;
pub mod polynomial;
pub mod ring;

#[cfg(test)]
mod proptests;

pub use degree::{Degree, MAX_EXPONENT};
pub use error::{ErrorKind, PolyError};
pub use groebner::{monomial_lcm, product_criterion, s_polynomial, GroebnerConfig, GroebnerStats};
pub use ideal::{Ideal, Tristate};
pub use ordering::{FnOrder, MonomialOrder, Order, Var};
pub use polynomial::Polynomial;
pub use ring::Ring;
