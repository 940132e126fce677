//! # bipoly
//!
//! Exact bivariate polynomial algebra over finite fields.
//!
//! ## Features
//!
//! - **Finite Fields**: prime fields, extension fields GF(p^k), binary fields GF(2^k)
//! - **Monomial Orders**: Lex, DegLex, DegRevLex, weighted orders, custom closures
//! - **Polynomials**: sparse F[x, y] with overflow-checked degrees
//! - **Gröbner Bases**: Buchberger with product and chain criteria, minimal and reduced bases
//! - **Quotient Rings**: polynomials built in F[x, y]/I are kept in normal form
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bipoly::prelude::*;
//!
//! let ring = Ring::new(GF7::new(), ["x", "y"], Order::Lex(Var::X));
//! let f = ring.from_ints([((1, 2), 1), ((0, 3), 6)])?;
//! let g = ring.from_ints([((0, 3), 1), ((0, 2), 6)])?;
//!
//! let mut gb = Ideal::new(&ring, vec![f, g])?.groebner_basis()?;
//! gb.reduce_basis()?;
//!
//! let quotient = ring.quotient(&gb)?;
//! let y4 = quotient.y()?.pow(4)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use bipoly_fields as fields;
pub use bipoly_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use bipoly_fields::{Element, Field, FieldError, GF16, GF2, GF256, GF27, GF3, GF7, GF9};
    pub use bipoly_poly::{
        Degree, GroebnerConfig, GroebnerStats, Ideal, MonomialOrder, Order, PolyError, Polynomial, Ring, Tristate,
        Var,
    };
}
