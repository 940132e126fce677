//! Bivariate polynomial rings and quotient rings.
//!
//! A [`Ring`] is a cheap handle: cloning it shares the same underlying
//! ring, and two polynomials may only be combined when their handles point
//! to the same ring. A quotient ring carries a reduced Gröbner basis and
//! reduces every polynomial it builds by it.

use std::fmt;
use std::rc::Rc;

use bipoly_fields::Field;
use tracing::debug;

use crate::degree::Degree;
use crate::division::{accumulate, divide, Terms};
use crate::error::PolyError;
use crate::ideal::Ideal;
use crate::ordering::{MonomialOrder, Var};
use crate::polynomial::Polynomial;

struct RingInner<F: Field> {
    field: F,
    var_names: [String; 2],
    order: Rc<dyn MonomialOrder>,
    /// Always a reduced Gröbner basis when present.
    ideal: Option<Ideal<F>>,
}

/// The ring F[x, y] with a fixed monomial order, or a quotient of it.
pub struct Ring<F: Field> {
    inner: Rc<RingInner<F>>,
}

impl<F: Field> Clone for Ring<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<F: Field> Ring<F> {
    /// Creates the ring F[x, y] with the given variable names and order.
    pub fn new(field: F, var_names: [&str; 2], order: impl MonomialOrder + 'static) -> Self {
        Self::with_shared_order(field, var_names, Rc::new(order))
    }

    /// Creates a ring from an already shared order.
    pub fn with_shared_order(field: F, var_names: [&str; 2], order: Rc<dyn MonomialOrder>) -> Self {
        Self {
            inner: Rc::new(RingInner {
                field,
                var_names: var_names.map(str::to_string),
                order,
                ideal: None,
            }),
        }
    }

    /// Forms the quotient of this ring by `ideal`.
    ///
    /// The ideal is first converted to a reduced Gröbner basis; the caller's
    /// ideal is left untouched. Every polynomial built in the returned ring
    /// is reduced modulo that basis.
    ///
    /// # Errors
    ///
    /// - [`PolyError::InputValue`] if this ring is already a quotient ring
    /// - [`PolyError::ArithmeticIncompat`] if the ideal belongs to another ring
    /// - any failure of the Gröbner computation
    pub fn quotient(&self, ideal: &Ideal<F>) -> Result<Self, PolyError> {
        if self.is_quotient() {
            return Err(PolyError::InputValue(
                "ring is already a quotient ring".to_string(),
            ));
        }
        self.check_same(ideal.ring())?;

        let mut basis = ideal.groebner_basis()?;
        basis.reduce_basis()?;
        debug!(
            generators = basis.len(),
            order = %self.inner.order.name(),
            "forming quotient ring"
        );

        Ok(Self {
            inner: Rc::new(RingInner {
                field: self.inner.field.clone(),
                var_names: self.inner.var_names.clone(),
                order: Rc::clone(&self.inner.order),
                ideal: Some(basis),
            }),
        })
    }

    /// Returns the coefficient field.
    #[must_use]
    pub fn field(&self) -> &F {
        &self.inner.field
    }

    /// Returns the monomial order.
    #[must_use]
    pub fn order(&self) -> &dyn MonomialOrder {
        self.inner.order.as_ref()
    }

    /// Returns the two variable names.
    #[must_use]
    pub fn var_names(&self) -> [&str; 2] {
        [&self.inner.var_names[0], &self.inner.var_names[1]]
    }

    /// Returns the attached ideal of a quotient ring.
    #[must_use]
    pub fn ideal(&self) -> Option<&Ideal<F>> {
        self.inner.ideal.as_ref()
    }

    /// Returns true if this ring reduces by an ideal.
    #[must_use]
    pub fn is_quotient(&self) -> bool {
        self.inner.ideal.is_some()
    }

    /// Returns true if both handles refer to the same ring.
    #[must_use]
    pub fn same_ring(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn check_same(&self, other: &Self) -> Result<(), PolyError> {
        if self.same_ring(other) {
            Ok(())
        } else {
            Err(PolyError::ArithmeticIncompat)
        }
    }

    /// Reduces a coefficient map by the attached ideal, if any.
    pub(crate) fn reduce_terms(&self, terms: Terms<F::Elem>) -> Result<Terms<F::Elem>, PolyError> {
        let Some(ideal) = &self.inner.ideal else {
            return Ok(terms);
        };
        if terms.is_empty() {
            return Ok(terms);
        }
        let divisors: Vec<&Terms<F::Elem>> =
            ideal.generators().iter().map(Polynomial::raw_terms).collect();
        let division = divide(self.order(), &terms, &divisors, None, false)?;
        Ok(division.remainder)
    }

    /// The zero polynomial.
    #[must_use]
    pub fn zero(&self) -> Polynomial<F> {
        Polynomial::from_terms(self, Terms::default())
    }

    /// The constant polynomial 1.
    ///
    /// # Errors
    ///
    /// Fails only if quotient reduction fails.
    pub fn one(&self) -> Result<Polynomial<F>, PolyError> {
        self.constant(self.inner.field.one())
    }

    /// A constant polynomial.
    ///
    /// # Errors
    ///
    /// Fails only if quotient reduction fails.
    pub fn constant(&self, c: F::Elem) -> Result<Polynomial<F>, PolyError> {
        self.monomial(Degree::ZERO, c)
    }

    /// The polynomial consisting of one variable.
    ///
    /// # Errors
    ///
    /// Fails only if quotient reduction fails.
    pub fn var(&self, var: Var) -> Result<Polynomial<F>, PolyError> {
        let d = match var {
            Var::X => Degree::new(1, 0),
            Var::Y => Degree::new(0, 1),
        };
        self.monomial(d, self.inner.field.one())
    }

    /// The first variable.
    ///
    /// # Errors
    ///
    /// Fails only if quotient reduction fails.
    pub fn x(&self) -> Result<Polynomial<F>, PolyError> {
        self.var(Var::X)
    }

    /// The second variable.
    ///
    /// # Errors
    ///
    /// Fails only if quotient reduction fails.
    pub fn y(&self) -> Result<Polynomial<F>, PolyError> {
        self.var(Var::Y)
    }

    /// The term c·x^dx·y^dy.
    ///
    /// # Errors
    ///
    /// Fails only if quotient reduction fails.
    pub fn monomial(&self, d: Degree, c: F::Elem) -> Result<Polynomial<F>, PolyError> {
        self.polynomial([(d, c)])
    }

    /// Builds a polynomial from (degree, coefficient) pairs.
    ///
    /// Zero coefficients are dropped and repeated degrees are summed.
    ///
    /// # Errors
    ///
    /// Fails only if quotient reduction fails.
    pub fn polynomial<I>(&self, terms: I) -> Result<Polynomial<F>, PolyError>
    where
        I: IntoIterator<Item = (Degree, F::Elem)>,
    {
        let mut map = Terms::default();
        for (d, c) in terms {
            accumulate(&mut map, d, c);
        }
        Polynomial::reduced(self, map)
    }

    /// Builds a polynomial from integer coefficients mapped into the field.
    ///
    /// # Errors
    ///
    /// Fails only if quotient reduction fails.
    pub fn from_ints<I>(&self, terms: I) -> Result<Polynomial<F>, PolyError>
    where
        I: IntoIterator<Item = ((u32, u32), i64)>,
    {
        let field = &self.inner.field;
        self.polynomial(
            terms
                .into_iter()
                .map(|(d, c)| (Degree::from(d), field.from_i64(c))),
        )
    }
}

impl<F: Field> PartialEq for Ring<F> {
    fn eq(&self, other: &Self) -> bool {
        self.same_ring(other)
    }
}

impl<F: Field> Eq for Ring<F> {}

impl<F: Field> fmt::Debug for Ring<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Ring");
        s.field("field", &self.inner.field.name())
            .field("vars", &self.inner.var_names)
            .field("order", &self.inner.order.name());
        if let Some(ideal) = &self.inner.ideal {
            s.field("ideal_generators", &ideal.len());
        }
        s.finish()
    }
}

impl<F: Field> fmt::Display for Ring<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y] = &self.inner.var_names;
        write!(f, "{}[{x}, {y}]", self.inner.field.name())?;
        if let Some(ideal) = &self.inner.ideal {
            let gens: Vec<String> = ideal.generators().iter().map(ToString::to_string).collect();
            write!(f, " / ({})", gens.join(", "))?;
        }
        Ok(())
    }
}
