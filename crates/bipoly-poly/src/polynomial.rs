//! Sparse bivariate polynomials.
//!
//! A polynomial is a map from [`Degree`] to a nonzero field element, owned
//! by exactly one [`Ring`]. Arithmetic comes in two flavours: in-place
//! methods (`add`, `sub`, `mul`, ...) that mutate the receiver and return it
//! for chaining, and allocating methods (`plus`, `minus`, `times`, ...)
//! that leave the receiver alone.
//!
//! Every fallible operation returns a `Result`, so a chain such as
//! `a.plus(&b)?.times(&c)?` needs no intermediate checks.

use std::fmt;

use bipoly_fields::{Element, Field};
use num_traits::{One, Zero};

use crate::degree::Degree;
use crate::division::{accumulate, divide, leading, Terms};
use crate::error::PolyError;
use crate::ordering::Var;
use crate::ring::Ring;

/// A polynomial in F[x, y] (or a quotient of it).
#[derive(Clone)]
pub struct Polynomial<F: Field> {
    ring: Ring<F>,
    /// Invariant: no coefficient is zero.
    terms: Terms<F::Elem>,
}

impl<F: Field> Polynomial<F> {
    /// Wraps a coefficient map without quotient reduction.
    pub(crate) fn from_terms(ring: &Ring<F>, terms: Terms<F::Elem>) -> Self {
        debug_assert!(terms.values().all(Element::is_nonzero));
        Self {
            ring: ring.clone(),
            terms,
        }
    }

    /// Wraps a coefficient map, reducing it in a quotient ring.
    pub(crate) fn reduced(ring: &Ring<F>, terms: Terms<F::Elem>) -> Result<Self, PolyError> {
        let terms = ring.reduce_terms(terms)?;
        Ok(Self::from_terms(ring, terms))
    }

    pub(crate) fn raw_terms(&self) -> &Terms<F::Elem> {
        &self.terms
    }

    /// Re-reduces after a point mutation.
    fn settle(&mut self) -> Result<&mut Self, PolyError> {
        if self.ring.is_quotient() {
            let terms = std::mem::take(&mut self.terms);
            self.terms = self.ring.reduce_terms(terms)?;
        }
        Ok(self)
    }

    /// Returns the owning ring.
    #[must_use]
    pub fn ring(&self) -> &Ring<F> {
        &self.ring
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if there is exactly one term.
    #[must_use]
    pub fn is_monomial(&self) -> bool {
        self.terms.len() == 1
    }

    /// Iterates over the terms in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = (Degree, &F::Elem)> {
        self.terms.iter().map(|(d, c)| (*d, c))
    }

    /// Returns the coefficient at `d`, zero if absent.
    #[must_use]
    pub fn coef(&self, d: Degree) -> F::Elem {
        self.terms.get(&d).cloned().unwrap_or_else(F::Elem::zero)
    }

    /// Sets the coefficient at `d`. Setting zero removes the term.
    ///
    /// # Errors
    ///
    /// Fails only if quotient reduction fails.
    pub fn set_coef(&mut self, d: Degree, v: F::Elem) -> Result<&mut Self, PolyError> {
        if v.is_zero() {
            self.terms.remove(&d);
        } else {
            self.terms.insert(d, v);
        }
        self.settle()
    }

    /// Adds `v` to the coefficient at `d`.
    ///
    /// # Errors
    ///
    /// Fails only if quotient reduction fails.
    pub fn increment_coef(&mut self, d: Degree, v: F::Elem) -> Result<&mut Self, PolyError> {
        accumulate(&mut self.terms, d, v);
        self.settle()
    }

    /// Subtracts `v` from the coefficient at `d`.
    ///
    /// # Errors
    ///
    /// Fails only if quotient reduction fails.
    pub fn decrement_coef(&mut self, d: Degree, v: F::Elem) -> Result<&mut Self, PolyError> {
        accumulate(&mut self.terms, d, -v);
        self.settle()
    }

    /// Leading degree under the ring's order.
    ///
    /// The zero polynomial reports (0, 0); check [`is_zero`](Self::is_zero)
    /// before relying on it.
    #[must_use]
    pub fn ld(&self) -> Degree {
        leading(self.ring.order(), &self.terms).map_or(Degree::ZERO, |(d, _)| d)
    }

    /// Leading coefficient, zero for the zero polynomial.
    #[must_use]
    pub fn lc(&self) -> F::Elem {
        leading(self.ring.order(), &self.terms).map_or_else(F::Elem::zero, |(_, c)| c.clone())
    }

    /// Leading term as a polynomial of the same ring.
    #[must_use]
    pub fn lt(&self) -> Self {
        let mut terms = Terms::default();
        if let Some((d, c)) = leading(self.ring.order(), &self.terms) {
            terms.insert(d, c.clone());
        }
        // A term of a reduced polynomial is itself reduced
        Self::from_terms(&self.ring, terms)
    }

    /// All present degrees, largest first.
    #[must_use]
    pub fn sorted_degrees(&self) -> Vec<Degree> {
        let order = self.ring.order();
        let mut degrees: Vec<Degree> = self.terms.keys().copied().collect();
        degrees.sort_by(|a, b| order.compare(b, a));
        degrees
    }

    /// Maximum total degree over all terms, 0 for the zero polynomial.
    #[must_use]
    pub fn total_degree(&self) -> u64 {
        self.terms.keys().map(|d| d.total()).max().unwrap_or(0)
    }

    /// Maximum exponent of one variable.
    #[must_use]
    pub fn degree_in(&self, var: Var) -> u32 {
        self.terms
            .keys()
            .map(|d| d.exponent(var))
            .max()
            .unwrap_or(0)
    }

    /// Adds `other` in place.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ArithmeticIncompat`] if the rings differ.
    pub fn add(&mut self, other: &Self) -> Result<&mut Self, PolyError> {
        self.ring.check_same(&other.ring)?;
        for (d, c) in &other.terms {
            accumulate(&mut self.terms, *d, c.clone());
        }
        Ok(self)
    }

    /// Returns `self + other`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ArithmeticIncompat`] if the rings differ.
    pub fn plus(&self, other: &Self) -> Result<Self, PolyError> {
        let mut result = self.clone();
        result.add(other)?;
        Ok(result)
    }

    /// Subtracts `other` in place.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ArithmeticIncompat`] if the rings differ.
    pub fn sub(&mut self, other: &Self) -> Result<&mut Self, PolyError> {
        self.ring.check_same(&other.ring)?;
        for (d, c) in &other.terms {
            accumulate(&mut self.terms, *d, -c.clone());
        }
        Ok(self)
    }

    /// Returns `self - other`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ArithmeticIncompat`] if the rings differ.
    pub fn minus(&self, other: &Self) -> Result<Self, PolyError> {
        let mut result = self.clone();
        result.sub(other)?;
        Ok(result)
    }

    /// Negates in place.
    pub fn neg(&mut self) -> &mut Self {
        for c in self.terms.values_mut() {
            *c = -c.clone();
        }
        self
    }

    /// Returns `-self`.
    #[must_use]
    pub fn negated(&self) -> Self {
        let mut result = self.clone();
        result.neg();
        result
    }

    /// Multiplies every coefficient by `c` in place.
    pub fn scale(&mut self, c: &F::Elem) -> &mut Self {
        if c.is_zero() {
            self.terms.clear();
        } else if !c.is_one() {
            for v in self.terms.values_mut() {
                *v = v.clone() * c.clone();
            }
        }
        self
    }

    /// Returns `c · self`.
    #[must_use]
    pub fn scaled(&self, c: &F::Elem) -> Self {
        let mut result = self.clone();
        result.scale(c);
        result
    }

    /// Returns `c · x^shift.x · y^shift.y · self`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::Overflow`] if a shifted degree overflows.
    pub fn mul_term(&self, shift: Degree, c: &F::Elem) -> Result<Self, PolyError> {
        if c.is_zero() {
            return Ok(self.ring.zero());
        }
        let mut terms = Terms::default();
        for (d, v) in &self.terms {
            terms.insert(shift.add(*d)?, v.clone() * c.clone());
        }
        Self::reduced(&self.ring, terms)
    }

    /// Multiplies by `other` in place.
    ///
    /// Full convolution of the two term maps; in a quotient ring the raw
    /// product is then reduced by the ring's ideal.
    ///
    /// # Errors
    ///
    /// - [`PolyError::ArithmeticIncompat`] if the rings differ
    /// - [`PolyError::Overflow`] if a product degree overflows
    pub fn mul(&mut self, other: &Self) -> Result<&mut Self, PolyError> {
        self.terms = self.product_terms(other)?;
        Ok(self)
    }

    /// Returns `self · other`.
    ///
    /// # Errors
    ///
    /// Same as [`mul`](Self::mul).
    pub fn times(&self, other: &Self) -> Result<Self, PolyError> {
        Ok(Self::from_terms(&self.ring, self.product_terms(other)?))
    }

    fn product_terms(&self, other: &Self) -> Result<Terms<F::Elem>, PolyError> {
        self.ring.check_same(&other.ring)?;

        let mut terms = Terms::default();
        if self.is_zero() || other.is_zero() {
            return Ok(terms);
        }

        for (d1, c1) in &self.terms {
            for (d2, c2) in &other.terms {
                let d = d1.add(*d2)?;
                accumulate(&mut terms, d, c1.clone() * c2.clone());
            }
        }

        self.ring.reduce_terms(terms)
    }

    /// Computes `self^n` by repeated squaring.
    ///
    /// # Errors
    ///
    /// Propagates [`PolyError::Overflow`] from any intermediate product.
    pub fn pow(&self, n: u64) -> Result<Self, PolyError> {
        let mut result = self.ring.one()?;
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result.mul(&base).map_err(|e| PolyError::inherit("pow", e))?;
            }
            exp >>= 1;
            if exp > 0 {
                let square = base.times(&base).map_err(|e| PolyError::inherit("pow", e))?;
                base = square;
            }
        }

        Ok(result)
    }

    /// Scales so the leading coefficient becomes one. No-op on zero.
    ///
    /// # Errors
    ///
    /// Fails only if the field cannot invert the leading coefficient.
    pub fn normalize(&mut self) -> Result<&mut Self, PolyError> {
        if self.is_zero() {
            return Ok(self);
        }
        let inv = self.lc().inv()?;
        Ok(self.scale(&inv))
    }

    /// Returns the monic multiple of `self`.
    ///
    /// # Errors
    ///
    /// Same as [`normalize`](Self::normalize).
    pub fn normalized(&self) -> Result<Self, PolyError> {
        let mut result = self.clone();
        result.normalize()?;
        Ok(result)
    }

    /// Evaluates at the point (x, y).
    #[must_use]
    pub fn eval(&self, x: &F::Elem, y: &F::Elem) -> F::Elem {
        self.terms.iter().fold(F::Elem::zero(), |acc, (d, c)| {
            acc + c.clone() * x.pow(u64::from(d.x)) * y.pow(u64::from(d.y))
        })
    }

    /// Multivariate division by `divisors`, in list order.
    ///
    /// Returns quotients `q_i` and remainder `r` with
    /// `self = Σ q_i·g_i + r`, where no leading monomial of a divisor
    /// divides any monomial of `r`.
    ///
    /// # Errors
    ///
    /// - [`PolyError::ArithmeticIncompat`] if any divisor is from another ring
    /// - [`PolyError::Overflow`] if shifting a divisor overflows
    pub fn quo_rem(&self, divisors: &[&Self]) -> Result<(Vec<Self>, Self), PolyError> {
        self.quo_rem_with_ignore(None, divisors)
    }

    /// Remainder of the division by `divisors`.
    ///
    /// # Errors
    ///
    /// Same as [`quo_rem`](Self::quo_rem).
    pub fn rem(&self, divisors: &[&Self]) -> Result<Self, PolyError> {
        self.rem_with_ignore(None, divisors)
    }

    /// Division that treats the divisor at `skip` as absent.
    pub(crate) fn quo_rem_with_ignore(
        &self,
        skip: Option<usize>,
        divisors: &[&Self],
    ) -> Result<(Vec<Self>, Self), PolyError> {
        let division = self.run_division(skip, divisors, true)?;
        let quotients = division
            .quotients
            .into_iter()
            .map(|q| Self::from_terms(&self.ring, q))
            .collect();
        Ok((quotients, Self::from_terms(&self.ring, division.remainder)))
    }

    /// Remainder-only variant of [`quo_rem_with_ignore`](Self::quo_rem_with_ignore).
    pub(crate) fn rem_with_ignore(&self, skip: Option<usize>, divisors: &[&Self]) -> Result<Self, PolyError> {
        let division = self.run_division(skip, divisors, false)?;
        Ok(Self::from_terms(&self.ring, division.remainder))
    }

    fn run_division(
        &self,
        skip: Option<usize>,
        divisors: &[&Self],
        with_quotients: bool,
    ) -> Result<crate::division::Division<F::Elem>, PolyError> {
        for g in divisors {
            self.ring.check_same(&g.ring)?;
        }
        let maps: Vec<&Terms<F::Elem>> = divisors.iter().map(|g| &g.terms).collect();
        divide(self.ring.order(), &self.terms, &maps, skip, with_quotients)
    }
}

impl<F: Field> PartialEq for Polynomial<F> {
    fn eq(&self, other: &Self) -> bool {
        self.ring.same_ring(&other.ring) && self.terms == other.terms
    }
}

impl<F: Field> Eq for Polynomial<F> {}

impl<F: Field> fmt::Display for Polynomial<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let [x, y] = self.ring.var_names();
        let terms: Vec<String> = self
            .sorted_degrees()
            .into_iter()
            .map(|d| {
                let c = &self.terms[&d];
                let mut parts = Vec::new();
                if !c.is_one() || d == Degree::ZERO {
                    parts.push(c.to_string());
                }
                for (name, e) in [(x, d.x), (y, d.y)] {
                    match e {
                        0 => {}
                        1 => parts.push(name.to_string()),
                        _ => parts.push(format!("{name}^{e}")),
                    }
                }
                parts.join("*")
            })
            .collect();

        write!(f, "{}", terms.join(" + "))
    }
}

impl<F: Field> fmt::Debug for Polynomial<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polynomial({self} in {})", self.ring)
    }
}
