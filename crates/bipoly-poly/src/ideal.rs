//! Ideals of a bivariate polynomial ring.
//!
//! An [`Ideal`] is an ordered list of nonzero generators together with three
//! memoized facts about that list: whether it is a Gröbner basis, whether it
//! is minimal, and whether it is reduced. The facts start out [`Tristate::Unknown`]
//! and are settled by the query or transform that determines them.
//!
//! Buchberger's algorithm itself lives in [`crate::groebner`].

use std::cell::Cell;
use std::fmt;

use bipoly_fields::Field;
use tracing::{debug, instrument};

use crate::degree::Degree;
use crate::error::PolyError;
use crate::groebner::s_polynomial;
use crate::polynomial::Polynomial;
use crate::ring::Ring;

/// A memoized boolean that may not have been decided yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tristate {
    /// Not computed yet.
    #[default]
    Unknown,
    /// Known to hold.
    True,
    /// Known not to hold.
    False,
}

impl Tristate {
    /// Returns the decided value, if any.
    #[must_use]
    pub const fn resolved(self) -> Option<bool> {
        match self {
            Self::Unknown => None,
            Self::True => Some(true),
            Self::False => Some(false),
        }
    }
}

impl From<bool> for Tristate {
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}

/// An ideal given by a finite generating set.
///
/// The generator list only changes through [`minimize_basis`](Self::minimize_basis)
/// and [`reduce_basis`](Self::reduce_basis), which keep the flags consistent.
/// Queries such as [`is_groebner`](Self::is_groebner) take `&self` and record
/// their answer in interior cells.
#[derive(Clone)]
pub struct Ideal<F: Field> {
    ring: Ring<F>,
    generators: Vec<Polynomial<F>>,
    groebner: Cell<Tristate>,
    minimal: Cell<Tristate>,
    reduced: Cell<Tristate>,
}

impl<F: Field> Ideal<F> {
    /// Creates the ideal generated by `generators`.
    ///
    /// Zero generators are dropped.
    ///
    /// # Errors
    ///
    /// - [`PolyError::InputValue`] if no nonzero generator remains
    /// - [`PolyError::ArithmeticIncompat`] if a generator belongs to another ring
    pub fn new(ring: &Ring<F>, generators: Vec<Polynomial<F>>) -> Result<Self, PolyError> {
        for g in &generators {
            ring.check_same(g.ring())?;
        }

        let generators: Vec<_> = generators.into_iter().filter(|g| !g.is_zero()).collect();
        if generators.is_empty() {
            return Err(PolyError::InputValue(
                "an ideal needs at least one nonzero generator".into(),
            ));
        }

        Ok(Self::with_flags(
            ring,
            generators,
            Tristate::Unknown,
            Tristate::Unknown,
            Tristate::Unknown,
        ))
    }

    /// Creates an ideal whose flags are already known.
    pub(crate) fn with_flags(
        ring: &Ring<F>,
        generators: Vec<Polynomial<F>>,
        groebner: Tristate,
        minimal: Tristate,
        reduced: Tristate,
    ) -> Self {
        debug_assert!(generators.iter().all(|g| !g.is_zero()));
        Self {
            ring: ring.clone(),
            generators,
            groebner: Cell::new(groebner),
            minimal: Cell::new(minimal),
            reduced: Cell::new(reduced),
        }
    }

    /// Returns the owning ring.
    #[must_use]
    pub fn ring(&self) -> &Ring<F> {
        &self.ring
    }

    /// Returns the generators in order.
    #[must_use]
    pub fn generators(&self) -> &[Polynomial<F>] {
        &self.generators
    }

    /// Returns the number of generators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Always false: an ideal keeps at least one generator.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Leading degrees of the generators, in generator order.
    #[must_use]
    pub fn leading_degrees(&self) -> Vec<Degree> {
        self.generators.iter().map(Polynomial::ld).collect()
    }

    /// Cached Gröbner flag, without computing anything.
    #[must_use]
    pub fn known_groebner(&self) -> Tristate {
        self.groebner.get()
    }

    /// Cached minimality flag, without computing anything.
    #[must_use]
    pub fn known_minimal(&self) -> Tristate {
        self.minimal.get()
    }

    /// Cached reducedness flag, without computing anything.
    #[must_use]
    pub fn known_reduced(&self) -> Tristate {
        self.reduced.get()
    }

    fn refs(&self) -> Vec<&Polynomial<F>> {
        self.generators.iter().collect()
    }

    /// Decides whether the generators form a Gröbner basis.
    ///
    /// Every pairwise S-polynomial must reduce to zero modulo the generators.
    /// Pairs with coprime leading monomials are skipped (Buchberger's first
    /// criterion). The answer is cached.
    ///
    /// # Errors
    ///
    /// Propagates degree overflow from S-polynomial construction.
    #[instrument(skip_all, level = "trace")]
    pub fn is_groebner(&self) -> Result<bool, PolyError> {
        if let Some(known) = self.groebner.get().resolved() {
            return Ok(known);
        }

        let gens = self.refs();
        let mut answer = true;
        'pairs: for i in 0..gens.len() {
            for j in (i + 1)..gens.len() {
                if gens[i].ld().is_coprime(gens[j].ld()) {
                    continue;
                }
                let s = s_polynomial(gens[i], gens[j])?;
                if !s.rem(&gens)?.is_zero() {
                    answer = false;
                    break 'pairs;
                }
            }
        }

        self.groebner.set(answer.into());
        Ok(answer)
    }

    /// Decides whether the generators form a minimal Gröbner basis.
    ///
    /// A basis that is not Gröbner is never minimal. Otherwise no leading
    /// monomial may be divisible by another generator's leading monomial.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`is_groebner`](Self::is_groebner).
    pub fn is_minimal(&self) -> Result<bool, PolyError> {
        if let Some(known) = self.minimal.get().resolved() {
            return Ok(known);
        }

        let answer = self.is_groebner()? && self.redundant_generator()?.is_none();
        self.minimal.set(answer.into());
        Ok(answer)
    }

    /// Decides whether the generators form a reduced Gröbner basis.
    ///
    /// A basis that is not minimal is never reduced. Otherwise no monomial of
    /// any generator may be divisible by the leading monomial of another.
    /// Leading coefficients are not required to be one.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`is_minimal`](Self::is_minimal).
    pub fn is_reduced(&self) -> Result<bool, PolyError> {
        if let Some(known) = self.reduced.get().resolved() {
            return Ok(known);
        }

        let answer = self.is_minimal()? && {
            let leads = self.leading_degrees();
            self.generators.iter().enumerate().all(|(i, g)| {
                g.terms().all(|(d, _)| {
                    leads
                        .iter()
                        .enumerate()
                        .all(|(j, lead)| j == i || !lead.divides(d))
                })
            })
        };
        self.reduced.set(answer.into());
        Ok(answer)
    }

    /// Index of the first generator whose leading term is a multiple of
    /// another generator's leading term.
    ///
    /// The test divides the leading terms by each other with the divisor at
    /// the candidate's own index ignored.
    fn redundant_generator(&self) -> Result<Option<usize>, PolyError> {
        let leads: Vec<Polynomial<F>> = self.generators.iter().map(Polynomial::lt).collect();
        let refs: Vec<&Polynomial<F>> = leads.iter().collect();

        for (i, lt) in leads.iter().enumerate() {
            if lt.rem_with_ignore(Some(i), &refs)?.is_zero() {
                return Ok(Some(i));
            }
        }
        Ok(None)
    }

    /// Drops generators whose leading term is divisible by another's.
    ///
    /// Scans restart after each removal, so of two generators with the same
    /// leading monomial the first one is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InputValue`] if the ideal is not a Gröbner basis.
    #[instrument(skip_all, level = "trace")]
    pub fn minimize_basis(&mut self) -> Result<&mut Self, PolyError> {
        if !self.is_groebner()? {
            return Err(PolyError::InputValue(
                "minimization requires a Gröbner basis".into(),
            ));
        }
        if self.minimal.get() == Tristate::True {
            return Ok(self);
        }

        let mut dropped = 0usize;
        while let Some(i) = self.redundant_generator()? {
            let g = self.generators.remove(i);
            debug!(generator = %g, "dropped redundant generator");
            dropped += 1;
        }

        if dropped > 0 {
            self.reduced.set(Tristate::Unknown);
        }
        self.minimal.set(Tristate::True);
        debug!(dropped, remaining = self.generators.len(), "minimized basis");
        Ok(self)
    }

    /// Turns the Gröbner basis into the reduced Gröbner basis.
    ///
    /// Minimizes first, then replaces every generator by its remainder
    /// modulo all the others. Each generator is made monic and the list is
    /// sorted by descending leading monomial, so equal ideals give equal
    /// generator lists.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InputValue`] if the ideal is not a Gröbner basis.
    #[instrument(skip_all, level = "trace")]
    pub fn reduce_basis(&mut self) -> Result<&mut Self, PolyError> {
        self.minimize_basis()?;

        for i in 0..self.generators.len() {
            let mut r = {
                let refs = self.refs();
                refs[i].rem_with_ignore(Some(i), &refs)?
            };
            // A minimal basis keeps its leading term under reduction
            debug_assert!(!r.is_zero());
            r.normalize()?;
            self.generators[i] = r;
        }

        let order = self.ring.order();
        self.generators.sort_by(|a, b| order.compare(&b.ld(), &a.ld()));

        self.reduced.set(Tristate::True);
        Ok(self)
    }

    /// Replaces `f` by its normal form modulo this ideal.
    ///
    /// If the generators are not known to be a Gröbner basis, this ideal is
    /// upgraded in place to one first, so later calls reuse it.
    ///
    /// # Errors
    ///
    /// - [`PolyError::ArithmeticIncompat`] if `f` belongs to another ring
    /// - any failure of the Gröbner computation
    pub fn reduce(&mut self, f: &mut Polynomial<F>) -> Result<(), PolyError> {
        self.ring.check_same(f.ring())?;

        if !self.is_groebner()? {
            *self = self.groebner_basis()?;
        }

        *f = f.rem(&self.refs())?;
        Ok(())
    }

    /// Ideal membership: true if `f` reduces to zero.
    ///
    /// # Errors
    ///
    /// Same as [`reduce`](Self::reduce).
    pub fn contains(&mut self, f: &Polynomial<F>) -> Result<bool, PolyError> {
        let mut normal = f.clone();
        self.reduce(&mut normal)?;
        Ok(normal.is_zero())
    }
}

impl<F: Field> fmt::Display for Ideal<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gens: Vec<String> = self.generators.iter().map(ToString::to_string).collect();
        write!(f, "({})", gens.join(", "))
    }
}

impl<F: Field> fmt::Debug for Ideal<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ideal")
            .field("generators", &self.generators)
            .field("groebner", &self.groebner.get())
            .field("minimal", &self.minimal.get())
            .field("reduced", &self.reduced.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::ordering::{Order, Var};
    use bipoly_fields::{Field, GF7, GF9};

    fn lex() -> Ring<GF7> {
        Ring::new(GF7::new(), ["x", "y"], Order::Lex(Var::X))
    }

    /// y^3 - x^4 + y, x^9 - x, y^9 - y over GF(9) with wdeglex(3,4; y>x).
    fn gf9_triple() -> (Ring<GF9>, Vec<Polynomial<GF9>>) {
        let r = Ring::new(GF9::new(), ["x", "y"], Order::wdeglex(3, 4, Var::Y));
        let gens = vec![
            r.from_ints([((0, 3), 1), ((4, 0), -1), ((0, 1), 1)]).unwrap(),
            r.from_ints([((9, 0), 1), ((1, 0), -1)]).unwrap(),
            r.from_ints([((0, 9), 1), ((0, 1), -1)]).unwrap(),
        ];
        (r, gens)
    }

    #[test]
    fn test_new_drops_zeros() {
        let r = lex();
        let ideal = Ideal::new(&r, vec![r.zero(), r.x().unwrap(), r.zero()]).unwrap();
        assert_eq!(ideal.len(), 1);
        assert_eq!(ideal.known_groebner(), Tristate::Unknown);
    }

    #[test]
    fn test_new_rejects_empty() {
        let r = lex();
        let err = Ideal::new(&r, vec![r.zero()]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputValue);
        assert_eq!(Ideal::new(&r, vec![]).unwrap_err().kind(), ErrorKind::InputValue);
    }

    #[test]
    fn test_new_rejects_foreign_generator() {
        let r = lex();
        let s = lex();
        let err = Ideal::new(&r, vec![r.x().unwrap(), s.y().unwrap()]).unwrap_err();
        assert_eq!(err, PolyError::ArithmeticIncompat);
    }

    #[test]
    fn test_tristate() {
        assert_eq!(Tristate::default(), Tristate::Unknown);
        assert_eq!(Tristate::from(true).resolved(), Some(true));
        assert_eq!(Tristate::False.resolved(), Some(false));
        assert_eq!(Tristate::Unknown.resolved(), None);
    }

    #[test]
    fn test_is_groebner_caches() {
        let r = lex();
        // x - y and x - 1: S-polynomial is y - 1, which does not reduce
        let ideal = Ideal::new(
            &r,
            vec![
                r.from_ints([((1, 0), 1), ((0, 1), -1)]).unwrap(),
                r.from_ints([((1, 0), 1), ((0, 0), -1)]).unwrap(),
            ],
        )
        .unwrap();

        assert!(!ideal.is_groebner().unwrap());
        assert_eq!(ideal.known_groebner(), Tristate::False);
        assert!(!ideal.is_minimal().unwrap());
        assert!(!ideal.is_reduced().unwrap());
    }

    #[test]
    fn test_minimize_requires_groebner() {
        let r = lex();
        let mut ideal = Ideal::new(
            &r,
            vec![
                r.from_ints([((1, 0), 1), ((0, 1), -1)]).unwrap(),
                r.from_ints([((1, 0), 1), ((0, 0), -1)]).unwrap(),
            ],
        )
        .unwrap();

        let err = ideal.minimize_basis().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputValue);
        assert_eq!(ideal.len(), 2);
        assert_eq!(ideal.reduce_basis().unwrap_err().kind(), ErrorKind::InputValue);
    }

    #[test]
    fn test_minimize_gf9_triple() {
        let (r, gens) = gf9_triple();
        let expected = vec![gens[0].clone(), gens[1].clone()];
        let mut ideal = Ideal::new(&r, gens).unwrap();

        assert!(ideal.is_groebner().unwrap());
        assert!(!ideal.is_minimal().unwrap());

        ideal.minimize_basis().unwrap();
        assert_eq!(ideal.generators(), expected.as_slice());
        assert!(ideal.is_minimal().unwrap());

        // Idempotent
        ideal.minimize_basis().unwrap();
        assert_eq!(ideal.generators(), expected.as_slice());
    }

    #[test]
    fn test_minimize_keeps_one_of_equal_leads() {
        let r = lex();
        let a = r.from_ints([((1, 0), 1)]).unwrap();
        let b = r.from_ints([((1, 0), 2)]).unwrap();
        let mut ideal = Ideal::new(&r, vec![a, b.clone()]).unwrap();

        ideal.minimize_basis().unwrap();
        assert_eq!(ideal.generators(), &[b]);
    }

    #[test]
    fn test_minimal_but_not_reduced() {
        let r = lex();
        // x + y and y: leading terms x and y, but y also divides a tail term
        let mut ideal = Ideal::new(
            &r,
            vec![
                r.from_ints([((1, 0), 1), ((0, 1), 1)]).unwrap(),
                r.y().unwrap(),
            ],
        )
        .unwrap();

        assert!(ideal.is_groebner().unwrap());
        assert!(ideal.is_minimal().unwrap());
        assert!(!ideal.is_reduced().unwrap());
        assert_eq!(ideal.known_reduced(), Tristate::False);

        ideal.reduce_basis().unwrap();
        assert_eq!(ideal.generators(), &[r.x().unwrap(), r.y().unwrap()]);
        assert!(ideal.is_reduced().unwrap());
    }

    #[test]
    fn test_redundant_generator_index() {
        let (r, gens) = gf9_triple();
        let mut ideal = Ideal::new(&r, gens).unwrap();

        // y^9 is a multiple of y^3
        assert_eq!(ideal.redundant_generator(), Ok(Some(2)));
        ideal.minimize_basis().unwrap();
        assert_eq!(ideal.redundant_generator(), Ok(None));
    }

    #[test]
    fn test_reduce_basis_is_monic_and_sorted() {
        let r = lex();
        // 3y and 2x + y: reduced basis is {x, y}
        let mut ideal = Ideal::new(
            &r,
            vec![
                r.from_ints([((0, 1), 3)]).unwrap(),
                r.from_ints([((1, 0), 2), ((0, 1), 1)]).unwrap(),
            ],
        )
        .unwrap();

        assert!(ideal.is_groebner().unwrap());
        ideal.reduce_basis().unwrap();

        assert_eq!(ideal.generators(), &[r.x().unwrap(), r.y().unwrap()]);
        assert_eq!(ideal.known_reduced(), Tristate::True);
        assert!(ideal.is_reduced().unwrap());
    }

    #[test]
    fn test_reduce_upgrades_in_place() {
        let r = lex();
        let mut ideal = Ideal::new(
            &r,
            vec![
                r.from_ints([((1, 0), 1), ((0, 1), -1)]).unwrap(),
                r.from_ints([((1, 0), 1), ((0, 0), -1)]).unwrap(),
            ],
        )
        .unwrap();

        // The ideal is (x - 1, y - 1); x*y - 1 lies in it
        let mut f = r.from_ints([((1, 1), 1), ((0, 0), -1)]).unwrap();
        ideal.reduce(&mut f).unwrap();
        assert!(f.is_zero());
        assert_eq!(ideal.known_groebner(), Tristate::True);

        assert!(!ideal.contains(&r.x().unwrap()).unwrap());
        let x_minus_y = r.from_ints([((1, 0), 1), ((0, 1), -1)]).unwrap();
        assert!(ideal.contains(&x_minus_y).unwrap());
    }

    #[test]
    fn test_reduce_foreign_polynomial() {
        let r = lex();
        let s = lex();
        let mut ideal = Ideal::new(&r, vec![r.x().unwrap()]).unwrap();
        let mut f = s.x().unwrap();
        assert_eq!(ideal.reduce(&mut f).unwrap_err(), PolyError::ArithmeticIncompat);
    }

    #[test]
    fn test_leading_degrees_and_display() {
        let (r, gens) = gf9_triple();
        let ideal = Ideal::new(&r, gens).unwrap();
        assert_eq!(
            ideal.leading_degrees(),
            vec![Degree::new(0, 3), Degree::new(9, 0), Degree::new(0, 9)]
        );
        assert!(r.field().characteristic() == 3);
        assert!(ideal.to_string().starts_with('('));
    }
}
