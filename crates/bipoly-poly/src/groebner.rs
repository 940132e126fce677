//! Buchberger's algorithm.
//!
//! The engine keeps a queue of critical pairs. Each pair is taken out once,
//! its S-polynomial is reduced by the whole current basis, and a nonzero
//! remainder is appended together with its pairs against every earlier
//! generator. The algorithm stops when the queue is empty.
//!
//! Two classical criteria discard pairs whose S-polynomial is known to
//! reduce to zero:
//! - Product criterion: the leading monomials are coprime
//! - Chain criterion: a third generator's leading monomial divides the lcm
//!   and both of its pairs with the current pair are already done

use bipoly_fields::{Element, Field};
use rustc_hash::FxHashSet;
use tracing::{debug, event, instrument, Level};

use crate::degree::Degree;
use crate::error::PolyError;
use crate::ideal::{Ideal, Tristate};
use crate::polynomial::Polynomial;

/// Configuration for Buchberger's algorithm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroebnerConfig {
    /// Skip pairs with coprime leading monomials.
    pub use_product_criterion: bool,
    /// Skip pairs covered by a third generator.
    pub use_chain_criterion: bool,
    /// Take the pair with the smallest lcm first instead of the oldest.
    pub normal_selection: bool,
}

impl Default for GroebnerConfig {
    fn default() -> Self {
        Self {
            use_product_criterion: true,
            use_chain_criterion: true,
            normal_selection: true,
        }
    }
}

impl GroebnerConfig {
    /// Plain Buchberger: every pair in creation order, no criteria.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            use_product_criterion: false,
            use_chain_criterion: false,
            normal_selection: false,
        }
    }
}

/// Counters collected during one Gröbner basis computation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroebnerStats {
    /// Pairs whose S-polynomial was reduced.
    pub pairs_reduced: usize,
    /// Pairs discarded by the product criterion.
    pub product_skips: usize,
    /// Pairs discarded by the chain criterion.
    pub chain_skips: usize,
    /// S-polynomials that reduced to zero.
    pub zero_reductions: usize,
    /// Generators appended to the basis.
    pub additions: usize,
}

/// Checks Buchberger's first criterion on two leading monomials.
#[must_use]
pub fn product_criterion(lm_f: Degree, lm_g: Degree) -> bool {
    lm_f.is_coprime(lm_g)
}

/// The monic monomial lcm(f, g) of two single-term polynomials.
///
/// # Errors
///
/// - [`PolyError::ArithmeticIncompat`] if the rings differ
/// - [`PolyError::InputValue`] if either argument is not a single term
pub fn monomial_lcm<F: Field>(f: &Polynomial<F>, g: &Polynomial<F>) -> Result<Polynomial<F>, PolyError> {
    f.ring().check_same(g.ring())?;
    if !f.is_monomial() || !g.is_monomial() {
        return Err(PolyError::InputValue(format!(
            "monomial lcm of non-monomials {f} and {g}"
        )));
    }

    let ring = f.ring();
    ring.monomial(f.ld().lcm(g.ld()), ring.field().one())
}

/// The S-polynomial `(m / lt(f))·f − (m / lt(g))·g`, where `m` is the lcm
/// of the leading monomials.
///
/// # Errors
///
/// - [`PolyError::ArithmeticIncompat`] if the rings differ
/// - [`PolyError::InputValue`] if either argument is zero
/// - [`PolyError::Overflow`] if a shifted degree overflows
pub fn s_polynomial<F: Field>(f: &Polynomial<F>, g: &Polynomial<F>) -> Result<Polynomial<F>, PolyError> {
    f.ring().check_same(g.ring())?;
    if f.is_zero() || g.is_zero() {
        return Err(PolyError::InputValue(
            "S-polynomial of the zero polynomial".into(),
        ));
    }

    let m = monomial_lcm(&f.lt(), &g.lt())?.ld();
    let (Some(shift_f), Some(shift_g)) = (m.subtract(f.ld()), m.subtract(g.ld())) else {
        unreachable!("lcm {m} is divisible by both leading monomials");
    };

    let left = f.mul_term(shift_f, &f.lc().inv()?)?;
    let right = g.mul_term(shift_g, &g.lc().inv()?)?;
    left.minus(&right)
}

impl<F: Field> Polynomial<F> {
    /// The S-polynomial of `self` and `other`, see [`s_polynomial`].
    ///
    /// # Errors
    ///
    /// Same as [`s_polynomial`].
    pub fn s_polynomial(&self, other: &Self) -> Result<Self, PolyError> {
        s_polynomial(self, other)
    }
}

struct PairQueue {
    pending: Vec<(usize, usize)>,
    done: FxHashSet<(usize, usize)>,
}

impl PairQueue {
    fn new(n: usize) -> Self {
        let mut queue = Self {
            pending: Vec::new(),
            done: FxHashSet::default(),
        };
        for j in 1..n {
            queue.extend(j);
        }
        queue
    }

    /// Adds the pairs of generator `k` against all earlier ones.
    fn extend(&mut self, k: usize) {
        self.pending.extend((0..k).map(|i| (i, k)));
    }

    fn is_done(&self, i: usize, j: usize) -> bool {
        let key = if i < j { (i, j) } else { (j, i) };
        self.done.contains(&key)
    }

    fn take<F: Field>(&mut self, basis: &[Polynomial<F>], normal: bool) -> Option<(usize, usize)> {
        if self.pending.is_empty() {
            return None;
        }

        let index = if normal {
            let order = basis[0].ring().order();
            let lcm = |&(i, j): &(usize, usize)| basis[i].ld().lcm(basis[j].ld());
            let mut best = 0;
            for k in 1..self.pending.len() {
                if order.compare(&lcm(&self.pending[k]), &lcm(&self.pending[best])).is_lt() {
                    best = k;
                }
            }
            best
        } else {
            0
        };

        let pair = self.pending.remove(index);
        self.done.insert(pair);
        Some(pair)
    }
}

fn chain_criterion<F: Field>(i: usize, j: usize, basis: &[Polynomial<F>], queue: &PairQueue) -> bool {
    let lcm = basis[i].ld().lcm(basis[j].ld());
    basis.iter().enumerate().any(|(k, h)| {
        k != i && k != j && h.ld().divides(lcm) && queue.is_done(i, k) && queue.is_done(j, k)
    })
}

impl<F: Field> Ideal<F> {
    /// Computes a Gröbner basis with the default configuration.
    ///
    /// Returns a new ideal; `self` is not changed.
    ///
    /// # Errors
    ///
    /// Propagates degree overflow, wrapped with the context
    /// `"groebner basis"`.
    pub fn groebner_basis(&self) -> Result<Self, PolyError> {
        self.groebner_basis_with(&GroebnerConfig::default())
    }

    /// Computes a Gröbner basis with an explicit configuration.
    ///
    /// The result is flagged as a Gröbner basis; minimality and
    /// reducedness are left undecided.
    ///
    /// # Errors
    ///
    /// Same as [`groebner_basis`](Self::groebner_basis).
    pub fn groebner_basis_with(&self, config: &GroebnerConfig) -> Result<Self, PolyError> {
        self.groebner_basis_with_stats(config).map(|(ideal, _)| ideal)
    }

    /// Like [`groebner_basis_with`](Self::groebner_basis_with), also
    /// returning counters about the run.
    ///
    /// # Errors
    ///
    /// Same as [`groebner_basis`](Self::groebner_basis).
    #[instrument(skip_all, level = "trace")]
    pub fn groebner_basis_with_stats(
        &self,
        config: &GroebnerConfig,
    ) -> Result<(Self, GroebnerStats), PolyError> {
        let mut stats = GroebnerStats::default();

        if self.known_groebner() == Tristate::True {
            return Ok((self.clone(), stats));
        }

        let mut basis: Vec<Polynomial<F>> = self.generators().to_vec();
        let mut queue = PairQueue::new(basis.len());
        event!(Level::TRACE, generators = basis.len(), pairs = queue.pending.len());

        while let Some((i, j)) = queue.take(&basis, config.normal_selection) {
            if config.use_product_criterion && product_criterion(basis[i].ld(), basis[j].ld()) {
                stats.product_skips += 1;
                continue;
            }
            if config.use_chain_criterion && chain_criterion(i, j, &basis, &queue) {
                stats.chain_skips += 1;
                continue;
            }

            stats.pairs_reduced += 1;
            let remainder = {
                let s = s_polynomial(&basis[i], &basis[j])
                    .map_err(|e| PolyError::inherit("groebner basis", e))?;
                let refs: Vec<&Polynomial<F>> = basis.iter().collect();
                s.rem(&refs)
                    .map_err(|e| PolyError::inherit("groebner basis", e))?
            };

            if remainder.is_zero() {
                stats.zero_reductions += 1;
                continue;
            }

            event!(Level::TRACE, pair = ?(i, j), lead = %remainder.ld(), "new basis element");
            queue.extend(basis.len());
            basis.push(remainder);
            stats.additions += 1;
        }

        debug!(
            input = self.len(),
            output = basis.len(),
            reduced = stats.pairs_reduced,
            skipped = stats.product_skips + stats.chain_skips,
            "groebner basis done"
        );

        let ideal = Ideal::with_flags(
            self.ring(),
            basis,
            Tristate::True,
            Tristate::Unknown,
            Tristate::Unknown,
        );
        Ok((ideal, stats))
    }
}
