//! The multivariate division algorithm.
//!
//! Works directly on coefficient maps so that both [`Polynomial`] and the
//! quotient-ring reduction inside [`Ring`] can share it.
//!
//! [`Polynomial`]: crate::polynomial::Polynomial
//! [`Ring`]: crate::ring::Ring

use bipoly_fields::Element;
use rustc_hash::FxHashMap;

use crate::degree::Degree;
use crate::error::PolyError;
use crate::ordering::MonomialOrder;

/// Sparse coefficient map. Never contains a zero coefficient.
pub(crate) type Terms<E> = FxHashMap<Degree, E>;

/// Quotients and remainder of a division.
#[derive(Debug)]
pub(crate) struct Division<E> {
    pub quotients: Vec<Terms<E>>,
    pub remainder: Terms<E>,
}

/// Returns the greatest term under `order`, or `None` for the zero map.
pub(crate) fn leading<'a, E>(order: &dyn MonomialOrder, terms: &'a Terms<E>) -> Option<(Degree, &'a E)> {
    terms
        .iter()
        .max_by(|a, b| order.compare(a.0, b.0))
        .map(|(d, c)| (*d, c))
}

/// Adds `c` to the coefficient at `d`, dropping the entry if it cancels.
pub(crate) fn accumulate<E: Element>(terms: &mut Terms<E>, d: Degree, c: E) {
    if c.is_zero() {
        return;
    }
    match terms.remove(&d) {
        Some(old) => {
            let sum = old + c;
            if !sum.is_zero() {
                terms.insert(d, sum);
            }
        }
        None => {
            terms.insert(d, c);
        }
    }
}

/// Divides `dividend` by `divisors` in list order.
///
/// Produces `q_i` and `r` with `dividend = Σ q_i·g_i + r`, where no leading
/// monomial of a divisor divides any monomial of `r`. The divisor at index
/// `skip` is treated as absent, and zero divisors never divide. When
/// `with_quotients` is false the quotient maps are left empty.
///
/// # Errors
///
/// Returns [`PolyError::Overflow`] if shifting a divisor overflows a degree,
/// or a field error if a leading coefficient fails to invert.
pub(crate) fn divide<E: Element>(
    order: &dyn MonomialOrder,
    dividend: &Terms<E>,
    divisors: &[&Terms<E>],
    skip: Option<usize>,
    with_quotients: bool,
) -> Result<Division<E>, PolyError> {
    let leads: Vec<Option<(Degree, E)>> = divisors
        .iter()
        .enumerate()
        .map(|(i, g)| {
            if skip == Some(i) {
                None
            } else {
                leading(order, g).map(|(d, c)| (d, c.clone()))
            }
        })
        .collect();

    let mut quotients: Vec<Terms<E>> = if with_quotients {
        vec![Terms::default(); divisors.len()]
    } else {
        Vec::new()
    };
    let mut remainder = Terms::default();
    let mut p = dividend.clone();

    while let Some((ld, lc)) = leading(order, &p).map(|(d, c)| (d, c.clone())) {
        let hit = leads.iter().enumerate().find_map(|(i, lead)| {
            let (gd, gc) = lead.as_ref()?;
            ld.subtract(*gd).map(|shift| (i, shift, gc))
        });

        match hit {
            Some((i, shift, gc)) => {
                let c = if gc.is_one() { lc } else { lc.div(gc)? };
                if with_quotients {
                    accumulate(&mut quotients[i], shift, c.clone());
                }
                // p -= c · x^shift · g_i; the leading terms cancel exactly
                for (e, ge) in divisors[i] {
                    let d = shift.add(*e)?;
                    accumulate(&mut p, d, -(c.clone() * ge.clone()));
                }
            }
            None => {
                p.remove(&ld);
                remainder.insert(ld, lc);
            }
        }
    }

    Ok(Division {
        quotients,
        remainder,
    })
}
