//! Monomial orders on bivariate exponent pairs.
//!
//! Every order here is total and compatible with the monoid structure:
//! a ≤ b implies a + c ≤ b + c. That compatibility is what makes the
//! division algorithm and Buchberger's algorithm terminate.

use std::cmp::Ordering;
use std::fmt;

use crate::degree::Degree;

/// One of the two ring variables.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Var {
    /// The first variable.
    #[default]
    X,
    /// The second variable.
    Y,
}

impl Var {
    /// Returns the other variable.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Var::X => Var::Y,
            Var::Y => Var::X,
        }
    }
}

/// A monomial order.
///
/// Implementations must be pure: the same pair of degrees always compares
/// the same way, and the relation is a total, monoid-compatible well-order.
pub trait MonomialOrder: fmt::Debug {
    /// Compares two monomials.
    fn compare(&self, a: &Degree, b: &Degree) -> Ordering;

    /// Returns a short name for the order.
    fn name(&self) -> String {
        format!("{self:?}")
    }
}

/// The built-in monomial orders.
///
/// Each is parameterized by which variable is considered larger.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Order {
    /// Lexicographic order: the larger variable dominates entirely.
    Lex(Var),

    /// Graded lexicographic order.
    ///
    /// First compares total degree, then uses lex as tiebreaker.
    DegLex(Var),

    /// Graded reverse lexicographic order.
    ///
    /// First compares total degree; on a tie, the monomial with the smaller
    /// exponent in the smaller variable wins.
    DegRevLex(Var),

    /// Weighted degree wx·dx + wy·dy first, then lex.
    WDegLex {
        /// Weight of x.
        wx: u32,
        /// Weight of y.
        wy: u32,
        /// The variable that wins lex ties.
        larger: Var,
    },

    /// Weighted degree wx·dx + wy·dy first, then reverse lex.
    WDegRevLex {
        /// Weight of x.
        wx: u32,
        /// Weight of y.
        wy: u32,
        /// The variable that wins reverse-lex ties.
        larger: Var,
    },
}

impl Order {
    /// Weighted lex order with weights `(wx, wy)`.
    #[must_use]
    pub const fn wdeglex(wx: u32, wy: u32, larger: Var) -> Self {
        Order::WDegLex { wx, wy, larger }
    }

    /// Weighted reverse-lex order with weights `(wx, wy)`.
    #[must_use]
    pub const fn wdegrevlex(wx: u32, wy: u32, larger: Var) -> Self {
        Order::WDegRevLex { wx, wy, larger }
    }

    /// Returns the variable this order considers larger.
    #[must_use]
    pub const fn larger(&self) -> Var {
        match *self {
            Order::Lex(v) | Order::DegLex(v) | Order::DegRevLex(v) => v,
            Order::WDegLex { larger, .. } | Order::WDegRevLex { larger, .. } => larger,
        }
    }
}

impl Default for Order {
    fn default() -> Self {
        Order::DegRevLex(Var::X)
    }
}

impl MonomialOrder for Order {
    fn compare(&self, a: &Degree, b: &Degree) -> Ordering {
        match *self {
            Order::Lex(v) => cmp_lex(a, b, v),
            Order::DegLex(v) => a.total().cmp(&b.total()).then_with(|| cmp_lex(a, b, v)),
            Order::DegRevLex(v) => a.total().cmp(&b.total()).then_with(|| cmp_revlex(a, b, v)),
            Order::WDegLex { wx, wy, larger } => a
                .weighted(wx, wy)
                .cmp(&b.weighted(wx, wy))
                .then_with(|| cmp_lex(a, b, larger)),
            Order::WDegRevLex { wx, wy, larger } => a
                .weighted(wx, wy)
                .cmp(&b.weighted(wx, wy))
                .then_with(|| cmp_revlex(a, b, larger)),
        }
    }

    fn name(&self) -> String {
        let var = |v: Var| match v {
            Var::X => "x>y",
            Var::Y => "y>x",
        };
        match *self {
            Order::Lex(v) => format!("lex({})", var(v)),
            Order::DegLex(v) => format!("deglex({})", var(v)),
            Order::DegRevLex(v) => format!("degrevlex({})", var(v)),
            Order::WDegLex { wx, wy, larger } => format!("wdeglex({wx},{wy};{})", var(larger)),
            Order::WDegRevLex { wx, wy, larger } => {
                format!("wdegrevlex({wx},{wy};{})", var(larger))
            }
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Compares lexicographically with `larger` as the dominant variable.
pub fn cmp_lex(a: &Degree, b: &Degree, larger: Var) -> Ordering {
    let smaller = larger.other();
    a.exponent(larger)
        .cmp(&b.exponent(larger))
        .then_with(|| a.exponent(smaller).cmp(&b.exponent(smaller)))
}

/// Compares in reverse lex: the smaller variable is inspected first and a
/// lower exponent there wins.
///
/// On its own this is not a monomial order; it is only ever used to break
/// ties between monomials of equal (weighted) degree.
pub fn cmp_revlex(a: &Degree, b: &Degree, larger: Var) -> Ordering {
    let smaller = larger.other();
    b.exponent(smaller)
        .cmp(&a.exponent(smaller))
        .then_with(|| b.exponent(larger).cmp(&a.exponent(larger)))
}

/// A user-defined order backed by a comparison closure.
///
/// The closure must satisfy the same laws as any [`MonomialOrder`].
pub struct FnOrder<C> {
    name: String,
    cmp: C,
}

impl<C> FnOrder<C>
where
    C: Fn(&Degree, &Degree) -> Ordering,
{
    /// Wraps a comparison closure.
    pub fn new(name: impl Into<String>, cmp: C) -> Self {
        Self {
            name: name.into(),
            cmp,
        }
    }
}

impl<C> fmt::Debug for FnOrder<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnOrder").field("name", &self.name).finish()
    }
}

impl<C> MonomialOrder for FnOrder<C>
where
    C: Fn(&Degree, &Degree) -> Ordering,
{
    fn compare(&self, a: &Degree, b: &Degree) -> Ordering {
        (self.cmp)(a, b)
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}
