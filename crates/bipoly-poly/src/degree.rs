//! Exponent pairs for bivariate monomials.
//!
//! A `Degree` (dx, dy) identifies the monomial x^dx · y^dy. Degrees form a
//! commutative monoid under addition, and "divides" is the pointwise ≤
//! partial order.

use std::fmt;

use crate::error::PolyError;
use crate::ordering::Var;

/// The largest representable exponent.
pub const MAX_EXPONENT: u32 = u32::MAX;

/// The exponent pair of a monomial x^x · y^y.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Degree {
    /// Exponent of the first variable.
    pub x: u32,
    /// Exponent of the second variable.
    pub y: u32,
}

impl Degree {
    /// The degree of the constant monomial 1.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Creates a new degree.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Returns the exponent of one variable.
    #[must_use]
    pub const fn exponent(self, var: Var) -> u32 {
        match var {
            Var::X => self.x,
            Var::Y => self.y,
        }
    }

    /// Componentwise sum, i.e. the degree of the product of two monomials.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::Overflow`] if either component would exceed
    /// [`MAX_EXPONENT`].
    pub fn add(self, other: Self) -> Result<Self, PolyError> {
        match (self.x.checked_add(other.x), self.y.checked_add(other.y)) {
            (Some(x), Some(y)) => Ok(Self { x, y }),
            _ => Err(PolyError::Overflow {
                lhs: self,
                rhs: other,
            }),
        }
    }

    /// Componentwise difference.
    ///
    /// Returns `None` if `other` does not divide `self`. This is an expected
    /// outcome, not a failure.
    #[must_use]
    pub fn subtract(self, other: Self) -> Option<Self> {
        Some(Self {
            x: self.x.checked_sub(other.x)?,
            y: self.y.checked_sub(other.y)?,
        })
    }

    /// Returns true if the monomial of `self` divides that of `other`.
    #[must_use]
    pub const fn divides(self, other: Self) -> bool {
        self.x <= other.x && self.y <= other.y
    }

    /// Least common multiple (componentwise max).
    #[must_use]
    pub fn lcm(self, other: Self) -> Self {
        Self {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
        }
    }

    /// Greatest common divisor (componentwise min).
    #[must_use]
    pub fn gcd(self, other: Self) -> Self {
        Self {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
        }
    }

    /// Returns true if the two monomials share no variable.
    #[must_use]
    pub fn is_coprime(self, other: Self) -> bool {
        self.gcd(other) == Self::ZERO
    }

    /// Total degree dx + dy, which cannot overflow a u64.
    #[must_use]
    pub fn total(self) -> u64 {
        u64::from(self.x) + u64::from(self.y)
    }

    /// Weighted total degree wx·dx + wy·dy, which cannot overflow a u128.
    #[must_use]
    pub fn weighted(self, wx: u32, wy: u32) -> u128 {
        u128::from(wx) * u128::from(self.x) + u128::from(wy) * u128::from(self.y)
    }
}

impl From<(u32, u32)> for Degree {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
