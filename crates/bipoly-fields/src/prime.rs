//! Prime fields GF(p).

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::error::FieldError;
use crate::traits::{Element, Field};

/// An element of GF(P) with a compile-time prime modulus.
///
/// The stored value is always reduced into `0..P`. Intermediate products
/// are computed in u128, so any prime below 2^64 works.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PrimeElem<const P: u64>(u64);

impl<const P: u64> PrimeElem<P> {
    /// Creates a new field element.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value % P)
    }

    /// Creates a field element from a signed value.
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        let r = i128::from(value).rem_euclid(i128::from(P));
        // 0 <= r < P, so it fits
        Self(r.unsigned_abs() as u64)
    }

    /// Returns the canonical representative in `0..P`.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the modulus.
    #[must_use]
    pub const fn modulus() -> u64 {
        P
    }
}

impl<const P: u64> Zero for PrimeElem<P> {
    fn zero() -> Self {
        Self(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl<const P: u64> One for PrimeElem<P> {
    fn one() -> Self {
        Self(1 % P)
    }

    fn is_one(&self) -> bool {
        self.0 == 1
    }
}

impl<const P: u64> Element for PrimeElem<P> {
    /// Extended Euclidean algorithm over i128.
    fn inv(&self) -> Result<Self, FieldError> {
        if self.0 == 0 {
            return Err(FieldError::DivisionByZero { field: "GF(p)" });
        }

        let mut t = 0i128;
        let mut new_t = 1i128;
        let mut r = i128::from(P);
        let mut new_r = i128::from(self.0);

        while new_r != 0 {
            let quotient = r / new_r;
            (t, new_t) = (new_t, t - quotient * new_t);
            (r, new_r) = (new_r, r - quotient * new_r);
        }

        // r > 1 only when P is not prime
        if r > 1 {
            return Err(FieldError::DivisionByZero { field: "GF(p)" });
        }

        let t = t.rem_euclid(i128::from(P));
        Ok(Self(t.unsigned_abs() as u64))
    }
}

impl<const P: u64> fmt::Debug for PrimeElem<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.0, P)
    }
}

impl<const P: u64> fmt::Display for PrimeElem<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<const P: u64> Add for PrimeElem<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let sum = (u128::from(self.0) + u128::from(rhs.0)) % u128::from(P);
        Self(sum as u64)
    }
}

impl<const P: u64> Sub for PrimeElem<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let diff = (u128::from(P) + u128::from(self.0) - u128::from(rhs.0)) % u128::from(P);
        Self(diff as u64)
    }
}

impl<const P: u64> Mul for PrimeElem<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(((u128::from(self.0) * u128::from(rhs.0)) % u128::from(P)) as u64)
    }
}

impl<const P: u64> Neg for PrimeElem<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.0 == 0 {
            Self(0)
        } else {
            Self(P - self.0)
        }
    }
}

impl<const P: u64> From<u64> for PrimeElem<P> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<const P: u64> From<i64> for PrimeElem<P> {
    fn from(value: i64) -> Self {
        Self::from_signed(value)
    }
}

/// The prime field GF(P).
///
/// Zero-sized: the modulus lives in the type, so two `PrimeField<P>` values
/// are always the same field.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct PrimeField<const P: u64>(PhantomData<PrimeElem<P>>);

impl<const P: u64> PrimeField<P> {
    /// Creates the field.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }

    /// Creates an element of this field.
    #[must_use]
    pub const fn elem(&self, value: u64) -> PrimeElem<P> {
        PrimeElem::new(value)
    }
}

impl<const P: u64> Field for PrimeField<P> {
    type Elem = PrimeElem<P>;

    fn name(&self) -> String {
        format!("GF({P})")
    }

    fn characteristic(&self) -> u64 {
        P
    }

    fn cardinality(&self) -> u128 {
        u128::from(P)
    }

    fn degree(&self) -> u32 {
        1
    }

    fn element(&self, index: u128) -> Option<Self::Elem> {
        u64::try_from(index)
            .ok()
            .filter(|&i| i < P)
            .map(PrimeElem)
    }

    fn from_i64(&self, n: i64) -> Self::Elem {
        PrimeElem::from_signed(n)
    }
}

/// GF(2), the field with two elements.
pub type GF2 = PrimeField<2>;

/// GF(3).
pub type GF3 = PrimeField<3>;

/// GF(7).
pub type GF7 = PrimeField<7>;
