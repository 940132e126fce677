//! Binary fields GF(2^k) with bit-packed elements.
//!
//! Bit i of an element is the coefficient of t^i. Addition is XOR and
//! multiplication is carry-less with reduction by the modulus of the `BinarySpec`.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::error::FieldError;
use crate::traits::{Element, Field};

/// Compile-time description of a binary field.
pub trait BinarySpec: Copy + Default + fmt::Debug + PartialEq + Eq + std::hash::Hash + 'static {
    /// The extension degree k, at most 63.
    const DEGREE: u32;

    /// Full bit pattern of the irreducible modulus, including the t^k bit.
    const MODULUS: u64;

    /// Display name.
    const NAME: &'static str;
}

/// An element of the binary field described by `S`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinaryElem<S: BinarySpec> {
    bits: u64,
    _spec: PhantomData<S>,
}

impl<S: BinarySpec> BinaryElem<S> {
    const MASK: u64 = (1u64 << S::DEGREE) - 1;

    /// Creates an element from its bit pattern, reducing if needed.
    #[must_use]
    pub fn new(bits: u64) -> Self {
        Self::from_wide(u128::from(bits))
    }

    /// Returns the bit pattern.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    fn from_wide(mut wide: u128) -> Self {
        let k = S::DEGREE;
        let modulus = u128::from(S::MODULUS);
        // Clear bits from the top down
        for i in (k..128).rev() {
            if (wide >> i) & 1 == 1 {
                wide ^= modulus << (i - k);
            }
        }
        Self {
            bits: (wide as u64) & Self::MASK,
            _spec: PhantomData,
        }
    }

    fn clmul(a: u64, b: u64) -> u128 {
        let mut acc = 0u128;
        let mut a = u128::from(a);
        let mut b = b;
        while b != 0 {
            if b & 1 == 1 {
                acc ^= a;
            }
            a <<= 1;
            b >>= 1;
        }
        acc
    }
}

impl<S: BinarySpec> Zero for BinaryElem<S> {
    fn zero() -> Self {
        Self {
            bits: 0,
            _spec: PhantomData,
        }
    }

    fn is_zero(&self) -> bool {
        self.bits == 0
    }
}

impl<S: BinarySpec> One for BinaryElem<S> {
    fn one() -> Self {
        Self {
            bits: 1,
            _spec: PhantomData,
        }
    }

    fn is_one(&self) -> bool {
        self.bits == 1
    }
}

impl<S: BinarySpec> Element for BinaryElem<S> {
    /// Inverts via a^(2^k - 2).
    fn inv(&self) -> Result<Self, FieldError> {
        if self.is_zero() {
            return Err(FieldError::DivisionByZero { field: S::NAME });
        }
        Ok(self.pow((1u64 << S::DEGREE) - 2))
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl<S: BinarySpec> Add for BinaryElem<S> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            bits: self.bits ^ rhs.bits,
            _spec: PhantomData,
        }
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl<S: BinarySpec> Sub for BinaryElem<S> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + rhs
    }
}

impl<S: BinarySpec> Neg for BinaryElem<S> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self
    }
}

impl<S: BinarySpec> Mul for BinaryElem<S> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_wide(Self::clmul(self.bits, rhs.bits))
    }
}

impl<S: BinarySpec> fmt::Debug for BinaryElem<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x} in {}", self.bits, S::NAME)
    }
}

impl<S: BinarySpec> fmt::Display for BinaryElem<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.bits)
    }
}

/// The binary field described by `S`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct BinaryField<S: BinarySpec>(PhantomData<S>);

impl<S: BinarySpec> BinaryField<S> {
    /// Creates the field.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }

    /// Creates an element of this field from a bit pattern.
    #[must_use]
    pub fn elem(&self, bits: u64) -> BinaryElem<S> {
        BinaryElem::new(bits)
    }
}

impl<S: BinarySpec> Field for BinaryField<S> {
    type Elem = BinaryElem<S>;

    fn name(&self) -> String {
        S::NAME.to_string()
    }

    fn characteristic(&self) -> u64 {
        2
    }

    fn cardinality(&self) -> u128 {
        1u128 << S::DEGREE
    }

    fn degree(&self) -> u32 {
        S::DEGREE
    }

    fn element(&self, index: u128) -> Option<Self::Elem> {
        if index >= self.cardinality() {
            return None;
        }
        Some(BinaryElem::new(index as u64))
    }
}

/// GF(16) = GF(2)[t] / (t^4 + t + 1).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Gf16Spec;

impl BinarySpec for Gf16Spec {
    const DEGREE: u32 = 4;
    const MODULUS: u64 = 0b1_0011;
    const NAME: &'static str = "GF(16)";
}

/// GF(256) with the AES modulus t^8 + t^4 + t^3 + t + 1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Gf256Spec;

impl BinarySpec for Gf256Spec {
    const DEGREE: u32 = 8;
    const MODULUS: u64 = 0x11B;
    const NAME: &'static str = "GF(256)";
}

/// GF(16).
pub type GF16 = BinaryField<Gf16Spec>;

/// GF(256).
pub type GF256 = BinaryField<Gf256Spec>;
