//! Extension fields GF(p^k).
//!
//! Elements are polynomials over GF(p) of degree below k, reduced modulo a
//! fixed monic irreducible polynomial supplied by an [`ExtensionSpec`].

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};
use smallvec::SmallVec;

use crate::error::FieldError;
use crate::traits::{Element, Field};

/// Compile-time description of an extension field.
///
/// # Example
///
/// ```ignore
/// // GF(9) = GF(3)[i] / (i^2 + 1)
/// impl ExtensionSpec for Gf9Spec {
///     const CHARACTERISTIC: u64 = 3;
///     const MODULUS: &'static [u64] = &[1, 0];
///     const NAME: &'static str = "GF(9)";
/// }
/// ```
pub trait ExtensionSpec: Copy + Default + fmt::Debug + PartialEq + Eq + std::hash::Hash + 'static {
    /// The prime p. Must be below 2^32 so products fit a u64 accumulator.
    const CHARACTERISTIC: u64;

    /// Low-order coefficients `[c_0, ..., c_{k-1}]` of the monic irreducible
    /// modulus `t^k + c_{k-1} t^{k-1} + ... + c_0`.
    const MODULUS: &'static [u64];

    /// Display name.
    const NAME: &'static str;

    /// The extension degree k.
    #[must_use]
    fn degree() -> usize {
        Self::MODULUS.len()
    }
}

type Coeffs = SmallVec<[u64; 4]>;

/// An element of the extension field described by `S`.
///
/// Always holds exactly k coefficients, lowest power first.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ExtElem<S: ExtensionSpec> {
    coeffs: Coeffs,
    _spec: PhantomData<S>,
}

impl<S: ExtensionSpec> ExtElem<S> {
    fn from_coeffs(mut coeffs: Coeffs) -> Self {
        coeffs.resize(S::degree(), 0);
        Self {
            coeffs,
            _spec: PhantomData,
        }
    }

    /// Creates an element from its coefficients over GF(p), lowest first.
    ///
    /// Coefficients are reduced mod p; extra high coefficients are folded in
    /// through the modulus.
    #[must_use]
    pub fn new(coeffs: &[u64]) -> Self {
        let p = S::CHARACTERISTIC;
        let mut wide: Coeffs = coeffs.iter().map(|&c| c % p).collect();
        reduce::<S>(&mut wide);
        Self::from_coeffs(wide)
    }

    /// Creates the constant `value mod p`.
    #[must_use]
    pub fn constant(value: u64) -> Self {
        Self::new(&[value])
    }

    /// The generator t of the extension (the class of the indeterminate).
    #[must_use]
    pub fn generator() -> Self {
        Self::new(&[0, 1])
    }

    /// Returns the coefficients over GF(p), lowest power first.
    #[must_use]
    pub fn coeffs(&self) -> &[u64] {
        &self.coeffs
    }

    fn cardinality() -> u128 {
        u128::from(S::CHARACTERISTIC).pow(S::degree() as u32)
    }

    fn pow_u128(&self, mut exp: u128) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// Reduces a coefficient vector of any length modulo the modulus of `S`.
fn reduce<S: ExtensionSpec>(coeffs: &mut Coeffs) {
    let p = S::CHARACTERISTIC;
    let k = S::degree();

    // t^k = -(c_{k-1} t^{k-1} + ... + c_0)
    while coeffs.len() > k {
        let Some(top) = coeffs.pop() else { break };
        if top == 0 {
            continue;
        }
        let base = coeffs.len() - k;
        for (j, &m) in S::MODULUS.iter().enumerate() {
            let sub = (top * m) % p;
            coeffs[base + j] = (coeffs[base + j] + p - sub) % p;
        }
    }
}

impl<S: ExtensionSpec> Zero for ExtElem<S> {
    fn zero() -> Self {
        Self::from_coeffs(Coeffs::new())
    }

    fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0)
    }
}

impl<S: ExtensionSpec> One for ExtElem<S> {
    fn one() -> Self {
        Self::constant(1)
    }

    fn is_one(&self) -> bool {
        self.coeffs.first() == Some(&1) && self.coeffs.iter().skip(1).all(|&c| c == 0)
    }
}

impl<S: ExtensionSpec> Element for ExtElem<S> {
    /// Inverts via a^(q-2), since the multiplicative group has order q-1.
    fn inv(&self) -> Result<Self, FieldError> {
        if self.is_zero() {
            return Err(FieldError::DivisionByZero { field: S::NAME });
        }
        Ok(self.pow_u128(Self::cardinality() - 2))
    }
}

impl<S: ExtensionSpec> Add for ExtElem<S> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let p = S::CHARACTERISTIC;
        let coeffs = self
            .coeffs
            .iter()
            .zip(&rhs.coeffs)
            .map(|(&a, &b)| (a + b) % p)
            .collect();
        Self::from_coeffs(coeffs)
    }
}

impl<S: ExtensionSpec> Sub for ExtElem<S> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<S: ExtensionSpec> Neg for ExtElem<S> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let p = S::CHARACTERISTIC;
        let coeffs = self.coeffs.iter().map(|&c| (p - c) % p).collect();
        Self::from_coeffs(coeffs)
    }
}

impl<S: ExtensionSpec> Mul for ExtElem<S> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let p = S::CHARACTERISTIC;
        let k = S::degree();
        if k == 0 {
            return self;
        }

        // Schoolbook product, then fold down through the modulus
        let mut prod: Coeffs = SmallVec::from_elem(0, 2 * k - 1);
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                prod[i + j] = (prod[i + j] + a * b % p) % p;
            }
        }
        reduce::<S>(&mut prod);
        Self::from_coeffs(prod)
    }
}

impl<S: ExtensionSpec> fmt::Debug for ExtElem<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self} in {}", S::NAME)
    }
}

impl<S: ExtensionSpec> fmt::Display for ExtElem<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        for (i, &c) in self.coeffs.iter().enumerate().rev() {
            if c == 0 {
                continue;
            }
            parts.push(match (i, c) {
                (0, _) => format!("{c}"),
                (1, 1) => "t".to_string(),
                (1, _) => format!("{c}*t"),
                (_, 1) => format!("t^{i}"),
                _ => format!("{c}*t^{i}"),
            });
        }
        if parts.is_empty() {
            write!(f, "0")
        } else {
            write!(f, "{}", parts.join(" + "))
        }
    }
}

/// The extension field described by `S`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct ExtensionField<S: ExtensionSpec>(PhantomData<S>);

impl<S: ExtensionSpec> ExtensionField<S> {
    /// Creates the field.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }

    /// The generator t of the extension.
    #[must_use]
    pub fn generator(&self) -> ExtElem<S> {
        ExtElem::generator()
    }
}

impl<S: ExtensionSpec> Field for ExtensionField<S> {
    type Elem = ExtElem<S>;

    fn name(&self) -> String {
        S::NAME.to_string()
    }

    fn characteristic(&self) -> u64 {
        S::CHARACTERISTIC
    }

    fn cardinality(&self) -> u128 {
        ExtElem::<S>::cardinality()
    }

    fn degree(&self) -> u32 {
        S::degree() as u32
    }

    /// Index digits in base p are the coefficients, lowest first.
    fn element(&self, index: u128) -> Option<Self::Elem> {
        if index >= self.cardinality() {
            return None;
        }
        let p = u128::from(S::CHARACTERISTIC);
        let mut rest = index;
        let mut coeffs = Coeffs::new();
        for _ in 0..S::degree() {
            coeffs.push((rest % p) as u64);
            rest /= p;
        }
        Some(ExtElem::from_coeffs(coeffs))
    }
}

/// GF(9) = GF(3)[t] / (t^2 + 1).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Gf9Spec;

impl ExtensionSpec for Gf9Spec {
    const CHARACTERISTIC: u64 = 3;
    const MODULUS: &'static [u64] = &[1, 0];
    const NAME: &'static str = "GF(9)";
}

/// GF(27) = GF(3)[t] / (t^3 + 2t + 1).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Gf27Spec;

impl ExtensionSpec for Gf27Spec {
    const CHARACTERISTIC: u64 = 3;
    const MODULUS: &'static [u64] = &[1, 2, 0];
    const NAME: &'static str = "GF(27)";
}

/// GF(9).
pub type GF9 = ExtensionField<Gf9Spec>;

/// GF(27).
pub type GF27 = ExtensionField<Gf27Spec>;
