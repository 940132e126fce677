//! Field and element capability traits.
//!
//! These traits are the only surface the polynomial kernel relies on.
//! Elements are self-contained values: everything needed to add or multiply
//! them is carried by their type, so the kernel never has to consult the
//! field object for arithmetic.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{Neg, Sub};

use num_traits::{One, Zero};
use rand::Rng;

use crate::error::FieldError;

/// An element of a finite field.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and commutative with identity `one()`
/// - Multiplication distributes over addition
/// - Every nonzero element has a multiplicative inverse
pub trait Element:
    Clone + Eq + Hash + Debug + Display + Zero + One + Sub<Output = Self> + Neg<Output = Self>
{
    /// Computes the multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::DivisionByZero`] if the element is zero.
    fn inv(&self) -> Result<Self, FieldError>;

    /// Divides by another element.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::DivisionByZero`] if `other` is zero.
    fn div(&self, other: &Self) -> Result<Self, FieldError> {
        Ok(self.clone() * other.inv()?)
    }

    /// Returns true if this is not the additive identity.
    fn is_nonzero(&self) -> bool {
        !self.is_zero()
    }

    /// Computes self^n using binary exponentiation.
    #[must_use]
    fn pow(&self, n: u64) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

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

/// A finite field, used to produce and characterize its elements.
///
/// Implementations must map every index `i < characteristic()` to the
/// constant `i · 1`, which is what [`Field::from_i64`] relies on.
pub trait Field: Clone + Debug + PartialEq + Eq {
    /// The element type of this field.
    type Elem: Element;

    /// Short human-readable name, e.g. `GF(7)`.
    fn name(&self) -> String;

    /// The characteristic p.
    fn characteristic(&self) -> u64;

    /// The number of elements, p^k.
    fn cardinality(&self) -> u128;

    /// Returns the element with the given canonical index.
    ///
    /// Indices run from 0 to `cardinality() - 1`; `None` past the end.
    fn element(&self, index: u128) -> Option<Self::Elem>;

    /// The additive identity.
    fn zero(&self) -> Self::Elem {
        Self::Elem::zero()
    }

    /// The multiplicative identity.
    fn one(&self) -> Self::Elem {
        Self::Elem::one()
    }

    /// The degree of the field over its prime subfield.
    fn degree(&self) -> u32 {
        let p = u128::from(self.characteristic());
        let mut q = self.cardinality();
        let mut k = 0;
        while q > 1 {
            q /= p;
            k += 1;
        }
        k
    }

    /// Maps an integer into the prime subfield.
    fn from_i64(&self, n: i64) -> Self::Elem {
        let p = i128::from(self.characteristic());
        let r = i128::from(n).rem_euclid(p);
        // r < p <= cardinality, so the index is always in range
        self.element(r.unsigned_abs()).unwrap_or_else(|| self.zero())
    }

    /// Iterates over every element in index order.
    fn elements(&self) -> Elements<'_, Self> {
        Elements {
            field: self,
            next: 0,
        }
    }

    /// Draws a uniformly random element from the supplied source.
    fn random_element<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Elem {
        let index = rng.gen_range(0..self.cardinality());
        self.element(index).unwrap_or_else(|| self.zero())
    }
}

/// Iterator over all elements of a field, see [`Field::elements`].
#[derive(Debug)]
pub struct Elements<'a, F: Field> {
    field: &'a F,
    next: u128,
}

impl<F: Field> Iterator for Elements<'_, F> {
    type Item = F::Elem;

    fn next(&mut self) -> Option<Self::Item> {
        let elem = self.field.element(self.next)?;
        self.next += 1;
        Some(elem)
    }
}
