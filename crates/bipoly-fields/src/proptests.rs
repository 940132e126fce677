//! Property-based tests for the reference fields.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::traits::{Element, Field};
    use crate::{GF256, GF27, GF7, GF9};

    fn elem_of<F: Field + 'static>(field: F) -> impl Strategy<Value = F::Elem> {
        let n = u64::try_from(field.cardinality()).unwrap_or(u64::MAX);
        (0..n).prop_map(move |i| field.element(u128::from(i)).unwrap())
    }

    macro_rules! field_axioms {
        ($name:ident, $field:expr) => {
            mod $name {
                use super::*;

                proptest! {
                    #[test]
                    fn add_commutative(a in elem_of($field), b in elem_of($field)) {
                        prop_assert_eq!(a.clone() + b.clone(), b + a);
                    }

                    #[test]
                    fn mul_associative(a in elem_of($field), b in elem_of($field), c in elem_of($field)) {
                        prop_assert_eq!(
                            (a.clone() * b.clone()) * c.clone(),
                            a * (b * c)
                        );
                    }

                    #[test]
                    fn distributive(a in elem_of($field), b in elem_of($field), c in elem_of($field)) {
                        prop_assert_eq!(
                            a.clone() * (b.clone() + c.clone()),
                            a.clone() * b + a * c
                        );
                    }

                    #[test]
                    fn additive_inverse(a in elem_of($field)) {
                        prop_assert!((a.clone() + (-a.clone())).is_zero());
                        prop_assert!((a.clone() - a).is_zero());
                    }

                    #[test]
                    fn multiplicative_inverse(a in elem_of($field)) {
                        prop_assume!(a.is_nonzero());
                        let inv = a.inv().unwrap();
                        prop_assert!((a * inv).is_one());
                    }
                }
            }
        };
    }

    field_axioms!(gf7, GF7::new());
    field_axioms!(gf9, GF9::new());
    field_axioms!(gf27, GF27::new());
    field_axioms!(gf256, GF256::new());

    #[test]
    fn random_elements_are_reproducible() {
        let field = GF27::new();
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        let xs: Vec<_> = (0..16).map(|_| field.random_element(&mut a)).collect();
        let ys: Vec<_> = (0..16).map(|_| field.random_element(&mut b)).collect();
        assert_eq!(xs, ys);
    }
}
