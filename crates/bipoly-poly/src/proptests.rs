//! Property-based tests for orders, arithmetic and Gröbner bases.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::degree::Degree;
    use crate::ideal::Ideal;
    use crate::ordering::{MonomialOrder, Order, Var};
    use crate::polynomial::Polynomial;
    use crate::ring::Ring;
    use bipoly_fields::GF7;

    type Terms = Vec<((u32, u32), i64)>;

    fn small_degree() -> impl Strategy<Value = Degree> {
        (0u32..12, 0u32..12).prop_map(|(x, y)| Degree::new(x, y))
    }

    fn any_var() -> impl Strategy<Value = Var> {
        prop_oneof![Just(Var::X), Just(Var::Y)]
    }

    fn any_order() -> impl Strategy<Value = Order> {
        prop_oneof![
            any_var().prop_map(Order::Lex),
            any_var().prop_map(Order::DegLex),
            any_var().prop_map(Order::DegRevLex),
            (1u32..6, 1u32..6, any_var()).prop_map(|(wx, wy, v)| Order::wdeglex(wx, wy, v)),
            (1u32..6, 1u32..6, any_var()).prop_map(|(wx, wy, v)| Order::wdegrevlex(wx, wy, v)),
        ]
    }

    // Up to `len` terms with exponents below `deg`
    fn terms(deg: u32, len: usize) -> impl Strategy<Value = Terms> {
        proptest::collection::vec(((0..deg, 0..deg), -3i64..4), 0..=len)
    }

    fn nonzero_terms(deg: u32, len: usize) -> impl Strategy<Value = Terms> {
        proptest::collection::vec(((0..deg, 0..deg), 1i64..7), 1..=len)
    }

    fn ring(order: Order) -> Ring<GF7> {
        Ring::new(GF7::new(), ["x", "y"], order)
    }

    fn build(r: &Ring<GF7>, t: &Terms) -> Polynomial<GF7> {
        r.from_ints(t.iter().copied()).unwrap()
    }

    proptest! {
        // Monomial orders

        #[test]
        fn order_antisymmetric(order in any_order(), a in small_degree(), b in small_degree()) {
            prop_assert_eq!(order.compare(&a, &b), order.compare(&b, &a).reverse());
            prop_assert_eq!(order.compare(&a, &b).is_eq(), a == b);
        }

        #[test]
        fn order_transitive(
            order in any_order(),
            a in small_degree(),
            b in small_degree(),
            c in small_degree(),
        ) {
            if order.compare(&a, &b).is_le() && order.compare(&b, &c).is_le() {
                prop_assert!(order.compare(&a, &c).is_le());
            }
        }

        #[test]
        fn order_monoid_compatible(
            order in any_order(),
            a in small_degree(),
            b in small_degree(),
            c in small_degree(),
        ) {
            let ac = a.add(c).unwrap();
            let bc = b.add(c).unwrap();
            prop_assert_eq!(order.compare(&a, &b), order.compare(&ac, &bc));
        }

        #[test]
        fn order_one_is_smallest(order in any_order(), a in small_degree()) {
            prop_assert!(order.compare(&Degree::ZERO, &a).is_le());
        }

        // Ring axioms

        #[test]
        fn add_commutative(order in any_order(), a in terms(5, 5), b in terms(5, 5)) {
            let r = ring(order);
            let (a, b) = (build(&r, &a), build(&r, &b));
            prop_assert_eq!(a.plus(&b).unwrap(), b.plus(&a).unwrap());
        }

        #[test]
        fn mul_commutative(a in terms(5, 4), b in terms(5, 4)) {
            let r = ring(Order::default());
            let (a, b) = (build(&r, &a), build(&r, &b));
            prop_assert_eq!(a.times(&b).unwrap(), b.times(&a).unwrap());
        }

        #[test]
        fn mul_associative(a in terms(4, 3), b in terms(4, 3), c in terms(4, 3)) {
            let r = ring(Order::default());
            let (a, b, c) = (build(&r, &a), build(&r, &b), build(&r, &c));
            prop_assert_eq!(
                a.times(&b).unwrap().times(&c).unwrap(),
                a.times(&b.times(&c).unwrap()).unwrap()
            );
        }

        #[test]
        fn distributive(a in terms(4, 4), b in terms(4, 4), c in terms(4, 4)) {
            let r = ring(Order::default());
            let (a, b, c) = (build(&r, &a), build(&r, &b), build(&r, &c));
            let left = a.times(&b.plus(&c).unwrap()).unwrap();
            let right = a.times(&b).unwrap().plus(&a.times(&c).unwrap()).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn sub_then_add_is_identity(a in terms(5, 5), b in terms(5, 5)) {
            let r = ring(Order::default());
            let (a, b) = (build(&r, &a), build(&r, &b));
            let mut c = a.minus(&b).unwrap();
            c.add(&b).unwrap();
            prop_assert_eq!(c, a);
        }

        #[test]
        fn eval_is_homomorphism(a in terms(4, 4), b in terms(4, 4), x in 0i64..7, y in 0i64..7) {
            use bipoly_fields::Field;

            let r = ring(Order::default());
            let (a, b) = (build(&r, &a), build(&r, &b));
            let (x, y) = (r.field().from_i64(x), r.field().from_i64(y));
            let product = a.times(&b).unwrap();
            prop_assert_eq!(product.eval(&x, &y), a.eval(&x, &y) * b.eval(&x, &y));
        }

        // Division

        #[test]
        fn division_invariant(
            order in any_order(),
            f in terms(6, 6),
            gs in proptest::collection::vec(nonzero_terms(4, 3), 1..=3),
        ) {
            let r = ring(order);
            let f = build(&r, &f);
            let gs: Vec<_> = gs.iter().map(|g| build(&r, g)).collect();
            let refs: Vec<&Polynomial<GF7>> = gs.iter().collect();

            let (qs, rem) = f.quo_rem(&refs).unwrap();
            prop_assert_eq!(qs.len(), gs.len());

            let mut back = rem.clone();
            for (q, g) in qs.iter().zip(&gs) {
                back.add(&q.times(g).unwrap()).unwrap();
            }
            prop_assert_eq!(&back, &f);

            for (d, _) in rem.terms() {
                for g in gs.iter().filter(|g| !g.is_zero()) {
                    prop_assert!(!g.ld().divides(d));
                }
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        // Gröbner bases

        #[test]
        fn buchberger_is_correct(
            order in any_order(),
            gens in proptest::collection::vec(nonzero_terms(4, 3), 1..=3),
        ) {
            let r = ring(order);
            let gens: Vec<_> = gens.iter().map(|g| build(&r, g)).collect();
            prop_assume!(gens.iter().any(|g| !g.is_zero()));
            let ideal = Ideal::new(&r, gens.clone()).unwrap();

            let gb = ideal.groebner_basis().unwrap();
            let fresh = Ideal::new(&r, gb.generators().to_vec()).unwrap();
            prop_assert!(fresh.is_groebner().unwrap());

            let refs: Vec<&Polynomial<GF7>> = gb.generators().iter().collect();
            for g in &gens {
                prop_assert!(g.rem(&refs).unwrap().is_zero());
            }

            // Every S-polynomial of the basis reduces to zero
            for i in 0..refs.len() {
                for j in (i + 1)..refs.len() {
                    let s = refs[i].s_polynomial(refs[j]).unwrap();
                    prop_assert!(s.rem(&refs).unwrap().is_zero());
                }
            }
        }

        #[test]
        fn minimize_is_idempotent(gens in proptest::collection::vec(nonzero_terms(4, 3), 1..=3)) {
            let r = ring(Order::default());
            let gens: Vec<_> = gens.iter().map(|g| build(&r, g)).collect();
            prop_assume!(gens.iter().any(|g| !g.is_zero()));

            let mut gb = Ideal::new(&r, gens).unwrap().groebner_basis().unwrap();
            gb.minimize_basis().unwrap();
            let once = gb.generators().to_vec();
            gb.minimize_basis().unwrap();
            prop_assert_eq!(gb.generators(), once.as_slice());
            prop_assert!(gb.is_minimal().unwrap());
        }

        #[test]
        fn reduced_basis_is_canonical(
            order in any_order(),
            f in nonzero_terms(4, 3),
            g in nonzero_terms(4, 3),
            h in terms(3, 2),
        ) {
            let r = ring(order);
            let (f, g, h) = (build(&r, &f), build(&r, &g), build(&r, &h));
            prop_assume!(!f.is_zero() && !g.is_zero());

            // (f, g) and (f, g + h*f) generate the same ideal
            let g2 = g.plus(&h.times(&f).unwrap()).unwrap();
            prop_assume!(!g2.is_zero());

            let mut a = Ideal::new(&r, vec![f.clone(), g]).unwrap().groebner_basis().unwrap();
            let mut b = Ideal::new(&r, vec![g2, f]).unwrap().groebner_basis().unwrap();
            a.reduce_basis().unwrap();
            b.reduce_basis().unwrap();

            prop_assert_eq!(a.generators(), b.generators());
            prop_assert!(a.is_reduced().unwrap());
        }
    }
}
