//! Benchmarks for polynomial multiplication and Buchberger's algorithm.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashSet;

use bipoly_fields::{Field, GF256, GF7};
use bipoly_poly::{Degree, GroebnerConfig, Ideal, Order, Polynomial, Ring, Var};

/// A random polynomial with `terms` distinct monomials of degree below `deg`
/// in each variable, all with nonzero coefficients.
fn random_poly<F: Field>(ring: &Ring<F>, rng: &mut ChaCha8Rng, terms: usize, deg: u32) -> Polynomial<F> {
    let field = ring.field();
    let mut seen = FxHashSet::default();
    let mut pairs: Vec<(Degree, F::Elem)> = Vec::with_capacity(terms);

    while pairs.len() < terms.min((deg as usize) * (deg as usize)) {
        let d = Degree::new(rng.gen_range(0..deg), rng.gen_range(0..deg));
        if seen.insert(d) {
            let index = rng.gen_range(1..field.cardinality());
            pairs.push((d, field.element(index).unwrap()));
        }
    }
    ring.polynomial(pairs).unwrap()
}

fn bench_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_mul");
    let ring = Ring::new(GF7::new(), ["x", "y"], Order::DegRevLex(Var::X));
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for terms in [8, 32, 128] {
        let p = random_poly(&ring, &mut rng, terms, 32);
        let q = random_poly(&ring, &mut rng, terms, 32);

        group.bench_with_input(BenchmarkId::new("gf7", terms), &terms, |b, _| {
            b.iter(|| black_box(p.times(&q).unwrap()))
        });
    }

    let ring = Ring::new(GF256::new(), ["x", "y"], Order::DegRevLex(Var::X));
    for terms in [8, 32, 128] {
        let p = random_poly(&ring, &mut rng, terms, 32);
        let q = random_poly(&ring, &mut rng, terms, 32);

        group.bench_with_input(BenchmarkId::new("gf256", terms), &terms, |b, _| {
            b.iter(|| black_box(p.times(&q).unwrap()))
        });
    }

    group.finish();
}

fn bench_groebner(c: &mut Criterion) {
    let mut group = c.benchmark_group("groebner");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let orders = [
        ("lex", Order::Lex(Var::X)),
        ("degrevlex", Order::DegRevLex(Var::X)),
        ("wdeglex", Order::wdeglex(3, 4, Var::Y)),
    ];

    for (name, order) in orders {
        let ring = Ring::new(GF7::new(), ["x", "y"], order);
        let gens: Vec<_> = (0..3).map(|_| random_poly(&ring, &mut rng, 4, 4)).collect();
        let ideal = Ideal::new(&ring, gens).unwrap();

        group.bench_function(BenchmarkId::new("default", name), |b| {
            b.iter(|| black_box(ideal.groebner_basis().unwrap()))
        });

        let plain = GroebnerConfig::plain();
        group.bench_function(BenchmarkId::new("plain", name), |b| {
            b.iter(|| black_box(ideal.groebner_basis_with(&plain).unwrap()))
        });
    }

    group.finish();
}

fn bench_reduce_basis(c: &mut Criterion) {
    let ring = Ring::new(GF7::new(), ["x", "y"], Order::DegRevLex(Var::X));
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let gens: Vec<_> = (0..3).map(|_| random_poly(&ring, &mut rng, 4, 4)).collect();
    let gb = Ideal::new(&ring, gens).unwrap().groebner_basis().unwrap();

    c.bench_function("reduce_basis", |b| {
        b.iter(|| {
            let mut basis = gb.clone();
            basis.reduce_basis().unwrap();
            black_box(basis)
        })
    });
}

criterion_group!(benches, bench_multiplication, bench_groebner, bench_reduce_basis);
criterion_main!(benches);
