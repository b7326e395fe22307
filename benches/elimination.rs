use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mathbeta::Matrix;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_elimination(c: &mut Criterion) {
    let n = 100;
    let mut rng = StdRng::seed_from_u64(1);
    let values: Vec<f64> = (0..n * n).map(|i| (i as f64).sin()).collect();
    let a = Matrix::new(n, n, &values).unwrap();
    let b = Matrix::random_with(n, n, &mut rng);

    c.bench_function("determinant 100x100", |ben| {
        ben.iter(|| black_box(&a).determinant().unwrap())
    });

    c.bench_function("inverse 100x100", |ben| {
        ben.iter(|| black_box(&b).inverse())
    });

    c.bench_function("rank 100x100", |ben| ben.iter(|| black_box(&a).rank()));

    c.bench_function("multiply 100x100", |ben| {
        ben.iter(|| black_box(&a).multiply(black_box(&b)).unwrap())
    });
}

criterion_group!(benches, bench_elimination);
criterion_main!(benches);
