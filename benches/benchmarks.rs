use criterion::{black_box, criterion_group, criterion_main, Criterion};
use euler_bench::core::{Computation, Opaque};
use euler_bench::puzzles::multiples;

fn benchmark_opaque_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("Opaque");
    let inputs = (multiples::LIMIT, multiples::X, multiples::Y);

    group.bench_function("direct", |b| {
        b.iter(|| {
            let (l, x, y) = black_box(inputs);
            multiples::sum_of_multiples(l, x, y)
        });
    });

    let wrapped = Opaque::bind(|(l, x, y)| multiples::sum_of_multiples(l, x, y), inputs);
    group.bench_function("invoke", |b| b.iter(|| wrapped.invoke()));

    group.finish();
}

criterion_group!(benches, benchmark_opaque_overhead);
criterion_main!(benches);
