use criterion::{black_box, criterion_group, criterion_main, Criterion};

use phonecmp::PHONE_COMPARATOR;

/// A mix of the shapes the comparator sees in practice: identical pairs,
/// trunk and exit-code variants, and near-misses that must not match.
fn setup_pairs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("650-253-0000", "6502530000"),
        ("+1 650-253-0000", "650-253-0000"),
        ("011 1 700 555 4141", "+17005554141"),
        ("090-1234-5678", "+819012345678"),
        ("+79161234567", "89161234567"),
        ("+36 1 234 5678", "06 1234-5678"),
        ("008001231234", "8001231234"),
        ("+19012345678", "+819012345678"),
        ("550-450-3605", "+14504503605"),
        ("123456789", "923456789"),
        ("999", "999"),
    ]
}

fn compare_benchmark(c: &mut Criterion) {
    let pairs = setup_pairs();

    let mut group = c.benchmark_group("Equivalence");

    group.bench_function("compare_loosely", |b| {
        b.iter(|| {
            for &(a, n) in &pairs {
                let _ = PHONE_COMPARATOR.compare_loosely(black_box(Some(a)), black_box(Some(n)));
            }
        })
    });

    group.bench_function("compare_strict", |b| {
        b.iter(|| {
            for &(a, n) in &pairs {
                let _ = PHONE_COMPARATOR.compare_strict(black_box(Some(a)), black_box(Some(n)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, compare_benchmark);
criterion_main!(benches);
