//! Settlement benchmarks

use bicho_engine::{
    distinct_permutations, DivisionMode, Modality, Palpite, PositionRange, SeededDrawSource, SettlementEngine, Wager,
    DrawSource,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_decimal::Decimal;

fn bench_permutations(c: &mut Criterion) {
    c.bench_function("distinct_permutations_4", |b| {
        b.iter(|| distinct_permutations(black_box("2580")))
    });
}

fn bench_settle_groups(c: &mut Criterion) {
    let engine = SettlementEngine::default();
    let mut source = SeededDrawSource::new(7);
    let results = source.draw(5);

    let palpites = (1..=25u8).map(|g| Palpite::group(g).unwrap());
    let wager = Wager::new(Modality::Group, PositionRange::new(1, 5).unwrap(), Decimal::ONE, DivisionMode::All)
        .unwrap()
        .with_palpites(palpites)
        .unwrap();

    c.bench_function("settle_group_25_palpites", |b| {
        b.iter(|| engine.settle_with_odd(black_box(&wager), black_box(&results), Decimal::from(18)))
    });
}

fn bench_settle_inverted(c: &mut Criterion) {
    let engine = SettlementEngine::default();
    let mut source = SeededDrawSource::new(11);
    let results = source.draw(7);

    let wager = Wager::new(
        Modality::InvertedThousand,
        PositionRange::new(1, 7).unwrap(),
        Decimal::ONE,
        DivisionMode::Each,
    )
    .unwrap()
    .with_palpite(Palpite::inverted(Modality::InvertedThousand, "2580").unwrap())
    .unwrap();

    c.bench_function("settle_inverted_thousand", |b| {
        b.iter(|| engine.settle_with_odd(black_box(&wager), black_box(&results), Decimal::from(4000)))
    });
}

criterion_group!(benches, bench_permutations, bench_settle_groups, bench_settle_inverted);
criterion_main!(benches);
