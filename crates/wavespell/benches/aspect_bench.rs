use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wavespell::aspects::{AspectCalculator, AspectOrbs, DEFAULT_EXACT_ORB};
use wavespell::ephemeris::{Body, Planet};
use wavespell::western::sign_for;

fn bench_calculate_aspect(c: &mut Criterion) {
    let calculator = AspectCalculator::new();

    c.bench_function("calculate_aspect", |b| {
        b.iter(|| calculator.calculate_aspect(black_box(100.0), black_box(102.0)))
    });
}

fn bench_aspects_for(c: &mut Criterion) {
    let orbs = AspectOrbs {
        trine: 7.0,
        ..AspectOrbs::default()
    };
    let calculator = AspectCalculator::with_orbs(orbs, DEFAULT_EXACT_ORB);

    let planets: Vec<Planet> = Body::ALL
        .iter()
        .enumerate()
        .map(|(i, body)| {
            let longitude = i as f64 * 30.0;
            Planet {
                body: *body,
                name: body.name().to_string(),
                symbol: body.symbol().to_string(),
                longitude,
                sign: sign_for(longitude),
                house: None,
                retrograde: false,
            }
        })
        .collect();

    c.bench_function("aspects_for", |b| {
        b.iter(|| calculator.aspects_for(black_box(&planets)))
    });
}

criterion_group!(benches, bench_calculate_aspect, bench_aspects_for);
criterion_main!(benches);
