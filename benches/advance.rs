#[macro_use]
extern crate criterion;
extern crate chaosgame;
extern crate rand;

use chaosgame::{Canvas, ChaosGame, Pattern};
use criterion::Criterion;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn advance_benchmark(c: &mut Criterion) {
    c.bench_function("advance 10000 points, 0.4px", |b| {
        let mut game = ChaosGame::new(Canvas::new(800, 600), StdRng::seed_from_u64(1));
        game.reset(Pattern::Triangle, 800, 600).unwrap();
        b.iter(|| game.advance(10_000).unwrap())
    });

    c.bench_function("advance 1000 points, 6px circles", |b| {
        let mut game = ChaosGame::new(Canvas::new(800, 600), StdRng::seed_from_u64(1));
        game.reset(Pattern::Rectangle, 800, 600).unwrap();
        game.set_point_size(6.0);
        b.iter(|| game.advance(1_000).unwrap())
    });
}

criterion_group!(benches, advance_benchmark);
criterion_main!(benches);
