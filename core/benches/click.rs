use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use samegame_core::*;

fn bench_click(c: &mut Criterion) {
    let mut group = c.benchmark_group("click");

    for size in [10u8, 50, 200] {
        let config = GameConfig::new(size, size).unwrap();
        let grid = Grid::generate(config, &mut RandomColorSource::new(0xfeed)).unwrap();
        let state = GameState::new(grid);
        // bottom-left tile is the typical first click
        let action = Action::ClickCell((size - 1, 0));

        group.bench_function(format!("{size}x{size}"), |b| {
            b.iter(|| black_box(&state).apply(black_box(action)))
        });
    }

    let flood = Grid::generate(GameConfig::new(200, 200).unwrap(), &mut || Color::Red).unwrap();
    group.bench_function("flood_200x200", |b| {
        b.iter(|| remove_region(black_box(&flood), (100, 100)))
    });

    group.finish();
}

criterion_group!(benches, bench_click);
criterion_main!(benches);
