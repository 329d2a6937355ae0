use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_crossfall::{
    rotate_shape, Command, Direction, Grid, RowClearPolicy, Settings, ShapeKind, Simulator,
};

fn bench_clear_lines(c: &mut Criterion) {
    for policy in [RowClearPolicy::ZeroInPlace, RowClearPolicy::ShiftDown] {
        c.bench_function(&format!("clear_rows_and_column_{:?}", policy), |b| {
            b.iter(|| {
                let mut grid = Grid::new(30, 24);
                for y in 20..24 {
                    for x in 0..30 {
                        grid.set(x, y, true);
                    }
                }
                for y in 0..24 {
                    grid.set(7, y, true);
                }
                grid.clear_lines(black_box(policy))
            })
        });
    }
}

fn bench_is_valid_move(c: &mut Criterion) {
    let mut grid = Grid::new(30, 24);
    for x in (0..30).step_by(3) {
        grid.set(x, 12, true);
    }
    let plus = ShapeKind::Plus.template();

    c.bench_function("is_valid_move_plus", |b| {
        b.iter(|| grid.is_valid_move(black_box(14), black_box(10), &plus))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let line = ShapeKind::LongLine.template();
    c.bench_function("rotate_long_line", |b| b.iter(|| rotate_shape(black_box(&line))));
}

fn bench_tick(c: &mut Criterion) {
    let mut sim = Simulator::new(Settings {
        seed: Some(12345),
        ..Settings::default()
    });
    sim.init_with_grid(Grid::new(30, 24));

    c.bench_function("tick_steering_down", |b| {
        b.iter(|| {
            if sim.piece().is_none() {
                sim.init_with_grid(Grid::new(30, 24));
            }
            sim.handle_input(Command::Steer(Direction::Down));
            sim.tick()
        })
    });
}

criterion_group!(benches, bench_clear_lines, bench_is_valid_move, bench_rotate, bench_tick);
criterion_main!(benches);
