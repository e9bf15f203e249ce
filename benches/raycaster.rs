use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use raywalk::{Engine, Pose, RayCaster, TileMap};

const SCREEN_WIDTH: u32 = 320;
const SCREEN_HEIGHT: u32 = 240;

/// Bordered 8x8 room with nothing inside, so rays run long.
fn open_room() -> TileMap {
    let mut cells = vec![0u8; 64];
    for i in 0..8 {
        cells[i] = 1;
        cells[56 + i] = 1;
        cells[i * 8] = 1;
        cells[i * 8 + 7] = 1;
    }
    TileMap::new(8, 8, cells)
}

fn benchmark_single_column(c: &mut Criterion) {
    let caster = RayCaster::new(SCREEN_WIDTH);
    let map = TileMap::default_level();
    let pose = Pose::new(160.0, 120.0, 0.0);

    c.bench_function("cast_center_column", |b| {
        b.iter(|| caster.cast(black_box(&map), black_box(&pose), 160))
    });
}

fn benchmark_full_fan(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_fan");
    let caster = RayCaster::new(SCREEN_WIDTH);

    for (name, map, pose) in [
        (
            "default_level",
            TileMap::default_level(),
            Pose::new(160.0, 120.0, 0.0),
        ),
        ("open_room", open_room(), Pose::new(320.0, 320.0, 0.0)),
    ] {
        let input = (map, pose);
        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, (map, pose)| {
            b.iter(|| {
                for column in 0..SCREEN_WIDTH {
                    black_box(caster.cast(map, pose, column));
                }
            })
        });
    }

    group.finish();
}

fn benchmark_engine_render(c: &mut Criterion) {
    let mut engine = Engine::new(SCREEN_WIDTH, SCREEN_HEIGHT);

    c.bench_function("engine_render_320x240", |b| {
        b.iter(|| {
            engine.render();
            black_box(engine.frame_buffer().len())
        })
    });
}

criterion_group!(
    benches,
    benchmark_single_column,
    benchmark_full_fan,
    benchmark_engine_render
);
criterion_main!(benches);
