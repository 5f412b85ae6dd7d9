use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nanorand::{Rng, WyRand};
use route_planner::prelude::*;

/// A `size` x `size` jittered grid where roughly one in ten road segments is missing.
fn road_grid(size: usize) -> RoadMap {
    let mut rng = WyRand::new_seed(42);
    let mut map = RoadMap::from_bounds(5000.0, 5000.0).unwrap();
    let spacing = 1.0 / size as f32;
    for y in 0..size {
        for x in 0..size {
            let jitter = rng.generate_range(0_u32..30) as f32 * 0.01 * spacing;
            map.add_node((x as f32 * spacing + jitter, y as f32 * spacing))
                .unwrap();
        }
    }
    for y in 0..size {
        for x in 0..size {
            let id = y * size + x;
            if x + 1 < size && rng.generate_range(0_u32..10) != 0 {
                map.add_road(RoadKind::Residential, &[id, id + 1]).unwrap();
            }
            if y + 1 < size && rng.generate_range(0_u32..10) != 0 {
                map.add_road(RoadKind::Tertiary, &[id, id + size]).unwrap();
            }
        }
    }
    map
}

fn criterion_benchmark(c: &mut Criterion) {
    for &size in &[32, 128] {
        let mut map = road_grid(size);

        c.bench_function(&format!("closest node, {0}x{0}", size), |b| {
            b.iter(|| map.find_closest_node(black_box((0.37, 0.61))))
        });

        c.bench_function(&format!("corner to corner, {0}x{0}", size), |b| {
            b.iter(|| {
                let mut planner = RoutePlanner::new(&mut map, 0.0, 0.0, 100.0, 100.0).unwrap();
                black_box(planner.run().map(|path| path.distance()))
            })
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
