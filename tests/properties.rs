use nanorand::{Rng, WyRand};
use route_planner::prelude::*;

const SIZE: usize = 8;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A jittered `SIZE` x `SIZE` grid. Every horizontal and vertical step is its own road
/// and is left out with a chance of `gap_percent`.
fn random_map(rng: &mut WyRand, gap_percent: u32) -> RoadMap {
    let mut map = RoadMap::new(250.0).unwrap();
    let spacing = 1.0 / SIZE as f32;
    for y in 0..SIZE {
        for x in 0..SIZE {
            let jitter_x = rng.generate_range(0_u32..20) as f32 * 0.01 * spacing;
            let jitter_y = rng.generate_range(0_u32..20) as f32 * 0.01 * spacing;
            map.add_node((x as f32 * spacing + jitter_x, y as f32 * spacing + jitter_y))
                .unwrap();
        }
    }
    let id = |x: usize, y: usize| y * SIZE + x;
    for y in 0..SIZE {
        for x in 0..SIZE {
            if x + 1 < SIZE && rng.generate_range(0_u32..100) >= gap_percent {
                map.add_road(RoadKind::Residential, &[id(x, y), id(x + 1, y)])
                    .unwrap();
            }
            if y + 1 < SIZE && rng.generate_range(0_u32..100) >= gap_percent {
                map.add_road(RoadKind::Secondary, &[id(x, y), id(x, y + 1)])
                    .unwrap();
            }
        }
    }
    map
}

/// Plain O(n²) Dijkstra, returning the normalized length of the shortest route.
fn reference_distance(map: &mut RoadMap, start: NodeID, end: NodeID) -> Option<f32> {
    let n = map.len();
    let adjacency: Vec<Vec<NodeID>> = (0..n).map(|id| map.find_neighbors(id).to_vec()).collect();
    let mut dist = vec![f32::INFINITY; n];
    let mut done = vec![false; n];
    dist[start] = 0.0;

    loop {
        let current = (0..n)
            .filter(|&id| !done[id] && dist[id].is_finite())
            .min_by(|&a, &b| dist[a].total_cmp(&dist[b]))?;
        if current == end {
            return Some(dist[end]);
        }
        done[current] = true;
        for &other in &adjacency[current] {
            let cost = dist[current] + map[current].distance(&map[other]);
            if cost < dist[other] {
                dist[other] = cost;
            }
        }
    }
}

fn assert_route(map: &mut RoadMap, path: &Path, start: NodeID, end: NodeID) {
    assert_eq!(path.start().id, start);
    assert_eq!(path.end().id, end);

    let mut sum = 0.0;
    for pair in path.nodes().windows(2) {
        assert!(map.find_neighbors(pair[0].id).contains(&pair[1].id));
        // the path holds copies of the graph's nodes
        assert_eq!(pair[0], map[pair[0].id]);
        sum += pair[0].distance(&pair[1]);
    }
    let scaled = sum * map.metric_scale();
    assert!((path.distance() - scaled).abs() <= 1e-3 * scaled.max(1.0));
}

#[test]
fn matches_dijkstra_on_random_maps() {
    init_logger();
    let mut found = 0;
    let mut unreachable = 0;

    for seed in 0..40 {
        let mut rng = WyRand::new_seed(seed);
        let mut map = random_map(&mut rng, 30);
        let start = rng.generate_range(0..map.len());
        let end = rng.generate_range(0..map.len());
        let expected = reference_distance(&mut map, start, end);

        let mut planner =
            RoutePlanner::between(&mut map, PlannerConfig::default(), start, end).unwrap();
        let result = planner.run();

        match (expected, result) {
            (Some(expected), Ok(path)) => {
                let expected = expected * map.metric_scale();
                assert!(
                    (path.distance() - expected).abs() <= 1e-3 * expected.max(1.0),
                    "seed {}: {} != {}",
                    seed,
                    path.distance(),
                    expected
                );
                assert_route(&mut map, &path, start, end);
                assert_eq!(map.path(), Some(&path));
                found += 1;
            }
            (None, Err(err)) => {
                assert_eq!(err, RouteError::NoRoute { start, end });
                unreachable += 1;
            }
            (expected, result) => panic!(
                "seed {}: reference {:?}, planner {:?}",
                seed, expected, result
            ),
        }
    }

    // make sure both outcomes were exercised
    assert!(found > 0);
    assert!(unreachable > 0);
}

#[test]
fn full_grid_routes_are_manhattan() {
    let mut map = RoadMap::new(1.0).unwrap();
    let spacing = 1.0 / (SIZE - 1) as f32;
    for y in 0..SIZE {
        for x in 0..SIZE {
            map.add_node((x as f32 * spacing, y as f32 * spacing)).unwrap();
        }
    }
    for i in 0..SIZE {
        let row: Vec<NodeID> = (0..SIZE).map(|x| i * SIZE + x).collect();
        let column: Vec<NodeID> = (0..SIZE).map(|y| y * SIZE + i).collect();
        map.add_road(RoadKind::Primary, &row).unwrap();
        map.add_road(RoadKind::Primary, &column).unwrap();
    }

    let mut rng = WyRand::new_seed(7);
    for _ in 0..20 {
        let (x0, y0) = (rng.generate_range(0..SIZE), rng.generate_range(0..SIZE));
        let (x1, y1) = (rng.generate_range(0..SIZE), rng.generate_range(0..SIZE));

        // percent inputs, nudged off the grid points
        let mut planner = RoutePlanner::new(
            &mut map,
            x0 as f32 * spacing * 100.0 + 1.0,
            y0 as f32 * spacing * 100.0 - 1.0,
            x1 as f32 * spacing * 100.0 - 1.0,
            y1 as f32 * spacing * 100.0 + 1.0,
        )
        .unwrap();
        let (start, end) = (planner.start_node().id, planner.end_node().id);
        assert_eq!(start, y0 * SIZE + x0);
        assert_eq!(end, y1 * SIZE + x1);

        let path = planner.run().unwrap();
        let steps = (x0 as isize - x1 as isize).abs() + (y0 as isize - y1 as isize).abs();
        assert_eq!(path.len(), steps as usize + 1);
        assert!((path.distance() - steps as f32 * spacing).abs() < 1e-4);
        assert_route(&mut map, &path, start, end);
    }
}

#[test]
fn runs_are_repeatable() {
    let mut rng = WyRand::new_seed(1234);
    let mut map = random_map(&mut rng, 10);
    let (start, end) = (0, map.len() - 1);

    let first = RoutePlanner::between(&mut map, PlannerConfig::default(), start, end)
        .and_then(|mut planner| planner.run());
    let second = RoutePlanner::between(&mut map, PlannerConfig::default(), start, end)
        .and_then(|mut planner| planner.run());
    assert_eq!(first, second);
}
