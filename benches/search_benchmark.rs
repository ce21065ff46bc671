use env_logger::Env;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use log::info;

use nanorand::{Rng, WyRand};
use weighted_pathfinding::{grid, prelude::*, search::Strategy, Point};

#[derive(Clone)]
struct Map {
    costs: Vec<isize>,
    width: usize,
    height: usize,
}

impl Map {
    fn new(width: usize, height: usize) -> Self {
        Map {
            costs: vec![1; width * height],
            width,
            height,
        }
    }

    fn new_random(width: usize, height: usize) -> Self {
        let mut rng = WyRand::new_seed(4);
        let costs = (0..width * height)
            .map(|_| rng.generate_range(0_u32..10) as isize - 1)
            .collect();
        let mut map = Map {
            costs,
            width,
            height,
        };
        // keep the corners open
        map.costs[0] = 1;
        let last = map.costs.len() - 1;
        map.costs[last] = 1;
        map
    }

    fn get_tile_cost(&self, (x, y): Point) -> isize {
        self.costs[x + y * self.width]
    }

    fn graph(&self) -> Graph<Point> {
        grid::grid_graph(
            (self.width, self.height),
            |point| self.get_tile_cost(point),
            &MooreNeighborhood::new(self.width, self.height),
        )
    }
}

// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "debug") // Change this from debug to trace to see every expanded Node.
        .write_style_or("MY_LOG_STYLE", "always");

    env_logger::init_from_env(env);
    let _ = env_logger::builder().is_test(true).try_init();
}

fn bench_build_graph(c: &mut Criterion) {
    init();
    let mut group = c.benchmark_group("Build Graph");

    for size in [128, 512] {
        let map = Map::new_random(size, size);
        let graph = map.graph();
        info!(
            "Random Map {}x{}: {} Nodes, {} Edges",
            size,
            size,
            graph.len(),
            graph.edge_count()
        );
        group.bench_with_input(
            BenchmarkId::new("Random Map", format!("{}x{}", size, size)),
            &map,
            |b, map| b.iter(|| map.graph()),
        );
    }
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("Search");

    let neighborhood = MooreNeighborhood::new(128, 128);
    let heuristic = grid::heuristic_for(&neighborhood);
    let (start, goal) = ((0, 0), (127, 127));

    for (name, map) in [
        ("Uniform Map", Map::new(128, 128)),
        ("Random Map", Map::new_random(128, 128)),
    ] {
        let graph = map.graph();
        for strategy in Strategy::ALL {
            let id = BenchmarkId::new(name, strategy);
            group.bench_function(id, |b| {
                b.iter(|| search(strategy, &graph, start, goal, Some(&heuristic)))
            });
        }
    }

    // For large maps, use a smaller sample size so they don't take 30+s per run.
    group.sample_size(10);

    let map = Map::new_random(1024, 1024);
    let graph = map.graph();
    let neighborhood = MooreNeighborhood::new(1024, 1024);
    let heuristic = grid::heuristic_for(&neighborhood);
    for strategy in [Strategy::Dijkstra, Strategy::AStar] {
        let id = BenchmarkId::new("Large Random Map", strategy);
        group.bench_function(id, |b| {
            b.iter(|| search(strategy, &graph, (40, 90), (900, 600), Some(&heuristic)))
        });
    }
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch");
    group.sample_size(20);

    let map = Map::new_random(256, 256);
    let graph = map.graph();
    let neighborhood = MooreNeighborhood::new(256, 256);
    let heuristic = grid::heuristic_for(&neighborhood);

    let mut rng = WyRand::new_seed(7);
    let queries: Vec<(Point, Point)> = (0..64)
        .map(|_| {
            let mut point = || (rng.generate_range(0_usize..256), rng.generate_range(0_usize..256));
            (point(), point())
        })
        .collect();

    let batch = Search::new(Strategy::AStar).heuristic(&heuristic);
    group.bench_function("64 A* queries, Random Map 256x256", |b| {
        b.iter(|| batch.run_batch(&graph, &queries))
    });
}

criterion_group!(benches, bench_build_graph, bench_strategies, bench_batch);
criterion_main!(benches);
