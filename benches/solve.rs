use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mazepath::{solve, Cell, GridRaster, SolveOptions};

/// Build a serpentine maze: `rows` horizontal corridors connected by
/// alternating vertical gaps, forcing the path to sweep the full width on
/// every level.
fn serpentine(width: usize, rows: usize) -> GridRaster {
    let height = 2 * rows + 1;
    let mut maze = GridRaster::new(width, height);

    for r in 0..rows {
        let row = 2 * r + 1;
        for col in 1..width - 1 {
            maze.set(row * width + col, Cell::Open);
        }
    }

    for r in 0..rows - 1 {
        let row = 2 * r + 2;
        let col = if r % 2 == 0 { width - 2 } else { 1 };
        maze.set(row * width + col, Cell::Open);
    }

    // gates above the first and below the last corridor
    maze.set(1, Cell::Open);
    maze.set((height - 1) * width + width / 2, Cell::Open);

    maze
}

fn bench_serpentine(c: &mut Criterion, width: usize, rows: usize, options: SolveOptions, tag: &str) {
    let maze = serpentine(width, rows);

    c.bench_function(&format!("serpentine_{width}x{}_{tag}", 2 * rows + 1), |b| {
        b.iter(|| {
            let mut maze = black_box(maze.clone());
            let result = solve(&mut maze, &options).unwrap();
            assert!(result.distance > 0);
        })
    });
}

pub fn maze_small(c: &mut Criterion) {
    bench_serpentine(c, 16, 8, SolveOptions::default(), "informed");
}

pub fn maze_medium(c: &mut Criterion) {
    bench_serpentine(c, 64, 32, SolveOptions::default(), "informed");
}

pub fn maze_large(c: &mut Criterion) {
    bench_serpentine(c, 128, 64, SolveOptions::default(), "informed");
}

pub fn maze_medium_bfs(c: &mut Criterion) {
    let options = SolveOptions {
        heuristic: false,
        ..Default::default()
    };
    bench_serpentine(c, 64, 32, options, "bfs");
}

criterion_group!(benches, maze_small, maze_medium, maze_large, maze_medium_bfs);
criterion_main!(benches);
