use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use mazepath::util::parse_img;
use mazepath::{solve, Raster, SolveOptions};

/// Find the shortest path between the top and bottom openings of a maze
/// image and recolour it onto the image.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Maze image to solve (any format the image crate can read).
    input: PathBuf,

    /// Where to write the solved image.
    #[arg(short, long, default_value = "solved.png")]
    output: PathBuf,

    /// Use plain breadth-first search instead of the Manhattan-guided one.
    #[arg(long)]
    no_heuristic: bool,

    /// Keep dead-end corridors in the graph.
    #[arg(long)]
    no_prune: bool,

    /// Print an ASCII rendering of the parsed maze before solving.
    #[arg(long)]
    ascii: bool,
}

fn print_ascii<M: Raster>(maze: &M) {
    for row in 0..maze.height() {
        for col in 0..maze.width() {
            print!("{}", maze.classify(row * maze.width() + col));
        }
        println!();
    }
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();

    let args = Args::parse();

    let img = image::open(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?;
    let mut maze = parse_img(&img)?;

    if args.ascii {
        print_ascii(&maze);
    }

    let options = SolveOptions {
        heuristic: !args.no_heuristic,
        prune: !args.no_prune,
    };

    let result = solve(&mut maze, &options)?;

    println!(
        "shortest path: {} steps from pixel {} to pixel {}",
        result.distance, result.start, result.goal
    );

    maze.into_inner()
        .save(&args.output)
        .with_context(|| format!("failed to save {}", args.output.display()))?;

    Ok(())
}
