//! Shortest-path solver for mazes encoded as raster images.
//!
//! A maze image has exactly one open pixel in its top border row (the start
//! gate) and one in its bottom border row (the end gate). The pipeline
//! derives a graph from the open pixels, detaches dead ends, runs a
//! Manhattan-guided best-first search (or plain BFS when no heuristic is
//! requested) and recolours the reconstructed path onto the image.

use serde::{Deserialize, Serialize};

pub mod error;
pub mod gates;
pub mod graph;
pub mod heuristic;
pub mod prune;
pub mod raster;
pub mod search;
pub mod util;

pub use error::{Border, SolveError};
pub use gates::{locate_gates, Gates};
pub use graph::{Graph, Node, NodeId};
pub use heuristic::HeuristicTable;
pub use prune::prune_dead_ends;
pub use raster::{colour_path, Cell, GridRaster, Raster};
pub use search::PathFinder;

/// Knobs for a solve run.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SolveOptions {
    /// Guide the search with the Manhattan heuristic; plain BFS otherwise.
    pub heuristic: bool,
    /// Detach dead-end corridors before searching.
    pub prune: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            heuristic: true,
            prune: true,
        }
    }
}

/// A successfully found path between the gates.
#[derive(Debug, PartialEq, Clone, Eq)]
pub struct PathResult {
    pub start: usize,
    pub goal: usize,
    /// Number of edges on the path.
    pub distance: usize,
    /// Pixel indices from start gate to end gate inclusive.
    pub path: Vec<usize>,
}

/// Run the full pipeline: locate gates, build the graph, prune, search,
/// reconstruct, render.
///
/// The raster is mutated only after a complete path has been reconstructed;
/// on any error it is returned untouched.
pub fn solve<M: Raster>(maze: &mut M, options: &SolveOptions) -> Result<PathResult, SolveError> {
    let gates = locate_gates(maze)?;

    let mut graph = Graph::build(maze, &gates)?;

    if options.prune {
        prune_dead_ends(&mut graph)?;
    }

    let heuristic = if options.heuristic {
        Some(HeuristicTable::manhattan(maze, &gates)?)
    } else {
        None
    };

    let mut finder = PathFinder::new(&graph, heuristic.as_ref())?;
    let distance = finder.run()?;
    let path = finder.reconstruct()?;

    log::debug!("destination is {distance} pixels away from the source");

    colour_path(maze, &path);

    Ok(PathResult {
        start: gates.start,
        goal: gates.end,
        distance,
        path,
    })
}
