use std::collections::VecDeque;

use crate::error::SolveError;
use crate::graph::{Graph, NodeId};

/// Iteratively detach degree-1 non-gate nodes from the graph.
///
/// A dead end can never lie on a simple path between two other nodes, so
/// removing it leaves every gate-to-gate distance intact while shrinking the
/// search frontier — long blind corridors collapse entirely. Gate nodes are
/// never enqueued or detached, whatever their degree.
///
/// Returns the number of nodes that had their last edge removed.
pub fn prune_dead_ends(graph: &mut Graph) -> Result<usize, SolveError> {
    let mut worklist: VecDeque<NodeId> = VecDeque::new();
    // A node enters the worklist at most once: either seeded at degree 1, or
    // enqueued the single time its degree drops to 1.
    worklist.try_reserve(graph.len())?;

    for id in graph.ids() {
        if graph.node(id).degree() == 1 && !graph.is_gate(id) {
            worklist.push_back(id);
        }
    }

    let mut pruned = 0;

    while let Some(id) = worklist.pop_front() {
        debug_assert!(!graph.is_gate(id));

        // Degree already 0: the only neighbour was pruned through another
        // worklist path, nothing left to do.
        let Some(&neighbour) = graph.node(id).neighbors().first() else {
            continue;
        };

        graph.remove_edge(id, neighbour);
        pruned += 1;

        if graph.node(neighbour).degree() == 1 && !graph.is_gate(neighbour) {
            worklist.push_back(neighbour);
        }
    }

    log::debug!("pruned {pruned} dead-end nodes");

    Ok(pruned)
}
