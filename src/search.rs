use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::SolveError;
use crate::graph::{Graph, NodeId};
use crate::heuristic::HeuristicTable;

/// Search state machine per node: `Unvisited -> Frontier -> Settled`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
enum Mark {
    #[default]
    Unvisited,
    Frontier,
    Settled,
}

/// Visitation record for one node. `dist` and `pred` are only meaningful
/// once the mark has left `Unvisited`; the start node keeps `pred = None`.
#[derive(Copy, Clone, Debug, Default)]
struct VisitState {
    mark: Mark,
    dist: usize,
    pred: Option<NodeId>,
}

/// The objects that we store in the priority queue.
#[derive(Debug, Eq)]
struct Entry {
    key: usize,
    seq: usize,
    node: NodeId,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // reverse for BinaryHeap to be a min-heap; equal keys fall back to
        // insertion order, so an all-zero key degenerates to plain FIFO
        self.key
            .cmp(&other.key)
            .then(self.seq.cmp(&other.seq))
            .reverse()
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Entry) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Entry) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

/// The set of discovered-but-not-yet-settled nodes, ordered by priority key
/// and, among equal keys, by insertion order.
struct Frontier {
    heap: BinaryHeap<Entry>,
    seq: usize,
}

impl Frontier {
    /// Every node enters the frontier at most once, so reserving one slot
    /// per graph node up front makes later pushes infallible.
    fn with_capacity(nodes: usize) -> Result<Self, SolveError> {
        let mut heap = BinaryHeap::new();
        heap.try_reserve(nodes)?;
        Ok(Self { heap, seq: 0 })
    }

    fn push(&mut self, node: NodeId, key: usize) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Entry { key, seq, node });
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|e| e.node)
    }
}

/// Shortest-path search between the graph's two gate nodes.
///
/// With a heuristic table this is best-first search keyed by
/// `distance + estimate`; without one every key is 0 and the frontier
/// behaves as a FIFO queue, i.e. plain breadth-first search. Either way a
/// node is expanded at most once — the first discovery is optimal because
/// all edges cost 1 and the estimate never overshoots.
pub struct PathFinder<'a> {
    graph: &'a Graph,
    heuristic: Option<&'a HeuristicTable>,
    states: Vec<VisitState>,
}

impl<'a> PathFinder<'a> {
    pub fn new(
        graph: &'a Graph,
        heuristic: Option<&'a HeuristicTable>,
    ) -> Result<Self, SolveError> {
        let mut states = Vec::new();
        states.try_reserve(graph.len())?;
        states.resize(graph.len(), VisitState::default());

        Ok(Self {
            graph,
            heuristic,
            states,
        })
    }

    fn key_for(&self, node: NodeId, dist: usize) -> usize {
        match self.heuristic {
            Some(table) => dist + table.estimate(self.graph.node(node).pixel()),
            None => 0,
        }
    }

    /// Expand the frontier from the start gate until the end gate is
    /// discovered, returning its distance from the start in edges.
    ///
    /// The search stops the moment the end gate enters the frontier; the
    /// remaining frontier entries are discarded unexpanded. Do not move the
    /// exit to the dequeue side: with an admissible, consistent heuristic
    /// and unit edge costs the first discovery is already optimal, and the
    /// early exit is part of the contract.
    pub fn run(&mut self) -> Result<usize, SolveError> {
        let start = self.graph.start();
        let goal = self.graph.end();

        let mut frontier = Frontier::with_capacity(self.graph.len())?;

        self.states[start] = VisitState {
            mark: Mark::Frontier,
            dist: 0,
            pred: None,
        };
        frontier.push(start, 0);

        let mut found = false;
        let mut expanded = 0usize;

        while let Some(current) = frontier.pop() {
            let dist = self.states[current].dist;

            for &adj in self.graph.node(current).neighbors() {
                if self.states[adj].mark != Mark::Unvisited {
                    continue;
                }

                self.states[adj] = VisitState {
                    mark: Mark::Frontier,
                    dist: dist + 1,
                    pred: Some(current),
                };
                frontier.push(adj, self.key_for(adj, dist + 1));

                if adj == goal {
                    found = true;
                    break;
                }
            }

            self.states[current].mark = Mark::Settled;
            expanded += 1;

            if found {
                break;
            }
        }

        log::debug!("expanded {expanded} nodes");

        if !found {
            return Err(SolveError::NoPath);
        }

        Ok(self.states[goal].dist)
    }

    /// Walk the predecessor links back from the end gate and return the
    /// path as pixel indices ordered start → end. Only meaningful after
    /// [`PathFinder::run`] returned a distance.
    pub fn reconstruct(&self) -> Result<Vec<usize>, SolveError> {
        let goal = self.graph.end();

        let mut path = Vec::new();
        path.try_reserve(self.states[goal].dist + 1)?;

        let mut current = goal;
        loop {
            path.push(self.graph.node(current).pixel());

            match self.states[current].pred {
                Some(pred) => current = pred,
                None => break,
            }
        }

        path.reverse();
        Ok(path)
    }
}
