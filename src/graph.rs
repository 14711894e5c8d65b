use smallvec::SmallVec;

use crate::error::SolveError;
use crate::gates::Gates;
use crate::raster::Raster;

/// Index of a node in the graph arena.
pub type NodeId = usize;

/// One open pixel of the maze.
///
/// Adjacency is an unordered, duplicate-free set of arena ids. On a
/// 4-connected grid a node never has more than four neighbours, so the set
/// lives inline.
#[derive(Debug)]
pub struct Node {
    pixel: usize,
    adj: SmallVec<[NodeId; 4]>,
}

impl Node {
    pub fn pixel(&self) -> usize {
        self.pixel
    }

    pub fn degree(&self) -> usize {
        self.adj.len()
    }

    pub fn neighbors(&self) -> &[NodeId] {
        &self.adj
    }
}

/// The maze as a graph: a dense arena of nodes plus a pixel → node index.
///
/// The arena exclusively owns its nodes; everything else refers to them by
/// [`NodeId`]. Adjacency is symmetric at all times — both directions of an
/// edge are inserted and removed in the same operation.
#[derive(Debug)]
pub struct Graph {
    nodes: Vec<Node>,
    pixel_index: Vec<Option<NodeId>>,
    start: NodeId,
    end: NodeId,
}

impl Graph {
    /// Build the graph for every open pixel of the maze.
    ///
    /// Interior pixels are wired to their open left and top neighbours, so
    /// each adjacent pair is considered exactly once. The border holds no
    /// open pixels other than the gates: the start gate is wired when the
    /// interior pixel below it checks its top neighbour, and the end gate is
    /// wired here to the open pixel directly above it.
    pub fn build<M: Raster>(maze: &M, gates: &Gates) -> Result<Self, SolveError> {
        let open_pixels = (0..maze.pixels()).filter(|&p| maze.is_open(p)).count();

        let mut nodes = Vec::new();
        nodes.try_reserve(open_pixels)?;

        let mut pixel_index = Vec::new();
        pixel_index.try_reserve(maze.pixels())?;
        pixel_index.resize(maze.pixels(), None);

        for pixel in 0..maze.pixels() {
            if maze.is_open(pixel) {
                pixel_index[pixel] = Some(nodes.len());
                nodes.push(Node {
                    pixel,
                    adj: SmallVec::new(),
                });
            }
        }

        log::debug!("graph: {open_pixels} open pixels out of {}", maze.pixels());

        let start = pixel_index[gates.start].expect("start gate pixel is open");
        let end = pixel_index[gates.end].expect("end gate pixel is open");

        let mut graph = Self {
            nodes,
            pixel_index,
            start,
            end,
        };

        let width = maze.width();

        for row in 1..maze.height() - 1 {
            for col in 1..width - 1 {
                let pixel = row * width + col;

                if !maze.is_open(pixel) {
                    continue;
                }

                let left = pixel - 1;
                let top = pixel - width;

                if maze.is_open(left) {
                    graph.add_edge_between(pixel, left);
                }
                if maze.is_open(top) {
                    graph.add_edge_between(pixel, top);
                }
            }
        }

        // The end gate sits in the bottom border row, outside the loop above;
        // its only candidate neighbour is the pixel directly above it.
        if gates.end >= width {
            let above = gates.end - width;
            if maze.is_open(above) {
                graph.add_edge_between(gates.end, above);
            }
        }

        Ok(graph)
    }

    fn add_edge_between(&mut self, pixel_a: usize, pixel_b: usize) {
        let a = self.pixel_index[pixel_a].expect("open pixel has a node");
        let b = self.pixel_index[pixel_b].expect("open pixel has a node");
        self.add_edge(a, b);
    }

    /// Insert the symmetric edge `a <-> b`.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        debug_assert_ne!(a, b);
        debug_assert!(!self.nodes[a].adj.contains(&b));

        self.nodes[a].adj.push(b);
        self.nodes[b].adj.push(a);
    }

    /// Remove the symmetric edge `a <-> b`, if present.
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) {
        if let Some(pos) = self.nodes[a].adj.iter().position(|&n| n == b) {
            self.nodes[a].adj.swap_remove(pos);
        }
        if let Some(pos) = self.nodes[b].adj.iter().position(|&n| n == a) {
            self.nodes[b].adj.swap_remove(pos);
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn ids(&self) -> std::ops::Range<NodeId> {
        0..self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn node_at(&self, pixel: usize) -> Option<NodeId> {
        self.pixel_index[pixel]
    }

    /// Arena id of the start gate's node.
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Arena id of the end gate's node.
    pub fn end(&self) -> NodeId {
        self.end
    }

    pub fn is_gate(&self, id: NodeId) -> bool {
        id == self.start || id == self.end
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use crate::gates::locate_gates;
    use crate::raster::GridRaster;

    pub(crate) fn build_graph(text: &str) -> (GridRaster, Gates, Graph) {
        let maze: GridRaster = text.parse().unwrap();
        let gates = locate_gates(&maze).unwrap();
        let graph = Graph::build(&maze, &gates).unwrap();
        (maze, gates, graph)
    }

    pub(crate) fn assert_symmetric(graph: &Graph) {
        for a in graph.ids() {
            for &b in graph.node(a).neighbors() {
                assert!(
                    graph.node(b).neighbors().contains(&a),
                    "edge {a} -> {b} has no mirror"
                );
            }
        }
    }

    #[test]
    fn every_open_pixel_gets_a_node() {
        let (maze, _, graph) = build_graph(
            "\
X XXX
X   X
XXX X",
        );

        assert_eq!(graph.len(), 5);
        for pixel in [1, 6, 7, 8, 13] {
            assert!(graph.node_at(pixel).is_some());
        }
        assert_eq!(graph.node_at(0), None);
        assert_eq!(maze.pixels(), 15);
    }

    #[test]
    fn adjacency_is_symmetric_and_duplicate_free() {
        let (_, _, graph) = build_graph(
            "\
X XXX
X   X
X   X
XXX X",
        );

        assert_symmetric(&graph);

        for id in graph.ids() {
            let mut adj: Vec<_> = graph.node(id).neighbors().to_vec();
            adj.sort_unstable();
            adj.dedup();
            assert_eq!(adj.len(), graph.node(id).degree());
        }
    }

    #[test]
    fn gates_are_wired_to_their_interior_neighbours() {
        let (_, gates, graph) = build_graph(
            "\
X XXX
X   X
XXX X",
        );

        let start = graph.node_at(gates.start).unwrap();
        let below = graph.node_at(gates.start + 5).unwrap();
        assert_eq!(graph.node(start).neighbors(), &[below]);

        let end = graph.node_at(gates.end).unwrap();
        let above = graph.node_at(gates.end - 5).unwrap();
        assert_eq!(graph.node(end).neighbors(), &[above]);
    }

    #[test]
    fn walled_off_end_gate_stays_isolated() {
        let (_, _, graph) = build_graph(
            "\
X XXX
X  XX
XXX X",
        );

        assert_eq!(graph.node(graph.end()).degree(), 0);
    }

    #[test]
    fn remove_edge_shrinks_both_endpoints() {
        let (_, _, graph) = build_graph(
            "\
X XXX
X   X
XXX X",
        );
        let mut graph = graph;

        let a = graph.node_at(6).unwrap();
        let b = graph.node_at(7).unwrap();

        graph.remove_edge(a, b);

        assert!(!graph.node(a).neighbors().contains(&b));
        assert!(!graph.node(b).neighbors().contains(&a));
        assert_symmetric(&graph);
    }
}
