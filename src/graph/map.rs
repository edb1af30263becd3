use super::*;
use crate::Arbitrary;
use crate::Node;
use petgraph::graphmap::UnGraphMap;

/// The movement graph.
///
/// An undirected graph over [`Node`]s whose edges carry every
/// [`Transport`] that connects the two endpoints. Nodes are integers in
/// `[0, N)`; gaps in the numbering are allowed and simply have no edges.
#[derive(Debug, Clone, Default)]
pub struct Map {
    graph: UnGraphMap<Node, Vec<Transport>>,
}

impl Map {
    /// Adds a transport between two nodes, creating them if necessary.
    /// Repeated transports on the same edge are ignored.
    pub fn connect(&mut self, a: Node, b: Node, transport: Transport) {
        match self.graph.edge_weight_mut(a, b) {
            Some(modes) if modes.contains(&transport) => {}
            Some(modes) => modes.push(transport),
            None => {
                self.graph.add_edge(a, b, vec![transport]);
            }
        }
    }
    /// One past the largest node id, i.e. the side of the distance table.
    pub fn size(&self) -> usize {
        self.graph.nodes().max().map_or(0, |n| n + 1)
    }
    pub fn contains(&self, node: Node) -> bool {
        self.graph.contains_node(node)
    }
    /// Adjacent nodes, or `None` if the node is not on the map.
    pub fn neighbors(&self, node: Node) -> Option<impl Iterator<Item = Node> + '_> {
        self.contains(node).then(|| self.graph.neighbors(node))
    }
    /// Every transport linking `a` and `b`; empty if they are not adjacent.
    pub fn transports(&self, a: Node, b: Node) -> &[Transport] {
        self.graph
            .edge_weight(a, b)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
    /// Each adjacent pair once, regardless of how many transports join it.
    pub fn edges(&self) -> impl Iterator<Item = (Node, Node)> + '_ {
        self.graph.all_edges().map(|(a, b, _)| (a, b))
    }
    pub fn graph(&self) -> &UnGraphMap<Node, Vec<Transport>> {
        &self.graph
    }
}

impl FromIterator<(Node, Node, Transport)> for Map {
    fn from_iter<I: IntoIterator<Item = (Node, Node, Transport)>>(edges: I) -> Self {
        let mut map = Self::default();
        for (a, b, transport) in edges {
            map.connect(a, b, transport);
        }
        map
    }
}

/// Random connected map of 8 to 24 nodes: a random spanning tree of taxi
/// routes plus a sprinkling of faster links.
impl Arbitrary for Map {
    fn random(rng: &mut impl rand::Rng) -> Self {
        let n = rng.random_range(8..=24);
        let mut map = Self::default();
        for node in 1..n {
            map.connect(rng.random_range(0..node), node, Transport::Taxi);
        }
        for _ in 0..n / 2 {
            let a = rng.random_range(0..n);
            let b = rng.random_range(0..n);
            if a != b {
                let transport = match rng.random_range(0..4) {
                    0 => Transport::Underground,
                    1 => Transport::Ferry,
                    _ => Transport::Bus,
                };
                map.connect(a, b, transport);
            }
        }
        map
    }
}
