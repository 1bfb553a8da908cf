//! Data types for turn graphs and their subgraphs.

use petgraph::algo::tarjan_scc;
use petgraph::graph::DiGraph;
use petgraph::unionfind::UnionFind;

/// Directed edge `(source, target)` between turn indices.
pub type Edge = (usize, usize);

/// Turn type from the t-letters bounding a turn (`prev`, `next`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TurnType {
    /// `tt` or `TT` around the turn.
    Mixed,
    /// `t` before, `T` after.
    TypeM,
    /// `T` before, `t` after.
    TypeL,
}

impl TurnType {
    /// Numeric code used in reports: mixed 0, type-m 1, type-l 2.
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            TurnType::Mixed => 0,
            TurnType::TypeM => 1,
            TurnType::TypeL => 2,
        }
    }
}

/// Turn graph of one word; read-only after `turn_graph` builds it.
///
/// Invariants:
/// - `turn_degree.len() == turn_type.len() == adj.len() == nv`.
/// - `edges` is sorted; every endpoint lies in `0..nv`. Loops are allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnGraph {
    pub nv: usize,
    pub edges: Vec<Edge>,
    pub adj: Vec<Vec<usize>>, // out-neighbours of each turn, sorted
    pub turn_degree: Vec<i64>,
    pub turn_type: Vec<TurnType>,
}

impl TurnGraph {
    /// Assemble from vertex labels and an edge list (sorted here).
    pub fn new(turn_degree: Vec<i64>, turn_type: Vec<TurnType>, mut edges: Vec<Edge>) -> Self {
        let nv = turn_degree.len();
        debug_assert_eq!(nv, turn_type.len());
        debug_assert!(edges.iter().all(|&(i, j)| i < nv && j < nv));
        edges.sort_unstable();
        let mut adj = vec![Vec::new(); nv];
        for &(i, j) in &edges {
            adj[i].push(j);
        }
        Self {
            nv,
            edges,
            adj,
            turn_degree,
            turn_type,
        }
    }

    /// Number of vertices.
    #[inline]
    pub fn order(&self) -> usize {
        self.nv
    }

    /// In-degree plus out-degree; a loop counts twice.
    pub fn degree(&self, v: usize) -> usize {
        self.edges
            .iter()
            .map(|&(i, j)| usize::from(i == v) + usize::from(j == v))
            .sum()
    }

    /// Strongly connected components as induced subgraphs, ordered by their
    /// smallest vertex. Singletons without a loop are included.
    pub fn components(&self) -> Vec<Component> {
        let mut g: DiGraph<(), ()> = DiGraph::with_capacity(self.nv, self.edges.len());
        let nodes: Vec<_> = (0..self.nv).map(|_| g.add_node(())).collect();
        for &(i, j) in &self.edges {
            g.add_edge(nodes[i], nodes[j], ());
        }
        let mut label = vec![0usize; self.nv];
        let mut comps: Vec<Vec<usize>> = tarjan_scc(&g)
            .into_iter()
            .map(|scc| {
                let mut vs: Vec<usize> = scc.into_iter().map(|n| n.index()).collect();
                vs.sort_unstable();
                vs
            })
            .collect();
        comps.sort_unstable_by_key(|vs| vs[0]);
        for (k, vs) in comps.iter().enumerate() {
            for &v in vs {
                label[v] = k;
            }
        }
        let mut edges: Vec<Vec<Edge>> = vec![Vec::new(); comps.len()];
        for &(i, j) in &self.edges {
            if label[i] == label[j] {
                edges[label[i]].push((i, j));
            }
        }
        comps
            .into_iter()
            .zip(edges)
            .map(|(vertices, edges)| Component { vertices, edges })
            .collect()
    }
}

/// Induced subgraph on one strongly connected component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Component {
    pub vertices: Vec<usize>, // sorted
    pub edges: Vec<Edge>,     // sorted, both ends in `vertices`
}

impl Component {
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    pub fn contains(&self, v: usize) -> bool {
        self.vertices.binary_search(&v).is_ok()
    }
}

/// Subgraph spanned by an edge set, with isolated vertices dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeSupport {
    pub vertices: Vec<usize>, // sorted, each incident to some edge
    pub edges: Vec<Edge>,
}

impl EdgeSupport {
    pub fn from_edges(edges: Vec<Edge>) -> Self {
        let mut vertices: Vec<usize> = edges.iter().flat_map(|&(i, j)| [i, j]).collect();
        vertices.sort_unstable();
        vertices.dedup();
        Self { vertices, edges }
    }

    /// Weak connectivity; the empty subgraph counts as connected.
    pub fn is_connected(&self) -> bool {
        let Some(&max_v) = self.vertices.last() else {
            return true;
        };
        let mut uf: UnionFind<usize> = UnionFind::new(max_v + 1);
        for &(i, j) in &self.edges {
            uf.union(i, j);
        }
        let root = uf.find(self.vertices[0]);
        self.vertices.iter().all(|&v| uf.find(v) == root)
    }
}
