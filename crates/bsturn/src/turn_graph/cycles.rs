//! Embedded (simple) cycles of a strongly connected component.

use super::types::{Component, Edge, TurnGraph};

/// Closed walk `v0 → v1 → ... → v0`; `vertices` repeats `v0` at the end.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cycle {
    pub vertices: Vec<usize>,
}

impl Cycle {
    /// Turns visited, without the repeated terminal vertex.
    #[inline]
    pub fn turns(&self) -> &[usize] {
        &self.vertices[..self.vertices.len().saturating_sub(1)]
    }

    pub fn edges(&self) -> Vec<Edge> {
        edges_path(&self.vertices)
    }

    /// Number of traversals of `e`.
    pub fn count(&self, e: Edge) -> usize {
        path_ne(&self.vertices, e)
    }
}

/// Consecutive edges `(p[k], p[k+1])` traversed by the path `p`.
pub fn edges_path(p: &[usize]) -> Vec<Edge> {
    p.windows(2).map(|w| (w[0], w[1])).collect()
}

/// How many times the path `p` traverses the edge `e`.
pub fn path_ne(p: &[usize], e: Edge) -> usize {
    p.windows(2).filter(|w| (w[0], w[1]) == e).count()
}

impl Component {
    /// All simple cycles, each listed once starting from its smallest vertex,
    /// ordered by length and then lexicographically. Loops are cycles of
    /// length one.
    pub fn simple_cycles(&self, graph: &TurnGraph) -> Vec<Cycle> {
        let mut runner = CycleRunner {
            graph,
            comp: self,
            start: 0,
            on_path: vec![false; graph.order()],
            stack: Vec::new(),
            out: Vec::new(),
        };
        for &s in &self.vertices {
            runner.start = s;
            runner.stack.push(s);
            runner.on_path[s] = true;
            runner.recur(s);
            runner.on_path[s] = false;
            runner.stack.clear();
        }
        let mut cycles = runner.out;
        cycles.sort_by(|a, b| {
            a.vertices
                .len()
                .cmp(&b.vertices.len())
                .then_with(|| a.vertices.cmp(&b.vertices))
        });
        cycles.dedup();
        cycles
    }
}

/// DFS over vertices ≥ `start` inside one component.
struct CycleRunner<'a> {
    graph: &'a TurnGraph,
    comp: &'a Component,
    start: usize,
    on_path: Vec<bool>,
    stack: Vec<usize>,
    out: Vec<Cycle>,
}

impl CycleRunner<'_> {
    fn recur(&mut self, v: usize) {
        let graph = self.graph;
        for &w in &graph.adj[v] {
            if w == self.start {
                let mut vertices = self.stack.clone();
                vertices.push(w);
                self.out.push(Cycle { vertices });
                continue;
            }
            if w < self.start || self.on_path[w] || !self.comp.contains(w) {
                continue;
            }
            self.on_path[w] = true;
            self.stack.push(w);
            self.recur(w);
            self.stack.pop();
            self.on_path[w] = false;
        }
    }
}
