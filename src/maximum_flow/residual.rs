use crate::maximum_flow::graph::Graph;
use num_traits::NumAssign;
use std::collections::VecDeque;
use std::ops::Sub;

#[derive(Default, PartialEq, Debug, Clone)]
pub struct InsideEdge<Flow> {
    pub to: usize,
    pub flow: Flow,
    pub upper: Flow,
    pub rev: usize,
}

impl<Flow> InsideEdge<Flow>
where
    Flow: Sub<Output = Flow> + Copy,
{
    pub fn residual_capacity(&self) -> Flow {
        self.upper - self.flow
    }
}

/// Residual network in compressed sparse row form.
///
/// Each capacity edge `(u, v, c)` owns two paired arcs: `u -> v` starting with
/// residual `c` and `v -> u` starting with residual `0`. Pushing flow on one
/// arc hands the same amount to its partner, so for every pair the residuals
/// of `(u, v)` and `(v, u)` always sum to `cap(u, v) + cap(v, u)`.
#[derive(Debug)]
pub struct Residual<Flow> {
    pub num_nodes: usize,
    pub num_edges: usize,
    // (from, to) of every capacity edge, ascending
    edge_keys: Vec<(usize, usize)>,
    edge_index_to_inside_edge_index: Vec<usize>,

    pub start: Vec<usize>,
    pub inside_edge_list: Vec<InsideEdge<Flow>>,
}

impl<Flow> Default for Residual<Flow> {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            num_edges: 0,
            edge_keys: Vec::new(),
            edge_index_to_inside_edge_index: Vec::new(),
            start: Vec::new(),
            inside_edge_list: Vec::new(),
        }
    }
}

impl<Flow> Residual<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn build(&mut self, graph: &Graph<Flow>) {
        self.num_nodes = graph.num_nodes();
        self.num_edges = graph.num_edges();

        self.edge_keys.clear();
        self.edge_index_to_inside_edge_index.clear();
        self.start.clear();
        self.start.resize(self.num_nodes + 1, 0);
        self.inside_edge_list = (0..2 * self.num_edges).map(|_| InsideEdge { to: 0, flow: Flow::zero(), upper: Flow::zero(), rev: 0 }).collect();

        let mut degree = vec![0; self.num_nodes];
        for (u, v, _) in graph.edges() {
            degree[u] += 1;
            degree[v] += 1;
        }

        for i in 1..=self.num_nodes {
            self.start[i] = self.start[i - 1] + degree[i - 1];
        }

        let mut counter = vec![0; self.num_nodes];
        for (u, v, upper) in graph.edges() {
            let inside_edge_index_u = self.start[u] + counter[u];
            counter[u] += 1;
            let inside_edge_index_v = self.start[v] + counter[v];
            counter[v] += 1;

            self.edge_keys.push((u, v));
            self.edge_index_to_inside_edge_index.push(inside_edge_index_u);
            self.inside_edge_list[inside_edge_index_u] = InsideEdge { to: v, flow: Flow::zero(), upper, rev: inside_edge_index_v };
            self.inside_edge_list[inside_edge_index_v] = InsideEdge { to: u, flow: upper, upper, rev: inside_edge_index_u };
        }
    }

    #[inline]
    pub fn neighbors(&self, u: usize) -> std::slice::Iter<InsideEdge<Flow>> {
        self.inside_edge_list[self.start[u]..self.start[u + 1]].iter()
    }

    #[inline]
    pub fn push_flow(&mut self, inside_edge_index: usize, flow: Flow) {
        let rev = self.inside_edge_list[inside_edge_index].rev;

        self.inside_edge_list[inside_edge_index].flow += flow;
        self.inside_edge_list[rev].flow -= flow;
    }

    /// Flow currently carried by the capacity edge `(from, to)`.
    pub fn flow(&self, from: usize, to: usize) -> Flow {
        match self.edge_keys.binary_search(&(from, to)) {
            Ok(edge_index) => self.inside_edge_list[self.edge_index_to_inside_edge_index[edge_index]].flow,
            Err(_) => Flow::zero(),
        }
    }

    // O(n + m)
    // vertices reachable from source through arcs with positive residual capacity
    pub fn reachable_from(&self, source: usize) -> Vec<bool> {
        let mut visited = vec![false; self.num_nodes];
        if source >= self.num_nodes {
            return visited;
        }

        let mut que = VecDeque::from([source]);
        visited[source] = true;
        while let Some(u) = que.pop_front() {
            for e in self.neighbors(u) {
                if !visited[e.to] && e.residual_capacity() > Flow::zero() {
                    visited[e.to] = true;
                    que.push_back(e.to);
                }
            }
        }
        visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn residual_between(residual: &Residual<i64>, u: usize, v: usize) -> i64 {
        residual.neighbors(u).filter(|e| e.to == v).map(|e| e.residual_capacity()).sum()
    }

    #[test]
    fn build_pairs_every_edge_with_an_empty_reverse_arc() {
        let mut graph = Graph::new(3);
        graph.add_directed_edge(0, 1, 4).unwrap();
        graph.add_directed_edge(1, 2, 6).unwrap();

        let mut residual = Residual::default();
        residual.build(&graph);

        assert_eq!(residual.inside_edge_list.len(), 4);
        assert_eq!(residual.start, vec![0, 1, 3, 4]);
        assert_eq!(residual_between(&residual, 0, 1), 4);
        assert_eq!(residual_between(&residual, 1, 0), 0);
        assert_eq!(residual_between(&residual, 2, 1), 0);
    }

    #[test]
    fn push_flow_keeps_pair_sums_constant() {
        let mut graph = Graph::new(2);
        graph.add_directed_edge(0, 1, 5).unwrap();
        graph.add_directed_edge(1, 0, 2).unwrap();

        let mut residual = Residual::default();
        residual.build(&graph);

        let forward = residual.start[0];
        assert_eq!(residual.inside_edge_list[forward].to, 1);
        residual.push_flow(forward, 3);

        assert_eq!(residual_between(&residual, 0, 1), 2);
        assert_eq!(residual_between(&residual, 1, 0), 5);
        assert_eq!(residual_between(&residual, 0, 1) + residual_between(&residual, 1, 0), 7);
        assert_eq!(residual.flow(0, 1), 3);
        assert_eq!(residual.flow(1, 0), 0);
        assert_eq!(residual.flow(0, 0), 0);
    }

    #[test]
    fn reachable_from_ignores_saturated_arcs() {
        let mut graph = Graph::new(3);
        graph.add_directed_edge(0, 1, 1).unwrap();
        graph.add_directed_edge(1, 2, 1).unwrap();

        let mut residual = Residual::default();
        residual.build(&graph);
        residual.push_flow(residual.start[1] + 1, 1);

        assert_eq!(residual.reachable_from(0), vec![true, true, false]);
    }
}
