use crate::error::{self, Result};
use crate::strongly_connected_components::kosaraju::Kosaraju;

/// Unweighted directed graph.
///
/// Neighbors are kept in insertion order. Duplicate edges and self-loops are
/// stored as given.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    num_nodes: usize,
    num_edges: usize,
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    pub fn new(num_nodes: usize) -> Self {
        Self { num_nodes, num_edges: 0, adjacency: vec![Vec::new(); num_nodes] }
    }

    pub fn try_new(num_nodes: i64) -> Result<Self> {
        Ok(Self::new(error::node_count(num_nodes)?))
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn add_node(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.num_nodes += 1;
        self.num_nodes - 1
    }

    pub fn add_nodes(&mut self, num_nodes: usize) -> Vec<usize> {
        self.adjacency.resize(self.num_nodes + num_nodes, Vec::new());
        self.num_nodes += num_nodes;
        ((self.num_nodes - num_nodes)..self.num_nodes).collect()
    }

    pub fn add_directed_edge(&mut self, from: usize, to: usize) -> Result<()> {
        error::check_node(from, self.num_nodes)?;
        error::check_node(to, self.num_nodes)?;

        self.adjacency[from].push(to);
        self.num_edges += 1;
        Ok(())
    }

    /// Out-neighbors of `u`; empty for a vertex without edges or outside the graph.
    #[inline]
    pub fn neighbors(&self, u: usize) -> &[usize] {
        self.adjacency.get(u).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, outs)| outs.iter().map(move |&v| (u, v)))
    }

    /// The same graph with every edge reversed.
    pub fn transpose(&self) -> Graph {
        let mut transposed = Graph::new(self.num_nodes);
        for (u, v) in self.edges() {
            transposed.adjacency[v].push(u);
        }
        transposed.num_edges = self.num_edges;
        transposed
    }

    pub fn strongly_connected_components(&self) -> Result<Vec<Vec<usize>>> {
        Kosaraju::default().solve(self)
    }
}
