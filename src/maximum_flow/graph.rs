use crate::error::{self, GraphError, Result};
use crate::maximum_flow::edmonds_karp::EdmondsKarp;
use num_traits::{CheckedAdd, NumAssign};
use std::collections::BTreeMap;
use std::fmt::{self, Debug, Display};

/// Directed graph with one capacity per ordered vertex pair.
///
/// Adding an edge for a pair that already has one overwrites its capacity.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Graph<Flow> {
    num_nodes: usize,
    num_edges: usize,
    pub(crate) capacities: Vec<BTreeMap<usize, Flow>>,
}

impl<Flow> Graph<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn new(num_nodes: usize) -> Self {
        Self { num_nodes, num_edges: 0, capacities: (0..num_nodes).map(|_| BTreeMap::new()).collect() }
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
        self.capacities.push(BTreeMap::new());
        self.num_nodes += 1;
        self.num_nodes - 1
    }

    pub fn add_nodes(&mut self, num_nodes: usize) -> Vec<usize> {
        self.capacities.extend((0..num_nodes).map(|_| BTreeMap::new()));
        self.num_nodes += num_nodes;
        ((self.num_nodes - num_nodes)..self.num_nodes).collect()
    }

    pub fn add_directed_edge(&mut self, from: usize, to: usize, capacity: Flow) -> Result<()> {
        error::check_node(from, self.num_nodes)?;
        error::check_node(to, self.num_nodes)?;
        if capacity < Flow::zero() {
            return Err(GraphError::InvalidCapacity { from, to });
        }

        if self.capacities[from].insert(to, capacity).is_none() {
            self.num_edges += 1;
        }
        Ok(())
    }

    /// Capacity of `(from, to)`, zero when there is no such edge.
    pub fn capacity(&self, from: usize, to: usize) -> Flow {
        self.capacities.get(from).and_then(|outs| outs.get(&to)).copied().unwrap_or_else(Flow::zero)
    }

    /// All edges, ordered by `(from, to)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Flow)> + '_ {
        self.capacities.iter().enumerate().flat_map(|(from, outs)| outs.iter().map(move |(&to, &capacity)| (from, to, capacity)))
    }
}

impl<Flow> Graph<Flow>
where
    Flow: NumAssign + Ord + Copy + Debug + CheckedAdd,
{
    pub fn maximum_flow(&self, source: usize, sink: usize) -> Result<Flow> {
        EdmondsKarp::default().solve(source, sink, self)
    }

    // source side of a minimum cut, ascending
    pub fn minimum_cut(&self, source: usize, sink: usize) -> Result<Vec<usize>> {
        let mut solver = EdmondsKarp::default();
        solver.solve(source, sink, self)?;
        Ok(solver.minimum_cut())
    }
}

impl<Flow> Display for Graph<Flow>
where
    Flow: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (u, outs) in self.capacities.iter().enumerate().filter(|(_, outs)| !outs.is_empty()) {
            let entries: Vec<String> = outs.iter().map(|(v, c)| format!("{v}: {c}")).collect();
            writeln!(f, "{u} -> {{{}}}", entries.join(", "))?;
        }
        Ok(())
    }
}
