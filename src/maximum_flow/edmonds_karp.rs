use crate::error::{self, GraphError, Result};
use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::residual::Residual;
use log::{debug, trace};
use num_traits::{CheckedAdd, NumAssign};
use std::collections::VecDeque;
use std::fmt::Debug;

/// Maximum flow by shortest augmenting paths.
///
/// Every augmenting path is found by a breadth-first search over the residual
/// network, which bounds the number of augmentations by `O(VE)` no matter how
/// large the capacities are. The solver works on its own residual copy; the
/// caller's graph is only read.
pub struct EdmondsKarp<Flow> {
    residual: Residual<Flow>,
    source: usize,
}

impl<Flow> Default for EdmondsKarp<Flow> {
    fn default() -> Self {
        Self { residual: Residual::default(), source: 0 }
    }
}

impl<Flow> EdmondsKarp<Flow>
where
    Flow: NumAssign + Ord + Copy + Debug + CheckedAdd,
{
    pub fn solve(&mut self, source: usize, sink: usize, graph: &Graph<Flow>) -> Result<Flow> {
        if graph.num_nodes() == 0 {
            return Err(GraphError::EmptyGraph);
        }
        error::check_node(source, graph.num_nodes())?;
        error::check_node(sink, graph.num_nodes())?;

        self.residual.build(graph);
        self.source = source;
        if source == sink {
            return Ok(Flow::zero());
        }

        debug!("edmonds-karp: {} nodes, {} edges, {} -> {}", graph.num_nodes(), graph.num_edges(), source, sink);

        let mut prev = vec![(usize::MAX, usize::MAX); self.residual.num_nodes];
        let mut visited = vec![false; self.residual.num_nodes];
        let mut queue = VecDeque::new();
        let mut flow = Flow::zero();
        let mut augmentations = 0usize;

        loop {
            prev.fill((usize::MAX, usize::MAX));
            visited.fill(false);
            queue.clear();

            // bfs
            visited[source] = true;
            queue.push_back(source);
            'bfs: while let Some(u) = queue.pop_front() {
                for edge_id in self.residual.start[u]..self.residual.start[u + 1] {
                    let edge = &self.residual.inside_edge_list[edge_id];
                    if visited[edge.to] || edge.residual_capacity() == Flow::zero() {
                        continue;
                    }

                    visited[edge.to] = true;
                    prev[edge.to] = (u, edge_id);
                    if edge.to == sink {
                        break 'bfs;
                    }
                    queue.push_back(edge.to);
                }
            }

            if !visited[sink] {
                break;
            }

            // calculate delta
            let mut delta = self.residual.inside_edge_list[prev[sink].1].residual_capacity();
            let mut path_len = 0;
            let mut v = sink;
            while v != source {
                let (u, edge_id) = prev[v];
                delta = delta.min(self.residual.inside_edge_list[edge_id].residual_capacity());
                path_len += 1;
                v = u;
            }

            // update flow
            let mut v = sink;
            while v != source {
                let (u, edge_id) = prev[v];
                self.residual.push_flow(edge_id, delta);
                v = u;
            }

            flow = flow.checked_add(&delta).ok_or(GraphError::FlowOverflow)?;
            augmentations += 1;
            trace!("augmenting path of {} edges carries {:?}", path_len, delta);
        }

        debug!("edmonds-karp: maximum flow {:?} after {} augmentations", flow, augmentations);
        Ok(flow)
    }

    /// Flow assigned to the edge `(from, to)` by the last `solve`.
    pub fn flow(&self, from: usize, to: usize) -> Flow {
        self.residual.flow(from, to)
    }

    /// Source side of a minimum cut after the last `solve`, ascending.
    pub fn minimum_cut(&self) -> Vec<usize> {
        self.residual.reachable_from(self.source).into_iter().enumerate().filter_map(|(u, reachable)| reachable.then_some(u)).collect()
    }
}
