use crate::error::{GraphError, Result};
use crate::strongly_connected_components::graph::Graph;
use log::{debug, trace};

/// Strongly connected components by Kosaraju's two-pass depth-first search.
///
/// The first pass records vertices in post-order over the graph. The second
/// pass walks the transposed graph, starting from vertices in reverse finish
/// order, and every traversal of it yields exactly one component. Both passes
/// keep `(vertex, next neighbor index)` frames on a heap stack, so a long chain
/// does not grow the call stack.
#[derive(Default)]
pub struct Kosaraju {
    visited: Vec<bool>,
    finish_order: Vec<usize>,
    stack: Vec<(usize, usize)>,
}

impl Kosaraju {
    pub fn solve(&mut self, graph: &Graph) -> Result<Vec<Vec<usize>>> {
        if graph.num_nodes() == 0 {
            return Err(GraphError::EmptyGraph);
        }
        debug!("kosaraju: {} nodes, {} edges", graph.num_nodes(), graph.num_edges());

        // pass 1: finish order
        self.visited.clear();
        self.visited.resize(graph.num_nodes(), false);
        self.finish_order.clear();
        for u in 0..graph.num_nodes() {
            if !self.visited[u] {
                self.finish_from(u, graph);
            }
        }

        // pass 2: components on the transpose
        let transposed = graph.transpose();
        self.visited.fill(false);
        let mut components = Vec::new();
        for i in (0..self.finish_order.len()).rev() {
            let u = self.finish_order[i];
            if self.visited[u] {
                continue;
            }
            let component = self.collect_from(u, &transposed);
            trace!("component #{} rooted at {} has {} vertices", components.len(), u, component.len());
            components.push(component);
        }

        debug!("kosaraju: {} components", components.len());
        Ok(components)
    }

    /// Post-order of the first pass of the last `solve`.
    pub fn finish_order(&self) -> &[usize] {
        &self.finish_order
    }

    fn finish_from(&mut self, start: usize, graph: &Graph) {
        self.visited[start] = true;
        self.stack.push((start, 0));

        while let Some(frame) = self.stack.last_mut() {
            let (u, next) = *frame;
            match graph.neighbors(u).get(next) {
                Some(&v) => {
                    frame.1 += 1;
                    if !self.visited[v] {
                        self.visited[v] = true;
                        self.stack.push((v, 0));
                    }
                }
                None => {
                    self.stack.pop();
                    self.finish_order.push(u);
                }
            }
        }
    }

    // vertices reachable from start that no earlier traversal claimed, in discovery order
    fn collect_from(&mut self, start: usize, transposed: &Graph) -> Vec<usize> {
        let mut component = vec![start];
        self.visited[start] = true;
        self.stack.push((start, 0));

        while let Some(frame) = self.stack.last_mut() {
            let (u, next) = *frame;
            match transposed.neighbors(u).get(next) {
                Some(&v) => {
                    frame.1 += 1;
                    if !self.visited[v] {
                        self.visited[v] = true;
                        component.push(v);
                        self.stack.push((v, 0));
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        component
    }
}
