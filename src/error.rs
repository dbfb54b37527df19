use thiserror::Error;

/// Errors raised while building a graph or before running a computation on it.
///
/// Every check happens before any traversal starts, so an `Err` never comes
/// with a partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("invalid vertex count: {0}")]
    InvalidVertexCount(i64),

    #[error("vertex {vertex} is out of range for a graph with {num_nodes} vertices")]
    VertexOutOfRange { vertex: usize, num_nodes: usize },

    #[error("negative capacity on edge ({from}, {to})")]
    InvalidCapacity { from: usize, to: usize },

    #[error("graph has no vertices")]
    EmptyGraph,

    #[error("maximum flow exceeds the range of the flow type")]
    FlowOverflow,
}

pub type Result<T> = std::result::Result<T, GraphError>;

pub(crate) fn node_count(num_nodes: i64) -> Result<usize> {
    usize::try_from(num_nodes).map_err(|_| GraphError::InvalidVertexCount(num_nodes))
}

pub(crate) fn check_node(vertex: usize, num_nodes: usize) -> Result<()> {
    if vertex >= num_nodes {
        return Err(GraphError::VertexOutOfRange { vertex, num_nodes });
    }
    Ok(())
}
