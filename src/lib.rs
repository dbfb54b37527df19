pub mod cli;
pub mod error;
pub mod maximum_flow;
pub mod strongly_connected_components;

pub use error::{GraphError, Result};
