pub mod edmonds_karp;
pub mod graph;
mod residual;
