pub mod graph;
pub mod kosaraju;
