use network_graphs::maximum_flow::edmonds_karp::EdmondsKarp;
use network_graphs::maximum_flow::graph::Graph;

fn main() {
    env_logger::init();

    let mut graph = Graph::new(6);
    let edges = [(0, 1, 16), (0, 2, 13), (1, 2, 10), (1, 3, 12), (2, 1, 4), (2, 4, 14), (3, 2, 9), (3, 5, 20), (4, 3, 7), (4, 5, 4)];
    for (u, v, c) in edges {
        graph.add_directed_edge(u, v, c).unwrap();
    }

    println!("graph:\n{graph}");
    let mut solver = EdmondsKarp::default();
    let flow = solver.solve(0, 5, &graph).unwrap();
    println!("maximum flow 0 -> 5: {flow}");
    for (u, v, c) in graph.edges() {
        println!("  ({u}, {v}) carries {}/{c}", solver.flow(u, v));
    }
    println!("source side of a minimum cut: {:?}", solver.minimum_cut());

    let mut graph = Graph::new(4);
    for (u, v, c) in [(0, 1, 10), (0, 2, 10), (1, 2, 2), (1, 3, 4), (2, 3, 9)] {
        graph.add_directed_edge(u, v, c).unwrap();
    }
    println!("\ngraph:\n{graph}");
    println!("maximum flow 0 -> 3: {}", graph.maximum_flow(0, 3).unwrap());
}
