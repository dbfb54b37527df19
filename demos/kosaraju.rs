use network_graphs::strongly_connected_components::graph::Graph;

fn main() {
    env_logger::init();

    let scenarios: [(usize, &[(usize, usize)]); 2] = [
        (5, &[(0, 1), (1, 2), (2, 0), (1, 3), (3, 4)]),
        (8, &[(0, 1), (1, 2), (2, 3), (2, 4), (3, 0), (4, 5), (5, 6), (6, 4), (6, 7)]),
    ];

    for (num_nodes, edges) in scenarios {
        let mut graph = Graph::new(num_nodes);
        for &(u, v) in edges {
            graph.add_directed_edge(u, v).unwrap();
        }

        let components = graph.strongly_connected_components().unwrap();
        println!("{} vertices, {} components", num_nodes, components.len());
        for component in components {
            println!("  {:?}", component);
        }
    }
}
