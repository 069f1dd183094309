use pathgraph::{algo::ShortestPath, graph::Graph};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), pathgraph::Error> {
    // Use `RUST_LOG=pathgraph=trace` to see the relaxations.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut graph = Graph::new_weighted();

    for (from, to, weight) in [
        ("S", "A", 1.0),
        ("S", "B", 4.0),
        ("A", "B", 4.5),
        ("A", "C", 2.0),
        ("A", "D", 5.0),
        ("B", "C", 2.5),
        ("B", "D", 1.5),
        ("C", "Z", 3.5),
        ("C", "B", 0.5),
        ("C", "D", 2.5),
        ("D", "A", 1.0),
        ("D", "C", 2.0),
        ("D", "Z", 1.0),
    ] {
        graph.connect(from, to, Some(weight), true)?;
    }

    let path = ShortestPath::on(&graph).run(&"S", &"Z");

    match path.cost() {
        Some(cost) => println!("{} (cost {cost})", path.vertices().join(" -> ")),
        None => println!("no path from S to Z"),
    }
    // S -> A -> C -> B -> D -> Z (cost 6)

    Ok(())
}
