#![no_main]

use libfuzzer_sys::fuzz_target;

use pathgraph::{
    algo::ShortestPath,
    graph::Graph,
    infra::{arbitrary::MutOpsSeq, testing::path_cost},
};

fuzz_target!(|input: (MutOpsSeq<u8>, u8, u8)| {
    let (ops, source, destination) = input;
    let mut graph = Graph::new_weighted();

    for op in ops {
        op.apply(&mut graph);
    }

    let path = ShortestPath::on(&graph).run(&source, &destination);
    let exhaustive = ShortestPath::on(&graph)
        .exhaustive()
        .run(&source, &destination);

    assert_eq!(path.cost(), exhaustive.cost());

    if path.is_found() {
        assert_eq!(path.vertices().first(), Some(&source));
        assert_eq!(path.vertices().last(), Some(&destination));

        // Summing in the same order as the search does, so the costs agree
        // exactly.
        assert_eq!(path_cost(&graph, path.vertices()), path.cost());
    }
});
