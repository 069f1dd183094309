#![no_main]

use libfuzzer_sys::fuzz_target;

use pathgraph::{
    graph::Graph,
    infra::{arbitrary::MutOpsSeq, testing::check_consistency},
};

fuzz_target!(|ops: MutOpsSeq<i8>| {
    let mut graph = Graph::new(true);

    for op in ops {
        let result = op.apply(&mut graph);
        result.check(&graph).unwrap();
        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
