use scalargrad_core::{Graph, NodeId};

// Initializes env_logger for integration tests; repeated calls are ignored.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Helper to read a gradient in tests.
// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub fn grad(g: &Graph, id: NodeId) -> f64 {
    g.grad(id).expect("node should exist in graph")
}

#[allow(dead_code)]
pub fn value(g: &Graph, id: NodeId) -> f64 {
    g.value(id).expect("node should exist in graph")
}
