use super::*;
use crate::utils::testing::init_test_logger;

fn position(order: &[NodeId], id: NodeId) -> usize {
    order
        .iter()
        .position(|&n| n == id)
        .expect("node missing from order")
}

#[test]
fn test_trace_collects_nodes_and_edges() {
    let mut g = Graph::new();
    let a = g.leaf(2.0);
    let b = g.leaf(-3.0);
    let c = g.leaf(10.0);
    let e = g.mul(a, b).unwrap();
    let d = g.add(e, c).unwrap();
    let unrelated = g.leaf(1.0);

    let trace = g.trace(d).unwrap();
    assert_eq!(trace.nodes.len(), 5);
    for id in [a, b, c, e, d] {
        assert!(trace.contains(id));
    }
    assert!(!trace.contains(unrelated));

    let expected: HashSet<Edge> = [(a, e), (b, e), (e, d), (c, d)]
        .into_iter()
        .map(|(operand, consumer)| Edge { operand, consumer })
        .collect();
    assert_eq!(trace.edges, expected);
}

#[test]
fn test_trace_deduplicates_repeated_operand() {
    let mut g = Graph::new();
    let a = g.leaf(1.0);
    let y = g.add(a, a).unwrap();
    let trace = g.trace(y).unwrap();
    assert_eq!(trace.nodes.len(), 2);
    assert_eq!(trace.edges.len(), 1);
    assert!(trace.edges.contains(&Edge {
        operand: a,
        consumer: y
    }));
}

#[test]
fn test_trace_of_leaf() {
    let mut g = Graph::new();
    let a = g.leaf(1.0);
    let trace = g.trace(a).unwrap();
    assert_eq!(trace.nodes, vec![a]);
    assert!(trace.edges.is_empty());
}

#[test]
fn test_build_order_respects_edges() {
    init_test_logger();
    let mut g = Graph::new();
    let x = g.leaf(0.5);
    let w = g.leaf(-1.0);
    let xw = g.mul(x, w).unwrap();
    let shared = g.tanh(xw).unwrap();
    let left = g.mul(shared, x).unwrap();
    let right = g.exp(shared).unwrap();
    let root = g.sub(left, right).unwrap();

    let order = g.build_order(root).unwrap();
    let trace = g.trace(root).unwrap();
    assert_eq!(order.len(), trace.nodes.len());
    assert_eq!(*order.last().unwrap(), root);
    for edge in &trace.edges {
        assert!(position(&order, edge.operand) < position(&order, edge.consumer));
    }
}

#[test]
fn test_build_order_visits_each_node_once() {
    let mut g = Graph::new();
    let a = g.leaf(1.0);
    let b = g.mul(a, a).unwrap();
    let c = g.add(b, a).unwrap();
    let d = g.mul(c, b).unwrap();
    let order = g.build_order(d).unwrap();
    let unique: HashSet<NodeId> = order.iter().copied().collect();
    assert_eq!(unique.len(), order.len());
    assert_eq!(order.len(), 4);
    assert_eq!(order[0], a);
}

#[test]
fn test_build_order_handles_deep_chains() {
    let mut g = Graph::new();
    let mut node = g.leaf(0.0);
    for _ in 0..200_000 {
        node = g.add(node, 1.0).unwrap();
    }
    let order = g.build_order(node).unwrap();
    assert_eq!(order.len(), g.len());
    let trace = g.trace(node).unwrap();
    assert_eq!(trace.nodes.len(), g.len());
}

#[test]
fn test_unknown_root_is_rejected() {
    let g = Graph::new();
    let mut other = Graph::new();
    let id = other.leaf(1.0);
    assert!(matches!(
        g.build_order(id),
        Err(AutogradError::NodeNotFound { .. })
    ));
    assert!(matches!(g.trace(id), Err(AutogradError::NodeNotFound { .. })));
}
