use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};

#[test]
fn test_add_forward() {
    let mut g = Graph::new();
    let a = g.leaf(2.0);
    let b = g.leaf(-3.5);
    let c = g.add(a, b).unwrap();
    assert_eq!(g.value(c).unwrap(), -1.5);
    assert_eq!(g.op(c).unwrap(), OpKind::Add);
    assert_eq!(g.operands(c).unwrap(), &[a, b]);
}

#[test]
fn test_add_promotes_scalars() {
    let mut g = Graph::new();
    let a = g.leaf(1.0);
    let c = g.add(a, 4.0).unwrap();
    assert_eq!(g.value(c).unwrap(), 5.0);
    assert_eq!(g.len(), 3);
    let promoted = g.operands(c).unwrap()[1];
    assert!(g.node(promoted).unwrap().is_leaf());

    let d = g.add(1.0, 2.0).unwrap();
    assert_eq!(g.value(d).unwrap(), 3.0);
}

#[test]
fn test_add_backward_rule() {
    assert_eq!(add_backward(0.75), [0.75, 0.75]);
}

#[test]
fn test_add_backward() {
    let mut g = Graph::new();
    let a = g.leaf(2.0);
    let b = g.leaf(5.0);
    let c = g.add(a, b).unwrap();
    g.backward(c).unwrap();
    assert_eq!(g.grad(c).unwrap(), 1.0);
    assert_eq!(g.grad(a).unwrap(), 1.0);
    assert_eq!(g.grad(b).unwrap(), 1.0);
}

#[test]
fn test_add_same_operand_accumulates() {
    let mut g = Graph::new();
    let a = g.leaf(3.0);
    let y = g.add(a, a).unwrap();
    g.backward(y).unwrap();
    assert_eq!(g.grad(a).unwrap(), 2.0);
}

#[test]
fn test_add_grad_check() {
    let result = check_grad(
        |g, x| g.add(x[0], x[1]),
        &[0.3, -1.7],
        &GradCheckConfig::default(),
    );
    assert!(result.is_ok(), "grad check failed: {:?}", result.err());
}
