use super::*;

#[test]
fn test_op_kind_arity() {
    assert_eq!(OpKind::Leaf.arity(), 0);
    assert_eq!(OpKind::Neg.arity(), 1);
    assert_eq!(OpKind::Pow(2.0).arity(), 1);
    assert_eq!(OpKind::Exp.arity(), 1);
    assert_eq!(OpKind::Tanh.arity(), 1);
    assert_eq!(OpKind::Add.arity(), 2);
    assert_eq!(OpKind::Sub.arity(), 2);
    assert_eq!(OpKind::Mul.arity(), 2);
    assert_eq!(OpKind::Div.arity(), 2);
}

#[test]
fn test_op_kind_symbol() {
    assert_eq!(OpKind::Leaf.symbol(), "");
    assert_eq!(OpKind::Add.symbol(), "+");
    assert_eq!(OpKind::Mul.symbol(), "*");
    assert_eq!(OpKind::Pow(-1.0).symbol(), "**-1");
    assert_eq!(OpKind::Tanh.symbol(), "tanh");
    assert_eq!(OpKind::Leaf.to_string(), "leaf");
    assert_eq!(OpKind::Exp.to_string(), "exp");
}

#[test]
fn test_leaf_node_starts_at_rest() {
    let node = Node::leaf(3.5);
    assert_eq!(node.value(), 3.5);
    assert_eq!(node.grad(), 0.0);
    assert!(node.is_leaf());
    assert!(node.operands().is_empty());
    assert!(node.label().is_none());
}

#[test]
fn test_node_display_matches_value_repr() {
    let node = Node::leaf(2.0);
    assert_eq!(format!("{}", node), "Value(data=2)");
    let node = Node::leaf(-0.5);
    assert_eq!(node.to_string(), "Value(data=-0.5)");
}

#[test]
fn test_operand_conversions() {
    let id = NodeId(4);
    assert_eq!(Operand::from(id), Operand::Node(id));
    assert_eq!(Operand::from(&id), Operand::Node(id));
    assert_eq!(Operand::from(1.5), Operand::Scalar(1.5));
    assert_eq!(id.index(), 4);
}
