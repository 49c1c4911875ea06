use std::fmt;

/// Stable handle to a node stored in a [`Graph`](crate::Graph).
///
/// A `NodeId` is the node's position in the graph arena. Handles are cheap to
/// copy and stay valid for the lifetime of the graph that issued them. Using a
/// handle with a different graph is detected only when it is out of range
/// (reported as [`AutogradError::NodeNotFound`](crate::AutogradError::NodeNotFound)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its graph arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// The operation that produced a node.
///
/// The kind selects the local backward rule applied to the node's operands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpKind {
    /// Raw input scalar, no operands.
    Leaf,
    /// `operands[0] + operands[1]`
    Add,
    /// `operands[0] + operands[1]` where `operands[1]` is the negated subtrahend.
    Sub,
    /// `operands[0] * operands[1]`
    Mul,
    /// `operands[0] * operands[1]` where `operands[1]` is the divisor raised to `-1`.
    Div,
    /// `-operands[0]`
    Neg,
    /// `operands[0] ** exponent`, with a constant exponent.
    Pow(f64),
    /// `e ** operands[0]`
    Exp,
    /// `tanh(operands[0])`
    Tanh,
}

impl OpKind {
    /// Number of operands a node of this kind carries.
    pub fn arity(&self) -> usize {
        match self {
            OpKind::Leaf => 0,
            OpKind::Neg | OpKind::Pow(_) | OpKind::Exp | OpKind::Tanh => 1,
            OpKind::Add | OpKind::Sub | OpKind::Mul | OpKind::Div => 2,
        }
    }

    /// Short operator glyph used when rendering a graph. Empty for leaves.
    pub fn symbol(&self) -> String {
        match self {
            OpKind::Leaf => String::new(),
            OpKind::Add => "+".to_string(),
            OpKind::Sub => "-".to_string(),
            OpKind::Mul => "*".to_string(),
            OpKind::Div => "/".to_string(),
            OpKind::Neg => "neg".to_string(),
            OpKind::Pow(k) => format!("**{}", k),
            OpKind::Exp => "exp".to_string(),
            OpKind::Tanh => "tanh".to_string(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, OpKind::Leaf)
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpKind::Leaf => write!(f, "leaf"),
            other => write!(f, "{}", other.symbol()),
        }
    }
}

/// A scalar in the computation graph.
///
/// `value`, `op` and `operands` are fixed once the node is created; only
/// `grad` changes, and only during a backward pass (or through the explicit
/// reset helpers on [`Graph`](crate::Graph)). Leaf values may be reassigned by
/// the caller between passes.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) op: OpKind,
    pub(crate) operands: Vec<NodeId>,
    pub(crate) label: Option<String>,
}

impl Node {
    pub(crate) fn leaf(value: f64) -> Self {
        Node {
            value,
            grad: 0.0,
            op: OpKind::Leaf,
            operands: Vec::new(),
            label: None,
        }
    }

    pub(crate) fn derived(value: f64, op: OpKind, operands: Vec<NodeId>) -> Self {
        debug_assert_eq!(op.arity(), operands.len());
        Node {
            value,
            grad: 0.0,
            op,
            operands,
            label: None,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn grad(&self) -> f64 {
        self.grad
    }

    pub fn op(&self) -> OpKind {
        self.op
    }

    pub fn operands(&self) -> &[NodeId] {
        &self.operands
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.op.is_leaf()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={})", self.value)
    }
}

/// An operand accepted by the operator library: either an existing node or a
/// raw scalar that is promoted to a fresh leaf when the operation is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Node(NodeId),
    Scalar(f64),
}

impl From<NodeId> for Operand {
    fn from(id: NodeId) -> Self {
        Operand::Node(id)
    }
}

impl From<&NodeId> for Operand {
    fn from(id: &NodeId) -> Self {
        Operand::Node(*id)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "node_test.rs"]
mod tests;
