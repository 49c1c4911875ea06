use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::{NodeId, OpKind};
use crate::ops::{
    add_backward, exp_backward, mul_backward, neg_backward, pow_backward, tanh_backward,
};

impl Graph {
    /// Performs the backward pass starting from `root`.
    ///
    /// Seeds `root`'s gradient with `1.0`, then walks the topological order of the
    /// reachable subgraph in reverse and applies each node's local rule, adding
    /// into the gradients of its operands. A node's rule runs only after all of
    /// its consumers have run, so it always sees its fully accumulated gradient.
    ///
    /// Contributions of the pass are summed in a buffer indexed by node position
    /// and then added to each node's `grad`; the root's `grad` is set to `1.0`.
    /// Gradients are never reset here: calling `backward` twice without
    /// [`Graph::zero_grad`] in between doubles every non-root gradient.
    pub fn backward(&mut self, root: NodeId) -> Result<(), AutogradError> {
        let order = self.build_order(root)?;
        log::debug!(
            "backward: root {:?}, {} reachable nodes of {}",
            root,
            order.len(),
            self.nodes.len()
        );

        let mut adjoints = vec![0.0; self.nodes.len()];
        adjoints[root.0] = 1.0;
        for &id in order.iter().rev() {
            self.apply_local_rule(id, &mut adjoints)?;
        }

        for &id in &order {
            let node = &mut self.nodes[id.0];
            if id == root {
                node.grad = 1.0;
            } else {
                node.grad += adjoints[id.0];
            }
        }

        log::debug!("backward: done, root {:?}", root);
        Ok(())
    }

    fn apply_local_rule(&self, id: NodeId, adjoints: &mut [f64]) -> Result<(), AutogradError> {
        let node = &self.nodes[id.0];
        let grad_output = adjoints[id.0];
        let first = node.operands.first().copied();
        let second = node.operands.get(1).copied();
        log::trace!("local rule {} on {:?} (grad {})", node.op, id, grad_output);

        match node.op {
            OpKind::Leaf => {}
            OpKind::Add | OpKind::Sub => {
                let (a, b) = binary_operands(id, node.op, first, second)?;
                let [grad_a, grad_b] = add_backward(grad_output);
                adjoints[a.0] += grad_a;
                adjoints[b.0] += grad_b;
            }
            OpKind::Mul | OpKind::Div => {
                let (a, b) = binary_operands(id, node.op, first, second)?;
                let [grad_a, grad_b] =
                    mul_backward(self.nodes[a.0].value, self.nodes[b.0].value, grad_output);
                adjoints[a.0] += grad_a;
                adjoints[b.0] += grad_b;
            }
            OpKind::Neg => {
                let a = unary_operand(id, node.op, first)?;
                adjoints[a.0] += neg_backward(grad_output);
            }
            OpKind::Pow(exponent) => {
                let a = unary_operand(id, node.op, first)?;
                adjoints[a.0] += pow_backward(self.nodes[a.0].value, exponent, grad_output);
            }
            OpKind::Exp => {
                let a = unary_operand(id, node.op, first)?;
                adjoints[a.0] += exp_backward(node.value, grad_output);
            }
            OpKind::Tanh => {
                let a = unary_operand(id, node.op, first)?;
                adjoints[a.0] += tanh_backward(node.value, grad_output);
            }
        }
        Ok(())
    }
}

fn unary_operand(id: NodeId, op: OpKind, first: Option<NodeId>) -> Result<NodeId, AutogradError> {
    first.ok_or_else(|| {
        AutogradError::InternalError(format!("node {:?} ({}) is missing its operand", id, op))
    })
}

fn binary_operands(
    id: NodeId,
    op: OpKind,
    first: Option<NodeId>,
    second: Option<NodeId>,
) -> Result<(NodeId, NodeId), AutogradError> {
    match (first, second) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(AutogradError::InternalError(format!(
            "node {:?} ({}) expects two operands",
            id, op
        ))),
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
