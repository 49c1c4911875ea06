use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::{NodeId, OpKind, Operand};

impl Graph {
    /// Negates an operand: `a * -1`.
    pub fn neg(&mut self, a: impl Into<Operand>) -> Result<NodeId, AutogradError> {
        let (a_id, a_val) = self.resolve_value(a.into())?;
        Ok(self.push_op(a_val * -1.0, OpKind::Neg, vec![a_id]))
    }
}

/// Local rule for negation, the same as multiplying by the constant `-1`.
pub(crate) fn neg_backward(grad_output: f64) -> f64 {
    -1.0 * grad_output
}

// --- Tests ---
#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
