use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::{NodeId, OpKind, Operand};

impl Graph {
    /// Adds two operands: `a + b`.
    pub fn add(
        &mut self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<NodeId, AutogradError> {
        let (a_id, a_val) = self.resolve_value(a.into())?;
        let (b_id, b_val) = self.resolve_value(b.into())?;
        Ok(self.push_op(a_val + b_val, OpKind::Add, vec![a_id, b_id]))
    }
}

/// Local rule for addition: the output gradient flows unchanged to both operands.
pub(crate) fn add_backward(grad_output: f64) -> [f64; 2] {
    [grad_output, grad_output]
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
