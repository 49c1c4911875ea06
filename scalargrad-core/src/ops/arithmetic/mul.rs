use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::{NodeId, OpKind, Operand};

impl Graph {
    /// Multiplies two operands: `a * b`.
    pub fn mul(
        &mut self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<NodeId, AutogradError> {
        let (a_id, a_val) = self.resolve_value(a.into())?;
        let (b_id, b_val) = self.resolve_value(b.into())?;
        Ok(self.push_op(a_val * b_val, OpKind::Mul, vec![a_id, b_id]))
    }
}

/// Local rule for multiplication.
///
/// `grad_a = b * grad_output`, `grad_b = a * grad_output`.
pub(crate) fn mul_backward(a: f64, b: f64, grad_output: f64) -> [f64; 2] {
    [b * grad_output, a * grad_output]
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
