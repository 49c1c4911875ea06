use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::{NodeId, OpKind, Operand};

impl Graph {
    /// Natural exponential: `e ** a`. Overflows to `inf` for large inputs.
    pub fn exp(&mut self, a: impl Into<Operand>) -> Result<NodeId, AutogradError> {
        let (a_id, a_val) = self.resolve_value(a.into())?;
        Ok(self.push_op(a_val.exp(), OpKind::Exp, vec![a_id]))
    }
}

/// Local rule for `exp`: the derivative is the output itself.
pub(crate) fn exp_backward(output: f64, grad_output: f64) -> f64 {
    output * grad_output
}

// --- Tests ---
#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
