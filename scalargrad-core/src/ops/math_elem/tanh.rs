use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::{NodeId, OpKind, Operand};

impl Graph {
    /// Hyperbolic tangent: `(e^(2a) - 1) / (e^(2a) + 1)`.
    ///
    /// Computed with `f64::tanh`, which saturates to `±1` instead of producing
    /// `inf / inf` for large `|a|`.
    pub fn tanh(&mut self, a: impl Into<Operand>) -> Result<NodeId, AutogradError> {
        let (a_id, a_val) = self.resolve_value(a.into())?;
        Ok(self.push_op(a_val.tanh(), OpKind::Tanh, vec![a_id]))
    }
}

/// Local rule for `tanh`: `(1 - out^2) * grad_output`.
pub(crate) fn tanh_backward(output: f64, grad_output: f64) -> f64 {
    (1.0 - output * output) * grad_output
}

// --- Tests ---
#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
