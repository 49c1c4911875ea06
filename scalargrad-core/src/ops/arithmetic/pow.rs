use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::{NodeId, OpKind, Operand};

impl Graph {
    /// Raises an operand to a constant power: `a ** exponent`.
    ///
    /// # Errors
    /// [`AutogradError::InvalidArgument`] if `exponent` is NaN or infinite. The
    /// check happens here, before any node is created.
    pub fn pow(&mut self, a: impl Into<Operand>, exponent: f64) -> Result<NodeId, AutogradError> {
        if !exponent.is_finite() {
            return Err(AutogradError::invalid_argument(
                "pow",
                format!("exponent must be a finite constant, got {}", exponent),
            ));
        }
        let (a_id, a_val) = self.resolve_value(a.into())?;
        Ok(self.push_op(a_val.powf(exponent), OpKind::Pow(exponent), vec![a_id]))
    }
}

/// Local rule for a constant power: `exponent * a**(exponent - 1) * grad_output`.
pub(crate) fn pow_backward(a: f64, exponent: f64, grad_output: f64) -> f64 {
    exponent * a.powf(exponent - 1.0) * grad_output
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
