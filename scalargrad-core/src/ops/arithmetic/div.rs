use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::{NodeId, OpKind, Operand};

impl Graph {
    /// Divides two operands: `a * b**-1`.
    ///
    /// The reciprocal of `b` becomes its own `pow(b, -1)` node and the output
    /// (kind [`OpKind::Div`]) multiplies `a` by it, so gradients follow the mul
    /// and pow rules. A zero divisor is not guarded: the result follows IEEE-754
    /// (`inf` or `NaN`).
    pub fn div(
        &mut self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<NodeId, AutogradError> {
        let (a_id, a_val) = self.resolve_value(a.into())?;
        let b_id = self.resolve(b.into())?;
        let recip_b = self.pow(b_id, -1.0)?;
        let recip_b_val = self.nodes[recip_b.0].value;
        Ok(self.push_op(a_val * recip_b_val, OpKind::Div, vec![a_id, recip_b]))
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
