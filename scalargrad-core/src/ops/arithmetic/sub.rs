use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::{NodeId, OpKind, Operand};

impl Graph {
    /// Subtracts two operands: `a - b`.
    ///
    /// Built as `a + neg(b)`: the subtrahend is negated into its own node and the
    /// output (kind [`OpKind::Sub`]) adds it to `a`, so gradients follow the add
    /// and neg rules.
    pub fn sub(
        &mut self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<NodeId, AutogradError> {
        let (a_id, a_val) = self.resolve_value(a.into())?;
        let b_id = self.resolve(b.into())?;
        let neg_b = self.neg(b_id)?;
        let neg_b_val = self.nodes[neg_b.0].value;
        Ok(self.push_op(a_val + neg_b_val, OpKind::Sub, vec![a_id, neg_b]))
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
