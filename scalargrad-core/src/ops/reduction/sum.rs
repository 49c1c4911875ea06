use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::{NodeId, Operand};

impl Graph {
    /// Sums several operands as a left-leaning chain of `add` nodes.
    ///
    /// A single operand is returned as is (promoted to a leaf if it is a raw
    /// scalar); no node is created for it.
    ///
    /// # Errors
    /// [`AutogradError::InvalidArgument`] if `items` is empty.
    pub fn sum<I, O>(&mut self, items: I) -> Result<NodeId, AutogradError>
    where
        I: IntoIterator<Item = O>,
        O: Into<Operand>,
    {
        let mut items = items.into_iter();
        let first = items
            .next()
            .ok_or_else(|| AutogradError::invalid_argument("sum", "cannot sum zero operands"))?;
        let mut acc = self.resolve(first.into())?;
        for item in items {
            acc = self.add(acc, item)?;
        }
        Ok(acc)
    }
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
