use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::{Node, NodeId, OpKind};

impl Graph {
    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over every node in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i), node))
    }

    /// Forward value of a node.
    pub fn value(&self, id: NodeId) -> Result<f64, AutogradError> {
        Ok(self.node(id)?.value)
    }

    /// Accumulated gradient of a node.
    pub fn grad(&self, id: NodeId) -> Result<f64, AutogradError> {
        Ok(self.node(id)?.grad)
    }

    pub fn op(&self, id: NodeId) -> Result<OpKind, AutogradError> {
        Ok(self.node(id)?.op)
    }

    /// Operand handles of a node, in operation order.
    pub fn operands(&self, id: NodeId) -> Result<&[NodeId], AutogradError> {
        Ok(&self.node(id)?.operands)
    }

    pub fn label(&self, id: NodeId) -> Result<Option<&str>, AutogradError> {
        Ok(self.node(id)?.label.as_deref())
    }

    pub fn set_label(&mut self, id: NodeId, label: impl Into<String>) -> Result<(), AutogradError> {
        self.node_mut(id)?.label = Some(label.into());
        Ok(())
    }

    /// Reassigns the value of a leaf, e.g. for a gradient-descent update.
    ///
    /// Nodes derived from the leaf keep the value they were built with; the
    /// expression has to be rebuilt to see the new value.
    ///
    /// # Errors
    /// [`AutogradError::NotALeaf`] if `id` refers to a derived node.
    pub fn set_value(&mut self, id: NodeId, value: f64) -> Result<(), AutogradError> {
        let node = self.node_mut(id)?;
        if !node.is_leaf() {
            return Err(AutogradError::NotALeaf {
                id,
                op: node.op.to_string(),
            });
        }
        log::debug!("set_value: leaf {:?} {} -> {}", id, node.value, value);
        node.value = value;
        Ok(())
    }

    /// Overwrites the gradient of a single node.
    pub fn set_grad(&mut self, id: NodeId, grad: f64) -> Result<(), AutogradError> {
        self.node_mut(id)?.grad = grad;
        Ok(())
    }

    /// Resets every gradient in the graph to `0.0`.
    ///
    /// The backward pass never does this on its own.
    pub fn zero_grad(&mut self) {
        for node in self.nodes.iter_mut() {
            node.grad = 0.0;
        }
    }
}

#[cfg(test)]
#[path = "accessors_test.rs"]
mod tests;
