//! # Graph arena (`graph`)
//!
//! The [`Graph`] owns every [`Node`] created during forward construction.
//! Nodes are appended and never removed, and they refer to their operands by
//! [`NodeId`] (their index in the arena). Because an operation can only read
//! nodes that already exist, every operand index is strictly smaller than the
//! index of the node consuming it, which keeps the graph acyclic by
//! construction.
//!
//! ## Submodules
//!
//! - `create`: leaf construction (plain, labelled, random).
//! - `accessors`: reading and resetting values, gradients and labels.
//! - `debug`: `Debug` formatting of the arena.
//!
//! The operator library lives in [`crate::ops`] and the backward machinery in
//! [`crate::autograd`]; both add methods to `Graph`.

use crate::error::AutogradError;
use crate::node::{Node, NodeId, OpKind, Operand};

pub mod accessors;
pub mod create;
pub mod debug;

/// Append-only arena of scalar nodes.
#[derive(Clone, Default)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph { nodes: Vec::new() }
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Returns a reference to the node behind `id`.
    pub fn node(&self, id: NodeId) -> Result<&Node, AutogradError> {
        self.nodes.get(id.0).ok_or(AutogradError::NodeNotFound {
            id,
            len: self.nodes.len(),
        })
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, AutogradError> {
        let len = self.nodes.len();
        self.nodes
            .get_mut(id.0)
            .ok_or(AutogradError::NodeNotFound { id, len })
    }

    /// Appends a node and returns its handle.
    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Appends a derived node whose operands have already been validated.
    pub(crate) fn push_op(&mut self, value: f64, op: OpKind, operands: Vec<NodeId>) -> NodeId {
        self.push(Node::derived(value, op, operands))
    }

    /// Turns an operand into a node handle, promoting raw scalars to leaves.
    pub(crate) fn resolve(&mut self, operand: Operand) -> Result<NodeId, AutogradError> {
        match operand {
            Operand::Node(id) => {
                self.node(id)?;
                Ok(id)
            }
            Operand::Scalar(value) => Ok(self.leaf(value)),
        }
    }

    /// Resolves an operand and returns its handle together with its value.
    pub(crate) fn resolve_value(
        &mut self,
        operand: Operand,
    ) -> Result<(NodeId, f64), AutogradError> {
        let id = self.resolve(operand)?;
        let value = self.nodes[id.0].value;
        Ok((id, value))
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
