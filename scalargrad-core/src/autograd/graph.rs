use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;
use std::collections::HashSet;

/// A directed `(operand, consumer)` link of the computation graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub operand: NodeId,
    pub consumer: NodeId,
}

/// Nodes and edges reachable from a root, as returned by [`Graph::trace`].
///
/// The order of `nodes` is the discovery order of the walk and carries no
/// meaning; use [`Graph::build_order`] for a dependency order.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    pub nodes: Vec<NodeId>,
    pub edges: HashSet<Edge>,
}

impl Trace {
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }
}

impl Graph {
    /// Collects every node reachable from `root` by following operand links,
    /// along with each distinct `(operand, consumer)` edge.
    ///
    /// Intended for external inspection such as rendering. The walk uses an
    /// explicit stack, so deep graphs do not exhaust the call stack.
    pub fn trace(&self, root: NodeId) -> Result<Trace, AutogradError> {
        self.node(root)?;
        let mut visited = vec![false; self.nodes.len()];
        let mut trace = Trace::default();
        let mut stack = vec![root];
        visited[root.0] = true;

        while let Some(id) = stack.pop() {
            trace.nodes.push(id);
            for &operand in &self.nodes[id.0].operands {
                trace.edges.insert(Edge {
                    operand,
                    consumer: id,
                });
                if !visited[operand.0] {
                    visited[operand.0] = true;
                    stack.push(operand);
                }
            }
        }
        Ok(trace)
    }

    /// Builds a topological sort of the nodes reachable from `root`.
    ///
    /// Depth-first post-order: all operands of a node are emitted before the node
    /// itself, and each node is emitted once. The root is always last.
    pub fn build_order(&self, root: NodeId) -> Result<Vec<NodeId>, AutogradError> {
        self.node(root)?;
        let mut visited = vec![false; self.nodes.len()];
        let mut order = Vec::new();
        // (node, index of the next operand to visit)
        let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
        visited[root.0] = true;

        while let Some(frame) = stack.last_mut() {
            let (id, next) = *frame;
            let operands = &self.nodes[id.0].operands;
            if next < operands.len() {
                frame.1 += 1;
                let operand = operands[next];
                if !visited[operand.0] {
                    visited[operand.0] = true;
                    stack.push((operand, 0));
                }
            } else {
                order.push(id);
                stack.pop();
            }
        }
        Ok(order)
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
