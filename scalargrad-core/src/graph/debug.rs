// src/graph/debug.rs
use crate::graph::Graph;
use std::fmt;

// Manual implementation of Debug trait
impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph(nodes={})", self.nodes.len())?;
        for (id, node) in self.iter() {
            write!(
                f,
                "  #{} {} data={:.4} grad={:.4} operands={:?}",
                id.index(),
                node.op,
                node.value,
                node.grad,
                node.operands.iter().map(|o| o.index()).collect::<Vec<_>>()
            )?;
            if let Some(label) = &node.label {
                write!(f, " label={}", label)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
