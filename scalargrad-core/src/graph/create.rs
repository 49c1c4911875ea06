use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::{Node, NodeId};
use rand::Rng;
use rand_distr::{Distribution, Normal};

impl Graph {
    /// Wraps a raw scalar in a new leaf node.
    pub fn leaf(&mut self, value: f64) -> NodeId {
        self.push(Node::leaf(value))
    }

    /// Creates a leaf carrying a display label.
    pub fn leaf_labeled(&mut self, value: f64, label: impl Into<String>) -> NodeId {
        let mut node = Node::leaf(value);
        node.label = Some(label.into());
        self.push(node)
    }

    /// Creates a leaf with a value drawn uniformly from `[low, high)`.
    ///
    /// Typical use is weight initialisation in `[-1, 1)`.
    pub fn leaf_uniform<R: Rng>(
        &mut self,
        rng: &mut R,
        low: f64,
        high: f64,
    ) -> Result<NodeId, AutogradError> {
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(AutogradError::invalid_argument(
                "leaf_uniform",
                format!("expected finite low < high, got [{}, {})", low, high),
            ));
        }
        let value = rng.gen_range(low..high);
        Ok(self.leaf(value))
    }

    /// Creates a leaf with a value drawn from `N(mean, std_dev^2)`.
    pub fn leaf_normal<R: Rng>(
        &mut self,
        rng: &mut R,
        mean: f64,
        std_dev: f64,
    ) -> Result<NodeId, AutogradError> {
        let normal = Normal::new(mean, std_dev).map_err(|e| {
            AutogradError::invalid_argument(
                "leaf_normal",
                format!("mean {} / std_dev {}: {}", mean, std_dev, e),
            )
        })?;
        let value = normal.sample(rng);
        Ok(self.leaf(value))
    }
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
