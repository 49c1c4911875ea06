//! # Reverse-mode differentiation (`autograd`)
//!
//! - [`graph`]: reachability ([`Graph::trace`](crate::Graph::trace)) and
//!   topological ordering ([`Graph::build_order`](crate::Graph::build_order)).
//! - [`backward`]: the backward driver ([`Graph::backward`](crate::Graph::backward)).
//! - [`grad_check`]: comparison of analytical gradients with central differences.

pub mod backward;
pub mod grad_check;
pub mod graph;

pub use grad_check::{check_grad, GradCheckConfig, GradCheckError};
pub use graph::{Edge, Trace};
