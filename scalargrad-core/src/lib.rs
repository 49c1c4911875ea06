//! # scalargrad-core
//!
//! A scalar reverse-mode automatic differentiation engine.
//!
//! Values live in a [`Graph`] arena and are referred to by [`NodeId`]. Applying an
//! operation (`add`, `mul`, `tanh`, ...) appends a node that remembers its
//! operands; [`Graph::backward`] then propagates gradients from a chosen root to
//! every node it depends on.
//!
//! ```
//! use scalargrad_core::Graph;
//!
//! let mut g = Graph::new();
//! let a = g.leaf(2.0);
//! let b = g.leaf(-3.0);
//! let e = g.mul(a, b).unwrap();
//! let d = g.add(e, 10.0).unwrap();
//! g.backward(d).unwrap();
//! assert_eq!(g.grad(a).unwrap(), -3.0);
//! assert_eq!(g.grad(b).unwrap(), 2.0);
//! ```

// Déclare les modules principaux de la crate
pub mod autograd;
pub mod graph;
pub mod node;
pub mod ops;
pub mod utils;

pub mod error;

// Ré-exporte les types principaux pour qu'ils soient accessibles directement via la racine
pub use autograd::{check_grad, Edge, GradCheckConfig, GradCheckError, Trace};
pub use error::AutogradError;
pub use graph::Graph;
pub use node::{Node, NodeId, OpKind, Operand};
