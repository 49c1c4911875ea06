//! # Scalar Operations Module (`ops`)
//!
//! This module serves as the central hub for the node-producing operations of the
//! engine. Operations are categorized into submodules based on their functionality.
//!
//! ## Structure:
//!
//! - **Graph methods:** Each operation is exposed as a method on [`Graph`](crate::Graph)
//!   (e.g. `graph.mul(a, b)`). The method resolves its operands (promoting raw
//!   `f64` scalars to leaves), computes the forward value and appends the output
//!   node tagged with its [`OpKind`](crate::OpKind).
//! - **`_backward` rules:** Each operation defines its local gradient rule as a
//!   plain function returning the contributions to add into its operands'
//!   gradients. The backward driver in [`autograd`](crate::autograd) dispatches to
//!   these rules with a single `match` over the node's kind.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`math_elem`]: exp, tanh.
//! - [`reduction`]: sum over several operands.

pub mod arithmetic;
pub mod math_elem;
pub mod reduction;

pub(crate) use arithmetic::add::add_backward;
pub(crate) use arithmetic::mul::mul_backward;
pub(crate) use arithmetic::neg::neg_backward;
pub(crate) use arithmetic::pow::pow_backward;
pub(crate) use math_elem::exp::exp_backward;
pub(crate) use math_elem::tanh::tanh_backward;
