use crate::error::AutogradError;
use crate::graph::Graph;
use crate::node::NodeId;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Invalid gradient check configuration: {0}")]
    InvalidConfig(String),
    #[error("Engine error during gradient check: {0}")]
    EngineError(AutogradError),
}

// Map AutogradError to GradCheckError::EngineError
impl From<AutogradError> for GradCheckError {
    fn from(err: AutogradError) -> Self {
        GradCheckError::EngineError(err)
    }
}

/// Step size and acceptance threshold for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Perturbation `h` of the central difference `(f(x+h) - f(x-h)) / 2h`.
    pub epsilon: f64,
    /// Accepted absolute or relative difference between the two gradients.
    pub tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            tolerance: 1e-4,
        }
    }
}

impl GradCheckConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    fn validate(&self) -> Result<(), GradCheckError> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(GradCheckError::InvalidConfig(format!(
                "epsilon must be finite and positive, got {}",
                self.epsilon
            )));
        }
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(GradCheckError::InvalidConfig(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// Checks analytical gradients against numerical gradients using central differences.
///
/// `func` receives a fresh graph and one leaf per entry of `inputs`, and returns
/// the node to differentiate. It is called once for the backward pass and twice
/// per input for the perturbed forward evaluations, each time on a new graph.
///
/// On success returns the analytical gradient of each input.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    config: &GradCheckConfig,
) -> Result<Vec<f64>, GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, AutogradError>,
{
    config.validate()?;

    // --- 1. Analytical gradients from a single backward pass ---
    let mut graph = Graph::new();
    let leaves: Vec<NodeId> = inputs.iter().map(|&x| graph.leaf(x)).collect();
    let output = func(&mut graph, &leaves)?;
    graph.backward(output)?;
    let analytical_grads = leaves
        .iter()
        .map(|&leaf| graph.grad(leaf))
        .collect::<Result<Vec<f64>, AutogradError>>()?;

    // --- 2. Numerical gradient per input ---
    for (i, &analytical_grad) in analytical_grads.iter().enumerate() {
        let loss_plus = evaluate(&func, inputs, i, config.epsilon)?;
        let loss_minus = evaluate(&func, inputs, i, -config.epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * config.epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let close = approx::relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = config.tolerance,
            max_relative = config.tolerance
        );
        if !close {
            let difference = (analytical_grad - numerical_grad).abs();
            log::warn!(
                "grad check mismatch on input {}: analytical {} vs numerical {}",
                i,
                analytical_grad,
                numerical_grad
            );
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }

    Ok(analytical_grads)
}

/// Forward value of `func` with input `index` shifted by `delta`, on a fresh graph.
fn evaluate<F>(func: &F, inputs: &[f64], index: usize, delta: f64) -> Result<f64, AutogradError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, AutogradError>,
{
    let mut graph = Graph::with_capacity(inputs.len());
    let leaves: Vec<NodeId> = inputs
        .iter()
        .enumerate()
        .map(|(j, &x)| graph.leaf(if j == index { x + delta } else { x }))
        .collect();
    let output = func(&mut graph, &leaves)?;
    graph.value(output)
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
