use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use approx::assert_relative_eq;
use rand::Rng;

#[test]
fn test_exp_forward() {
    let mut g = Graph::new();
    let a = g.leaf(1.0);
    let e = g.exp(a).unwrap();
    assert_relative_eq!(g.value(e).unwrap(), std::f64::consts::E, epsilon = 1e-12);
    assert_eq!(g.op(e).unwrap(), OpKind::Exp);
}

#[test]
fn test_exp_backward() {
    let mut g = Graph::new();
    let a = g.leaf(0.5);
    let e = g.exp(a).unwrap();
    g.backward(e).unwrap();
    assert_relative_eq!(g.grad(a).unwrap(), 0.5_f64.exp(), epsilon = 1e-12);
    assert_eq!(exp_backward(2.0, 3.0), 6.0);
}

#[test]
fn test_exp_fan_out_accumulates() {
    // The exp node feeds two consumers; both contributions must reach `a`.
    let mut g = Graph::new();
    let a = g.leaf(0.3);
    let e = g.exp(a).unwrap();
    let y1 = g.mul(e, 2.0).unwrap();
    let y2 = g.mul(e, 3.0).unwrap();
    let y = g.add(y1, y2).unwrap();
    g.backward(y).unwrap();
    assert_relative_eq!(g.grad(e).unwrap(), 5.0, epsilon = 1e-12);
    assert_relative_eq!(g.grad(a).unwrap(), 5.0 * 0.3_f64.exp(), epsilon = 1e-12);
}

#[test]
fn test_exp_overflow_is_not_an_error() {
    let mut g = Graph::new();
    let a = g.leaf(1000.0);
    let e = g.exp(a).unwrap();
    assert!(g.value(e).unwrap().is_infinite());
    assert!(g.backward(e).is_ok());
}

#[test]
fn test_exp_grad_check_random() {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let x: f64 = rng.gen_range(-3.0..3.0);
        let result = check_grad(|g, v| g.exp(v[0]), &[x], &GradCheckConfig::default());
        assert!(result.is_ok(), "grad check failed for exp({}): {:?}", x, result.err());
    }
}
