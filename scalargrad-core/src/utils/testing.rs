/// Central-difference estimate `(f(x + h) - f(x - h)) / 2h` of `f'(x)`.
pub fn central_difference<F>(f: F, x: f64, h: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    (f(x + h) - f(x - h)) / (2.0 * h)
}

/// Initializes `env_logger` once for unit tests. Later calls are no-ops.
#[cfg(test)]
pub(crate) fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
