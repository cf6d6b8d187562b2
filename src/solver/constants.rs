// Defaults for Newton iteration
pub const MAX_ITERATIONS: usize = 1000;
pub const DERIVATIVE_STEP: f64 = 1e-12;
/// A residual below the smallest positive normal `f64` counts as a root
pub const RESIDUAL_TOLERANCE: f64 = f64::MIN_POSITIVE;
