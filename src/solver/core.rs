use log::{debug, info, trace, warn};

use crate::expression::Expression;
use crate::solver::constants::{DERIVATIVE_STEP, MAX_ITERATIONS, RESIDUAL_TOLERANCE};

/// Configuration for Newton iteration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    pub max_iterations: usize,
    /// Forward-difference step used to estimate the derivative
    pub step: f64,
    pub tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: MAX_ITERATIONS,
            step: DERIVATIVE_STEP,
            tolerance: RESIDUAL_TOLERANCE,
        }
    }
}

/// Result of a root search
///
/// `residual` is the last `f(x)` computed before the final update, so a
/// converged solution reports a residual below the tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub root: f64,
    pub iterations: usize,
    pub residual: f64,
    pub converged: bool,
}

/// Newton's method with a forward-difference derivative
pub struct NewtonSolver {
    config: SolverConfig,
}

impl NewtonSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Approximate a root of `expr(x) = 0` starting from `x0`
    ///
    /// Hitting the iteration cap is not an error: the last estimate is
    /// returned with `converged` unset. A zero derivative estimate is not
    /// guarded, so the root may come back infinite or NaN.
    pub fn solve(&self, expr: &Expression, x0: f64) -> Solution {
        let SolverConfig {
            max_iterations,
            step,
            tolerance,
        } = self.config;
        info!("Solving {} = 0 from x0={}", expr, x0);

        let mut x = x0;
        let mut residual = f64::NAN;

        for iteration in 1..=max_iterations {
            let y = expr.evaluate_at(x);
            let dy = (expr.evaluate_at(x + step) - y) / step;
            x -= y / dy;
            residual = y;
            trace!("Iteration {}: y={} dy={} x={}", iteration, y, dy, x);

            if y.abs() < tolerance {
                debug!("Converged after {} iterations: x={}", iteration, x);
                return Solution {
                    root: x,
                    iterations: iteration,
                    residual,
                    converged: true,
                };
            }
        }

        warn!(
            "No convergence after {} iterations, last estimate x={} (residual {})",
            max_iterations, x, residual
        );
        Solution {
            root: x,
            iterations: max_iterations,
            residual,
            converged: false,
        }
    }
}

impl Default for NewtonSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

/// Approximate a root of `expr(x) = 0` near `x0` using derivative step `dx`
pub fn solve(expr: &Expression, x0: f64, dx: f64) -> f64 {
    let config = SolverConfig {
        step: dx,
        ..SolverConfig::default()
    };
    NewtonSolver::new(config).solve(expr, x0).root
}
