pub mod constants;
mod core;

pub use self::core::{NewtonSolver, Solution, SolverConfig, solve};
