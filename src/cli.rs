use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{LevelFilter, debug, info};
use newton_calc::solver::constants::{DERIVATIVE_STEP, MAX_ITERATIONS};
use newton_calc::{NewtonSolver, Query, SolverConfig};

/// newton-calc - Evaluate expressions in x and solve equations for a root
#[derive(Parser, Debug)]
#[command(name = "newton-calc")]
#[command(
    about = "Evaluate an arithmetic expression, or solve '=<expression>' for x with Newton's method"
)]
#[command(version)]
pub struct CliArgs {
    /// Expression to evaluate, or '=<expression>' to solve; read from stdin when omitted
    #[arg(allow_hyphen_values = true)]
    pub expression: Option<String>,

    /// Initial guess for x when solving
    #[arg(allow_negative_numbers = true)]
    pub initial_guess: Option<f64>,

    /// Log level: off, error, warn, info, debug or trace (overrides RUST_LOG, which defaults to warn)
    #[arg(short, long, value_name = "LEVEL")]
    pub log_level: Option<LevelFilter>,

    /// Step used for the forward-difference derivative
    #[arg(long, default_value_t = DERIVATIVE_STEP)]
    pub step: f64,

    /// Iteration cap for the root search
    #[arg(long, default_value_t = MAX_ITERATIONS)]
    pub max_iterations: usize,
}

impl CliArgs {
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            max_iterations: self.max_iterations,
            step: self.step,
            ..SolverConfig::default()
        }
    }
}

/// Initialize logging from RUST_LOG, optionally overridden by the provided level
pub fn init_logging(log_level: Option<LevelFilter>) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = log_level {
        builder.filter_level(level);
    }
    builder.try_init().context("Failed to initialize logging")?;
    Ok(())
}

/// Build the query from the arguments, or from stdin tokens when no expression is given
fn read_query(args: &CliArgs) -> Result<Query> {
    match &args.expression {
        Some(expression) => {
            Query::parse(expression, args.initial_guess).context("Invalid expression")
        }
        None => {
            debug!("No expression argument, reading standard input");
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read standard input")?;
            Query::from_tokens(input.split_whitespace()).context("Invalid input")
        }
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(args.log_level)?;

    let query = read_query(&args)?;
    info!("Running {:?}", query);

    let solver = NewtonSolver::new(args.solver_config());
    let answer = query.run(&solver).context("Evaluation failed")?;
    println!("{}", answer);
    Ok(())
}
