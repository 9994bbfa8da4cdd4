//! Newton - nonlinear system solver
//!
//! Solves the built-in three-equation reference system with full Newton and
//! chord Newton and reports both runs.
//!
//! # Usage
//!
//! ```bash
//! newton --x0 1.2,2.2,2.8 --epsilon 1e-8 --max-iterations 200
//! ```

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use newton_chord::{
    error::{NewtonError, Result},
    input,
    system::builtin::{REFERENCE_DIMENSION, REFERENCE_GUESS},
    NewtonSolver, ReuseOutcome,
};

/// Newton solver for the reference nonlinear system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Initial guess, one value per equation (comma or space separated)
    #[arg(long, value_name = "X1,X2,X3")]
    x0: Option<String>,

    /// Convergence threshold on the step norm (invalid values fall back to 1e-6)
    #[arg(short, long)]
    epsilon: Option<String>,

    /// Iteration cap per run (invalid values fall back to 1000)
    #[arg(short, long)]
    max_iterations: Option<String>,

    /// Increase log verbosity (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn format_vector(v: &[f64]) -> String {
    let parts: Vec<String> = v.iter().map(|x| format!("{x:.10}")).collect();
    format!("[{}]", parts.join(", "))
}

fn run(args: &Args) -> Result<()> {
    let x0 = match &args.x0 {
        Some(text) => input::parse_vector(text)?,
        None => REFERENCE_GUESS.to_vec(),
    };
    if x0.len() != REFERENCE_DIMENSION {
        return Err(NewtonError::invalid_input(format!(
            "expected {REFERENCE_DIMENSION} initial values, got {}",
            x0.len()
        )));
    }
    let epsilon = input::parse_epsilon(args.epsilon.as_deref());
    let max_iterations = input::parse_max_iterations(args.max_iterations.as_deref());

    let solver = NewtonSolver::reference();
    let result = solver.solve(&x0, epsilon, max_iterations)?;

    println!("solution:          {}", format_vector(&result.solution));
    println!(
        "residual:          {}",
        format_vector(&solver.system().residual(&result.solution)?)
    );
    let status = if result.primal_converged {
        "converged"
    } else {
        "iteration cap reached"
    };
    println!("newton iterations: {} ({status})", result.primal_iterations);

    match &result.reuse {
        ReuseOutcome::Converged { iterations, .. } => {
            println!("chord iterations:  {iterations} (converged)");
        }
        ReuseOutcome::Exhausted { iterations, .. } => {
            println!("chord iterations:  {iterations} (iteration cap reached)");
        }
        ReuseOutcome::Failed(err) => {
            println!("chord iterations:  -1 (failed: {err})");
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Solver error: {err}");
            ExitCode::FAILURE
        }
    }
}
