//! Solve command implementation.

use crate::cli::{default_path, SolveArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use gradable_solver::{ScalePipeline, ScaleReport, SolverConfig, VariableMode};
use gradable_store::{read_equations, write_results};

/// Solver settings from the config file with command-line overrides applied.
pub fn solver_config(args: &SolveArgs, config: &Config) -> Result<SolverConfig> {
    let mut solver = config.solver.clone();
    if args.all {
        solver.mode = VariableMode::All;
    }
    if args.include_deduced {
        solver.include_deduced = true;
    }
    if let Some(anchor) = &args.anchor {
        solver.anchor = anchor.clone();
    }
    if let Some(precision) = args.precision {
        solver.precision = precision;
    }

    solver.validate().map_err(CliError::Config)?;
    Ok(solver)
}

/// Execute the solve command.
///
/// The results file is written only after the whole run succeeded.
pub fn execute_solve(args: SolveArgs, config: &Config, formatter: &Formatter) -> Result<ScaleReport> {
    let solver = solver_config(&args, config)?;
    let precision = solver.precision;

    let equations = args
        .equations
        .clone()
        .unwrap_or_else(|| default_path(&args.property, "equations"));
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_path(&args.property, "results"));

    let table = read_equations(&equations, solver.include_deduced)?;
    let report = ScalePipeline::new(solver).run(&table)?;
    write_results(&output, &report)?;

    println!("{}", formatter.format_ranking(&args.property, &report, precision)?);
    if let Some(notice) = formatter.notice(&format!("Results written to {}", output.display())) {
        println!("{}", notice);
    }

    Ok(report)
}
