//! End-to-end scaling run for one property

use crate::{
    assemble, rank, select_variables, solve, LinearSystem, Ranking, Solution, SolverConfig,
    SolverError, VariableMode,
};
use gradable_domain::EquationTable;
use tracing::{info, warn};

/// Everything a run produced, for presentation and persistence
#[derive(Debug, Clone)]
pub struct ScaleReport {
    /// Variable selection mode used
    pub mode: VariableMode,

    /// The assembled system
    pub system: LinearSystem,

    /// Full-precision solution
    pub solution: Solution,

    /// Rounded, sorted scores
    pub ranking: Ranking,
}

impl ScaleReport {
    /// Rounded score of the anchor
    pub fn anchor_score(&self) -> Option<f64> {
        self.ranking.score_of(self.system.anchor().as_str())
    }
}

/// Connectivity → assembly → least squares → ranking
///
/// # Examples
///
/// ```
/// use gradable_domain::{EquationTable, Relation};
/// use gradable_solver::{ScalePipeline, SolverConfig};
///
/// let table: EquationTable = vec![
///     Relation::new("cold", "high_prop", -1.0, "having a low temperature"),
///     Relation::new("hot", "high_prop", 1.0, "having a high temperature"),
///     Relation::new("warm", "hot", 0.6, "somewhat hot"),
///     Relation::new("cool", "cold", 0.6, "somewhat cold"),
/// ]
/// .into_iter()
/// .collect();
///
/// let report = ScalePipeline::new(SolverConfig::default()).run(&table).unwrap();
/// assert_eq!(
///     report.ranking.words(),
///     vec!["cold", "cool", "warm", "high_prop", "hot"]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScalePipeline {
    config: SolverConfig,
}

impl ScalePipeline {
    /// Create a pipeline with the given configuration
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The pipeline's configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Run the pipeline over a fully loaded equation table
    ///
    /// # Errors
    ///
    /// [`SolverError::Config`] if the configuration is invalid, or if the table
    /// was loaded with a different `include_deduced` setting than the
    /// configuration asks for.
    pub fn run(&self, table: &EquationTable) -> Result<ScaleReport, SolverError> {
        self.config.validate().map_err(SolverError::Config)?;

        if table.includes_deduced() != self.config.include_deduced {
            return Err(SolverError::Config(format!(
                "Equation table was loaded with include_deduced = {} but the configuration sets {}",
                table.includes_deduced(),
                self.config.include_deduced
            )));
        }

        let stats = table.stats();
        if stats.skipped() > 0 {
            warn!(
                "Skipped {} relations ({} zero-factor, {} non-finite, {} duplicate)",
                stats.skipped(),
                stats.zero_factor,
                stats.non_finite,
                stats.duplicate
            );
        }

        let variables = select_variables(table, &self.config)?;
        info!(
            "Solving {} of {} words in {} mode (anchor '{}')",
            variables.len(),
            table.vocabulary().len(),
            self.config.mode.as_str(),
            self.config.anchor
        );

        let system = assemble(
            &variables,
            table,
            &self.config.anchor,
            self.config.boundary_value,
        )?;
        let solution = solve(&system)?;
        let ranking = rank(&system.variables, &solution, self.config.precision);

        info!(
            "Ranked {} words from {} equations (residual {:.4})",
            ranking.len(),
            system.equation_count,
            solution.residual_norm
        );

        Ok(ScaleReport {
            mode: self.config.mode,
            system,
            solution,
            ranking,
        })
    }
}
