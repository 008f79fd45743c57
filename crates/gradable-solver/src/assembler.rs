//! Matrix assembler
//!
//! Turns the equation table into a square system `A·x = b` with one unknown
//! intensity per variable.
//!
//! For every equation `word = factor × variable` with `word` in the variable
//! list (and not the anchor):
//!
//! - `A[word][word] += 1`
//! - `A[word][variable] -= factor`
//!
//! The anchor row is the boundary condition `x[anchor] = boundary_value`.
//! Every other entry of `b` is zero.

use crate::SolverError;
use gradable_domain::{EquationTable, Word};
use nalgebra::{DMatrix, DVector};
use std::collections::HashMap;
use tracing::{debug, warn};

/// A square linear system over word intensities
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    /// Column (and row) order
    pub variables: Vec<Word>,

    /// Coefficient matrix, `n × n`
    pub matrix: DMatrix<f64>,

    /// Right-hand side, length `n`
    pub rhs: DVector<f64>,

    /// Row/column of the anchor
    pub anchor_index: usize,

    /// Equations that contributed to the matrix
    pub equation_count: usize,
}

impl LinearSystem {
    /// Number of variables
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether the system has no variables
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Position of a word in the column order
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.variables.iter().position(|v| v.as_str() == word)
    }

    /// The anchor word
    pub fn anchor(&self) -> &Word {
        &self.variables[self.anchor_index]
    }

    /// Boundary value the anchor is pinned to
    pub fn boundary_value(&self) -> f64 {
        self.rhs[self.anchor_index]
    }

    /// One matrix row as a plain vector
    pub fn row(&self, index: usize) -> Vec<f64> {
        self.matrix.row(index).iter().copied().collect()
    }
}

/// Build `A` and `b` for the given variables
///
/// `variables` is used as the column order as given; callers pass it sorted
/// alphabetically. Equations that reference a word outside the list are
/// skipped.
///
/// # Errors
///
/// - [`SolverError::NoEquations`] for an empty variable list
/// - [`SolverError::MissingAnchor`] if the anchor is not among the variables
pub fn assemble(
    variables: &[Word],
    table: &EquationTable,
    anchor: &str,
    boundary_value: f64,
) -> Result<LinearSystem, SolverError> {
    if variables.is_empty() {
        return Err(SolverError::NoEquations);
    }

    let index: HashMap<&str, usize> = variables
        .iter()
        .enumerate()
        .map(|(i, word)| (word.as_str(), i))
        .collect();

    let anchor_index = *index
        .get(anchor)
        .ok_or_else(|| SolverError::MissingAnchor(anchor.to_string()))?;

    let n = variables.len();
    let mut matrix = DMatrix::<f64>::zeros(n, n);
    let mut rhs = DVector::<f64>::zeros(n);
    let mut equation_count = 0;
    let mut outside = 0;

    for (row, word) in variables.iter().enumerate() {
        // Boundary row is fixed below, whatever the anchor's own relations say
        if row == anchor_index {
            continue;
        }
        let Some(equations) = table.equations_for(word.as_str()) else {
            continue;
        };

        for (variable, factors) in equations {
            let Some(&col) = index.get(variable.as_str()) else {
                outside += factors.len();
                continue;
            };
            for &factor in factors {
                if factor == 0.0 {
                    warn!("Skipping zero-factor relation {} -> {}", word, variable);
                    continue;
                }
                matrix[(row, row)] += 1.0;
                matrix[(row, col)] -= factor;
                equation_count += 1;
            }
        }
    }

    matrix.row_mut(anchor_index).fill(0.0);
    matrix[(anchor_index, anchor_index)] = 1.0;
    rhs[anchor_index] = boundary_value;

    if outside > 0 {
        debug!("Skipped {} equations referencing words outside the variable list", outside);
    }
    debug!("Assembled {}x{} system from {} equations", n, n, equation_count);

    Ok(LinearSystem {
        variables: variables.to_vec(),
        matrix,
        rhs,
        anchor_index,
        equation_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradable_domain::Relation;

    fn vars(names: &[&str]) -> Vec<Word> {
        names.iter().map(|n| Word::from(*n)).collect()
    }

    #[test]
    fn test_single_relation_rows() {
        let table: EquationTable = vec![Relation::new("hot", "high_prop", 1.0, "")].into_iter().collect();
        let system = assemble(&vars(&["high_prop", "hot"]), &table, "high_prop", 10.0).unwrap();

        assert_eq!(system.anchor_index, 0);
        assert_eq!(system.row(0), vec![1.0, 0.0]);
        assert_eq!(system.row(1), vec![-1.0, 1.0]);
        assert_eq!(system.rhs.as_slice(), &[10.0, 0.0]);
        assert_eq!(system.equation_count, 1);
    }

    #[test]
    fn test_multiple_relations_accumulate_self_weight() {
        let table: EquationTable = vec![
            Relation::new("warm", "hot", 0.6, "somewhat hot"),
            Relation::new("warm", "hot", 0.8, "rather hot"),
            Relation::new("warm", "high_prop", 0.5, "moderately high temperature"),
            Relation::new("hot", "high_prop", 1.0, ""),
        ]
        .into_iter()
        .collect();

        let system = assemble(&vars(&["high_prop", "hot", "warm"]), &table, "high_prop", 10.0).unwrap();
        let warm = system.index_of("warm").unwrap();
        let hot = system.index_of("hot").unwrap();
        let anchor = system.anchor_index;

        assert_eq!(system.matrix[(warm, warm)], 3.0);
        assert!((system.matrix[(warm, hot)] - (-1.4)).abs() < 1e-12);
        assert_eq!(system.matrix[(warm, anchor)], -0.5);
        assert_eq!(system.equation_count, 4);
    }

    #[test]
    fn test_negative_factor_encoded() {
        let table: EquationTable = vec![Relation::new("cold", "high_prop", -1.0, "")].into_iter().collect();
        let system = assemble(&vars(&["cold", "high_prop"]), &table, "high_prop", 10.0).unwrap();
        assert_eq!(system.row(0), vec![1.0, 1.0]);
    }

    #[test]
    fn test_anchor_row_forced() {
        let table: EquationTable = vec![
            Relation::new("high_prop", "hot", 2.0, ""),
            Relation::new("high_prop", "high_prop", 0.5, ""),
            Relation::new("hot", "high_prop", 1.0, ""),
        ]
        .into_iter()
        .collect();

        let system = assemble(&vars(&["high_prop", "hot"]), &table, "high_prop", 10.0).unwrap();
        assert_eq!(system.row(0), vec![1.0, 0.0]);
        assert_eq!(system.boundary_value(), 10.0);
        assert_eq!(system.equation_count, 1);
    }

    #[test]
    fn test_word_without_equations_has_zero_row() {
        let table: EquationTable = vec![Relation::new("hot", "high_prop", 1.0, "")].into_iter().collect();
        let system = assemble(&vars(&["high_prop", "hot", "mild"]), &table, "high_prop", 10.0).unwrap();
        assert_eq!(system.row(2), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_reference_outside_list_skipped() {
        let table: EquationTable = vec![
            Relation::new("hot", "high_prop", 1.0, ""),
            Relation::new("hot", "scorching", 0.8, ""),
        ]
        .into_iter()
        .collect();

        let system = assemble(&vars(&["high_prop", "hot"]), &table, "high_prop", 10.0).unwrap();
        assert_eq!(system.row(1), vec![-1.0, 1.0]);
        assert_eq!(system.equation_count, 1);
    }

    #[test]
    fn test_empty_variables() {
        let table = EquationTable::new();
        assert!(matches!(
            assemble(&[], &table, "high_prop", 10.0),
            Err(SolverError::NoEquations)
        ));
    }

    #[test]
    fn test_anchor_not_in_variables() {
        let table: EquationTable = vec![Relation::new("hot", "warm", 1.0, "")].into_iter().collect();
        assert!(matches!(
            assemble(&vars(&["hot", "warm"]), &table, "high_prop", 10.0),
            Err(SolverError::MissingAnchor(_))
        ));
    }
}
