//! Connectivity resolver
//!
//! Restricts the table to the words linked to the anchor through any chain
//! of relations, ignoring direction.

use crate::{SolverConfig, SolverError, VariableMode};
use gradable_domain::{EquationTable, Word};
use std::collections::{BTreeSet, VecDeque};
use tracing::debug;

/// Words reachable from `anchor` over the undirected relation graph
///
/// Breadth-first from the anchor, visiting each word once. The result always
/// contains the anchor. The returned set does not depend on traversal order.
///
/// # Errors
///
/// [`SolverError::MissingAnchor`] if the anchor is not in the table's
/// vocabulary. Skipped and audit-only rows do not count.
pub fn connected_subset(table: &EquationTable, anchor: &str) -> Result<BTreeSet<Word>, SolverError> {
    if !table.contains(anchor) {
        return Err(SolverError::MissingAnchor(anchor.to_string()));
    }

    let adjacency = table.neighbors_undirected();
    let start = Word::from(anchor);

    let mut visited = BTreeSet::new();
    visited.insert(start.clone());
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        let Some(neighbors) = adjacency.get(&current) else {
            continue;
        };
        for neighbor in neighbors {
            if visited.insert(neighbor.clone()) {
                queue.push_back(neighbor.clone());
            }
        }
    }

    debug!(
        "{} of {} words connected to anchor '{}'",
        visited.len(),
        table.vocabulary().len(),
        anchor
    );

    Ok(visited)
}

/// The alphabetically ordered variable list for a run
///
/// In [`VariableMode::Connected`] this is the anchor's connected subset, in
/// [`VariableMode::All`] the whole vocabulary. Words that only appear in
/// skipped rows are never variables. The anchor must be present in either
/// mode.
pub fn select_variables(table: &EquationTable, config: &SolverConfig) -> Result<Vec<Word>, SolverError> {
    match config.mode {
        VariableMode::Connected => Ok(connected_subset(table, &config.anchor)?.into_iter().collect()),
        VariableMode::All => {
            if !table.contains(&config.anchor) {
                return Err(SolverError::MissingAnchor(config.anchor.clone()));
            }
            Ok(table.vocabulary().iter().cloned().collect())
        }
    }
}
