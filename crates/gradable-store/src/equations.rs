//! Equation table file: `Word,Variable,Factor,Definition,Deduced`

use crate::atomic::write_atomically;
use crate::StoreError;
use gradable_domain::{EquationTable, InsertOutcome, Relation};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Column headers, in file order
pub const EQUATION_HEADERS: [&str; 5] = ["Word", "Variable", "Factor", "Definition", "Deduced"];

const REQUIRED_HEADERS: [&str; 3] = ["Word", "Variable", "Factor"];

/// Marker written in the `Deduced` column for deduced relations
pub const DEDUCED_MARKER: &str = "Yes";

#[derive(Debug, Deserialize)]
struct EquationRecord {
    #[serde(rename = "Word")]
    word: String,
    #[serde(rename = "Variable")]
    variable: String,
    #[serde(rename = "Factor")]
    factor: String,
    #[serde(rename = "Definition", default)]
    definition: String,
    #[serde(rename = "Deduced", default)]
    deduced: String,
}

fn parse_deduced(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "1" => Some(true),
        "" | "no" | "n" | "false" | "0" => Some(false),
        _ => None,
    }
}

/// Read an equation table file
///
/// The whole file is loaded before returning. Zero-factor, non-finite and
/// duplicate rows are skipped with a warning; structural problems (missing
/// column, unparseable factor, empty word) are fatal.
pub fn read_equations<P: AsRef<Path>>(path: P, include_deduced: bool) -> Result<EquationTable, StoreError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(StoreError::NotFound(path.display().to_string()));
    }

    let file = std::fs::File::open(path)?;
    let table = parse_equations(file, include_deduced)?;
    info!(
        "Loaded {} equations over {} words from {}",
        table.equation_count(),
        table.vocabulary().len(),
        path.display()
    );
    Ok(table)
}

/// Parse equation records from any reader
pub fn parse_equations<R: Read>(reader: R, include_deduced: bool) -> Result<EquationTable, StoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    for required in REQUIRED_HEADERS {
        if !headers.iter().any(|h| h == required) {
            return Err(StoreError::Malformed {
                line: 1,
                reason: format!("missing column '{}'", required),
            });
        }
    }

    let mut table = if include_deduced {
        EquationTable::including_deduced()
    } else {
        EquationTable::new()
    };

    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let row: EquationRecord = record
            .deserialize(Some(&headers))
            .map_err(|e| StoreError::Malformed {
                line,
                reason: e.to_string(),
            })?;

        if row.word.is_empty() || row.variable.is_empty() {
            return Err(StoreError::Malformed {
                line,
                reason: "empty Word or Variable".to_string(),
            });
        }

        let factor: f64 = row.factor.parse().map_err(|_| StoreError::Malformed {
            line,
            reason: format!("Factor '{}' is not a number", row.factor),
        })?;

        let deduced = parse_deduced(&row.deduced).ok_or_else(|| StoreError::Malformed {
            line,
            reason: format!("Deduced '{}' is not a yes/no marker", row.deduced),
        })?;

        let mut relation = Relation::new(row.word, row.variable, factor, row.definition);
        relation.deduced = deduced;

        let (word, variable) = (relation.word.clone(), relation.variable.clone());
        match table.insert(relation) {
            InsertOutcome::Accepted | InsertOutcome::Deduced => {}
            InsertOutcome::ZeroFactor => {
                warn!("Line {}: skipping zero-factor relation {} -> {}", line, word, variable)
            }
            InsertOutcome::NonFinite => {
                warn!("Line {}: skipping non-finite factor for {} -> {}", line, word, variable)
            }
            InsertOutcome::Duplicate => {
                debug!("Line {}: skipping duplicate relation {} -> {}", line, word, variable)
            }
        }
    }

    Ok(table)
}

/// Write relations as an equation table file, replacing any existing file
pub fn write_equations<P: AsRef<Path>>(path: P, relations: &[Relation]) -> Result<(), StoreError> {
    let path = path.as_ref();
    write_atomically(path, |file| {
        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(EQUATION_HEADERS)?;
        for relation in relations {
            let factor = relation.factor.to_string();
            writer.write_record([
                relation.word.as_str(),
                relation.variable.as_str(),
                factor.as_str(),
                relation.definition.as_str(),
                if relation.deduced { DEDUCED_MARKER } else { "" },
            ])?;
        }
        writer.flush()?;
        Ok(())
    })?;

    info!("Wrote {} relations to {}", relations.len(), path.display());
    Ok(())
}
