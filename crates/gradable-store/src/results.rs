//! Results file
//!
//! One row per variable, in column order:
//!
//! ```text
//! Word, <one column per variable: the matrix row>, b, Rank, Ranked Word, Score
//! ```
//!
//! The left block is the assembled system `A | b`; the right block is the
//! ranking, so row `i` also carries the `i`-th ranked word. Floats use Rust's
//! shortest round-trip formatting, so the same report always produces the
//! same bytes. A variable named like one of the fixed columns is rejected
//! before anything is written.

use crate::atomic::write_atomically;
use crate::StoreError;
use gradable_solver::ScaleReport;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Column names the results file uses besides one per variable
pub const FIXED_RESULT_COLUMNS: [&str; 5] = ["Word", "b", "Rank", "Ranked Word", "Score"];

/// Write the results of a run, replacing any existing file
///
/// Nothing is written to `path` unless the whole file was produced.
pub fn write_results<P: AsRef<Path>>(path: P, report: &ScaleReport) -> Result<(), StoreError> {
    let path = path.as_ref();
    write_atomically(path, |file| render_results(file, report))?;
    info!("Wrote results for {} words to {}", report.ranking.len(), path.display());
    Ok(())
}

/// Render the results file to any writer
pub fn render_results<W: Write>(writer: W, report: &ScaleReport) -> Result<(), StoreError> {
    let system = &report.system;
    if let Some(clash) = system
        .variables
        .iter()
        .find(|v| FIXED_RESULT_COLUMNS.contains(&v.as_str()))
    {
        return Err(StoreError::ReservedColumn(clash.to_string()));
    }

    let mut writer = csv::Writer::from_writer(writer);

    let mut header: Vec<&str> = Vec::with_capacity(system.len() + FIXED_RESULT_COLUMNS.len());
    header.push(FIXED_RESULT_COLUMNS[0]);
    header.extend(system.variables.iter().map(|v| v.as_str()));
    header.extend(&FIXED_RESULT_COLUMNS[1..]);
    writer.write_record(&header)?;

    let ranked = report.ranking.entries();
    for (i, word) in system.variables.iter().enumerate() {
        let mut record: Vec<String> = Vec::with_capacity(system.len() + FIXED_RESULT_COLUMNS.len());
        record.push(word.to_string());
        record.extend(system.row(i).iter().map(|v| v.to_string()));
        record.push(system.rhs[i].to_string());

        match ranked.get(i) {
            Some(entry) => {
                record.push((i + 1).to_string());
                record.push(entry.word.to_string());
                record.push(entry.score.to_string());
            }
            None => record.extend([String::new(), String::new(), String::new()]),
        }

        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
