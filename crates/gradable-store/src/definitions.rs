//! Definitions file: one row per candidate adjective
//!
//! The `Word` column names the adjective; every other column whose header
//! ends in `Definition` (e.g. `WordNet Definition`, `Wikitionary Definition`,
//! `Oxford Definition`) holds `;`-separated definition fragments from one
//! lexical source.

use crate::StoreError;
use gradable_domain::Word;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Definition columns written by the retrieval scripts, in source order
pub const DEFINITION_COLUMNS: [&str; 3] = [
    "WordNet Definition",
    "Wikitionary Definition",
    "Oxford Definition",
];

/// A candidate adjective with its definition fragments from every source
#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionEntry {
    /// The adjective
    pub word: Word,

    /// Lower-cased, trimmed, non-empty fragments in column order
    pub fragments: Vec<String>,
}

/// Read a definitions file
pub fn read_definitions<P: AsRef<Path>>(path: P) -> Result<Vec<DefinitionEntry>, StoreError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(StoreError::NotFound(path.display().to_string()));
    }

    let file = std::fs::File::open(path)?;
    let entries = parse_definitions(file)?;
    info!("Loaded definitions for {} words from {}", entries.len(), path.display());
    Ok(entries)
}

/// Parse definition rows from any reader
pub fn parse_definitions<R: Read>(reader: R) -> Result<Vec<DefinitionEntry>, StoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let word_column = headers
        .iter()
        .position(|h| h == "Word")
        .ok_or_else(|| StoreError::Malformed {
            line: 1,
            reason: "missing column 'Word'".to_string(),
        })?;
    let definition_columns: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| h.ends_with("Definition"))
        .map(|(i, _)| i)
        .collect();

    let mut entries = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let word = record.get(word_column).unwrap_or_default();
        if word.is_empty() {
            return Err(StoreError::Malformed {
                line,
                reason: "empty Word".to_string(),
            });
        }

        let fragments = definition_columns
            .iter()
            .filter_map(|&i| record.get(i))
            .flat_map(split_fragments)
            .collect();

        entries.push(DefinitionEntry {
            word: Word::from(word),
            fragments,
        });
    }

    Ok(entries)
}

/// Split one definition cell into normalized fragments
pub fn split_fragments(cell: &str) -> Vec<String> {
    cell.split(';')
        .map(|fragment| fragment.trim().to_lowercase())
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_fragments() {
        assert_eq!(
            split_fragments(" Having a LOW temperature; ;somewhat cold "),
            vec!["having a low temperature", "somewhat cold"]
        );
        assert!(split_fragments("").is_empty());
    }

    #[test]
    fn test_parse_all_sources() {
        let csv = "\
Word,WordNet Definition,Wikitionary Definition,Oxford Definition
cool,neither warm nor very cold,Having a slightly low temperature.,
hot,used of physical heat; having a high temperature,,Having a high degree of heat
";
        let entries = parse_definitions(csv.as_bytes()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].word.as_str(), "cool");
        assert_eq!(
            entries[0].fragments,
            vec!["neither warm nor very cold", "having a slightly low temperature."]
        );
        assert_eq!(entries[1].fragments.len(), 3);
    }

    #[test]
    fn test_word_column_required() {
        let csv = "Adjective,WordNet Definition\nhot,very warm\n";
        assert!(matches!(
            parse_definitions(csv.as_bytes()),
            Err(StoreError::Malformed { line: 1, .. })
        ));
    }

    #[test]
    fn test_short_rows_tolerated() {
        let csv = "Word,WordNet Definition,Oxford Definition\nwarm,somewhat hot\n";
        let entries = parse_definitions(csv.as_bytes()).unwrap();
        assert_eq!(entries[0].fragments, vec!["somewhat hot"]);
    }
}
