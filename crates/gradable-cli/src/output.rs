//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use gradable_extractor::BuildResult;
use gradable_solver::ScaleReport;
use std::collections::BTreeMap;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// The selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format the ranking of a solve run.
    pub fn format_ranking(&self, property: &str, report: &ScaleReport, precision: u32) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_ranking_json(property, report),
            OutputFormat::Table => Ok(self.format_ranking_table(property, report, precision)),
            OutputFormat::Quiet => Ok(report.ranking.words().join("\n")),
        }
    }

    fn format_ranking_json(&self, property: &str, report: &ScaleReport) -> Result<String> {
        let ranking: Vec<serde_json::Value> = report
            .ranking
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                serde_json::json!({
                    "rank": i + 1,
                    "word": entry.word.as_str(),
                    "score": entry.score,
                })
            })
            .collect();

        let output = serde_json::json!({
            "property": property,
            "mode": report.mode.as_str(),
            "anchor": report.system.anchor().as_str(),
            "boundary_value": report.system.boundary_value(),
            "variables": report.system.len(),
            "equations": report.system.equation_count,
            "residual_norm": report.solution.residual_norm,
            "rank": report.solution.rank,
            "ranking": ranking,
        });

        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_ranking_table(&self, property: &str, report: &ScaleReport, precision: u32) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Rank", "Word", "Score"]);

        let anchor = report.system.anchor();
        for (i, entry) in report.ranking.iter().enumerate() {
            let word = if &entry.word == anchor {
                format!("{} (anchor)", entry.word)
            } else {
                entry.word.to_string()
            };
            builder.push_record([
                (i + 1).to_string(),
                word,
                format!("{:.*}", precision as usize, entry.score),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let mut lines = vec![
            self.colorize(&format!("Intensity scale for '{}'", property), "cyan"),
            table.to_string(),
            self.info(&format!(
                "{} words, {} equations, residual {:.4}",
                report.system.len(),
                report.system.equation_count,
                report.solution.residual_norm
            )),
        ];

        if report.solution.rank < report.system.len() {
            lines.push(self.warning(&format!(
                "System is rank deficient (rank {} of {}); scores are a minimum-norm fit",
                report.solution.rank,
                report.system.len()
            )));
        }

        lines.join("\n")
    }

    /// Format the outcome of an extract run.
    pub fn format_build(&self, property: &str, result: &BuildResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_build_json(property, result),
            OutputFormat::Table => Ok(self.format_build_table(property, result)),
            OutputFormat::Quiet => Ok(result.relations.len().to_string()),
        }
    }

    fn format_build_json(&self, property: &str, result: &BuildResult) -> Result<String> {
        let failures: Vec<serde_json::Value> = result
            .failures
            .iter()
            .map(|f| {
                serde_json::json!({
                    "word": f.word.as_str(),
                    "fragment": f.fragment,
                    "reason": f.reason,
                })
            })
            .collect();
        let unlinked: Vec<&str> = result.unlinked.iter().map(|w| w.as_str()).collect();

        let output = serde_json::json!({
            "property": property,
            "relations": result.relations.len(),
            "forward": result.forward_count(),
            "fragments": result.fragments_processed,
            "failures": failures,
            "unlinked": unlinked,
        });

        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_build_table(&self, property: &str, result: &BuildResult) -> String {
        if result.relations.is_empty() {
            return self.warning(&format!("No relations found for '{}'", property));
        }

        let mut per_word: BTreeMap<&str, usize> = BTreeMap::new();
        for relation in result.relations.iter().filter(|r| !r.deduced) {
            *per_word.entry(relation.word.as_str()).or_default() += 1;
        }

        let mut builder = Builder::default();
        builder.push_record(["Word", "Relations"]);
        for (word, count) in &per_word {
            builder.push_record([word.to_string(), count.to_string()]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let mut lines = vec![
            table.to_string(),
            self.info(&format!(
                "{} relations ({} deduced) from {} fragments",
                result.relations.len(),
                result.relations.len() - result.forward_count(),
                result.fragments_processed
            )),
        ];
        if !result.unlinked.is_empty() {
            let words: Vec<&str> = result.unlinked.iter().map(|w| w.as_str()).collect();
            lines.push(self.warning(&format!("No relations for: {}", words.join(", "))));
        }
        for failure in &result.failures {
            lines.push(self.error(&format!("{}: {}", failure.word, failure.reason)));
        }

        lines.join("\n")
    }

    /// A success message, shown only in table format.
    pub fn notice(&self, message: &str) -> Option<String> {
        match self.format {
            OutputFormat::Table => Some(self.success(message)),
            _ => None,
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
