//! Extract command implementation.

use crate::cli::{default_path, ExtractArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use gradable_domain::Word;
use gradable_extractor::{BuildResult, EquationBuilder, HeuristicExtractor, Lexicon};
use gradable_store::{read_definitions, write_equations};
use std::fs;
use std::path::Path;

/// Built-in lexicon, extended with the entries of a TOML file if given.
pub fn load_lexicon(path: Option<&Path>) -> Result<Lexicon> {
    let lexicon = Lexicon::default();
    match path {
        Some(path) => {
            let contents = fs::read_to_string(path)?;
            Ok(lexicon.merge(Lexicon::from_toml(&contents)?))
        }
        None => Ok(lexicon),
    }
}

/// Execute the extract command.
pub fn execute_extract(args: ExtractArgs, config: &Config, formatter: &Formatter) -> Result<BuildResult> {
    let definitions = args
        .definitions
        .clone()
        .unwrap_or_else(|| default_path(&args.property, "definitions"));
    let equations = args
        .equations
        .clone()
        .unwrap_or_else(|| default_path(&args.property, "equations"));

    let lexicon = load_lexicon(args.lexicon.as_deref())?;
    let anchor = args.anchor.clone().unwrap_or_else(|| config.solver.anchor.clone());

    let mut extractor_config = config.extractor.clone();
    if args.no_deduced {
        extractor_config.emit_deduced = false;
    }

    let entries = read_definitions(&definitions)?;
    let candidates: Vec<Word> = entries.iter().map(|e| e.word.clone()).collect();
    let extractor = HeuristicExtractor::new(&args.property, &candidates, &lexicon).with_anchor(anchor);

    let result = EquationBuilder::new(extractor, extractor_config)?.build(&entries);
    write_equations(&equations, &result.relations)?;

    println!("{}", formatter.format_build(&args.property, &result)?);
    if let Some(notice) = formatter.notice(&format!("Equations written to {}", equations.display())) {
        println!("{}", notice);
    }

    Ok(result)
}
