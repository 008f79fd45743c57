//! Equation table - the in-memory form of every relation for one property

use crate::{Relation, Word};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// What happened to a relation offered to [`EquationTable::insert`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// Recorded as an equation
    Accepted,

    /// Kept for audit only; deduced relations are not equations by default
    Deduced,

    /// Skipped: a zero factor carries no information
    ZeroFactor,

    /// Skipped: NaN or infinite factor
    NonFinite,

    /// Skipped: identical to an already accepted relation
    Duplicate,
}

/// Counters for every [`InsertOutcome`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableStats {
    /// Relations recorded as equations
    pub accepted: usize,
    /// Deduced relations kept for audit only
    pub deduced: usize,
    /// Relations skipped for a zero factor
    pub zero_factor: usize,
    /// Relations skipped for a NaN or infinite factor
    pub non_finite: usize,
    /// Exact duplicates skipped
    pub duplicate: usize,
}

impl TableStats {
    fn record(&mut self, outcome: InsertOutcome) {
        match outcome {
            InsertOutcome::Accepted => self.accepted += 1,
            InsertOutcome::Deduced => self.deduced += 1,
            InsertOutcome::ZeroFactor => self.zero_factor += 1,
            InsertOutcome::NonFinite => self.non_finite += 1,
            InsertOutcome::Duplicate => self.duplicate += 1,
        }
    }

    /// Total relations offered to the table
    pub fn total(&self) -> usize {
        self.accepted + self.deduced + self.zero_factor + self.non_finite + self.duplicate
    }

    /// Relations skipped for data-quality reasons
    pub fn skipped(&self) -> usize {
        self.zero_factor + self.non_finite + self.duplicate
    }
}

/// Key identifying an exact duplicate: word, variable, factor bits, definition
type RelationKey = (Word, Word, u64, String);

/// Mapping from word to referenced variable to the list of factors linking them
///
/// The same `(word, variable)` pair may carry several factors, one per
/// definition or source; each becomes its own equation so least squares can
/// average conflicting evidence.
///
/// The vocabulary holds only words named by accepted equations, plus words
/// registered with [`EquationTable::insert_word`]. Words that appear solely in
/// skipped or audit-only rows are tracked separately in
/// [`EquationTable::mentioned`] and never become variables.
#[derive(Debug, Clone, Default)]
pub struct EquationTable {
    vocabulary: BTreeSet<Word>,
    mentioned: BTreeSet<Word>,
    equations: BTreeMap<Word, BTreeMap<Word, Vec<f64>>>,
    deduced: Vec<Relation>,
    seen: HashSet<RelationKey>,
    include_deduced: bool,
    stats: TableStats,
}

impl EquationTable {
    /// Create an empty table that keeps deduced relations out of the equations
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table that treats deduced relations as equations too
    pub fn including_deduced() -> Self {
        Self {
            include_deduced: true,
            ..Self::default()
        }
    }

    /// Whether deduced relations are folded into the equations
    pub fn includes_deduced(&self) -> bool {
        self.include_deduced
    }

    /// Offer a relation to the table
    pub fn insert(&mut self, relation: Relation) -> InsertOutcome {
        self.mentioned.insert(relation.word.clone());
        self.mentioned.insert(relation.variable.clone());

        let outcome = self.classify(relation);
        self.stats.record(outcome);
        outcome
    }

    fn classify(&mut self, relation: Relation) -> InsertOutcome {
        if !relation.factor.is_finite() {
            return InsertOutcome::NonFinite;
        }
        if relation.factor == 0.0 {
            return InsertOutcome::ZeroFactor;
        }

        if relation.deduced {
            self.deduced.push(relation.clone());
            if !self.include_deduced {
                return InsertOutcome::Deduced;
            }
        }

        let key = (
            relation.word.clone(),
            relation.variable.clone(),
            relation.factor.to_bits(),
            relation.definition.clone(),
        );
        if !self.seen.insert(key) {
            return InsertOutcome::Duplicate;
        }

        self.vocabulary.insert(relation.word.clone());
        self.vocabulary.insert(relation.variable.clone());
        self.equations
            .entry(relation.word)
            .or_default()
            .entry(relation.variable)
            .or_default()
            .push(relation.factor);

        InsertOutcome::Accepted
    }

    /// Register a word with no relations (it can still be a variable)
    pub fn insert_word(&mut self, word: impl Into<Word>) {
        let word = word.into();
        self.mentioned.insert(word.clone());
        self.vocabulary.insert(word);
    }

    /// Whether the word is part of the vocabulary
    pub fn contains(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }

    /// Words named by accepted equations or registered directly, alphabetically
    pub fn vocabulary(&self) -> &BTreeSet<Word> {
        &self.vocabulary
    }

    /// Every word named by any offered relation, skipped ones included
    pub fn mentioned(&self) -> &BTreeSet<Word> {
        &self.mentioned
    }

    /// All equations, word → variable → factors
    pub fn equations(&self) -> &BTreeMap<Word, BTreeMap<Word, Vec<f64>>> {
        &self.equations
    }

    /// Equations whose left-hand side is `word`
    pub fn equations_for(&self, word: &str) -> Option<&BTreeMap<Word, Vec<f64>>> {
        self.equations.get(word)
    }

    /// Deduced relations seen so far, in insertion order
    pub fn deduced(&self) -> &[Relation] {
        &self.deduced
    }

    /// Number of equations (one per accepted factor)
    pub fn equation_count(&self) -> usize {
        self.equations
            .values()
            .flat_map(|vars| vars.values())
            .map(Vec::len)
            .sum()
    }

    /// Insert counters
    pub fn stats(&self) -> TableStats {
        self.stats
    }

    /// Undirected adjacency over the equations
    ///
    /// An equation `word → variable` makes each a neighbor of the other.
    pub fn neighbors_undirected(&self) -> BTreeMap<Word, BTreeSet<Word>> {
        let mut adjacency: BTreeMap<Word, BTreeSet<Word>> = BTreeMap::new();
        for (word, variables) in &self.equations {
            for variable in variables.keys() {
                adjacency
                    .entry(word.clone())
                    .or_default()
                    .insert(variable.clone());
                adjacency
                    .entry(variable.clone())
                    .or_default()
                    .insert(word.clone());
            }
        }
        adjacency
    }
}

impl Extend<Relation> for EquationTable {
    fn extend<I: IntoIterator<Item = Relation>>(&mut self, iter: I) {
        for relation in iter {
            self.insert(relation);
        }
    }
}

impl FromIterator<Relation> for EquationTable {
    fn from_iter<I: IntoIterator<Item = Relation>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temperature_relations() -> Vec<Relation> {
        vec![
            Relation::new("cold", "high_prop", -1.0, "having a low temperature"),
            Relation::new("hot", "high_prop", 1.0, "having a high temperature"),
            Relation::new("warm", "hot", 0.6, "somewhat hot"),
            Relation::new("cool", "cold", 0.6, "somewhat cold"),
        ]
    }

    #[test]
    fn test_accepts_relations() {
        let table: EquationTable = temperature_relations().into_iter().collect();
        assert_eq!(table.stats().accepted, 4);
        assert_eq!(table.equation_count(), 4);
        assert!(table.contains("high_prop"));
        assert_eq!(table.vocabulary().len(), 5);
        assert_eq!(table.equations_for("warm").unwrap()["hot"], vec![0.6]);
    }

    #[test]
    fn test_zero_factor_words_stay_out_of_vocabulary() {
        let mut table = EquationTable::new();
        table.insert(Relation::new("hot", "high_prop", 1.0, "having a high temperature"));
        let outcome = table.insert(Relation::new("tepid", "warm", 0.0, "not warm"));
        assert_eq!(outcome, InsertOutcome::ZeroFactor);
        assert!(!table.contains("tepid"));
        assert!(!table.contains("warm"));
        assert!(table.mentioned().contains("tepid"));
        assert!(table.equations_for("tepid").is_none());
        assert_eq!(table.vocabulary().len(), 2);
        assert_eq!(table.stats().skipped(), 1);
    }

    #[test]
    fn test_audit_only_words_stay_out_of_vocabulary() {
        let mut table = EquationTable::new();
        table.insert(Relation::new("high_prop", "hot", 1.0, "").deduced());
        assert!(!table.contains("high_prop"));
        assert!(table.mentioned().contains("high_prop"));

        let mut table = EquationTable::including_deduced();
        table.insert(Relation::new("high_prop", "hot", 1.0, "").deduced());
        assert!(table.contains("high_prop"));
        assert!(table.contains("hot"));
    }

    #[test]
    fn test_registered_word_in_vocabulary() {
        let mut table = EquationTable::new();
        table.insert_word("high_prop");
        assert!(table.contains("high_prop"));
        assert_eq!(table.equation_count(), 0);
    }

    #[test]
    fn test_non_finite_skipped() {
        let mut table = EquationTable::new();
        assert_eq!(
            table.insert(Relation::new("a", "b", f64::NAN, "")),
            InsertOutcome::NonFinite
        );
        assert_eq!(table.equation_count(), 0);
    }

    #[test]
    fn test_deduced_excluded_by_default() {
        let forward = Relation::new("warm", "hot", 0.5, "fairly hot");
        let reciprocal = forward.reciprocal().unwrap();

        let mut table = EquationTable::new();
        assert_eq!(table.insert(forward), InsertOutcome::Accepted);
        assert_eq!(table.insert(reciprocal), InsertOutcome::Deduced);
        assert!(table.equations_for("hot").is_none());
        assert_eq!(table.deduced().len(), 1);
    }

    #[test]
    fn test_deduced_included_on_request() {
        let forward = Relation::new("warm", "hot", 0.5, "fairly hot");
        let reciprocal = forward.reciprocal().unwrap();

        let mut table = EquationTable::including_deduced();
        table.insert(forward);
        assert_eq!(table.insert(reciprocal), InsertOutcome::Accepted);
        assert_eq!(table.equations_for("hot").unwrap()["warm"], vec![2.0]);
        assert_eq!(table.deduced().len(), 1);
    }

    #[test]
    fn test_exact_duplicate_skipped() {
        let mut table = EquationTable::new();
        let r = Relation::new("warm", "hot", 0.6, "somewhat hot");
        assert_eq!(table.insert(r.clone()), InsertOutcome::Accepted);
        assert_eq!(table.insert(r), InsertOutcome::Duplicate);
        assert_eq!(table.equation_count(), 1);
    }

    #[test]
    fn test_same_pair_different_evidence_kept() {
        let mut table = EquationTable::new();
        table.insert(Relation::new("warm", "hot", 0.6, "somewhat hot"));
        table.insert(Relation::new("warm", "hot", 0.8, "rather hot"));
        table.insert(Relation::new("warm", "hot", 0.6, "mildly hot"));
        assert_eq!(table.equations_for("warm").unwrap()["hot"], vec![0.6, 0.8, 0.6]);
    }

    #[test]
    fn test_undirected_neighbors() {
        let table: EquationTable = temperature_relations().into_iter().collect();
        let adjacency = table.neighbors_undirected();
        assert!(adjacency["high_prop"].contains("cold"));
        assert!(adjacency["high_prop"].contains("hot"));
        assert!(adjacency["hot"].contains("warm"));
        assert!(adjacency["cold"].contains("cool"));
        assert!(!adjacency["warm"].contains("cool"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn relation_strategy() -> impl Strategy<Value = Relation> {
        (
            "[a-e]",
            "[a-e]",
            prop_oneof![Just(0.0), -2.0f64..2.0],
            any::<bool>(),
        )
            .prop_map(|(w, v, f, deduced)| {
                let r = Relation::new(w.as_str(), v.as_str(), f, "def");
                if deduced { r.deduced() } else { r }
            })
    }

    proptest! {
        /// Property: every offered relation is counted exactly once
        #[test]
        fn test_stats_account_for_every_insert(relations in prop::collection::vec(relation_strategy(), 0..40)) {
            let n = relations.len();
            let table: EquationTable = relations.into_iter().collect();
            prop_assert_eq!(table.stats().total(), n);
            prop_assert_eq!(table.stats().accepted, table.equation_count());
        }

        /// Property: every vocabulary word takes part in some equation
        #[test]
        fn test_vocabulary_only_from_equations(relations in prop::collection::vec(relation_strategy(), 0..40)) {
            let table: EquationTable = relations.into_iter().collect();
            let adjacency = table.neighbors_undirected();
            for word in table.vocabulary() {
                prop_assert!(adjacency.contains_key(word));
            }
            prop_assert!(table.vocabulary().is_subset(table.mentioned()));
        }

        /// Property: no zero factor ever becomes an equation
        #[test]
        fn test_no_zero_factor_equations(relations in prop::collection::vec(relation_strategy(), 0..40)) {
            let table: EquationTable = relations.into_iter().collect();
            for variables in table.equations().values() {
                for factors in variables.values() {
                    prop_assert!(factors.iter().all(|f| *f != 0.0));
                }
            }
        }
    }
}
