//! Relation module - one weighted link mined from a definition

use crate::Word;

/// A directed, weighted relation between two words
///
/// Reads as "`word`'s intensity = `factor` × `variable`'s intensity". Negative
/// factors encode antonymy, fractional ones a downtoned reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    /// Left-hand subject of the equation
    pub word: Word,

    /// Right-hand referenced word
    pub variable: Word,

    /// Multiplicative factor extracted from the definition text
    pub factor: f64,

    /// Definition fragment the relation was extracted from
    pub definition: String,

    /// Whether the relation was inferred algebraically rather than read from text
    pub deduced: bool,
}

impl Relation {
    /// Create a relation extracted directly from a definition
    pub fn new(
        word: impl Into<Word>,
        variable: impl Into<Word>,
        factor: f64,
        definition: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            variable: variable.into(),
            factor,
            definition: definition.into(),
            deduced: false,
        }
    }

    /// Mark this relation as deduced
    pub fn deduced(mut self) -> Self {
        self.deduced = true;
        self
    }

    /// The reciprocal relation `variable = (1 / factor) × word`, flagged as deduced
    ///
    /// Returns `None` when the factor is zero or not finite, since no
    /// reciprocal exists.
    pub fn reciprocal(&self) -> Option<Relation> {
        if self.factor == 0.0 || !self.factor.is_finite() {
            return None;
        }

        Some(Relation {
            word: self.variable.clone(),
            variable: self.word.clone(),
            factor: 1.0 / self.factor,
            definition: self.definition.clone(),
            deduced: true,
        })
    }

    /// A relation is usable as an equation only with a finite, non-zero factor
    pub fn is_well_formed(&self) -> bool {
        self.factor.is_finite() && self.factor != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_relation_is_not_deduced() {
        let r = Relation::new("warm", "hot", 0.6, "somewhat hot");
        assert!(!r.deduced);
        assert_eq!(r.word.as_str(), "warm");
        assert_eq!(r.variable.as_str(), "hot");
    }

    #[test]
    fn test_reciprocal() {
        let r = Relation::new("warm", "hot", 0.5, "fairly hot");
        let rec = r.reciprocal().unwrap();
        assert_eq!(rec.word.as_str(), "hot");
        assert_eq!(rec.variable.as_str(), "warm");
        assert_eq!(rec.factor, 2.0);
        assert!(rec.deduced);
        assert_eq!(rec.definition, "fairly hot");
    }

    #[test]
    fn test_zero_factor_has_no_reciprocal() {
        let r = Relation::new("tepid", "warm", 0.0, "not warm at all");
        assert!(r.reciprocal().is_none());
        assert!(!r.is_well_formed());
    }

    #[test]
    fn test_non_finite_is_not_well_formed() {
        assert!(!Relation::new("a", "b", f64::NAN, "").is_well_formed());
        assert!(!Relation::new("a", "b", f64::INFINITY, "").is_well_formed());
        assert!(Relation::new("a", "b", -1.0, "").is_well_formed());
    }
}
