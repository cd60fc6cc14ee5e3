//! Pattern sets: one pattern per entity mode.

use crate::action::ActionTable;

use super::{CompiledPattern, ConfigurationError, PatternSlot, compile};

/// Designer-facing pattern strings for one enemy.
///
/// ```ron
/// (
///     out_of_sight: "STOPF",
///     in_sight: "STARTF",
///     in_attack_range: ["AU|AM|AD|2", "AD|JUMP|0.5|AD|3|AU"],
/// )
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatternSetSpec {
    pub out_of_sight: String,
    pub in_sight: String,
    pub in_attack_range: Vec<String>,
}

impl PatternSetSpec {
    pub fn new<I, S>(out_of_sight: impl Into<String>, in_sight: impl Into<String>, in_attack_range: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            out_of_sight: out_of_sight.into(),
            in_sight: in_sight.into(),
            in_attack_range: in_attack_range.into_iter().map(Into::into).collect(),
        }
    }

    /// Source string of `slot`, if it exists.
    pub fn source(&self, slot: PatternSlot) -> Option<&str> {
        match slot {
            PatternSlot::OutOfSight => Some(&self.out_of_sight),
            PatternSlot::InSight => Some(&self.in_sight),
            PatternSlot::InAttackRange(index) => {
                self.in_attack_range.get(index).map(String::as_str)
            }
        }
    }

    /// Every slot these sources fill, in compile order.
    pub fn slots(&self) -> impl Iterator<Item = PatternSlot> + '_ {
        [PatternSlot::OutOfSight, PatternSlot::InSight]
            .into_iter()
            .chain((0..self.in_attack_range.len()).map(PatternSlot::InAttackRange))
    }

    /// Compiles every pattern, failing on the first invalid one.
    pub fn compile(&self, table: &ActionTable) -> Result<PatternSet, ConfigurationError> {
        let compile_slot = |slot: PatternSlot, source: &str| {
            compile(source, table).map_err(|source| ConfigurationError::Pattern { slot, source })
        };

        if self.in_attack_range.is_empty() {
            return Err(ConfigurationError::NoAttackRangePatterns);
        }

        let out_of_sight = compile_slot(PatternSlot::OutOfSight, &self.out_of_sight)?;
        let in_sight = compile_slot(PatternSlot::InSight, &self.in_sight)?;
        let in_attack_range = self
            .in_attack_range
            .iter()
            .enumerate()
            .map(|(index, source)| compile_slot(PatternSlot::InAttackRange(index), source))
            .collect::<Result<Vec<_>, _>>()?;

        PatternSet::new(out_of_sight, in_sight, in_attack_range)
    }
}

/// Compiled patterns for every mode of one enemy.
#[derive(Clone, Debug, PartialEq)]
pub struct PatternSet {
    out_of_sight: CompiledPattern,
    in_sight: CompiledPattern,
    in_attack_range: Vec<CompiledPattern>,
}

impl PatternSet {
    pub fn new(
        out_of_sight: CompiledPattern,
        in_sight: CompiledPattern,
        in_attack_range: Vec<CompiledPattern>,
    ) -> Result<Self, ConfigurationError> {
        if in_attack_range.is_empty() {
            return Err(ConfigurationError::NoAttackRangePatterns);
        }
        Ok(Self {
            out_of_sight,
            in_sight,
            in_attack_range,
        })
    }

    pub fn get(&self, slot: PatternSlot) -> Option<&CompiledPattern> {
        match slot {
            PatternSlot::OutOfSight => Some(&self.out_of_sight),
            PatternSlot::InSight => Some(&self.in_sight),
            PatternSlot::InAttackRange(index) => self.in_attack_range.get(index),
        }
    }

    /// Pattern in `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is an attack-range index past the variant count.
    pub fn pattern(&self, slot: PatternSlot) -> &CompiledPattern {
        match slot {
            PatternSlot::OutOfSight => &self.out_of_sight,
            PatternSlot::InSight => &self.in_sight,
            PatternSlot::InAttackRange(index) => &self.in_attack_range[index],
        }
    }

    /// Number of in-attack-range variants; at least one.
    pub fn attack_variant_count(&self) -> usize {
        self.in_attack_range.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::PatternError;

    fn table() -> ActionTable {
        ActionTable::new(0.5, 0.4, 0.6).unwrap()
    }

    #[test]
    fn compiles_every_slot() {
        let spec = PatternSetSpec::new("STOPF", "STARTF", ["AU|AM|AD|2", "AD|JUMP|0.5|AD|3|AU"]);
        let set = spec.compile(&table()).unwrap();

        assert_eq!(set.pattern(PatternSlot::OutOfSight).len(), 1);
        assert_eq!(set.pattern(PatternSlot::InSight).len(), 1);
        assert_eq!(set.attack_variant_count(), 2);
        assert_eq!(set.pattern(PatternSlot::InAttackRange(1)).len(), 4);
        assert!(set.get(PatternSlot::InAttackRange(2)).is_none());
    }

    #[test]
    fn error_names_failing_slot() {
        let spec = PatternSetSpec::new("STOPF", "STARTF", ["AU", "AU|SPIN"]);
        let err = spec.compile(&table()).unwrap_err();

        assert_eq!(
            err,
            ConfigurationError::Pattern {
                slot: PatternSlot::InAttackRange(1),
                source: PatternError::UnknownAction {
                    token: "SPIN".to_string(),
                    position: 1,
                },
            }
        );
        assert_eq!(err.slot(), Some(PatternSlot::InAttackRange(1)));
    }

    #[test]
    fn attack_range_variants_are_required() {
        let spec = PatternSetSpec::new("STOPF", "STARTF", Vec::<String>::new());
        assert_eq!(
            spec.compile(&table()),
            Err(ConfigurationError::NoAttackRangePatterns)
        );
    }

    #[test]
    fn slots_cover_spec() {
        let spec = PatternSetSpec::new("STOPF", "STARTF", ["AU", "AM"]);
        let slots: Vec<_> = spec.slots().collect();

        assert_eq!(
            slots,
            vec![
                PatternSlot::OutOfSight,
                PatternSlot::InSight,
                PatternSlot::InAttackRange(0),
                PatternSlot::InAttackRange(1),
            ]
        );
        assert_eq!(spec.source(PatternSlot::InAttackRange(1)), Some("AM"));
    }
}
