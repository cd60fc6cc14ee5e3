//! Mode to pattern mapping.

use crate::env::{RngOracle, compute_seed};
use crate::pattern::{PatternSet, PatternSlot};
use crate::state::{EntityId, EntityMode};

/// Context mixed into every variant draw so other random streams for the
/// same entity never collide with it.
const VARIANT_DRAW_CONTEXT: u32 = 0;

/// Chooses the active pattern for a mode.
///
/// Out-of-sight and in-sight map to their single pattern. In-attack-range
/// draws one variant uniformly; draw `n` of an entity is seeded from
/// `(seed, n, entity)`, so replays with the same seed pick the same variants.
#[derive(Clone, Debug)]
pub struct PatternSelector<R> {
    rng: R,
    seed: u64,
    entity: EntityId,
}

impl<R: RngOracle> PatternSelector<R> {
    pub fn new(rng: R, seed: u64, entity: EntityId) -> Self {
        Self { rng, seed, entity }
    }

    /// Slot to run after switching to `mode`.
    ///
    /// `rolls` is the entity's draw counter; it advances only when a variant
    /// is drawn.
    pub fn select(&self, mode: EntityMode, patterns: &PatternSet, rolls: &mut u64) -> PatternSlot {
        match mode {
            EntityMode::OutOfSight => PatternSlot::OutOfSight,
            EntityMode::InSight => PatternSlot::InSight,
            EntityMode::InAttackRange => self.roll_attack_variant(patterns, rolls),
        }
    }

    /// Draws an in-attack-range variant. Repeats of the previous variant are allowed.
    pub fn roll_attack_variant(&self, patterns: &PatternSet, rolls: &mut u64) -> PatternSlot {
        let seed = compute_seed(self.seed, *rolls, self.entity.0, VARIANT_DRAW_CONTEXT);
        *rolls += 1;
        PatternSlot::InAttackRange(self.rng.pick_index(seed, patterns.attack_variant_count()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionTable;
    use crate::env::PcgRng;
    use crate::pattern::PatternSetSpec;

    fn patterns(variants: usize) -> PatternSet {
        let variants: Vec<String> = (0..variants).map(|_| "AU".to_string()).collect();
        PatternSetSpec::new("STOPF", "STARTF", variants)
            .compile(&ActionTable::new(0.5, 0.4, 0.6).unwrap())
            .unwrap()
    }

    #[test]
    fn single_pattern_modes_do_not_roll() {
        let selector = PatternSelector::new(PcgRng, 1, EntityId(0));
        let set = patterns(3);
        let mut rolls = 0;

        assert_eq!(
            selector.select(EntityMode::OutOfSight, &set, &mut rolls),
            PatternSlot::OutOfSight
        );
        assert_eq!(
            selector.select(EntityMode::InSight, &set, &mut rolls),
            PatternSlot::InSight
        );
        assert_eq!(rolls, 0);
    }

    #[test]
    fn attack_mode_rolls_within_variants() {
        let selector = PatternSelector::new(PcgRng, 1, EntityId(0));
        let set = patterns(3);
        let mut rolls = 0;

        for _ in 0..100 {
            match selector.select(EntityMode::InAttackRange, &set, &mut rolls) {
                PatternSlot::InAttackRange(index) => assert!(index < 3),
                other => panic!("unexpected slot {other}"),
            }
        }
        assert_eq!(rolls, 100);
    }

    #[test]
    fn same_seed_replays_same_variants() {
        let set = patterns(4);
        let draw = |seed| {
            let selector = PatternSelector::new(PcgRng, seed, EntityId(7));
            let mut rolls = 0;
            (0..32)
                .map(|_| selector.roll_attack_variant(&set, &mut rolls))
                .collect::<Vec<_>>()
        };

        assert_eq!(draw(99), draw(99));
    }
}
