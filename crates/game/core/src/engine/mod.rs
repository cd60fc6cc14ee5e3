//! Per-frame pattern interpreter.
//!
//! The [`PatternExecutor`] owns one enemy host, its compiled [`PatternSet`]
//! and the [`ExecutorState`] that tracks progress through the active
//! pattern. Each frame the caller invokes [`PatternExecutor::tick`] with the
//! elapsed time; the executor classifies the mode, switches patterns when the
//! mode changed, counts down the current wait and runs at most one
//! instruction on the host.
//!
//! The executor never fails once built and never logs. Everything a caller
//! may want to report comes back in the [`TickOutcome`].

mod outcome;
mod selector;

pub use outcome::{ExecutedInstruction, ModeChange, TickOutcome};
pub use selector::PatternSelector;

use crate::action::{ActionTable, Wait};
use crate::config::GameConfig;
use crate::env::{EnemyActions, PcgRng, RngOracle};
use crate::pattern::{ConfigurationError, PatternSet, PatternSetSpec, PatternSlot};
use crate::state::{EntityId, EntityMode, ExecutorState};

/// Drives one enemy host through its action patterns.
pub struct PatternExecutor<H, R = PcgRng> {
    host: H,
    patterns: PatternSet,
    selector: PatternSelector<R>,
    state: ExecutorState,
}

impl<H, R> PatternExecutor<H, R>
where
    H: EnemyActions,
    R: RngOracle,
{
    /// Creates an executor for already compiled patterns.
    pub fn new(host: H, patterns: PatternSet, rng: R, seed: u64, entity: EntityId) -> Self {
        Self {
            host,
            patterns,
            selector: PatternSelector::new(rng, seed, entity),
            state: ExecutorState::new(),
        }
    }

    /// Compiles `spec` against the host's animation lengths and builds the executor.
    ///
    /// The host's duration queries are read once here. Variant draws are
    /// seeded from `config.seed`.
    pub fn compile(
        host: H,
        spec: &PatternSetSpec,
        config: &GameConfig,
        rng: R,
        entity: EntityId,
    ) -> Result<Self, ConfigurationError> {
        let table = ActionTable::from_host_with_config(&host, config)?;
        let patterns = spec.compile(&table)?;
        Ok(Self::new(host, patterns, rng, config.seed, entity))
    }

    /// Advances the interpreter by `delta` seconds.
    ///
    /// Runs at most one instruction. A mode change only restarts the pattern
    /// index; a wait already counting down keeps counting, so the first
    /// instruction of the new pattern runs when the old wait would have ended.
    pub fn tick(&mut self, delta: f32) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        let mode = EntityMode::classify(
            self.host.is_player_in_attack_range(),
            self.host.is_player_in_sight_range(),
        );
        if mode != self.state.mode {
            let from = self.state.mode;
            let slot = self
                .selector
                .select(mode, &self.patterns, &mut self.state.rolls);
            self.state.mode = mode;
            self.state.slot = slot;
            self.state.next_index = 0;
            outcome.mode_change = Some(ModeChange { from, to: mode, slot });
        }

        self.state.remaining_wait -= delta;

        if self.state.stalled {
            self.state.stalled = !self.host.is_grounded();
            outcome.stall_released = !self.state.stalled;
        }

        if self.state.remaining_wait < 0.0 && !self.state.stalled {
            self.execute_next(&mut outcome);
        }

        outcome
    }

    fn execute_next(&mut self, outcome: &mut TickOutcome) {
        let slot = self.state.slot;
        let index = self.state.next_index;
        let pattern = self.patterns.pattern(slot);
        let instruction = pattern.instructions()[index];
        let is_last = index + 1 >= pattern.len();

        self.host.perform(instruction.action);

        match instruction.wait {
            Wait::Seconds(seconds) => self.state.remaining_wait = seconds,
            Wait::UntilGrounded => {
                self.state.remaining_wait = Wait::GROUNDED_SENTINEL;
                self.state.stalled = true;
            }
        }

        if is_last {
            self.state.next_index = 0;
            self.state.loops_completed += 1;
            outcome.wrapped = true;
            if self.state.mode == EntityMode::InAttackRange {
                let next = self
                    .selector
                    .roll_attack_variant(&self.patterns, &mut self.state.rolls);
                self.state.slot = next;
                outcome.rerolled = Some(next);
            }
        } else {
            self.state.next_index = index + 1;
        }

        outcome.executed = Some(ExecutedInstruction {
            slot,
            index,
            instruction,
        });
    }

    /// Returns to the initial out-of-sight state without touching the host.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

impl<H, R> PatternExecutor<H, R> {
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn state(&self) -> &ExecutorState {
        &self.state
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    pub fn mode(&self) -> EntityMode {
        self.state.mode
    }

    pub fn active_slot(&self) -> PatternSlot {
        self.state.slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionId;

    #[derive(Default)]
    struct ScriptedHost {
        in_attack: bool,
        in_sight: bool,
        airborne: bool,
        performed: Vec<ActionId>,
    }

    impl EnemyActions for ScriptedHost {
        fn is_player_in_attack_range(&self) -> bool {
            self.in_attack
        }
        fn is_player_in_sight_range(&self) -> bool {
            self.in_sight
        }
        fn is_grounded(&self) -> bool {
            !self.airborne
        }
        fn attack_up_duration(&self) -> f32 {
            0.5
        }
        fn attack_middle_duration(&self) -> f32 {
            0.4
        }
        fn attack_down_duration(&self) -> f32 {
            0.6
        }
        fn attack_up(&mut self) {
            self.performed.push(ActionId::AttackUp);
        }
        fn attack_middle(&mut self) {
            self.performed.push(ActionId::AttackMiddle);
        }
        fn attack_down(&mut self) {
            self.performed.push(ActionId::AttackDown);
        }
        fn jump(&mut self) {
            self.airborne = true;
            self.performed.push(ActionId::Jump);
        }
        fn start_follow_player(&mut self) {
            self.performed.push(ActionId::StartFollow);
        }
        fn stop_follow_player(&mut self) {
            self.performed.push(ActionId::StopFollow);
        }
        fn start_auto_jumping(&mut self) {
            self.performed.push(ActionId::StartAutoJump);
        }
        fn stop_auto_jumping(&mut self) {
            self.performed.push(ActionId::StopAutoJump);
        }
    }

    fn executor(in_attack_range: &[&str]) -> PatternExecutor<ScriptedHost> {
        let spec = PatternSetSpec::new("STOPF", "STARTF|1", in_attack_range.iter().copied());
        PatternExecutor::compile(
            ScriptedHost::default(),
            &spec,
            &GameConfig::new().with_seed(3),
            PcgRng,
            EntityId(0),
        )
        .unwrap()
    }

    #[test]
    fn starts_out_of_sight() {
        let executor = executor(&["AU"]);
        let state = executor.state();

        assert_eq!(state.mode, EntityMode::OutOfSight);
        assert_eq!(state.slot, PatternSlot::OutOfSight);
        assert_eq!(state.next_index, 0);
        assert_eq!(state.remaining_wait, 0.0);
        assert!(!state.stalled);
    }

    #[test]
    fn first_tick_runs_first_instruction() {
        let mut executor = executor(&["AU"]);
        let outcome = executor.tick(0.1);

        assert!(outcome.mode_change.is_none());
        assert_eq!(executor.host().performed, vec![ActionId::StopFollow]);
        assert!(outcome.wrapped);
        assert!(outcome.rerolled.is_none());
    }

    #[test]
    fn mode_switches_exactly_once() {
        let mut executor = executor(&["AU"]);
        let mut changes = Vec::new();

        for in_sight in [false, false, true] {
            executor.host_mut().in_sight = in_sight;
            if let Some(change) = executor.tick(0.1).mode_change {
                changes.push(change);
            }
        }

        assert_eq!(
            changes,
            vec![ModeChange {
                from: EntityMode::OutOfSight,
                to: EntityMode::InSight,
                slot: PatternSlot::InSight,
            }]
        );
    }

    #[test]
    fn attack_range_wins_over_sight() {
        let mut executor = executor(&["AU"]);
        executor.host_mut().in_attack = true;
        executor.host_mut().in_sight = false;
        executor.tick(0.1);

        assert_eq!(executor.mode(), EntityMode::InAttackRange);
        assert_eq!(executor.host().performed, vec![ActionId::AttackUp]);
    }

    #[test]
    fn waits_are_honoured() {
        let mut executor = executor(&["AU|AM|AD|2"]);
        executor.host_mut().in_attack = true;

        let mut timeline = Vec::new();
        for frame in 0..25 {
            if let Some(executed) = executor.tick(0.15).executed {
                timeline.push((frame, executed.instruction.action));
            }
        }

        // AU 0.5s, AM 0.4s, AD 2s, then the loop restarts.
        assert_eq!(
            timeline,
            vec![
                (0, ActionId::AttackUp),
                (4, ActionId::AttackMiddle),
                (7, ActionId::AttackDown),
                (21, ActionId::AttackUp),
            ]
        );
    }

    #[test]
    fn jump_stalls_until_grounded() {
        let mut executor = executor(&["JUMP|AU"]);
        executor.host_mut().in_attack = true;

        let outcome = executor.tick(0.1);
        assert_eq!(
            outcome.executed.map(|e| e.instruction.action),
            Some(ActionId::Jump)
        );
        assert!(executor.state().stalled);

        for _ in 0..50 {
            assert!(executor.tick(0.1).executed.is_none());
        }

        executor.host_mut().airborne = false;
        let outcome = executor.tick(0.1);
        assert!(outcome.stall_released);
        assert_eq!(
            outcome.executed.map(|e| e.instruction.action),
            Some(ActionId::AttackUp)
        );
        assert_eq!(
            executor.host().performed,
            vec![ActionId::Jump, ActionId::AttackUp]
        );
    }

    #[test]
    fn rerolls_after_last_instruction() {
        let mut executor = executor(&["AU|0|AM|0|AD|0", "AD|0|AD|0|AD|0"]);
        executor.host_mut().in_attack = true;

        let outcomes: Vec<_> = (0..3).map(|_| executor.tick(0.1)).collect();

        assert!(outcomes[0].rerolled.is_none());
        assert!(outcomes[1].rerolled.is_none());
        assert!(outcomes[2].wrapped);
        assert!(matches!(
            outcomes[2].rerolled,
            Some(PatternSlot::InAttackRange(_))
        ));
        assert_eq!(executor.state().next_index, 0);
        assert_eq!(executor.state().loops_completed, 1);
        // One draw on entering the mode, one on the wrap.
        assert_eq!(executor.state().rolls, 2);
    }

    #[test]
    fn variants_are_picked_evenly() {
        let mut executor = executor(&["AU|0", "AM|0"]);
        executor.host_mut().in_attack = true;

        let mut counts = [0u32; 2];
        for _ in 0..4_000 {
            if let Some(PatternSlot::InAttackRange(index)) = executor.tick(0.1).rerolled {
                counts[index] += 1;
            }
        }

        assert_eq!(counts[0] + counts[1], 4_000);
        for count in counts {
            assert!((1_700..=2_300).contains(&count), "skewed counts: {counts:?}");
        }
    }

    #[test]
    fn mode_change_keeps_pending_wait() {
        let mut executor = executor(&["AU"]);
        executor.host_mut().in_sight = true;
        executor.tick(0.1);
        assert_eq!(executor.host().performed, vec![ActionId::StartFollow]);

        // STARTF waits 1s; leaving sight restarts the index but not the wait.
        executor.host_mut().in_sight = false;
        let outcome = executor.tick(0.3);
        assert!(outcome.mode_change.is_some());
        assert!(outcome.executed.is_none());

        executor.tick(0.3);
        executor.tick(0.3);
        let outcome = executor.tick(0.3);
        assert_eq!(
            outcome.executed,
            Some(ExecutedInstruction {
                slot: PatternSlot::OutOfSight,
                index: 0,
                instruction: crate::action::Instruction::new(
                    ActionId::StopFollow,
                    Wait::Seconds(crate::action::INSTANT_ACTION_SECONDS)
                ),
            })
        );
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut executor = executor(&["JUMP"]);
        executor.host_mut().in_attack = true;
        executor.tick(0.1);
        assert!(executor.state().stalled);

        executor.reset();

        assert_eq!(executor.mode(), EntityMode::OutOfSight);
        assert_eq!(executor.active_slot(), PatternSlot::OutOfSight);
        assert!(!executor.state().stalled);
        assert_eq!(executor.state().remaining_wait, 0.0);
    }

    #[test]
    fn invalid_pattern_fails_construction() {
        let spec = PatternSetSpec::new("STOPF", "STARTF|", ["AU"]);
        let result = PatternExecutor::compile(
            ScriptedHost::default(),
            &spec,
            &GameConfig::new(),
            PcgRng,
            EntityId(0),
        );

        assert!(matches!(
            result,
            Err(ConfigurationError::Pattern {
                slot: PatternSlot::InSight,
                ..
            })
        ));
    }
}
