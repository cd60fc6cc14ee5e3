//! End-to-end runs of the interpreter against a small simulated host.

use game_core::{
    ActionId, EnemyActions, EntityId, EntityMode, GameConfig, PatternExecutor, PatternSetSpec,
    PatternSlot, PcgRng, RngOracle,
};

/// Host whose jumps last a fixed number of ticks.
#[derive(Default)]
struct Dummy {
    distance: f32,
    air_ticks: u32,
    log: Vec<ActionId>,
}

impl Dummy {
    const AIR_TICKS: u32 = 5;

    fn advance(&mut self) {
        self.air_ticks = self.air_ticks.saturating_sub(1);
    }
}

impl EnemyActions for Dummy {
    fn is_player_in_attack_range(&self) -> bool {
        self.distance <= 1.0
    }
    fn is_player_in_sight_range(&self) -> bool {
        self.distance <= 5.0
    }
    fn is_grounded(&self) -> bool {
        self.air_ticks == 0
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
        self.log.push(ActionId::AttackUp);
    }
    fn attack_middle(&mut self) {
        self.log.push(ActionId::AttackMiddle);
    }
    fn attack_down(&mut self) {
        self.log.push(ActionId::AttackDown);
    }
    fn jump(&mut self) {
        self.air_ticks = Self::AIR_TICKS;
        self.log.push(ActionId::Jump);
    }
    fn start_follow_player(&mut self) {
        self.log.push(ActionId::StartFollow);
    }
    fn stop_follow_player(&mut self) {
        self.log.push(ActionId::StopFollow);
    }
    fn start_auto_jumping(&mut self) {
        self.log.push(ActionId::StartAutoJump);
    }
    fn stop_auto_jumping(&mut self) {
        self.log.push(ActionId::StopAutoJump);
    }
}

/// Always picks the last variant.
struct LastVariant;

impl RngOracle for LastVariant {
    fn next_u32(&self, _seed: u64) -> u32 {
        u32::MAX
    }
}

fn spec() -> PatternSetSpec {
    PatternSetSpec::new("STOPF", "STARTF", ["AU|AM|AD|2", "JUMP|AM|0"])
}

#[test]
fn approach_then_attack() {
    let host = Dummy {
        distance: 10.0,
        ..Dummy::default()
    };
    let mut executor =
        PatternExecutor::compile(host, &spec(), &GameConfig::new(), PcgRng, EntityId(1)).unwrap();

    for distance in [10.0, 4.0, 4.0, 0.5] {
        executor.host_mut().distance = distance;
        executor.tick(0.1);
        executor.host_mut().advance();
    }

    assert_eq!(executor.mode(), EntityMode::InAttackRange);
    let log = &executor.host().log;
    assert_eq!(
        &log[..3],
        &[ActionId::StopFollow, ActionId::StartFollow, ActionId::StartFollow]
    );
    assert_eq!(log.len(), 4);
    assert!(log[3].is_attack() || log[3] == ActionId::Jump);
}

#[test]
fn jump_in_pattern_holds_until_landing() {
    let host = Dummy {
        distance: 0.0,
        ..Dummy::default()
    };
    let mut executor =
        PatternExecutor::compile(host, &spec(), &GameConfig::new(), LastVariant, EntityId(0))
            .unwrap();

    let mut timeline = Vec::new();
    for frame in 0..12u32 {
        if let Some(executed) = executor.tick(0.1).executed {
            timeline.push((frame, executed.instruction.action));
        }
        executor.host_mut().advance();
    }

    assert_eq!(executor.active_slot(), PatternSlot::InAttackRange(1));
    // The jump keeps the host airborne for five ticks; AM follows on landing.
    assert_eq!(
        timeline,
        vec![
            (0, ActionId::Jump),
            (5, ActionId::AttackMiddle),
            (6, ActionId::Jump),
            (11, ActionId::AttackMiddle),
        ]
    );
}
