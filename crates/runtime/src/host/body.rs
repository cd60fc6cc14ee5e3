//! One-dimensional enemy body implementing [`EnemyActions`].
//!
//! Positions are x coordinates. The body walks toward the player while
//! following, cannot cross obstacles while grounded, jumps for a fixed air
//! time, and plays attack animations one at a time with a single chained
//! follow-up.

use std::sync::Arc;

use game_content::BodyParams;
use game_core::EnemyActions;
use serde::{Deserialize, Serialize};

/// Attack direction of an animation.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum AttackDirection {
    Up,
    Middle,
    Down,
}

impl AttackDirection {
    const fn index(self) -> usize {
        self as usize
    }
}

/// Horizontal facing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Attack animation currently playing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActiveAttack {
    pub direction: AttackDirection,
    pub remaining: f32,
}

/// Counters of what the body actually did, as opposed to what was requested.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyStats {
    /// Started attack animations, indexed by [`AttackDirection`].
    pub attacks_started: [u32; 3],
    /// Jumps started by an explicit jump action.
    pub jumps: u32,
    /// Jumps started by the stuck check.
    pub auto_jumps: u32,
}

impl BodyStats {
    pub fn attacks(&self, direction: AttackDirection) -> u32 {
        self.attacks_started[direction.index()]
    }

    pub fn total_attacks(&self) -> u32 {
        self.attacks_started.iter().sum()
    }
}

/// Kinematic enemy body driven by a pattern executor.
#[derive(Clone, Debug)]
pub struct EnemyBody {
    params: BodyParams,
    x: f32,
    facing: Facing,
    player_x: Option<f32>,
    obstacles: Arc<[f32]>,
    following: bool,
    auto_jumping: bool,
    input_locked: bool,
    air_time_left: f32,
    attack: Option<ActiveAttack>,
    chained: Option<AttackDirection>,
    stuck_timer: f32,
    last_sample_x: f32,
    stats: BodyStats,
}

impl EnemyBody {
    pub fn new(params: BodyParams, x: f32) -> Self {
        Self {
            params,
            x,
            facing: Facing::default(),
            player_x: None,
            obstacles: Arc::from([]),
            following: false,
            auto_jumping: false,
            input_locked: false,
            air_time_left: 0.0,
            attack: None,
            chained: None,
            stuck_timer: 0.0,
            last_sample_x: x,
            stats: BodyStats::default(),
        }
    }

    /// Obstacle x positions that block grounded movement.
    pub fn with_obstacles(mut self, obstacles: Arc<[f32]>) -> Self {
        self.obstacles = obstacles;
        self
    }

    /// Updates the known player position; `None` when there is no player.
    pub fn observe_player(&mut self, player_x: Option<f32>) {
        self.player_x = player_x;
    }

    /// Locks input. A dead body ignores every action and stops moving.
    pub fn die(&mut self) {
        self.input_locked = true;
        self.chained = None;
    }

    /// Integrates one frame of movement, air time, attacks and auto-jumping.
    pub fn update(&mut self, delta: f32) {
        if self.air_time_left > 0.0 {
            self.air_time_left = (self.air_time_left - delta).max(0.0);
        }
        self.advance_attack(delta);

        let Some(player_x) = self.player_x else {
            return;
        };
        let offset = player_x - self.x;
        if !self.following || self.input_locked || offset.abs() <= self.params.min_player_distance {
            return;
        }

        self.facing = if offset < 0.0 { Facing::Left } else { Facing::Right };
        let direction = offset.signum();
        let target = self.x + direction * self.params.move_speed * delta;
        if !self.is_grounded() || !self.crosses_obstacle(target) {
            self.x = target;
        }

        if self.auto_jumping {
            self.stuck_timer += delta;
            if self.stuck_timer >= self.params.auto_jump_check_interval {
                if (self.x - self.last_sample_x).abs() < self.params.auto_jump_activation_distance
                    && self.start_jump()
                {
                    self.stats.auto_jumps += 1;
                }
                self.last_sample_x = self.x;
                self.stuck_timer = 0.0;
            }
        }
    }

    fn advance_attack(&mut self, delta: f32) {
        let Some(attack) = self.attack.as_mut() else {
            return;
        };
        attack.remaining -= delta;
        if attack.remaining <= 0.0 {
            self.attack = None;
            if let Some(direction) = self.chained.take() {
                self.begin_attack(direction);
            }
        }
    }

    fn request_attack(&mut self, direction: AttackDirection) {
        if self.input_locked {
            return;
        }
        if self.attack.is_some() {
            self.chained = Some(direction);
        } else {
            self.begin_attack(direction);
        }
    }

    fn begin_attack(&mut self, direction: AttackDirection) {
        let remaining = match direction {
            AttackDirection::Up => self.params.attack_up_duration,
            AttackDirection::Middle => self.params.attack_middle_duration,
            AttackDirection::Down => self.params.attack_down_duration,
        };
        self.attack = Some(ActiveAttack {
            direction,
            remaining,
        });
        self.stats.attacks_started[direction.index()] += 1;
    }

    /// Leaves the ground if standing on it. Returns whether a jump started.
    fn start_jump(&mut self) -> bool {
        if self.input_locked || !self.is_grounded() {
            return false;
        }
        self.air_time_left = self.params.jump_air_time;
        true
    }

    fn crosses_obstacle(&self, target: f32) -> bool {
        let (low, high) = if target >= self.x {
            (self.x, target)
        } else {
            (target, self.x)
        };
        self.obstacles
            .iter()
            .any(|&obstacle| obstacle != self.x && (low..=high).contains(&obstacle))
    }

    fn in_range(&self, range: f32) -> bool {
        self.player_x
            .is_some_and(|player_x| range >= (player_x - self.x).abs())
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn params(&self) -> &BodyParams {
        &self.params
    }

    pub fn is_following(&self) -> bool {
        self.following
    }

    pub fn is_auto_jumping(&self) -> bool {
        self.auto_jumping
    }

    pub fn is_alive(&self) -> bool {
        !self.input_locked
    }

    pub fn current_attack(&self) -> Option<ActiveAttack> {
        self.attack
    }

    pub fn chained_attack(&self) -> Option<AttackDirection> {
        self.chained
    }

    pub fn stats(&self) -> &BodyStats {
        &self.stats
    }
}

impl EnemyActions for EnemyBody {
    fn is_player_in_attack_range(&self) -> bool {
        self.in_range(self.params.attack_range)
    }

    fn is_player_in_sight_range(&self) -> bool {
        self.in_range(self.params.sight_range)
    }

    fn is_grounded(&self) -> bool {
        self.air_time_left <= 0.0
    }

    fn attack_up_duration(&self) -> f32 {
        self.params.attack_up_duration
    }

    fn attack_middle_duration(&self) -> f32 {
        self.params.attack_middle_duration
    }

    fn attack_down_duration(&self) -> f32 {
        self.params.attack_down_duration
    }

    fn attack_up(&mut self) {
        self.request_attack(AttackDirection::Up);
    }

    fn attack_middle(&mut self) {
        self.request_attack(AttackDirection::Middle);
    }

    fn attack_down(&mut self) {
        self.request_attack(AttackDirection::Down);
    }

    fn jump(&mut self) {
        if self.start_jump() {
            self.stats.jumps += 1;
        }
    }

    fn start_follow_player(&mut self) {
        if !self.input_locked {
            self.following = true;
        }
    }

    fn stop_follow_player(&mut self) {
        if !self.input_locked {
            self.following = false;
        }
    }

    fn start_auto_jumping(&mut self) {
        if !self.input_locked {
            self.auto_jumping = true;
        }
    }

    fn stop_auto_jumping(&mut self) {
        if !self.input_locked {
            self.auto_jumping = false;
        }
    }
}
