//! Enemy templates: pattern strings plus the body parameters of one enemy kind.

use game_core::{ActionTable, ConfigurationError, GameConfig, PatternSet, PatternSetSpec};

/// Named enemy kind as authored in `enemies.ron`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub name: String,
    pub patterns: PatternSetSpec,
    #[cfg_attr(feature = "serde", serde(default))]
    pub body: BodyParams,
}

impl EnemyTemplate {
    pub fn new(name: impl Into<String>, patterns: PatternSetSpec, body: BodyParams) -> Self {
        Self {
            name: name.into(),
            patterns,
            body,
        }
    }
}

/// Physical and animation parameters of an enemy body.
///
/// Distances are in world units along the x axis, times in seconds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BodyParams {
    pub attack_range: f32,
    pub sight_range: f32,
    /// Following stops once the player is this close.
    pub min_player_distance: f32,
    pub move_speed: f32,
    /// Time between leaving the ground and landing again.
    pub jump_air_time: f32,
    pub attack_up_duration: f32,
    pub attack_middle_duration: f32,
    pub attack_down_duration: f32,
    /// How often an auto-jumping body checks whether it is stuck.
    pub auto_jump_check_interval: f32,
    /// Movement below this distance between two checks counts as stuck.
    pub auto_jump_activation_distance: f32,
}

impl BodyParams {
    pub const DEFAULT_RANGE: f32 = 10.0;
    pub const DEFAULT_MIN_PLAYER_DISTANCE: f32 = 0.25;
    pub const DEFAULT_AUTO_JUMP_CHECK_INTERVAL: f32 = 0.2;
    pub const DEFAULT_AUTO_JUMP_ACTIVATION_DISTANCE: f32 = 0.001;

    /// Action table built from this body's animation lengths.
    pub fn action_table(&self, config: &GameConfig) -> Result<ActionTable, ConfigurationError> {
        ActionTable::with_instant_seconds(
            self.attack_up_duration,
            self.attack_middle_duration,
            self.attack_down_duration,
            config.instant_action_seconds,
        )
    }
}

impl Default for BodyParams {
    fn default() -> Self {
        Self {
            attack_range: Self::DEFAULT_RANGE,
            sight_range: Self::DEFAULT_RANGE,
            min_player_distance: Self::DEFAULT_MIN_PLAYER_DISTANCE,
            move_speed: 3.0,
            jump_air_time: 0.8,
            attack_up_duration: 0.5,
            attack_middle_duration: 0.4,
            attack_down_duration: 0.6,
            auto_jump_check_interval: Self::DEFAULT_AUTO_JUMP_CHECK_INTERVAL,
            auto_jump_activation_distance: Self::DEFAULT_AUTO_JUMP_ACTIVATION_DISTANCE,
        }
    }
}

/// Compiles every pattern of `template` against its own body durations.
///
/// Returns the compiled set, or the first configuration error found.
pub fn validate_template(
    template: &EnemyTemplate,
    config: &GameConfig,
) -> Result<PatternSet, ConfigurationError> {
    let table = template.body.action_table(config)?;
    template.patterns.compile(&table)
}
