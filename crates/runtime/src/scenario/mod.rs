//! Scenario system for enemy placement and the scripted player track.
//!
//! Scenarios say which enemy templates to spawn and where, where obstacles
//! stand, and how the player moves over time. The player is a list of
//! waypoints; its position between two waypoints is interpolated linearly
//! and held at the first and last waypoint outside their range.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::api::{Result, RuntimeError};

/// One enemy to spawn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemyPlacement {
    /// Name of an enemy template.
    pub template: String,
    pub x: f32,
}

/// Player position at a point in time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerWaypoint {
    /// Seconds since the start of the scenario.
    pub at: f32,
    pub x: f32,
}

/// Scenario configuration for a simulation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Enemies in spawn order; entity ids follow this order.
    pub enemies: Vec<EnemyPlacement>,

    /// Player track. Empty means there is no player.
    #[serde(default)]
    pub player: Vec<PlayerWaypoint>,

    /// Obstacle x positions.
    #[serde(default)]
    pub obstacles: Vec<f32>,

    /// Length of the scenario in seconds.
    pub duration: f32,
}

impl Scenario {
    /// Creates a new scenario without a player or obstacles.
    pub fn new(enemies: Vec<EnemyPlacement>, duration: f32) -> Self {
        Self {
            enemies,
            player: Vec::new(),
            obstacles: Vec::new(),
            duration,
        }
    }

    pub fn with_player(mut self, player: Vec<PlayerWaypoint>) -> Self {
        self.player = player;
        self
    }

    pub fn with_obstacles(mut self, obstacles: Vec<f32>) -> Self {
        self.obstacles = obstacles;
        self
    }

    /// Player x at `time`, or `None` when the scenario has no player.
    pub fn player_x_at(&self, time: f32) -> Option<f32> {
        let first = self.player.first()?;
        if time <= first.at {
            return Some(first.x);
        }

        for pair in self.player.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            if time <= to.at {
                let span = to.at - from.at;
                if span <= 0.0 {
                    return Some(to.x);
                }
                let t = (time - from.at) / span;
                return Some(from.x + (to.x - from.x) * t);
            }
        }

        self.player.last().map(|last| last.x)
    }

    /// Checks the invariants the runtime relies on.
    pub fn validate(&self) -> Result<()> {
        if !(self.duration.is_finite() && self.duration >= 0.0) {
            return Err(RuntimeError::InvalidScenario(format!(
                "duration must be finite and non-negative, got {}",
                self.duration
            )));
        }

        let finite = |value: f32| value.is_finite();
        if let Some(placement) = self.enemies.iter().find(|p| !finite(p.x)) {
            return Err(RuntimeError::InvalidScenario(format!(
                "enemy '{}' has a non-finite position",
                placement.template
            )));
        }
        if self.obstacles.iter().any(|&x| !finite(x)) {
            return Err(RuntimeError::InvalidScenario(
                "obstacle positions must be finite".to_string(),
            ));
        }
        if self
            .player
            .iter()
            .any(|waypoint| !finite(waypoint.at) || !finite(waypoint.x))
        {
            return Err(RuntimeError::InvalidScenario(
                "player waypoints must be finite".to_string(),
            ));
        }
        if self.player.windows(2).any(|pair| pair[1].at < pair[0].at) {
            return Err(RuntimeError::InvalidScenario(
                "player waypoints must be ordered by time".to_string(),
            ));
        }

        Ok(())
    }

    /// Parse a scenario from RON text and validate it.
    pub fn from_ron_str(content: &str) -> Result<Self> {
        let scenario: Scenario = ron::from_str(content).map_err(|e| {
            RuntimeError::InvalidScenario(format!("Failed to parse scenario RON: {}", e))
        })?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Load scenario from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing Scenario data
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RuntimeError::InvalidScenario(format!(
                "Failed to read scenario file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_ron_str(&content)
    }
}
