//! Event types for different topics.

use game_core::{ActionId, EntityId, EntityMode, PatternSlot, Wait};
use serde::{Deserialize, Serialize};

/// Simulation time at which an event happened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Clock {
    /// Frame number, starting at 0.
    pub frame: u64,
    /// Seconds since the start of the simulation.
    pub elapsed: f32,
}

/// Events about which pattern an enemy is running.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BehaviorEvent {
    /// The enemy's mode changed and a new pattern was selected.
    ModeChanged {
        entity: EntityId,
        from: EntityMode,
        to: EntityMode,
        slot: PatternSlot,
        clock: Clock,
    },

    /// An attack-range pattern finished and a new variant was drawn.
    PatternRerolled {
        entity: EntityId,
        slot: PatternSlot,
        clock: Clock,
    },

    /// A grounded wait ended because the enemy landed.
    Landed { entity: EntityId, clock: Clock },
}

/// An instruction was executed on an enemy host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionEvent {
    pub entity: EntityId,
    pub slot: PatternSlot,
    /// Index of the instruction within its pattern.
    pub index: usize,
    pub action: ActionId,
    pub wait: Wait,
    pub clock: Clock,
}
