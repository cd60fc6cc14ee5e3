//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{RwLock, broadcast};

use game_core::EntityId;

use super::types::{ActionEvent, BehaviorEvent, Clock};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Mode changes, variant draws and landings
    Behavior,
    /// Executed instructions
    Action,
}

impl Topic {
    pub const ALL: [Topic; 2] = [Topic::Behavior, Topic::Action];
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Behavior(BehaviorEvent),
    Action(ActionEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Behavior(_) => Topic::Behavior,
            Event::Action(_) => Topic::Action,
        }
    }

    pub fn entity(&self) -> EntityId {
        match self {
            Event::Behavior(
                BehaviorEvent::ModeChanged { entity, .. }
                | BehaviorEvent::PatternRerolled { entity, .. }
                | BehaviorEvent::Landed { entity, .. },
            ) => *entity,
            Event::Action(event) => event.entity,
        }
    }

    pub fn clock(&self) -> Clock {
        match self {
            Event::Behavior(
                BehaviorEvent::ModeChanged { clock, .. }
                | BehaviorEvent::PatternRerolled { clock, .. }
                | BehaviorEvent::Landed { clock, .. },
            ) => *clock,
            Event::Action(event) => event.clock,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about.
pub struct EventBus {
    channels: Arc<RwLock<HashMap<Topic, broadcast::Sender<Event>>>>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let channels = Topic::ALL
            .into_iter()
            .map(|topic| (topic, broadcast::channel(capacity).0))
            .collect();

        Self {
            channels: Arc::new(RwLock::new(channels)),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();

        // Events are best-effort: skip on lock contention
        match self.channels.try_read() {
            Ok(channels) => {
                if let Some(tx) = channels.get(&topic)
                    && tx.send(event).is_err()
                {
                    // No subscribers for this topic - this is normal, not an error
                    tracing::trace!("No subscribers for topic {:?}", topic);
                }
            }
            Err(_) => {
                tracing::debug!("Failed to acquire event bus lock for topic {:?}", topic);
            }
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic, or
    /// `None` if the bus is being modified concurrently.
    pub fn subscribe(&self, topic: Topic) -> Option<broadcast::Receiver<Event>> {
        let channels = self.channels.try_read().ok()?;
        channels.get(&topic).map(broadcast::Sender::subscribe)
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            channels: Arc::clone(&self.channels),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
