//! Runtime orchestration for frame-driven enemy simulations.
//!
//! This crate wires enemy templates, scenarios and pattern executors into a
//! cohesive runtime API. Consumers build a [`Runtime`] from content, step it
//! frame by frame and subscribe to the events it publishes.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the error types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`host`] implements the enemy body the executors drive
//! - [`oracle`] and [`scenario`] provide the static data a run starts from
pub mod api;
pub mod events;
pub mod host;
pub mod oracle;
pub mod runtime;
pub mod scenario;

pub use api::{Result, RuntimeError};
pub use events::{ActionEvent, BehaviorEvent, Clock, Event, EventBus, Topic};
pub use host::{ActiveAttack, AttackDirection, BodyStats, EnemyBody, Facing};
pub use oracle::TemplateRegistry;
pub use runtime::{Enemy, FrameReport, RunSummary, Runtime, RuntimeBuilder, RuntimeConfig};
pub use scenario::{EnemyPlacement, PlayerWaypoint, Scenario};
