//! Reference enemy host used by the runtime.
mod body;

pub use body::{ActiveAttack, AttackDirection, BodyStats, EnemyBody, Facing};
