//! Capability interface implemented by enemy hosts.

use crate::action::ActionId;

/// Sensors, animation lengths and actions an enemy exposes to its pattern executor.
///
/// Implementers are concrete creature types; the executor never sees them
/// as anything but this trait. Sensor queries are called once per frame and
/// must not have gameplay side effects. Duration queries are read once, when
/// the patterns are compiled.
pub trait EnemyActions {
    /// True when the player is close enough to attack.
    fn is_player_in_attack_range(&self) -> bool;

    /// True when the player is visible.
    fn is_player_in_sight_range(&self) -> bool;

    /// True when the enemy stands on the ground.
    fn is_grounded(&self) -> bool;

    /// Length of the upward attack animation, in seconds.
    fn attack_up_duration(&self) -> f32;

    /// Length of the middle attack animation, in seconds.
    fn attack_middle_duration(&self) -> f32;

    /// Length of the downward attack animation, in seconds.
    fn attack_down_duration(&self) -> f32;

    fn attack_up(&mut self);

    fn attack_middle(&mut self);

    fn attack_down(&mut self);

    fn jump(&mut self);

    fn start_follow_player(&mut self);

    fn stop_follow_player(&mut self);

    fn start_auto_jumping(&mut self);

    fn stop_auto_jumping(&mut self);

    /// Invokes the callback bound to `action`.
    fn perform(&mut self, action: ActionId) {
        match action {
            ActionId::AttackUp => self.attack_up(),
            ActionId::AttackMiddle => self.attack_middle(),
            ActionId::AttackDown => self.attack_down(),
            ActionId::Jump => self.jump(),
            ActionId::StartFollow => self.start_follow_player(),
            ActionId::StopFollow => self.stop_follow_player(),
            ActionId::StartAutoJump => self.start_auto_jumping(),
            ActionId::StopAutoJump => self.stop_auto_jumping(),
        }
    }
}
