use crate::action::INSTANT_ACTION_SECONDS;

/// Simulation constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Frames per simulated second; the runtime steps by `1 / frame_rate_hz`.
    pub frame_rate_hz: u32,
    /// Default wait of the follow and auto-jump toggles.
    pub instant_action_seconds: f32,
    /// Base seed for attack-range variant selection.
    pub seed: u64,
}

impl GameConfig {
    pub const DEFAULT_FRAME_RATE_HZ: u32 = 60;
    pub const DEFAULT_SEED: u64 = 0;

    pub fn new() -> Self {
        Self {
            frame_rate_hz: Self::DEFAULT_FRAME_RATE_HZ,
            instant_action_seconds: INSTANT_ACTION_SECONDS,
            seed: Self::DEFAULT_SEED,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_frame_rate(mut self, frame_rate_hz: u32) -> Self {
        self.frame_rate_hz = frame_rate_hz;
        self
    }

    /// Seconds per frame. A zero frame rate is treated as one frame per second.
    pub fn fixed_delta(&self) -> f32 {
        1.0 / self.frame_rate_hz.max(1) as f32
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
