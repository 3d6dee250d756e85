use serde::{Deserialize, Serialize};

pub const HIGH_SCORE_KEY: &str = "emoji_heist_high_score";
pub const LAST_RUN_KEY: &str = "emoji_heist_last_run";
pub const INTRO_SEEN_KEY: &str = "emoji_heist_intro_seen";

/// Tunables for a game session. `Default` is the standard game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// How long the targets are shown before the grid appears.
    pub memorize_ms: u32,
    /// Countdown start for the play phase, in whole seconds.
    pub play_secs: u32,
    /// Upper bound on decoys mixed into the grid.
    pub max_decoys: usize,
    /// Targets in the first round; each level adds one.
    pub base_targets: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            memorize_ms: 3000,
            play_secs: 10,
            max_decoys: 6,
            base_targets: 3,
        }
    }
}
