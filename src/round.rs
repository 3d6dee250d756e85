//! Round sizing and generation.

use crate::catalog::{self, CATALOG_SIZE, Emoji};
use crate::config::GameConfig;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Targets and grid for one memorize/play cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Emojis the player must find, in reveal order.
    pub targets: Vec<Emoji>,
    /// Targets plus decoys, shuffled. Fixed for the whole play phase.
    pub grid: Vec<Emoji>,
}

/// Number of targets at `level`, capped at the catalog size.
///
/// Level 1 yields `base_targets`; every later level adds one until the
/// whole catalog is in play.
pub fn target_count(config: &GameConfig, level: u32) -> usize {
    let extra = level.saturating_sub(1) as usize;
    config
        .base_targets
        .saturating_add(extra)
        .clamp(1, CATALOG_SIZE)
}

/// Decoys that fit beside `targets` targets.
pub fn decoy_count(config: &GameConfig, targets: usize) -> usize {
    config.max_decoys.min(CATALOG_SIZE.saturating_sub(targets))
}

impl Round {
    pub fn generate<R: Rng + ?Sized>(config: &GameConfig, level: u32, rng: &mut R) -> Self {
        let n_targets = target_count(config, level);
        let mut pool = catalog::all();
        pool.shuffle(rng);
        let mut rest = pool.split_off(n_targets);
        let targets = pool;

        rest.shuffle(rng);
        rest.truncate(decoy_count(config, n_targets));

        let mut grid = targets.clone();
        grid.extend(rest);
        grid.shuffle(rng);
        Self { targets, grid }
    }

    /// Grid entries that are not targets.
    pub fn decoys(&self) -> impl Iterator<Item = Emoji> + '_ {
        self.grid.iter().copied().filter(|e| !self.targets.contains(e))
    }

    pub fn is_target(&self, emoji: Emoji) -> bool {
        self.targets.contains(&emoji)
    }
}
