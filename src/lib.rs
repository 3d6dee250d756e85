//! Emoji Heist: memorize the targets, then pick them out of the grid
//! before the countdown runs out.

pub mod catalog;
pub mod components;
pub mod config;
pub mod model;
pub mod round;
pub mod storage;
pub mod timer;
pub mod util;

pub use catalog::Emoji;
pub use config::GameConfig;
pub use model::{GameAction, GameState, LossCause, Phase, RunSummary};
pub use round::Round;
pub use storage::{HighScoreStore, LocalStore, MemoryHighScoreStore, StorageError};
