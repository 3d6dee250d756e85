//! Core game model for Emoji Heist.
//! `GameState` is driven only through `GameAction`s, either via `apply` or
//! the `yew::Reducible` impl used by the app.

use crate::catalog::Emoji;
use crate::config::GameConfig;
use crate::round::Round;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossCause {
    /// Tapped an emoji that was not one of the round's targets.
    WrongTap,
    /// Countdown hit zero.
    TimeUp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Targets are on screen; the grid is hidden.
    Memorize,
    /// Grid is on screen and the countdown runs.
    Play,
    /// Caught. Only `Reset` leaves this phase.
    Lose(LossCause),
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Memorize => "memorize",
            Phase::Play => "play",
            Phase::Lose(_) => "lose",
        }
    }
}

/// What a finished run looked like; persisted and shown on the next visit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub level: u32,
    pub score: u32,
    pub cause: LossCause,
}

impl RunSummary {
    pub fn headline(&self) -> String {
        let how = match self.cause {
            LossCause::WrongTap => "wrong emoji",
            LossCause::TimeUp => "out of time",
        };
        format!("Last heist: level {}, score {} ({})", self.level, self.score, how)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: Phase,
    /// Starts at 1; decides the round size.
    pub level: u32,
    /// Rounds completed this run.
    pub score: u32,
    pub high_score: u32,
    /// Set when the last completed round beat the high score. Cleared by the
    /// next round generation.
    pub new_high_score: bool,
    /// Seconds left in the play phase.
    pub countdown: u32,
    /// The round as generated: every target and the full grid.
    pub round: Round,
    /// Targets not yet found this round.
    pub remaining: Vec<Emoji>,
    /// Targets found this round, in tap order.
    pub selected: Vec<Emoji>,
    /// Bumped on every phase entry. Timer actions carry the epoch they were
    /// scheduled in and are dropped once it no longer matches.
    pub epoch: u64,
    /// Seed for the next round generation.
    pub seed: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameAction {
    /// Memorize timer fired.
    Reveal { epoch: u64 },
    /// One second of the play countdown elapsed.
    Tick { epoch: u64 },
    Tap(Emoji),
    Reset,
}

impl GameState {
    /// Fresh run at level 1, already in the memorize phase.
    pub fn new(config: GameConfig, seed: u64, high_score: u32) -> Self {
        let countdown = config.play_secs;
        let mut state = Self {
            config,
            phase: Phase::Memorize,
            level: 1,
            score: 0,
            high_score,
            new_high_score: false,
            countdown,
            round: Round::default(),
            remaining: Vec::new(),
            selected: Vec::new(),
            epoch: 0,
            seed,
        };
        state.enter_memorize();
        state
    }

    /// Applies `action`; returns whether anything changed.
    pub fn apply(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Reveal { epoch } => {
                if self.phase != Phase::Memorize || epoch != self.epoch {
                    return false;
                }
                self.enter_play();
                true
            }
            GameAction::Tick { epoch } => {
                if self.phase != Phase::Play || epoch != self.epoch {
                    return false;
                }
                self.countdown = self.countdown.saturating_sub(1);
                if self.countdown == 0 {
                    self.enter_lose(LossCause::TimeUp);
                }
                true
            }
            GameAction::Tap(emoji) => self.tap(emoji),
            GameAction::Reset => {
                if !matches!(self.phase, Phase::Lose(_)) {
                    return false;
                }
                self.level = 1;
                self.score = 0;
                self.enter_memorize();
                true
            }
        }
    }

    /// The wrong-tap check uses all of the round's targets, found or not,
    /// so re-tapping a found target is a no-op rather than a loss.
    fn tap(&mut self, emoji: Emoji) -> bool {
        if self.phase != Phase::Play {
            return false;
        }
        if !self.round.is_target(emoji) {
            self.enter_lose(LossCause::WrongTap);
            return true;
        }
        if self.selected.contains(&emoji) {
            return false;
        }
        self.selected.push(emoji);
        self.remaining.retain(|e| *e != emoji);
        if self.remaining.is_empty() {
            self.complete_round();
        }
        true
    }

    fn complete_round(&mut self) {
        self.score = self.score.saturating_add(1);
        self.level = self.level.saturating_add(1);
        self.enter_memorize();
        if self.score > self.high_score {
            self.high_score = self.score;
            self.new_high_score = true;
        }
    }

    fn enter_memorize(&mut self) {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.round = Round::generate(&self.config, self.level, &mut rng);
        self.seed = rng.next_u64();
        self.remaining = self.round.targets.clone();
        self.selected.clear();
        self.new_high_score = false;
        self.countdown = self.config.play_secs;
        self.phase = Phase::Memorize;
        self.epoch += 1;
    }

    fn enter_play(&mut self) {
        self.countdown = self.config.play_secs;
        self.phase = Phase::Play;
        self.epoch += 1;
        if self.countdown == 0 {
            self.enter_lose(LossCause::TimeUp);
        }
    }

    fn enter_lose(&mut self, cause: LossCause) {
        self.phase = Phase::Lose(cause);
        self.epoch += 1;
    }

    /// Targets to show, only while memorizing.
    pub fn visible_targets(&self) -> &[Emoji] {
        match self.phase {
            Phase::Memorize => &self.round.targets,
            _ => &[],
        }
    }

    /// Grid cells with their selected flag, only while playing.
    pub fn grid_cells(&self) -> Vec<(Emoji, bool)> {
        match self.phase {
            Phase::Play => self
                .round
                .grid
                .iter()
                .map(|e| (*e, self.selected.contains(e)))
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn summary(&self) -> Option<RunSummary> {
        match self.phase {
            Phase::Lose(cause) => Some(RunSummary {
                level: self.level,
                score: self.score,
                cause,
            }),
            _ => None,
        }
    }
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        if !new.apply(action) {
            return self;
        }
        Rc::new(new)
    }
}
