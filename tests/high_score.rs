use emoji_heist::config::HIGH_SCORE_KEY;
use emoji_heist::{GameAction, GameConfig, GameState, HighScoreStore, MemoryHighScoreStore};

fn play_round(state: &mut GameState) {
    let epoch = state.epoch;
    state.apply(GameAction::Reveal { epoch });
    for t in state.round.targets.clone() {
        state.apply(GameAction::Tap(t));
    }
}

/// What the app does after every state change.
fn persist(store: &MemoryHighScoreStore, state: &GameState) {
    store.record(HIGH_SCORE_KEY, state.high_score).unwrap();
}

#[test]
fn first_session_starts_from_zero() {
    let store = MemoryHighScoreStore::new();
    let state = GameState::new(GameConfig::default(), 1, store.load(HIGH_SCORE_KEY).unwrap());
    assert_eq!(state.high_score, 0);
}

#[test]
fn record_rounds_are_written_once_each() {
    let store = MemoryHighScoreStore::new();
    store.set(HIGH_SCORE_KEY, 2).unwrap();
    let mut state = GameState::new(GameConfig::default(), 2, store.load(HIGH_SCORE_KEY).unwrap());

    for expected_writes in [1, 1, 2, 3] {
        play_round(&mut state);
        persist(&store, &state);
        persist(&store, &state);
        assert_eq!(store.writes(), expected_writes);
    }
    assert_eq!(store.load(HIGH_SCORE_KEY).unwrap(), 4);
}

#[test]
fn new_high_score_flag_follows_record_rounds() {
    let mut state = GameState::new(GameConfig::default(), 3, 1);

    play_round(&mut state);
    assert_eq!(state.score, 1);
    assert!(!state.new_high_score);

    play_round(&mut state);
    assert_eq!(state.high_score, 2);
    assert!(state.new_high_score);

    // Still set while that round is played.
    let epoch = state.epoch;
    state.apply(GameAction::Reveal { epoch });
    assert!(state.new_high_score);

    for t in state.round.targets.clone() {
        state.apply(GameAction::Tap(t));
    }
    // Beat it again, so it is set again.
    assert!(state.new_high_score);
    assert_eq!(state.high_score, 3);
}

#[test]
fn reset_keeps_high_score_and_clears_flag() {
    let store = MemoryHighScoreStore::new();
    let mut state = GameState::new(GameConfig::default(), 4, 0);
    play_round(&mut state);
    play_round(&mut state);
    persist(&store, &state);

    let epoch = state.epoch;
    state.apply(GameAction::Reveal { epoch });
    let decoy = state.round.decoys().next().unwrap();
    state.apply(GameAction::Tap(decoy));
    state.apply(GameAction::Reset);
    persist(&store, &state);

    assert_eq!(state.high_score, 2);
    assert!(!state.new_high_score);
    assert_eq!(store.load(HIGH_SCORE_KEY).unwrap(), 2);
    assert_eq!(store.writes(), 1);
}
