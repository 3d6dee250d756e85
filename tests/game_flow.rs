use emoji_heist::{GameAction, GameConfig, GameState, LossCause, Phase};

fn reveal(state: &mut GameState) {
    let epoch = state.epoch;
    assert!(state.apply(GameAction::Reveal { epoch }));
    assert_eq!(state.phase, Phase::Play);
}

fn clear_round(state: &mut GameState) {
    let mut targets = state.round.targets.clone();
    targets.reverse();
    for t in targets {
        state.apply(GameAction::Tap(t));
    }
}

#[test]
fn clearing_a_round_advances_level_and_score() {
    let mut state = GameState::new(GameConfig::default(), 1, 0);
    reveal(&mut state);
    clear_round(&mut state);

    assert_eq!(state.phase, Phase::Memorize);
    assert_eq!(state.level, 2);
    assert_eq!(state.score, 1);
    assert_eq!(state.round.targets.len(), 4);
    assert!(state.selected.is_empty());
    assert_eq!(state.remaining, state.round.targets);
}

#[test]
fn retapping_a_selected_target_changes_nothing() {
    let mut state = GameState::new(GameConfig::default(), 2, 0);
    reveal(&mut state);
    let first = state.round.targets[0];
    assert!(state.apply(GameAction::Tap(first)));
    let before = state.clone();

    assert!(!state.apply(GameAction::Tap(first)));
    assert_eq!(state, before);
    assert_eq!(state.remaining.len(), 2);
}

#[test]
fn tapping_a_decoy_gets_caught() {
    let mut state = GameState::new(GameConfig::default(), 3, 0);
    reveal(&mut state);
    let decoy = state.round.decoys().next().unwrap();

    state.apply(GameAction::Tap(decoy));

    assert_eq!(state.phase, Phase::Lose(LossCause::WrongTap));
    assert!(state.grid_cells().is_empty());
}

#[test]
fn countdown_expiry_gets_caught() {
    let mut state = GameState::new(GameConfig::default(), 4, 0);
    reveal(&mut state);
    let epoch = state.epoch;
    for _ in 0..9 {
        state.apply(GameAction::Tick { epoch });
    }
    assert_eq!(state.phase, Phase::Play);
    assert_eq!(state.countdown, 1);

    state.apply(GameAction::Tick { epoch });

    assert_eq!(state.phase, Phase::Lose(LossCause::TimeUp));
    assert_eq!(state.countdown, 0);
    // The interval may fire once more before it is cleared.
    assert!(!state.apply(GameAction::Tick { epoch }));
}

#[test]
fn countdown_restarts_every_round() {
    let mut state = GameState::new(GameConfig::default(), 5, 0);
    reveal(&mut state);
    let epoch = state.epoch;
    for _ in 0..6 {
        state.apply(GameAction::Tick { epoch });
    }
    clear_round(&mut state);
    reveal(&mut state);
    assert_eq!(state.countdown, 10);
    // Ticks from the previous round's interval are stale.
    assert!(!state.apply(GameAction::Tick { epoch }));
}

#[test]
fn reset_from_lose_starts_over() {
    let mut state = GameState::new(GameConfig::default(), 6, 0);
    for _ in 0..3 {
        reveal(&mut state);
        clear_round(&mut state);
    }
    assert_eq!(state.level, 4);
    reveal(&mut state);
    let decoy = state.round.decoys().next().unwrap();
    state.apply(GameAction::Tap(decoy));

    assert!(state.apply(GameAction::Reset));

    assert_eq!(state.phase, Phase::Memorize);
    assert_eq!(state.level, 1);
    assert_eq!(state.score, 0);
    assert_eq!(state.high_score, 3);
    assert_eq!(state.round.targets.len(), 3);
}

#[test]
fn levels_past_the_catalog_use_every_emoji_without_decoys() {
    let mut state = GameState::new(GameConfig::default(), 7, 0);
    while state.level < 20 {
        reveal(&mut state);
        clear_round(&mut state);
    }
    assert_eq!(state.score, 19);
    assert_eq!(state.round.targets.len(), 18);
    assert_eq!(state.round.grid.len(), 18);
    assert_eq!(state.round.decoys().count(), 0);
}

#[test]
fn rounds_differ_between_levels() {
    let mut state = GameState::new(GameConfig::default(), 8, 0);
    let seed = state.seed;
    reveal(&mut state);
    clear_round(&mut state);
    assert_ne!(state.seed, seed);
}
