use super::{
    caught_overlay::CaughtOverlay, hud::Hud, intro_overlay::IntroOverlay,
    memorize_panel::MemorizePanel, play_grid::PlayGrid,
};
use crate::catalog::Emoji;
use crate::config::{GameConfig, HIGH_SCORE_KEY, INTRO_SEEN_KEY, LAST_RUN_KEY};
use crate::model::{GameAction, GameState, Phase, RunSummary};
use crate::storage::{HighScoreStore, LocalStore};
use crate::timer::{Interval, Timeout};
use crate::util::clog;
use yew::prelude::*;

fn load_high_score(store: &LocalStore) -> u32 {
    match store.load(HIGH_SCORE_KEY) {
        Ok(v) => v,
        Err(e) => {
            clog(&format!("high score unavailable, starting from 0: {}", e));
            0
        }
    }
}

fn load_last_run(store: &LocalStore) -> Option<RunSummary> {
    let raw = store.get_raw(LAST_RUN_KEY).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

#[function_component(App)]
pub fn app() -> Html {
    let store = LocalStore;
    let game = use_reducer({
        let store = store.clone();
        move || GameState::new(GameConfig::default(), rand::random(), load_high_score(&store))
    });
    let show_intro = use_state({
        let store = store.clone();
        move || store.get_raw(INTRO_SEEN_KEY).ok().flatten().is_none()
    });
    let last_run = use_state({
        let store = store.clone();
        move || load_last_run(&store)
    });
    let persisted_high = use_mut_ref(|| game.high_score);

    // Phase timers; a new epoch drops the previous phase's timer.
    {
        let game_handle = game.clone();
        let memorize_ms = game.config.memorize_ms;
        use_effect_with(
            (game.phase, game.epoch, *show_intro),
            move |&(phase, epoch, holding)| {
                let mut timeout = None;
                let mut interval = None;
                if !holding {
                    match phase {
                        Phase::Memorize => {
                            let g = game_handle.clone();
                            match Timeout::new(memorize_ms, move || {
                                g.dispatch(GameAction::Reveal { epoch })
                            }) {
                                Ok(t) => timeout = Some(t),
                                Err(e) => clog(&format!("memorize timer: {}", e)),
                            }
                        }
                        Phase::Play => {
                            let g = game_handle.clone();
                            match Interval::new(1000, move || {
                                g.dispatch(GameAction::Tick { epoch })
                            }) {
                                Ok(i) => interval = Some(i),
                                Err(e) => clog(&format!("countdown timer: {}", e)),
                            }
                        }
                        Phase::Lose(_) => {}
                    }
                }
                move || {
                    drop(timeout);
                    drop(interval);
                }
            },
        );
    }
    // Log phase transitions
    use_effect_with((game.phase, game.level), move |&(phase, level)| {
        clog(&format!("phase={} level={}", phase.label(), level));
        || ()
    });
    // Persist high score when a round beats it
    {
        let store = store.clone();
        let persisted_high = persisted_high.clone();
        use_effect_with(game.high_score, move |&high| {
            if high > *persisted_high.borrow() {
                match store.record(HIGH_SCORE_KEY, high) {
                    Ok(_) => *persisted_high.borrow_mut() = high,
                    Err(e) => clog(&format!("failed to save high score: {}", e)),
                }
            }
            || ()
        });
    }
    // Persist a summary of each finished run
    {
        let store = store.clone();
        let last_run = last_run.clone();
        use_effect_with(game.summary(), move |summary| {
            if let Some(s) = summary {
                if let Ok(raw) = serde_json::to_string(s) {
                    if let Err(e) = store.set_raw(LAST_RUN_KEY, &raw) {
                        clog(&format!("failed to save last run: {}", e));
                    }
                }
                last_run.set(Some(*s));
            }
            || ()
        });
    }

    let on_tap = {
        let game = game.clone();
        Callback::from(move |emoji: Emoji| game.dispatch(GameAction::Tap(emoji)))
    };
    let restart = {
        let game = game.clone();
        Callback::from(move |_| game.dispatch(GameAction::Reset))
    };
    let hide_intro = {
        let show_intro = show_intro.clone();
        let store = store.clone();
        Callback::from(move |_| {
            show_intro.set(false);
            if let Err(e) = store.set_raw(INTRO_SEEN_KEY, "1") {
                clog(&format!("failed to save intro flag: {}", e));
            }
        })
    };

    // Targets stay hidden while the intro holds the memorize timer.
    let stage = match game.phase {
        _ if *show_intro => html! {},
        Phase::Memorize => html! { <MemorizePanel targets={game.visible_targets().to_vec()} /> },
        Phase::Play => html! {
            <PlayGrid cells={game.grid_cells()} seconds_left={game.countdown} on_tap={on_tap} />
        },
        Phase::Lose(cause) => html! {
            <CaughtOverlay cause={cause} level={game.level} score={game.score} restart={restart} />
        },
    };

    html! {
        <div id="root" style="position:relative; min-height:100vh; display:flex; flex-direction:column; align-items:center; justify-content:center; background:#0e1116; color:#e6edf3; padding:24px; box-sizing:border-box;">
            <h1 style="margin:0 0 16px 0; font-size:40px; color:#e3b341;">{"Emoji Heist"}</h1>
            <Hud
                level={game.level}
                score={game.score}
                high_score={game.high_score}
                new_high_score={game.new_high_score}
                last_run={*last_run}
            />
            { stage }
            <IntroOverlay show={*show_intro} last_run={*last_run} hide_intro={hide_intro} />
        </div>
    }
}
