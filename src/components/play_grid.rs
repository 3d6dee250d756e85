use crate::catalog::Emoji;
use yew::prelude::*;

use super::time_display::TimeDisplay;

#[derive(Properties, PartialEq, Clone)]
pub struct PlayGridProps {
    /// Grid cells in display order with their selected flag.
    pub cells: Vec<(Emoji, bool)>,
    pub seconds_left: u32,
    pub on_tap: Callback<Emoji>,
}

#[function_component(PlayGrid)]
pub fn play_grid(props: &PlayGridProps) -> Html {
    let buttons = props.cells.iter().map(|&(emoji, selected)| {
        let cb = props.on_tap.clone();
        let onclick = Callback::from(move |_| cb.emit(emoji));
        let bg = if selected { "#238636" } else { "#30363d" };
        html! {
            <button key={emoji.index()} {onclick}
                style={format!("padding:14px; font-size:32px; border-radius:8px; border:1px solid #484f58; background:{}; cursor:pointer;", bg)}>
                { emoji.symbol() }
            </button>
        }
    });
    html! {
        <div style="display:flex; flex-direction:column; align-items:center;">
            <p style="margin:0 0 8px 0; font-size:13px; opacity:0.75;">{"Tap the correct emojis!"}</p>
            <TimeDisplay seconds_left={props.seconds_left} />
            <div style="display:grid; grid-template-columns:repeat(4, auto); gap:12px;">
                { for buttons }
            </div>
        </div>
    }
}
