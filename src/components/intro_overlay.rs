use crate::model::RunSummary;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct IntroOverlayProps {
    pub show: bool,
    pub last_run: Option<RunSummary>,
    pub hide_intro: Callback<()>,
}

#[function_component(IntroOverlay)]
pub fn intro_overlay(props: &IntroOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let hide_cb = props.hide_intro.clone();
    let start_btn = Callback::from(move |_| hide_cb.emit(()));
    let last = props.last_run.map(|r| {
        html! {
            <div style="margin-top:12px; font-size:11px; opacity:0.6; text-align:center;">
                { r.headline() }
            </div>
        }
    });
    html! {
        <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
            <div style="background:rgba(0,0,0,0.87); border:2px solid #30363d; padding:28px 36px; border-radius:14px; max-width:520px; width:90%; box-shadow:0 0 0 1px #1a1f24, 0 6px 18px rgba(0,0,0,0.6); font-size:14px; line-height:1.4;">
                <h2 style="margin:0 0 12px 0; font-size:22px; color:#e3b341; text-align:center;">{"Emoji Heist"}</h2>
                <p style="margin:4px 0 10px 0; text-align:center; opacity:0.85;">{"Case the vault, then grab the loot before the guards notice."}</p>
                <ul style="margin:0 0 12px 18px; padding:0; list-style:disc; display:flex; flex-direction:column; gap:4px;">
                    <li>{"You get 3 seconds to memorize the target emojis."}</li>
                    <li>{"Then tap every target in the grid within 10 seconds, in any order."}</li>
                    <li>{"Tapping a decoy gets you caught."}</li>
                    <li>{"Each clean heist scores a point and adds one more target."}</li>
                </ul>
                <div style="display:flex; gap:12px; justify-content:center; margin-top:8px;">
                    <button onclick={start_btn}>{"Start"}</button>
                </div>
                { for last }
            </div>
        </div>
    }
}
