use crate::model::LossCause;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CaughtOverlayProps {
    pub cause: LossCause,
    pub level: u32,
    pub score: u32,
    pub restart: Callback<()>,
}

#[function_component]
pub fn CaughtOverlay(props: &CaughtOverlayProps) -> Html {
    let restart_cb = props.restart.clone();
    let restart_btn = Callback::from(move |_| restart_cb.emit(()));
    let reason = match props.cause {
        LossCause::WrongTap => "Wrong emoji!",
        LossCause::TimeUp => "Time up!",
    };
    html! {
        <div style="background:rgba(0,0,0,0.85); border:2px solid #f85149; padding:24px 32px; border-radius:12px; text-align:center; min-width:320px;">
            <h2 style="margin:0 0 12px 0; color:#f85149;">{ format!("{} You got caught! 🚨", reason) }</h2>
            <p style="margin:4px 0;">{ format!("Reached Level: {}", props.level) }</p>
            <p style="margin:4px 0;">{ format!("Heists Pulled: {}", props.score) }</p>
            <div style="margin-top:16px; display:flex; gap:12px; justify-content:center;">
                <button onclick={restart_btn}>{"Restart"}</button>
            </div>
        </div>
    }
}
