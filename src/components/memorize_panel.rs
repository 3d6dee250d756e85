use crate::catalog::Emoji;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MemorizePanelProps {
    pub targets: Vec<Emoji>,
}

#[function_component(MemorizePanel)]
pub fn memorize_panel(props: &MemorizePanelProps) -> Html {
    html! {
        <div style="display:flex; flex-direction:column; align-items:center;">
            <p style="margin:0 0 8px 0; font-size:13px; opacity:0.75;">{"Memorize these emojis!"}</p>
            <div style="display:flex; flex-wrap:wrap; justify-content:center; gap:16px; font-size:36px; max-width:480px;">
                { for props.targets.iter().map(|e| html! { <span key={e.index()}>{ e.symbol() }</span> }) }
            </div>
        </div>
    }
}
