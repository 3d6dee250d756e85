use crate::model::RunSummary;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HudProps {
    pub level: u32,
    pub score: u32,
    pub high_score: u32,
    pub new_high_score: bool,
    /// Outcome of the previous run, from storage or from this session.
    pub last_run: Option<RunSummary>,
}

#[function_component]
pub fn Hud(props: &HudProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // icon | label | value
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:48px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:220px; display:flex; flex-direction:column; gap:8px; font-size:14px; margin-bottom:16px;">
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", icon_style)}>{"🗝"}</span>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"Level"}</span>
                <span style={format!("{} color:#58a6ff;", value_style)}>{ props.level }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#2ea043;", icon_style)}>{"💰"}</span>
                <span style={format!("{} color:#2ea043;", label_style)}>{"Score"}</span>
                <span style={format!("{} color:#2ea043;", value_style)}>{ props.score }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#d4af37;", icon_style)}>{"🏆"}</span>
                <span style={format!("{} color:#d4af37;", label_style)}>{"High Score"}</span>
                <span style={format!("{} color:#d4af37;", value_style)}>{ props.high_score }</span>
            </div>
            if props.new_high_score {
                <div style="text-align:center; color:#d4af37; font-weight:700;">{"New High Score!"}</div>
            }
            if let Some(run) = props.last_run {
                <div style="font-size:11px; opacity:0.6; text-align:center;">{ run.headline() }</div>
            }
        </div>
    }
}
