use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TimeDisplayProps {
    pub seconds_left: u32,
}

#[function_component(TimeDisplay)]
pub fn time_display(props: &TimeDisplayProps) -> Html {
    // Last three seconds go red.
    let color = if props.seconds_left <= 3 { "#f85149" } else { "#e3b341" };
    html! {
        <div style={format!("margin:0 0 8px 0; font-size:16px; font-weight:600; color:{};", color)}>
            { format!("Time Left: {}s", props.seconds_left) }
        </div>
    }
}
