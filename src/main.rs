use emoji_heist::components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
