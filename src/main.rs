mod components;
mod error;
mod model;
mod platform;
mod settings;
mod state;
mod util;

fn main() {
    yew::Renderer::<components::app::App>::new().render();
}
