mod brew;
mod components;
mod config;
mod model;
mod naming;
mod state;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
