mod avatar;
mod components;
mod config;
mod logging;
mod model;
mod util;

use components::App;

fn main() {
    logging::init(log::LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
