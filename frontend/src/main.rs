use crate::app::App;

mod app;
mod components;
mod config;
mod menu_grid;

fn main() {
    yew::Renderer::<App>::new().render();
}
