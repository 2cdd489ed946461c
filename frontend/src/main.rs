use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod notifications;

fn main() {
    yew::Renderer::<App>::new().render();
}
