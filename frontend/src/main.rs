use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod entities;
mod query;
mod session;

fn main() {
    yew::Renderer::<App>::new().render();
}
