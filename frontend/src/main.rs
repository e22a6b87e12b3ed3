use crate::app::App;

mod api;
mod app;
mod components;
mod navigation;
mod notify;

fn main() {
    yew::Renderer::<App>::new().render();
}
