mod app;
mod components;
mod style;
mod widgets;

fn main() {
    leptos::mount_to_body(app::App);
}
