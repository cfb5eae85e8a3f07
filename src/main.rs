mod config;
mod icons;
mod platform;
mod yew_app;

fn main() {
    console_error_panic_hook::set_once();
    gloo::console::log!("linkhub boot", env!("CARGO_PKG_VERSION"));
    yew::Renderer::<yew_app::App>::new().render();
}
