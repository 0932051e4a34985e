//! Storefront single-page web client.

mod actions;
mod api;
mod app;
mod components;
mod config;
mod containers;
mod language;
mod logging;
mod models;
mod pages;
mod routes;
#[cfg(test)]
mod test_support;

use app::Root;
use config::FrontendConfig;
use yew::Renderer;

fn main() {
    std::panic::set_hook(Box::new(|info| {
        let payload = info
            .payload()
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| info.payload().downcast_ref::<&str>().copied())
            .unwrap_or("unknown panic");
        let location = info
            .location()
            .map(|location| format!(" at {}:{}:{}", location.file(), location.line(), location.column()))
            .unwrap_or_default();
        web_sys::console::error_1(&format!("panic: {payload}{location}").into());
    }));

    let config = FrontendConfig::new();
    logging::init(config.log_level);
    log::info!(
        "starting storefront against {} (guard policy {:?})",
        config.api_url,
        config.guard_policy
    );

    Renderer::<Root>::new().render();
}
