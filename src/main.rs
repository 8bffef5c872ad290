mod app;
mod config;
mod domain;
mod error;
mod infra;
#[cfg(feature = "desktop")]
mod platform;
mod ui;
mod usecase;


use app::App;

fn main() {
    #[cfg(feature = "desktop")]
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            eprintln!("failed to read .env: {err}");
        }
    }

    if let Err(err) = dioxus::logger::init(config::log_level_from_env()) {
        eprintln!("failed to install logger: {err}");
    }

    #[cfg(feature = "desktop")]
    launch_desktop();

    #[cfg(not(feature = "desktop"))]
    dioxus::launch(App);
}

#[cfg(feature = "desktop")]
fn launch_desktop() {
    let window = dioxus::desktop::WindowBuilder::new().with_title("The Oak");
    let mut cfg = dioxus::desktop::Config::new().with_window(window);
    match platform::desktop::webview::default_webview_data_dir() {
        Ok(dir) => cfg = cfg.with_data_directory(dir),
        Err(err) => tracing::warn!(error = %format!("{err:#}"), "using default webview data dir"),
    }

    dioxus::LaunchBuilder::desktop().with_cfg(cfg).launch(App);
}
