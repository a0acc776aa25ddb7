mod app;
mod classify;
mod config;
mod data_url;
mod entry;
mod error;
mod format;
mod io;
mod mime;
mod state;
mod style;
mod theme;
mod view;
mod widget;

use app::PreviewApp;
use config::Config;
use eframe::egui;
use std::env;
use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (config, config_intact) = Config::load();
    let initial_path = env::args_os().nth(1).map(PathBuf::from);
    log::info!("Starting filepeek {}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_drag_and_drop(true)
            .with_title("filepeek"),
        ..Default::default()
    };

    eframe::run_native(
        "filepeek",
        options,
        Box::new(move |cc| Ok(Box::new(PreviewApp::new(cc, config, config_intact, initial_path)))),
    )
}
