#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // Windows release: hide console window
use {
    clap::Parser,
    coin_scope::{Cli, run_app},
    eframe::NativeOptions,
    std::panic,
    tokio::runtime::Runtime,
};

fn main() -> eframe::Result {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("coin_scope"), my_code_level)
        .init();

    let args = Cli::parse();

    // Network I/O runs here. Entering it on the UI thread lets the app spawn tasks directly.
    let rt = Runtime::new().expect("Failed to create runtime");
    let _guard = rt.enter();

    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("Coin Scope - Crypto Market Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Coin Scope",
        options,
        Box::new(move |cc| Ok(Box::new(run_app(cc, args)?))),
    )
}
