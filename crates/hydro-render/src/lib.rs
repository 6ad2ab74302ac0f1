pub mod app;
pub mod canvas;
pub mod config;
pub mod export;
pub mod plot_view;
pub mod ui;

use app::App;
pub use config::AppConfig;

/// Launch the application with eframe.
pub fn run(config: AppConfig) -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Hydro-Sim — Hydrostatic Force on a Vertical Plate")
            .with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Hydro-Sim",
        native_options,
        Box::new(|cc| Ok(Box::new(App::new(cc, config)))),
    )
}
