//! Connect Four GUI
//!
//! A graphical interface for two-player hotseat Connect Four.

use connect_four::ui::ConnectFourApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([680.0, 640.0])
            .with_min_inner_size([560.0, 520.0])
            .with_title("Connect Four"),
        ..Default::default()
    };

    eframe::run_native(
        "Connect Four",
        options,
        Box::new(|cc| Ok(Box::new(ConnectFourApp::new(cc)))),
    )
}
