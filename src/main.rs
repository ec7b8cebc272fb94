//! Gomoku GUI
//!
//! A graphical interface for two players sharing one board.

use clap::Parser;
use gomoku::ui::GomokuApp;
use gomoku::{Game, LaunchArgs};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = LaunchArgs::parse();
    let config = args.game_config()?;
    let game = Game::with_config(config)?;
    tracing::info!(
        rows = config.rows,
        columns = config.columns,
        win_length = config.win_length,
        "starting gomoku"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, game)))),
    )?;
    Ok(())
}
