use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use xiezi::gui::{
    LaunchOptions,
    TrainerApp,
};

#[derive(Parser)]
#[command(name = "xiezi", about = "Handwriting flashcard trainer", version)]
struct Cli {
    /// CSV deck with front,pronunciation,meaning columns
    #[arg(long)]
    deck: Option<PathBuf>,

    /// Seed for the card shuffle (repeatable sessions)
    #[arg(long)]
    seed: Option<u64>,

    /// Disable pronunciation audio for this run
    #[arg(long)]
    mute: bool,
}

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let launch = LaunchOptions { deck: cli.deck, seed: cli.seed, mute: cli.mute };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("写字 Xiezi")
            .with_inner_size([1000.0, 640.0])
            .with_min_inner_size([520.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "xiezi",
        options,
        Box::new(|cc| Ok(Box::new(TrainerApp::new(cc, launch)))),
    )
}
