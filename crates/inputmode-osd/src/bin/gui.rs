use clap::Parser;
use inputmode_osd::{Args, InputModeOverlay, display};
use tracing::info;

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load icons
    let config = args.to_overlay_config();
    info!("=== Loading Overlay ===");
    info!("Launch directory: {:?}", config.launch_dir);
    let overlay = InputModeOverlay::init(&config);

    // Run with display
    info!("=== Starting Viewer ===");
    info!("Mode: {:?}, overlay enabled: {}", overlay.mode(), overlay.is_enabled());

    if let Err(e) = display::run(overlay, !args.hidden, args.frames) {
        eprintln!("Failed to run display: {}", e);
        std::process::exit(2);
    }
}
