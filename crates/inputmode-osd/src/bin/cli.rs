use clap::Parser;
use inputmode_osd::{Args, Framebuffer, FrameStats, InputModeOverlay, frame};
use inputmode_layout::specs::display;
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
    let overlay = InputModeOverlay::init(&config);

    // Render frames
    let frames = args.frames.unwrap_or(1);
    info!("=== Rendering {} Frame(s) (Headless) ===", frames);
    let mut framebuffer = Framebuffer::new(display::WIDTH, display::HEIGHT);
    let mut stats = FrameStats::default();
    for _ in 0..frames {
        frame::compose(&mut framebuffer.as_screen(), &overlay, !args.hidden, &mut stats);
    }

    info!("=== Rendering Complete ===");
    info!("Mode: {:?}", overlay.mode());
    info!("Overlay enabled: {}", overlay.is_enabled());
    info!(
        "Frames: {}, overlay blits: {}",
        stats.frames, stats.overlay_blits
    );

    if let Some(path) = &args.snapshot {
        if let Err(e) = framebuffer.to_rgb_image().save(path) {
            eprintln!("Failed to write snapshot {:?}: {}", path, e);
            std::process::exit(2);
        }
        info!(
            "Snapshot ({}x{}) written to {:?}",
            framebuffer.width(),
            framebuffer.height(),
            path
        );
    }

    // Hidden runs only check that loading worked
    let expected_blits = if args.hidden { 0 } else { stats.frames };
    let exit_code = if !overlay.is_enabled() {
        eprintln!(
            "Overlay disabled: could not load {:?} or {:?}",
            config.joystick_icon_path(),
            config.mouse_icon_path()
        );
        1
    } else if stats.overlay_blits != expected_blits {
        eprintln!(
            "Overlay drew {} of {} frames",
            stats.overlay_blits, expected_blits
        );
        1
    } else {
        info!("PASS: overlay drawn on every frame");
        0
    };

    std::process::exit(exit_code);
}
