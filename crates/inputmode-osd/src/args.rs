use crate::overlay::{InputMode, OverlayConfig};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
pub struct Args {
    /// Directory the emulator was launched from. Icons are read from its `images/`
    /// subdirectory.
    #[arg(long, default_value = ".")]
    pub launch_dir: PathBuf,

    /// Input mode indicated when the overlay first appears
    #[arg(long, value_enum, default_value_t = InputMode::Mouse)]
    pub mode: InputMode,

    /// Number of frames to render. The windowed viewer runs until closed when unset;
    /// the headless renderer defaults to a single frame.
    #[arg(long, short = 'n')]
    pub frames: Option<u64>,

    /// Write the last rendered frame to this PNG file (headless renderer only)
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Start with the overlay hidden
    #[arg(long)]
    pub hidden: bool,
}

impl Args {
    /// Validate that the arguments are consistent
    pub fn validate(&self) -> Result<(), String> {
        if self.frames == Some(0) {
            return Err("--frames must be at least 1".to_string());
        }
        if let Some(snapshot) = &self.snapshot {
            let is_png = snapshot
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
            if !is_png {
                return Err(format!(
                    "--snapshot must name a .png file, got {:?}",
                    snapshot
                ));
            }
        }
        Ok(())
    }

    /// Convert Args to OverlayConfig
    pub fn to_overlay_config(&self) -> OverlayConfig {
        OverlayConfig {
            launch_dir: self.launch_dir.clone(),
            initial_mode: self.mode,
            ..Default::default()
        }
    }
}
