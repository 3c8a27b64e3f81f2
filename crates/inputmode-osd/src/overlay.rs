//! Input-mode indicator overlay.
//!
//! The host render loop calls [`InputModeOverlay::init`] once at startup and
//! [`InputModeOverlay::redraw`] once per frame, after the emulated frame has been drawn and
//! before it is presented. A missing or unreadable icon disables the overlay without
//! affecting emulation.

use crate::icon::Icon;
use crate::screen::{Rect, Screen};
use inputmode_layout::specs::resources;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Input device currently driven by the host controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum InputMode {
    Joystick,
    #[default]
    Mouse,
}

impl InputMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            InputMode::Joystick => InputMode::Mouse,
            InputMode::Mouse => InputMode::Joystick,
        }
    }
}

/// Configuration for the overlay
#[derive(Debug, Clone)]
pub struct OverlayConfig {
    /// Directory the emulator was launched from
    pub launch_dir: PathBuf,
    /// Joystick icon, relative to `launch_dir`
    pub joystick_icon: PathBuf,
    /// Mouse icon, relative to `launch_dir`
    pub mouse_icon: PathBuf,
    /// Mode shown right after init
    pub initial_mode: InputMode,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            launch_dir: PathBuf::from("."),
            joystick_icon: Path::new(resources::IMAGES_DIR).join(resources::JOYSTICK_ICON),
            mouse_icon: Path::new(resources::IMAGES_DIR).join(resources::MOUSE_ICON),
            initial_mode: InputMode::default(),
        }
    }
}

impl OverlayConfig {
    /// Default layout with icons looked up under `launch_dir`
    pub fn with_launch_dir(launch_dir: impl Into<PathBuf>) -> Self {
        Self {
            launch_dir: launch_dir.into(),
            ..Default::default()
        }
    }

    pub fn joystick_icon_path(&self) -> PathBuf {
        self.launch_dir.join(&self.joystick_icon)
    }

    pub fn mouse_icon_path(&self) -> PathBuf {
        self.launch_dir.join(&self.mouse_icon)
    }
}

/// Overlay state owned by the render loop. The icon always lands in [`Rect::INPUT_MODE`].
#[derive(Debug)]
pub struct InputModeOverlay {
    joystick: Option<Icon>,
    mouse: Option<Icon>,
    mode: InputMode,
}

impl Default for InputModeOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl InputModeOverlay {
    /// Empty overlay: redraw is a no-op until icons are loaded
    pub fn new() -> Self {
        Self {
            joystick: None,
            mouse: None,
            mode: InputMode::default(),
        }
    }

    /// Build an overlay from icons that are already loaded
    pub fn with_icons(joystick: Option<Icon>, mouse: Option<Icon>) -> Self {
        Self {
            joystick,
            mouse,
            mode: InputMode::default(),
        }
    }

    /// Load both icons. Load failures leave the slot empty and are only logged.
    pub fn init(config: &OverlayConfig) -> Self {
        let joystick = load_slot("joystick", &config.joystick_icon_path());
        let mouse = load_slot("mouse", &config.mouse_icon_path());

        let mut overlay = Self::with_icons(joystick, mouse);
        overlay.mode = config.initial_mode;

        if overlay.is_enabled() {
            info!("Input mode overlay ready at {:?}", Rect::INPUT_MODE);
        } else {
            info!("Input mode overlay disabled (icons missing)");
        }
        overlay
    }

    /// Whether both icons are loaded
    pub fn is_enabled(&self) -> bool {
        self.joystick.is_some() && self.mouse.is_some()
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) -> InputMode {
        self.mode = self.mode.toggled();
        debug!("Input mode switched to {:?}", self.mode);
        self.mode
    }

    pub fn icon(&self, mode: InputMode) -> Option<&Icon> {
        match mode {
            InputMode::Joystick => self.joystick.as_ref(),
            InputMode::Mouse => self.mouse.as_ref(),
        }
    }

    /// Draw the icon for the current mode. Returns the rectangle written, or `None` when the
    /// overlay is disabled.
    pub fn redraw(&self, screen: &mut Screen<'_>) -> Option<Rect> {
        let (Some(joystick), Some(mouse)) = (&self.joystick, &self.mouse) else {
            return None;
        };
        let icon = match self.mode {
            InputMode::Joystick => joystick,
            InputMode::Mouse => mouse,
        };
        screen.blit(icon, Rect::INPUT_MODE)
    }

    /// Free both icons; the overlay stays usable but disabled
    pub fn release(&mut self) {
        let joystick = self.joystick.take();
        let mouse = self.mouse.take();
        if joystick.is_some() || mouse.is_some() {
            debug!("Released input mode icons");
        }
    }
}

fn load_slot(name: &str, path: &Path) -> Option<Icon> {
    match Icon::load(path) {
        Ok(icon) => {
            debug!(
                "Loaded {} icon from {} ({}x{})",
                name,
                path.display(),
                icon.width(),
                icon.height()
            );
            Some(icon)
        }
        Err(e) => {
            warn!("No {} icon: {}", name, e);
            None
        }
    }
}
