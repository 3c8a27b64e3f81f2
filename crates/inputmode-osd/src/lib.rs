pub mod args;
pub mod display;
pub mod frame;
pub mod icon;
pub mod overlay;
pub mod screen;

// Re-export commonly used types
pub use args::Args;
pub use frame::FrameStats;
pub use icon::{Icon, IconError};
pub use overlay::{InputMode, InputModeOverlay, OverlayConfig};
pub use screen::{Framebuffer, Rect, Screen, ScreenError};
