//! Fixed screen regions used by the on-screen display.
//!
//! Coordinates are in pixels with the origin at the top-left of the screen.

/// Whole visible screen
pub mod screen {
    use crate::specs::display;

    /// Left edge
    pub const X: u32 = 0;
    /// Top edge
    pub const Y: u32 = 0;
    /// Width in pixels
    pub const WIDTH: u32 = display::WIDTH;
    /// Height in pixels
    pub const HEIGHT: u32 = display::HEIGHT;
}

/// Input-mode indicator box, centered on the screen
pub mod input_mode {
    /// Left edge of the indicator
    pub const X: u32 = 80;
    /// Top edge of the indicator
    pub const Y: u32 = 60;
    /// Indicator width (half the screen width)
    pub const WIDTH: u32 = 160;
    /// Indicator height (half the screen height)
    pub const HEIGHT: u32 = 120;
    /// Right edge (exclusive)
    pub const END_X: u32 = X + WIDTH;
    /// Bottom edge (exclusive)
    pub const END_Y: u32 = Y + HEIGHT;

    const _: () = assert!(END_X <= super::screen::WIDTH && END_Y <= super::screen::HEIGHT);
}
