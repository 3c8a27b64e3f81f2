/// Display specifications of the emulated handheld
pub mod display {
    /// Screen width in pixels
    pub const WIDTH: u32 = 320;

    /// Screen height in pixels
    pub const HEIGHT: u32 = 240;

    /// Display refresh rate (60 Hz)
    pub const REFRESH_RATE_HZ: u32 = 60;
}

/// Resource locations, relative to the launch directory
pub mod resources {
    /// Directory holding the OSD bitmaps
    pub const IMAGES_DIR: &str = "images";

    /// Icon shown while the input device is the joystick
    pub const JOYSTICK_ICON: &str = "joystick.bmp";

    /// Icon shown while the input device is the mouse
    pub const MOUSE_ICON: &str = "mouse.bmp";
}
