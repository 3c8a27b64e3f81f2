//! Per-frame composition shared by the windowed and headless hosts.
//!
//! Stands in for the emulator's render pipeline: the emulated picture is drawn first, then
//! the OSD is layered on top, then the host presents the frame.

use crate::overlay::InputModeOverlay;
use crate::screen::{Rect, Screen};
use tracing::trace;

/// Background color behind the stripes (dark grey: 0x333333)
const BACKDROP_COLOR: u32 = 0x333333;

/// Stripe color
const STRIPE_COLOR: u32 = 0x5A5A7A;

/// Stripe period in pixels
const STRIPE_PERIOD: u32 = 16;

/// Counters for a render session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    /// Frames composed
    pub frames: u64,
    /// Frames on which the overlay blitted its icon
    pub overlay_blits: u64,
}

/// Draw a scrolling diagonal stripe pattern in place of emulated output
pub fn draw_backdrop(screen: &mut Screen<'_>, frame: u64) {
    screen.fill(BACKDROP_COLOR);
    let shift = (frame % STRIPE_PERIOD as u64) as u32;
    for y in 0..screen.height() {
        for x in 0..screen.width() {
            if (x + y + shift) % STRIPE_PERIOD < STRIPE_PERIOD / 4 {
                screen.put_pixel(x, y, STRIPE_COLOR);
            }
        }
    }
}

/// Compose one frame: backdrop, then the overlay if it is shown
pub fn compose(
    screen: &mut Screen<'_>,
    overlay: &InputModeOverlay,
    show_overlay: bool,
    stats: &mut FrameStats,
) -> Option<Rect> {
    draw_backdrop(screen, stats.frames);
    let drawn = if show_overlay {
        overlay.redraw(screen)
    } else {
        None
    };

    stats.frames += 1;
    if drawn.is_some() {
        stats.overlay_blits += 1;
    }
    trace!(frame = stats.frames, ?drawn, "Composed frame");
    drawn
}
