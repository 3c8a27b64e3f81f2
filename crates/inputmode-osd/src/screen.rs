//! Drawing surfaces for the OSD.
//!
//! The host render loop owns the pixel memory; [`Screen`] borrows it for the duration of a
//! blit. [`Framebuffer`] is an owned surface for headless rendering.

use crate::icon::Icon;
use inputmode_layout::screen_map;
use thiserror::Error;

/// Errors that can occur when wrapping host pixel memory
#[derive(Debug, Error)]
pub enum ScreenError {
    /// The pixel slice is too short for the given dimensions
    #[error("screen of {width}x{height} needs {needed} pixels, buffer has {actual}")]
    BufferTooSmall {
        width: u32,
        height: u32,
        needed: usize,
        actual: usize,
    },
}

/// Axis-aligned rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The fixed input-mode indicator box
    pub const INPUT_MODE: Rect = Rect::new(
        screen_map::input_mode::X,
        screen_map::input_mode::Y,
        screen_map::input_mode::WIDTH,
        screen_map::input_mode::HEIGHT,
    );

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x
            && y >= self.y
            && (x - self.x) < self.width
            && (y - self.y) < self.height
    }

    /// Overlap of two rectangles, `None` if they don't overlap
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self
            .x
            .saturating_add(self.width)
            .min(other.x.saturating_add(other.width));
        let y1 = self
            .y
            .saturating_add(self.height)
            .min(other.y.saturating_add(other.height));

        if x1 > x0 && y1 > y0 {
            Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
        } else {
            None
        }
    }
}

/// Mutable view over host-owned pixels in native `0x00RRGGBB` format
#[derive(Debug)]
pub struct Screen<'a> {
    pixels: &'a mut [u32],
    width: u32,
    height: u32,
}

impl<'a> Screen<'a> {
    pub fn new(pixels: &'a mut [u32], width: u32, height: u32) -> Result<Self, ScreenError> {
        let needed = width as usize * height as usize;
        if pixels.len() < needed {
            return Err(ScreenError::BufferTooSmall {
                width,
                height,
                needed,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn fill(&mut self, color: u32) {
        let len = self.width as usize * self.height as usize;
        self.pixels[..len].fill(color);
    }

    pub fn put_pixel(&mut self, x: u32, y: u32, color: u32) {
        if self.bounds().contains(x, y) {
            self.pixels[(y * self.width + x) as usize] = color;
        }
    }

    /// Copy `icon` unscaled into `dest`, starting from the icon's top-left corner.
    ///
    /// The copy is clipped to `dest`, to the icon's own extent and to the screen. Returns the
    /// rectangle that was written, or `None` if nothing was.
    pub fn blit(&mut self, icon: &Icon, dest: Rect) -> Option<Rect> {
        let icon_area = Rect::new(dest.x, dest.y, icon.width(), icon.height());
        // Both inputs share dest's origin, so the clipped area does too.
        let area = dest.intersect(&icon_area)?.intersect(&self.bounds())?;

        for row in 0..area.height {
            let src = &icon.row(row)[..area.width as usize];
            let start = ((area.y + row) * self.width + area.x) as usize;
            self.pixels[start..start + area.width as usize].copy_from_slice(src);
        }

        Some(area)
    }
}

/// Owned screen surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if Rect::new(0, 0, self.width, self.height).contains(x, y) {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    pub fn fill(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    pub fn as_screen(&mut self) -> Screen<'_> {
        Screen {
            pixels: &mut self.pixels,
            width: self.width,
            height: self.height,
        }
    }

    /// Convert to an RGB image, e.g. for writing snapshots
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            let p = self.pixels[(y * self.width + x) as usize];
            image::Rgb([(p >> 16) as u8, (p >> 8) as u8, p as u8])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_icon(width: u32, height: u32, color: u32) -> Icon {
        Icon::from_pixels(width, height, vec![color; (width * height) as usize]).unwrap()
    }

    #[test]
    fn input_mode_rect_is_centered() {
        assert_eq!(Rect::INPUT_MODE, Rect::new(80, 60, 160, 120));
    }

    #[test]
    fn contains_excludes_far_edges() {
        let r = Rect::new(2, 3, 4, 5);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 7));
        assert!(!r.contains(6, 7));
        assert!(!r.contains(5, 8));
        assert!(!r.contains(1, 3));
    }

    #[test]
    fn put_pixel_ignores_out_of_bounds() {
        let mut fb = Framebuffer::new(4, 4);
        let mut screen = fb.as_screen();
        screen.put_pixel(4, 0, 0xFFFFFF);
        screen.put_pixel(0, 4, 0xFFFFFF);
        screen.put_pixel(3, 3, 0x00FF00);
        assert_eq!(fb.pixel(3, 3), Some(0x00FF00));
        assert_eq!(fb.pixel(4, 0), None);
        assert_eq!(fb.pixels().iter().filter(|&&p| p != 0).count(), 1);
    }

    #[test]
    fn intersect_clips_and_rejects_disjoint() {
        let a = Rect::new(0, 0, 10, 10);
        assert_eq!(
            a.intersect(&Rect::new(5, 5, 10, 10)),
            Some(Rect::new(5, 5, 5, 5))
        );
        assert_eq!(a.intersect(&Rect::new(10, 0, 5, 5)), None);
        assert_eq!(a.intersect(&Rect::new(2, 2, 0, 4)), None);
    }

    #[test]
    fn screen_rejects_short_buffer() {
        let mut pixels = vec![0u32; 10];
        let err = Screen::new(&mut pixels, 4, 4).unwrap_err();
        assert!(matches!(
            err,
            ScreenError::BufferTooSmall {
                needed: 16,
                actual: 10,
                ..
            }
        ));
    }

    #[test]
    fn oversized_icon_is_cropped_to_dest() {
        let mut fb = Framebuffer::new(320, 240);
        let icon = solid_icon(200, 200, 0xABCDEF);

        let written = fb.as_screen().blit(&icon, Rect::INPUT_MODE);

        assert_eq!(written, Some(Rect::INPUT_MODE));
        for y in 0..240 {
            for x in 0..320 {
                let expected = if Rect::INPUT_MODE.contains(x, y) {
                    0xABCDEF
                } else {
                    0
                };
                assert_eq!(fb.pixel(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn small_icon_covers_only_its_extent() {
        let mut fb = Framebuffer::new(320, 240);
        fb.fill(0x111111);
        let icon = solid_icon(16, 8, 0x00FF00);

        let written = fb.as_screen().blit(&icon, Rect::INPUT_MODE);

        assert_eq!(written, Some(Rect::new(80, 60, 16, 8)));
        assert_eq!(fb.pixel(80, 60), Some(0x00FF00));
        assert_eq!(fb.pixel(95, 67), Some(0x00FF00));
        assert_eq!(fb.pixel(96, 60), Some(0x111111));
        assert_eq!(fb.pixel(80, 68), Some(0x111111));
    }

    #[test]
    fn blit_is_clipped_to_screen() {
        let mut fb = Framebuffer::new(100, 80);
        let icon = solid_icon(160, 120, 0xFFFFFF);

        let written = fb.as_screen().blit(&icon, Rect::INPUT_MODE);

        assert_eq!(written, Some(Rect::new(80, 60, 20, 20)));
        assert_eq!(fb.pixel(99, 79), Some(0xFFFFFF));
        assert_eq!(fb.pixel(79, 79), Some(0));
    }

    #[test]
    fn blit_preserves_icon_layout() {
        let mut fb = Framebuffer::new(8, 8);
        let icon = Icon::from_pixels(2, 2, vec![1, 2, 3, 4]).unwrap();

        fb.as_screen().blit(&icon, Rect::new(3, 5, 2, 2));

        assert_eq!(fb.pixel(3, 5), Some(1));
        assert_eq!(fb.pixel(4, 5), Some(2));
        assert_eq!(fb.pixel(3, 6), Some(3));
        assert_eq!(fb.pixel(4, 6), Some(4));
    }

    #[test]
    fn blit_outside_screen_writes_nothing() {
        let mut fb = Framebuffer::new(50, 50);
        let icon = solid_icon(4, 4, 0xFFFFFF);

        assert_eq!(fb.as_screen().blit(&icon, Rect::INPUT_MODE), None);
        assert!(fb.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn snapshot_conversion_unpacks_rgb() {
        let mut fb = Framebuffer::new(1, 1);
        fb.fill(0x00123456);
        let img = fb.to_rgb_image();
        assert_eq!(img.get_pixel(0, 0), &image::Rgb([0x12, 0x34, 0x56]));
    }
}
