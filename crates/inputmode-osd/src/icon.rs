//! OSD icon loading.
//!
//! Icons are decoded once from bitmap files and converted to the display's native pixel
//! format (`0x00RRGGBB` packed in a `u32`, as consumed by the window surface). Alpha is
//! dropped during conversion; icons are always copied opaquely.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors that can occur while loading an icon
#[derive(Debug, Error)]
pub enum IconError {
    /// The file could not be opened
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file contents are not a decodable image
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// The image decoded to zero width or height
    #[error("{} has no pixels", .path.display())]
    Empty { path: PathBuf },
    /// Width or height is zero
    #[error("icon dimensions {width}x{height} have no pixels")]
    ZeroSize { width: u32, height: u32 },
    /// Pixel buffer length does not match the given dimensions
    #[error("expected {expected} pixels for the given dimensions, got {actual}")]
    PixelCount { expected: usize, actual: usize },
}

/// An image in native display format, ready to be blitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Icon {
    /// Decode an image file and convert it to native display format
    #[instrument(level = "debug", skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, IconError> {
        let reader = image::ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|source| IconError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        let decoded = reader.decode().map_err(|source| IconError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let rgb = decoded.to_rgb8();
        if rgb.width() == 0 || rgb.height() == 0 {
            return Err(IconError::Empty {
                path: path.to_path_buf(),
            });
        }

        let pixels = rgb
            .pixels()
            .map(|image::Rgb([r, g, b])| pack_rgb(*r, *g, *b))
            .collect();

        debug!("Decoded {}x{} icon", rgb.width(), rgb.height());
        Ok(Self {
            width: rgb.width(),
            height: rgb.height(),
            pixels,
        })
    }

    /// Build an icon from pixels that are already in native format, row-major
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self, IconError> {
        if width == 0 || height == 0 {
            return Err(IconError::ZeroSize { width, height });
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(IconError::PixelCount {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// One row of pixels
    pub fn row(&self, y: u32) -> &[u32] {
        let start = (y * self.width) as usize;
        &self.pixels[start..start + self.width as usize]
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }
}

/// Pack 8-bit RGB components into the native `0x00RRGGBB` format
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn packs_components_in_native_order() {
        assert_eq!(pack_rgb(0x12, 0x34, 0x56), 0x0012_3456);
        assert_eq!(pack_rgb(0xFF, 0, 0), 0x00FF_0000);
    }

    #[test]
    fn loads_bmp_into_native_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.bmp");
        let mut img = RgbImage::from_pixel(3, 2, Rgb([0x10, 0x20, 0x30]));
        img.put_pixel(2, 1, Rgb([0xFF, 0x00, 0x80]));
        img.save(&path).unwrap();

        let icon = Icon::load(&path).unwrap();
        assert_eq!((icon.width(), icon.height()), (3, 2));
        assert_eq!(icon.row(0), &[0x0010_2030; 3]);
        assert_eq!(icon.row(1)[2], 0x00FF_0080);
    }

    #[test]
    fn alpha_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alpha.bmp");
        RgbaImage::from_pixel(1, 1, Rgba([0xAA, 0xBB, 0xCC, 0x00]))
            .save(&path)
            .unwrap();

        let icon = Icon::load(&path).unwrap();
        assert_eq!(icon.pixels(), &[0x00AA_BBCC]);
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Icon::load(&dir.path().join("nope.bmp")).unwrap_err();
        assert!(matches!(err, IconError::Open { .. }), "{err}");
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.bmp");
        std::fs::write(&path, b"BM this is not really a bitmap").unwrap();

        let err = Icon::load(&path).unwrap_err();
        assert!(matches!(err, IconError::Decode { .. }), "{err}");
    }

    #[test]
    fn from_pixels_checks_length() {
        assert!(Icon::from_pixels(2, 2, vec![0; 4]).is_ok());
        let err = Icon::from_pixels(2, 2, vec![0; 3]).unwrap_err();
        assert!(matches!(
            err,
            IconError::PixelCount {
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn from_pixels_rejects_zero_size() {
        for (width, height) in [(0, 7), (7, 0), (0, 0)] {
            match Icon::from_pixels(width, height, vec![]) {
                Err(IconError::ZeroSize { width: w, height: h }) => {
                    assert_eq!((w, h), (width, height));
                }
                other => panic!("expected ZeroSize for {width}x{height}, got {other:?}"),
            }
        }
    }
}
