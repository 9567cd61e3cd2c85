// Core buffers: the RGBA sprite grid and the packed screen buffer.

use crate::color::Color;
use crate::error::Error;
use image::{Rgba, RgbaImage};

/// What the window shows each frame.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    pub fn fill(&mut self, color: u32) {
        self.pixels.fill(color);
    }
}

/// A `width x height` grid of RGBA colors stored row-major.
///
/// `pixels.len() == width * height` always holds; new buffers are
/// fully transparent black.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Fails only when either side is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions(width, height));
        }
        Ok(Self { width, height, pixels: vec![Color::TRANSPARENT; width * height] })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.pixels.iter()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Write by linear index.
    ///
    /// # Panics
    /// If `index >= self.len()`. Callers derive indices from a traversal of
    /// an equally sized buffer.
    #[inline]
    pub fn set_index(&mut self, index: usize, color: Color) {
        self.pixels[index] = color;
    }

    /// Write at (x,y). Anything outside the grid is silently dropped.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = y * self.width + x;
        self.pixels[idx] = color;
    }

    /// Exact channel copy into an `image` buffer (no premultiply, no gamma).
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            Rgba(self.pixels[y as usize * self.width + x as usize].into())
        })
    }

    pub fn from_rgba_image(img: &RgbaImage) -> Result<Self, Error> {
        let (w, h) = img.dimensions();
        let mut buf = Self::new(w as usize, h as usize)?;
        // enumerate_pixels walks rows top to bottom, left to right
        for (i, (_x, _y, px)) in img.enumerate_pixels().enumerate() {
            buf.set_index(i, Color::from(px.0));
        }
        Ok(buf)
    }
}

impl<'a> IntoIterator for &'a PixelBuffer {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels.iter()
    }
}
