// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the compass display.
// 2) Rings for the compass dial.
// 3) A blocky (nearest neighbor) blit of the 16x16 sprite.
// 4) A tiny 5x7 bitmap font, scalable, for cardinal letters and the HUD.

use crate::error::Error;
use crate::types::{FrameBuffer, PixelBuffer};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window,     // the on-screen window you see
    left_was_down: bool, // last frame's button state, for click edges
}

impl Drawer {
    /// Create a window of the requested size.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window, left_was_down: false })
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new image.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC or Q is held down (we exit when this is pressed).
    pub fn quit_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape) || self.window.is_key_down(Key::Q)
    }

    // one save per key press, not per frame
    pub fn s_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::S, KeyRepeat::No)
    }

    /// Mouse position in window pixels, or None when the cursor is outside.
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.window.get_mouse_pos(MouseMode::Discard)
    }

    /// Position of a fresh left click (button went down since last call).
    /// Holding the button does not repeat the click.
    pub fn left_click(&mut self) -> Option<(f32, f32)> {
        let down = self.window.get_mouse_down(MouseButton::Left);
        let pressed = down && !self.left_was_down;
        self.left_was_down = down;
        if pressed { self.mouse_pos() } else { None }
    }
}

/* ---------- Software drawing: pixels, rings, sprite blit ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
/// Visual: the exact pixel at (x,y) changes color.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Midpoint circle outline, `thickness` pixels wide, growing inward from `radius`.
/// Visual: the compass dial ring.
pub fn draw_circle(fb: &mut FrameBuffer, cx: i32, cy: i32, radius: i32, thickness: i32, color: u32) {
    for r in (radius - thickness + 1).max(0)..=radius {
        let (mut x, mut y) = (r, 0);
        let mut err = 1 - r;
        while x >= y {
            // 8-way symmetry: one computed point lights eight octants
            for (px, py) in [(x, y), (y, x), (-y, x), (-x, y), (-x, -y), (-y, -x), (y, -x), (x, -y)] {
                put_pixel(fb, cx + px, cy + py, color);
            }
            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }
}

/// Blit an RGBA sprite with every texel blown up to a `scale x scale` block.
/// Alpha is ignored, same as converting RGBA straight to the window's RGB.
/// Visual: the 16x16 needle appears as a crisp 128x128 block image (scale 8).
pub fn blit_scaled(fb: &mut FrameBuffer, sprite: &PixelBuffer, x0: i32, y0: i32, scale: usize) {
    let s = scale as i32;
    for sy in 0..sprite.height() {
        for sx in 0..sprite.width() {
            let Some(c) = sprite.get(sx, sy) else { continue };
            let color = c.to_0rgb();
            let (bx, by) = (x0 + sx as i32 * s, y0 + sy as i32 * s);
            for dy in 0..s {
                for dx in 0..s {
                    put_pixel(fb, bx + dx, by + dy, color);
                }
            }
        }
    }
}

/* ---------- 5x7 bitmap font (digits, A-Z, a little punctuation) ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
/// Lowercase letters are drawn with the uppercase glyph.
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        // Digits 0..9
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Uppercase A..Z
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b10001,0b11001,0b10101,0b10011,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        // Punctuation: space, vertical bar, colon, dot, minus
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),

        _ => None,
    }
}

/// Fill a `scale x scale` block; one font dot at the given scale.
fn put_dot(fb: &mut FrameBuffer, x: i32, y: i32, scale: i32, color: u32) {
    for dy in 0..scale {
        for dx in 0..scale {
            put_pixel(fb, x + dx, y + dy, color);
        }
    }
}

/// Draw a single 5x7 character at (x,y), each dot `scale` pixels wide.
/// Visual: a glyph appears with a 1-dot black shadow for contrast.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32, scale: i32) {
    if let Some(rows) = glyph5x7(ch) {
        // Shadow pass first, foreground second so the glyph stays on top
        for (offset, c) in [(scale, 0x00000000), (0, color)] {
            for (ry, rowbits) in rows.iter().enumerate() {
                for rx in 0..5 {
                    if (rowbits & (1 << (4 - rx))) != 0 {
                        put_dot(fb, x + rx * scale + offset, y + ry as i32 * scale + offset, scale, c);
                    }
                }
            }
        }
    }
}

/// Pixel width of `text` at `scale` (glyph 5 dots + 1 dot spacing).
pub fn text_width_5x7(text: &str, scale: i32) -> i32 {
    text.chars().count() as i32 * 6 * scale
}

/// Draw a text string using 5x7 glyphs, `scale` screen pixels per font dot.
/// Visual: a compact HUD string appears; unknown characters leave a gap.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32, scale: i32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color, scale);
        x += 6 * scale; // 5 dots glyph width + 1 dot spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use test_log::test;

    #[test]
    fn put_pixel_clips() {
        let mut fb = FrameBuffer::new(4, 4);
        put_pixel(&mut fb, -1, 0, 1);
        put_pixel(&mut fb, 0, 4, 1);
        assert!(fb.pixels.iter().all(|p| *p == 0));
        put_pixel(&mut fb, 3, 3, 7);
        assert_eq!(fb.pixels[15], 7);
    }

    #[test]
    fn circle_touches_compass_points() {
        let mut fb = FrameBuffer::new(21, 21);
        draw_circle(&mut fb, 10, 10, 8, 2, 9);
        for (x, y) in [(18, 10), (2, 10), (10, 18), (10, 2), (17, 10)] {
            assert_eq!(fb.pixels[y * 21 + x], 9, "({x},{y})");
        }
        assert_eq!(fb.pixels[10 * 21 + 10], 0);
    }

    #[test]
    fn blit_scales_each_texel_to_a_block() {
        let mut sprite = PixelBuffer::new(2, 2).unwrap();
        sprite.set_pixel(1, 0, Color::rgb(255, 20, 20));
        let mut fb = FrameBuffer::new(8, 8);
        fb.fill(0x00_32_32_32);
        blit_scaled(&mut fb, &sprite, 2, 2, 3);

        // texel (1,0) covers x 5..8, y 2..5
        assert_eq!(fb.pixels[2 * 8 + 5], 0x00_FF_14_14);
        assert_eq!(fb.pixels[4 * 8 + 7], 0x00_FF_14_14);
        // transparent texels come out black, alpha is not blended
        assert_eq!(fb.pixels[2 * 8 + 2], 0);
        // outside the blit is untouched
        assert_eq!(fb.pixels[0], 0x00_32_32_32);
    }

    #[test]
    fn every_letter_has_a_glyph() {
        for ch in ('A'..='Z').chain('a'..='z').chain('0'..='9').chain(" |:.-".chars()) {
            assert!(glyph5x7(ch).is_some(), "{ch:?}");
        }
        assert!(glyph5x7('#').is_none());
    }

    #[test]
    fn scaled_text_is_wider() {
        assert_eq!(text_width_5x7("N", 1), 6);
        assert_eq!(text_width_5x7("HEADING", 2), 84);

        let mut fb = FrameBuffer::new(20, 20);
        draw_text_5x7(&mut fb, 0, 0, "I", 0x00_FF_FF_FF, 2);
        // top bar of 'I' spans dots 1..=3 -> pixels 2..=7 on rows 0..=1
        assert_eq!(fb.pixels[2], 0x00_FF_FF_FF);
        assert_eq!(fb.pixels[20 + 7], 0x00_FF_FF_FF);
        assert_eq!(fb.pixels[0], 0);
    }
}
