// Interactive state for the compass window.
// Everything the render loop needs lives in `CompassApp`; main.rs owns
// one and hands it the window events each frame.

use crate::compositor::{accumulate_sweep, compose};
use crate::config::Args;
use crate::draw::{blit_scaled, draw_circle, draw_text_5x7, text_width_5x7};
use crate::error::Error;
use crate::texture::{load_base_texture, save_sprite};
use crate::types::{FrameBuffer, PixelBuffer};
use log::info;
use std::path::PathBuf;

const BACKGROUND: u32 = 0x00_32_32_32; // gray 50
const RING: u32 = 0x00_64_64_64;       // gray 100
const WHITE: u32 = 0x00_FF_FF_FF;
const HINT: u32 = 0x00_C8_C8_C8;
const RING_MARGIN: i32 = 50;           // window edge to dial ring
const RING_THICKNESS: i32 = 2;
const LETTER_SCALE: i32 = 4;
const HUD_SCALE: i32 = 2;

pub struct CompassApp {
    /// Heading in radians, as produced by the last click.
    pub heading: f64,
    pub window_size: usize,
    pub center: (i32, i32),
    pub radius: i32,
    base_texture: PixelBuffer,
    sprite: PixelBuffer, // reused each frame
    scale: u32,
    output: PathBuf,
    large_output: PathBuf,
}

impl CompassApp {
    /// Load the base texture once and set up the dial geometry.
    pub fn new(args: &Args) -> Result<Self, Error> {
        let base_texture = load_base_texture(&args.texture, args.sprite_size)?;
        Ok(Self::with_texture(args, base_texture))
    }

    pub fn with_texture(args: &Args, base_texture: PixelBuffer) -> Self {
        let half = (args.window_size / 2) as i32;
        let sprite = base_texture.clone();
        Self {
            heading: 0.0,
            window_size: args.window_size,
            center: (half, half),
            radius: (half - RING_MARGIN).max(1),
            base_texture,
            sprite,
            scale: args.scale,
            output: args.output.clone(),
            large_output: args.large_output.clone(),
        }
    }

    /// Point the needle from the dial center toward a click.
    /// 0 is straight up, clockwise is positive: atan2(dx, -dy).
    pub fn click(&mut self, x: f32, y: f32) {
        let dx = x as f64 - self.center.0 as f64;
        let dy = y as f64 - self.center.1 as f64;
        self.heading = dx.atan2(-dy);
        info!("compass heading set to {:.1}°", self.heading.to_degrees());
    }

    /// Heading for display, folded into [0, 360).
    pub fn heading_degrees(&self) -> f64 {
        let deg = self.heading.to_degrees();
        if deg < 0.0 { deg + 360.0 } else { deg }
    }

    /// Re-run the compositor for the current heading.
    pub fn current_sprite(&mut self) -> &PixelBuffer {
        compose(&self.base_texture, self.heading, &mut self.sprite);
        &self.sprite
    }

    /// Draw one full frame: dial, letters, needle sprite, HUD.
    pub fn render(&mut self, screen: &mut FrameBuffer) {
        screen.fill(BACKGROUND);
        let (cx, cy) = self.center;
        let r = self.radius;
        draw_circle(screen, cx, cy, r, RING_THICKNESS, RING);

        // Cardinal letters just outside the ring
        let glyph_w = text_width_5x7("N", LETTER_SCALE) - LETTER_SCALE;
        let glyph_h = 7 * LETTER_SCALE;
        let gap = 12;
        for (letter, x, y) in [
            ("N", cx - glyph_w / 2, cy - r - gap - glyph_h),
            ("E", cx + r + gap, cy - glyph_h / 2),
            ("S", cx - glyph_w / 2, cy + r + gap),
            ("W", cx - r - gap - glyph_w, cy - glyph_h / 2),
        ] {
            draw_text_5x7(screen, x, y, letter, WHITE, LETTER_SCALE);
        }

        let scale = self.scale as usize;
        let sprite = self.current_sprite();
        let (w, h) = ((sprite.width() * scale) as i32, (sprite.height() * scale) as i32);
        blit_scaled(screen, sprite, cx - w / 2, cy - h / 2, scale);

        let heading = format!("Heading: {:.1}", self.heading_degrees());
        draw_text_5x7(screen, 20, 20, &heading, WHITE, HUD_SCALE);
        let hint = "Click to set heading | S: save sweep | Q: quit";
        draw_text_5x7(screen, 20, self.window_size as i32 - 30, hint, HINT, HUD_SCALE);
    }

    /// Save action: sweep the needle over a full turn into a fresh sprite
    /// and write both files. The sweep starts from a blank buffer, not the
    /// base texture, and every step layers on the previous ones.
    pub fn save(&self) -> Result<PixelBuffer, Error> {
        let mut swept = PixelBuffer::new(self.base_texture.width(), self.base_texture.height())?;
        accumulate_sweep(&mut swept);
        save_sprite(&swept, &self.output, &self.large_output, self.scale)?;
        let lit = swept.iter().filter(|c| !c.is_transparent()).count();
        info!(
            "saved compass sprite with heading {:.1}° ({lit} of {} pixels lit)",
            self.heading.to_degrees(),
            swept.len()
        );
        Ok(swept)
    }
}
