// Raster file I/O around the sprite.
// Load: the base texture the needle is drawn on.
// Save: the generated sprite at native size and upscaled for previews.

use crate::error::Error;
use crate::types::PixelBuffer;
use image::{ImageError, imageops::{self, FilterType}};
use log::{info, warn};
use std::io::ErrorKind;
use std::path::Path;

/// Load `path` as RGBA and squeeze it to `size x size` (nearest neighbor).
/// A missing file is not an error: we fall back to a fully transparent texture.
pub fn load_base_texture(path: &Path, size: u32) -> Result<PixelBuffer, Error> {
    let img = match image::open(path) {
        Ok(img) => img,
        Err(ImageError::IoError(e)) if e.kind() == ErrorKind::NotFound => {
            warn!("{} not found, using a blank {size}x{size} texture", path.display());
            return PixelBuffer::new(size as usize, size as usize);
        }
        Err(e) => return Err(Error::TextureLoad(format!("{}: {e}", path.display()))),
    };

    let rgba = img.to_rgba8();
    let resized = imageops::resize(&rgba, size, size, FilterType::Nearest);
    info!(
        "loaded base texture {} ({}x{} -> {size}x{size})",
        path.display(),
        rgba.width(),
        rgba.height()
    );
    PixelBuffer::from_rgba_image(&resized)
}

/// Write the sprite twice: as-is, and scaled up by an integer `scale`
/// with nearest neighbor so every texel stays a crisp block. Alpha is kept.
pub fn save_sprite(
    sprite: &PixelBuffer,
    native_path: &Path,
    large_path: &Path,
    scale: u32,
) -> Result<(), Error> {
    let img = sprite.to_rgba_image();
    let (w, h) = img.dimensions();
    let (large_w, large_h) = match (w.checked_mul(scale), h.checked_mul(scale)) {
        (Some(lw), Some(lh)) if scale > 0 => (lw, lh),
        _ => {
            return Err(Error::SpriteSave(format!(
                "cannot upscale {w}x{h} by {scale}"
            )));
        }
    };

    img.save(native_path)
        .map_err(|e| Error::SpriteSave(format!("{}: {e}", native_path.display())))?;

    let large = imageops::resize(&img, large_w, large_h, FilterType::Nearest);
    large
        .save(large_path)
        .map_err(|e| Error::SpriteSave(format!("{}: {e}", large_path.display())))?;

    info!(
        "saved {} ({w}x{h}) and {} ({}x{})",
        native_path.display(),
        large_path.display(),
        large_w,
        large_h
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use std::path::PathBuf;
    use test_log::test;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("compass-needle-{}-{name}", std::process::id()))
    }

    #[test]
    fn missing_texture_falls_back_to_blank() {
        let buf = load_base_texture(&scratch("does-not-exist.png"), 16).unwrap();
        assert_eq!((buf.width(), buf.height()), (16, 16));
        assert!(buf.iter().all(|c| *c == Color::TRANSPARENT));
    }

    #[test]
    fn garbage_texture_is_an_error() {
        let path = scratch("garbage.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        let res = load_base_texture(&path, 16);
        std::fs::remove_file(&path).ok();
        assert!(matches!(res, Err(Error::TextureLoad(_))));
    }

    #[test]
    fn bad_upscale_is_an_error_before_writing() {
        let sprite = PixelBuffer::new(16, 16).unwrap();
        let native = scratch("overflow.png");
        let large = scratch("overflow_large.png");
        for scale in [0, 300_000_000, u32::MAX] {
            let res = save_sprite(&sprite, &native, &large, scale);
            assert!(matches!(res, Err(Error::SpriteSave(_))), "scale {scale}");
        }
        assert!(!native.exists());
        assert!(!large.exists());
    }

    #[test]
    fn save_then_load_keeps_pixels() {
        let mut sprite = PixelBuffer::new(16, 16).unwrap();
        sprite.set_pixel(0, 0, Color::rgba(10, 20, 30, 40));
        sprite.set_pixel(15, 15, Color::rgb(255, 20, 20));
        sprite.set_pixel(8, 7, Color::rgb(100, 100, 100));

        let native = scratch("sprite.png");
        let large = scratch("sprite_large.png");
        save_sprite(&sprite, &native, &large, 8).unwrap();

        let reloaded = load_base_texture(&native, 16).unwrap();
        assert_eq!(reloaded, sprite);

        let big = image::open(&large).unwrap().to_rgba8();
        assert_eq!(big.dimensions(), (128, 128));
        assert_eq!(big.get_pixel(0, 0).0, [10, 20, 30, 40]);
        assert_eq!(big.get_pixel(127, 127).0, [255, 20, 20, 255]);

        // loading the large file back at 16x16 recovers the sprite
        let shrunk = load_base_texture(&large, 16).unwrap();
        assert_eq!(shrunk.get(8, 7), Some(Color::rgb(100, 100, 100)));

        std::fs::remove_file(&native).ok();
        std::fs::remove_file(&large).ok();
    }
}
