// Command-line settings. Every flag has a default, so running with no
// arguments reproduces the stock 600x600 window and 16x16 sprite.

use std::path::PathBuf;

/// Largest accepted upscale; 16x16 at 64x is already a 1024x1024 file.
pub const MAX_SCALE: u32 = 64;

fn parse_scale(value: &str) -> Result<u32, String> {
    let scale: u32 = value.parse().map_err(|e| format!("scale {value:?}: {e}"))?;
    if scale == 0 || scale > MAX_SCALE {
        return Err(format!("scale must be between 1 and {MAX_SCALE}, got {scale}"));
    }
    Ok(scale)
}

#[derive(argh::FromArgs, Debug, Clone, PartialEq)]
/// Interactive compass needle sprite generator.
pub struct Args {
    #[argh(option, default = "PathBuf::from(\"compass.png\")")]
    /// base texture drawn under the needle (blank if missing)
    pub texture: PathBuf,

    #[argh(option, default = "PathBuf::from(\"generated_compass.png\")")]
    /// where the save action writes the native-size sprite
    pub output: PathBuf,

    #[argh(option, default = "PathBuf::from(\"generated_compass_large.png\")")]
    /// where the save action writes the upscaled sprite
    pub large_output: PathBuf,

    #[argh(option, default = "600")]
    /// side length of the square window in pixels
    pub window_size: usize,

    #[argh(option, default = "8", from_str_fn(parse_scale))]
    /// integer nearest-neighbor upscale for display and the large file
    pub scale: u32,

    #[argh(option, default = "16")]
    /// side length of the sprite in pixels
    pub sprite_size: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use argh::FromArgs;
    use test_log::test;

    #[test]
    fn defaults_match_the_stock_setup() {
        let args = Args::from_args(&["compass-needle"], &[]).unwrap();
        assert_eq!(args.texture, PathBuf::from("compass.png"));
        assert_eq!(args.output, PathBuf::from("generated_compass.png"));
        assert_eq!(args.large_output, PathBuf::from("generated_compass_large.png"));
        assert_eq!(args.window_size, 600);
        assert_eq!(args.scale, 8);
        assert_eq!(args.sprite_size, 16);
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::from_args(
            &["compass-needle"],
            &["--texture", "dial.png", "--scale", "4", "--window-size", "400"],
        )
        .unwrap();
        assert_eq!(args.texture, PathBuf::from("dial.png"));
        assert_eq!(args.scale, 4);
        assert_eq!(args.window_size, 400);
    }

    #[test]
    fn bad_numbers_are_rejected() {
        assert!(Args::from_args(&["compass-needle"], &["--scale", "big"]).is_err());
    }

    #[test]
    fn scale_must_stay_in_range() {
        for bad in ["0", "65", "300000000", "-1"] {
            assert!(
                Args::from_args(&["compass-needle"], &["--scale", bad]).is_err(),
                "--scale {bad}"
            );
        }
        for good in ["1", "64"] {
            let args = Args::from_args(&["compass-needle"], &["--scale", good]).unwrap();
            assert_eq!(args.scale.to_string(), good);
        }
    }
}
