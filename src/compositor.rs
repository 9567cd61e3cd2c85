// Needle compositor: base texture + two parametric strokes.
//
// Draw order is fixed: base copy, then the cross tick, then the pointer.
// Later paints win, so the pointer always covers the tick where they meet.
use crate::color::{Color, NEEDLE_GRAY, NEEDLE_RED};
use crate::types::PixelBuffer;

/// Needle pivot inside the 16x16 sprite (pixel units).
const NX: f64 = 8.5;
const NY: f64 = 7.5;
/// Step length per offset along x; y is squashed to half for the flat look.
const SCALE_X: f64 = 0.3;
const SCALE_Y: f64 = SCALE_X * 0.5;
/// Phase offset fed straight into sin/cos. It is radians, not degrees.
const PHASE: f64 = 135.0;

const TICK_OFFSETS: std::ops::RangeInclusive<i32> = -4..=4;
const POINTER_OFFSETS: std::ops::RangeInclusive<i32> = -8..=16;

/// One paint of a stroke, already truncated to pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrokePoint {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

/// Unit direction of the needle for `angle` (radians, any magnitude).
pub fn direction(angle: f64) -> (f64, f64) {
    let phase = -angle - PHASE;
    (phase.sin(), phase.cos())
}

// `as i32` truncates toward zero, which is what decides the lit pixels
// on the negative side of the pivot.
#[inline]
fn truncate(v: f64) -> i32 {
    v as i32
}

/// The short gray cross piece, perpendicular to the pointer.
pub fn tick_stroke(angle: f64) -> impl Iterator<Item = StrokePoint> {
    let (rx, ry) = direction(angle);
    TICK_OFFSETS.map(move |i| {
        let i = i as f64;
        StrokePoint {
            x: truncate(NX + ry * i * SCALE_X),
            y: truncate(NY - rx * i * SCALE_Y),
            color: NEEDLE_GRAY,
        }
    })
}

/// The pointer: red ahead of the pivot (offset >= 0), gray behind it.
pub fn pointer_stroke(angle: f64) -> impl Iterator<Item = StrokePoint> {
    let (rx, ry) = direction(angle);
    POINTER_OFFSETS.map(move |i| {
        let color = if i >= 0 { NEEDLE_RED } else { NEEDLE_GRAY };
        let i = i as f64;
        StrokePoint {
            x: truncate(NX + rx * i * SCALE_X),
            y: truncate(NY + ry * i * SCALE_Y),
            color,
        }
    })
}

fn draw_needle(output: &mut PixelBuffer, angle: f64) {
    for p in tick_stroke(angle).chain(pointer_stroke(angle)) {
        output.set_pixel(p.x, p.y, p.color);
    }
}

/// Copy `source` into `output`, then draw the needle for `angle` on top.
///
/// Both buffers must have the same dimensions. Stroke points that land
/// outside the sprite are dropped.
pub fn compose(source: &PixelBuffer, angle: f64, output: &mut PixelBuffer) {
    debug_assert_eq!(
        (source.width(), source.height()),
        (output.width(), output.height()),
        "source and output must be the same size"
    );
    for (i, pix) in source.iter().enumerate() {
        output.set_index(i, *pix);
    }
    draw_needle(output, angle);
}

/// Accumulation mode: `buffer` is both the base texture and the output.
///
/// The base copy is the identity here, so nothing is cleared and the
/// needle is layered over whatever earlier calls left behind. Calling this
/// repeatedly builds up the union of all the needles drawn.
pub fn compose_in_place(buffer: &mut PixelBuffer, angle: f64) {
    draw_needle(buffer, angle);
}

/// Angles used by the save action: -3.14 to 3.14 in steps of 0.01.
pub fn sweep_angles() -> impl Iterator<Item = f64> {
    (-314..=314).map(|k| k as f64 / 100.0)
}

/// Layer a needle for every sweep angle onto `buffer`.
pub fn accumulate_sweep(buffer: &mut PixelBuffer) {
    for angle in sweep_angles() {
        compose_in_place(buffer, angle);
    }
}
