/// Shared foreground motifs reused across scene routines: stylized trees,
/// four-petal flowers, mushrooms, and star scatter.

use rand::rngs::StdRng;
use rand::Rng;

use crate::core::canvas::{Canvas, Color};

const TRUNK_BROWN: Color = Color::rgb(0x8B, 0x45, 0x13);

/// A stylized tree: rectangular trunk rooted at (x, y) with a round canopy
/// above. `total_height` controls both trunk length and canopy radius.
pub fn tree(canvas: &mut Canvas, x: f32, y: f32, trunk_width: f32, total_height: f32, canopy: Color) {
    canvas.fill_rect(x - trunk_width / 2.0, y, trunk_width, total_height * 0.3, TRUNK_BROWN);
    canvas.fill_circle(x, y - total_height * 0.2, total_height * 0.5, canopy);
}

/// A four-petal flower: a plus-shaped bloom centered at (x, y) with a gold
/// center square.
pub fn flower(canvas: &mut Canvas, x: f32, y: f32, size: f32, petals: Color) {
    canvas.fill_rect(x - size, y, size * 2.0, size, petals);
    canvas.fill_rect(x, y - size, size, size * 2.0, petals);
    canvas.fill_rect(x - size / 2.0, y - size / 2.0, size, size, Color::rgb(0xFF, 0xD7, 0x00));
}

/// A mushroom: round cap over a pale stem, with the stem base at (x, y + size).
pub fn mushroom(canvas: &mut Canvas, x: f32, y: f32, size: f32) {
    canvas.fill_circle(x, y - size, size * 1.5, Color::rgb(0xDC, 0x14, 0x3C));
    canvas.fill_rect(x - size / 2.0, y - size, size, size * 2.0, Color::rgb(0xF5, 0xDE, 0xB3));
}

/// Uniform star scatter over the top `sky_fraction` of the canvas.
/// Positions are drawn from `rng`; callers pin the seed when they need
/// reproducible output.
pub fn starfield(
    canvas: &mut Canvas,
    rng: &mut StdRng,
    count: u32,
    sky_fraction: f32,
    star_size: f32,
    color: Color,
) {
    let w = canvas.width() as f32;
    let h = canvas.height() as f32 * sky_fraction;
    for _ in 0..count {
        let x = rng.gen::<f32>() * w;
        let y = rng.gen::<f32>() * h;
        canvas.fill_rect(x, y, star_size, star_size, color);
    }
}
