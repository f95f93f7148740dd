/// Raster canvas — a fixed-size RGBA8 pixel buffer with the handful of
/// drawing primitives the asset routines need.
///
/// Everything here is integer pixel-art rendering: no antialiasing, no
/// subpixel positioning. Filled disks use a bounding-box distance test and
/// polygons an even-odd crossing test, so curves come out with the stepped
/// edges the style calls for. Translucent colors composite source-over.

/// An RGBA color. Alpha 255 is opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    /// Linear interpolation between two colors, `t` in 0.0..=1.0.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

/// A mutable 2D pixel buffer. Created by a drawing routine, painted, handed
/// to the encoder, then dropped — canvases are never cached or shared.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a canvas of the given dimensions, fully transparent.
    /// Zero dimensions are clamped to 1 so every canvas is nonempty.
    pub fn new(width: u32, height: u32) -> Canvas {
        let width = width.max(1);
        let height = height.max(1);
        Canvas {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGBA8 buffer, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        Some(Color {
            r: self.pixels[i],
            g: self.pixels[i + 1],
            b: self.pixels[i + 2],
            a: self.pixels[i + 3],
        })
    }

    /// Write one pixel, compositing source-over if the color is translucent.
    /// Out-of-bounds coordinates are silently clipped.
    pub fn put(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let i = ((y as u32 * self.width + x as u32) * 4) as usize;
        if color.a == 255 {
            self.pixels[i] = color.r;
            self.pixels[i + 1] = color.g;
            self.pixels[i + 2] = color.b;
            self.pixels[i + 3] = 255;
        } else if color.a > 0 {
            let sa = color.a as u32;
            let da = self.pixels[i + 3] as u32;
            let out_a = sa + da * (255 - sa) / 255;
            let blend = |s: u8, d: u8| -> u8 {
                if out_a == 0 {
                    return 0;
                }
                let s = s as u32;
                let d = d as u32;
                ((s * sa + d * da * (255 - sa) / 255) / out_a) as u8
            };
            self.pixels[i] = blend(color.r, self.pixels[i]);
            self.pixels[i + 1] = blend(color.g, self.pixels[i + 1]);
            self.pixels[i + 2] = blend(color.b, self.pixels[i + 2]);
            self.pixels[i + 3] = out_a as u8;
        }
    }

    /// Fill an axis-aligned rectangle. Fractional coordinates are rounded to
    /// the pixel grid; the rectangle is clipped to the canvas.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let x0 = x.round() as i32;
        let y0 = y.round() as i32;
        let x1 = (x + w).round() as i32;
        let y1 = (y + h).round() as i32;
        for py in y0..y1 {
            for px in x0..x1 {
                self.put(px, py, color);
            }
        }
    }

    /// Fill the whole canvas with a vertical linear gradient. `stops` are
    /// (offset, color) pairs with offsets in 0.0..=1.0, sorted ascending.
    /// Two stops give the usual sky gradient; more are supported.
    pub fn fill_vertical_gradient(&mut self, stops: &[(f32, Color)]) {
        if stops.is_empty() {
            return;
        }
        for y in 0..self.height {
            let t = if self.height > 1 {
                y as f32 / (self.height - 1) as f32
            } else {
                0.0
            };
            let color = sample_gradient(stops, t);
            for x in 0..self.width {
                self.put(x as i32, y as i32, color);
            }
        }
    }

    /// Fill a disk centered at (cx, cy) with the given radius, using a
    /// distance test over the bounding box. Matches the chunky non-vector
    /// circles of the style.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        let cx = cx.round() as i32;
        let cy = cy.round() as i32;
        let r = radius.round() as i32;
        let r2 = r * r;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r2 {
                    self.put(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Stroke a straight line segment with the given width, rendered as a
    /// run of width×width squares along the segment.
    pub fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, width: f32, color: Color) {
        let dx = x1 - x0;
        let dy = y1 - y0;
        let len = (dx * dx + dy * dy).sqrt();
        let steps = len.ceil().max(1.0) as u32;
        let half = width / 2.0;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let px = x0 + dx * t;
            let py = y0 + dy * t;
            self.fill_rect(px - half, py - half, width, width, color);
        }
    }

    /// Stroke a polyline through the given points.
    pub fn stroke_polyline(&mut self, points: &[(f32, f32)], width: f32, color: Color) {
        for pair in points.windows(2) {
            self.stroke_line(pair[0].0, pair[0].1, pair[1].0, pair[1].1, width, color);
        }
    }

    /// Stroke a rectangle outline with the given line width.
    pub fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, line_width: f32, color: Color) {
        self.fill_rect(x, y, w, line_width, color);
        self.fill_rect(x, y + h - line_width, w, line_width, color);
        self.fill_rect(x, y, line_width, h, color);
        self.fill_rect(x + w - line_width, y, line_width, h, color);
    }

    /// Fill a simple polygon using an even-odd crossing test over the
    /// bounding box. Used for crystal and similar faceted shapes.
    pub fn fill_polygon(&mut self, points: &[(f32, f32)], color: Color) {
        if points.len() < 3 {
            return;
        }
        let min_x = points.iter().map(|p| p.0).fold(f32::INFINITY, f32::min).floor() as i32;
        let max_x = points.iter().map(|p| p.0).fold(f32::NEG_INFINITY, f32::max).ceil() as i32;
        let min_y = points.iter().map(|p| p.1).fold(f32::INFINITY, f32::min).floor() as i32;
        let max_y = points.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max).ceil() as i32;

        for py in min_y..=max_y {
            for px in min_x..=max_x {
                if point_in_polygon(px as f32 + 0.5, py as f32 + 0.5, points) {
                    self.put(px, py, color);
                }
            }
        }
    }

    /// Fill an upward-pointing isoceles triangle with its base at (x, y),
    /// spanning `width` horizontally and rising `height` above the base.
    pub fn fill_triangle(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.fill_polygon(
            &[(x, y), (x + width / 2.0, y - height), (x + width, y)],
            color,
        );
    }
}

fn sample_gradient(stops: &[(f32, Color)], t: f32) -> Color {
    if t <= stops[0].0 {
        return stops[0].1;
    }
    for pair in stops.windows(2) {
        let (o0, c0) = pair[0];
        let (o1, c1) = pair[1];
        if t <= o1 {
            let span = o1 - o0;
            let local = if span > 0.0 { (t - o0) / span } else { 1.0 };
            return c0.lerp(c1, local);
        }
    }
    stops[stops.len() - 1].1
}

fn point_in_polygon(px: f32, py: f32, points: &[(f32, f32)]) -> bool {
    let mut inside = false;
    let n = points.len();
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
