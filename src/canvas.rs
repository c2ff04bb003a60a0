use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

use crate::color::{Rgba, blend, pack_rgb};
use crate::geometry::Point2D;

/// Fixed-size 0RGB software raster target
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    pub fn clear(&mut self, r: u8, g: u8, b: u8) {
        let c = pack_rgb(r, g, b);
        self.pixels
            .par_chunks_mut(self.width)
            .for_each(|row| row.fill(c));
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x]
    }

    /// Out-of-range coordinates are ignored
    #[inline]
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        self.pixels[idx] = blend(self.pixels[idx], color);
    }

    /// One-pixel Bresenham line; every covered pixel is blended exactly once
    pub fn line(&mut self, a: Point2D, b: Point2D, color: Rgba) {
        if !(a.x.is_finite() && a.y.is_finite() && b.x.is_finite() && b.y.is_finite()) {
            return;
        }
        let (mut x0, mut y0) = (a.x.floor() as i64, a.y.floor() as i64);
        let (x1, y1) = (b.x.floor() as i64, b.y.floor() as i64);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.blend_pixel(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Solid disc; `diameter` is the full width, as the sketch's `ellipse` takes it
    pub fn fill_circle(&mut self, center: Point2D, diameter: f64, color: Rgba) {
        let r = diameter * 0.5;
        self.shade_annulus(center, 0.0, r, color);
    }

    /// Ring of thickness `weight` centred on the circle of the given diameter
    pub fn stroke_circle(&mut self, center: Point2D, diameter: f64, color: Rgba, weight: f64) {
        let r = (diameter * 0.5).abs();
        let half = weight * 0.5;
        self.shade_annulus(center, (r - half).max(0.0), r + half, color);
    }

    // Blend every pixel whose centre lies within [inner, outer] of `center`
    fn shade_annulus(&mut self, center: Point2D, inner: f64, outer: f64, color: Rgba) {
        if !(outer > 0.0) || color.a == 0 {
            return;
        }
        let y_start = ((center.y - outer).floor().max(0.0)) as usize;
        let y_end = ((center.y + outer).ceil().min(self.height as f64)).max(0.0) as usize;
        let x_start = ((center.x - outer).floor().max(0.0)) as usize;
        let x_end = ((center.x + outer).ceil().min(self.width as f64)).max(0.0) as usize;
        if y_start >= y_end || x_start >= x_end {
            return;
        }

        let (inner2, outer2) = (inner * inner, outer * outer);
        let w = self.width;
        self.pixels[y_start * w..y_end * w]
            .par_chunks_mut(w)
            .enumerate()
            .for_each(|(row_i, row)| {
                let py = (y_start + row_i) as f64 + 0.5 - center.y;
                for x in x_start..x_end {
                    let px = x as f64 + 0.5 - center.x;
                    let d2 = px * px + py * py;
                    if d2 <= outer2 && d2 >= inner2 {
                        row[x] = blend(row[x], color);
                    }
                }
            });
    }
}
