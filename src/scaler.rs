use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

use crate::color::lerp_color_u32;

/// Precomputed mapping from window pixels to canvas neighbours + weights
#[derive(Debug, Default)]
pub struct ScaleLut {
    x0: Vec<usize>,
    x1: Vec<usize>,
    wx: Vec<u16>,
    y0: Vec<usize>,
    y1: Vec<usize>,
    wy: Vec<u16>,
}

// Source index pair and 8.8 fixed-point weight for each destination index
fn axis_lut(dst: usize, src: usize) -> (Vec<usize>, Vec<usize>, Vec<u16>) {
    let scale = src as f32 / dst as f32;
    let last = src.saturating_sub(1);
    let mut i0 = Vec::with_capacity(dst);
    let mut i1 = Vec::with_capacity(dst);
    let mut w = Vec::with_capacity(dst);
    for d in 0..dst {
        let f = d as f32 * scale;
        let lo = (f.floor() as usize).min(last);
        i0.push(lo);
        i1.push((lo + 1).min(last));
        w.push(((f - lo as f32).clamp(0.0, 1.0) * 256.0).round() as u16);
    }
    (i0, i1, w)
}

pub fn build_scale_lut(dst_w: usize, dst_h: usize, src_w: usize, src_h: usize) -> ScaleLut {
    let (x0, x1, wx) = axis_lut(dst_w, src_w);
    let (y0, y1, wy) = axis_lut(dst_h, src_h);
    ScaleLut {
        x0,
        x1,
        wx,
        y0,
        y1,
        wy,
    }
}

/// Parallel bilinear stretch of the canvas into the window buffer.
/// Rows are processed in parallel for cache friendly writes.
pub fn blit_bilinear_stretch(dst: &mut [u32], dw: usize, src: &[u32], sw: usize, lut: &ScaleLut) {
    dst.par_chunks_mut(dw).enumerate().for_each(|(y, dst_row)| {
        let wy = lut.wy[y] as u32;
        let row0 = lut.y0[y] * sw;
        let row1 = lut.y1[y] * sw;

        for (x, out) in dst_row.iter_mut().enumerate() {
            let (x0, x1) = (lut.x0[x], lut.x1[x]);
            let wx = lut.wx[x] as u32;

            let top = lerp_color_u32(src[row0 + x0], src[row0 + x1], wx);
            let bot = lerp_color_u32(src[row1 + x0], src[row1 + x1], wx);
            *out = lerp_color_u32(top, bot, wy);
        }
    });
}

/// Map a window-space cursor position into canvas coordinates
#[inline]
pub fn window_to_canvas(
    x: f64,
    y: f64,
    window_w: usize,
    window_h: usize,
    canvas_w: usize,
    canvas_h: usize,
) -> (f64, f64) {
    if window_w == 0 || window_h == 0 {
        return (x, y);
    }
    (
        x * canvas_w as f64 / window_w as f64,
        y * canvas_h as f64 / window_h as f64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_blit_copies() {
        let src: Vec<u32> = (0..12).map(|i| i * 0x00010101).collect();
        let lut = build_scale_lut(4, 3, 4, 3);
        let mut dst = vec![0u32; 12];
        blit_bilinear_stretch(&mut dst, 4, &src, 4, &lut);
        assert_eq!(dst, src);
    }

    #[test]
    fn test_upscale_keeps_solid_color() {
        let src = vec![0x00336699u32; 4 * 2];
        let lut = build_scale_lut(9, 5, 4, 2);
        let mut dst = vec![0u32; 9 * 5];
        blit_bilinear_stretch(&mut dst, 9, &src, 4, &lut);
        assert!(dst.iter().all(|&p| p == 0x00336699));
    }

    #[test]
    fn test_downscale_stays_in_bounds() {
        let src = vec![0x00FFFFFFu32; 1920 * 1080];
        let lut = build_scale_lut(800, 450, 1920, 1080);
        let mut dst = vec![0u32; 800 * 450];
        blit_bilinear_stretch(&mut dst, 800, &src, 1920, &lut);
        assert!(dst.iter().all(|&p| p == 0x00FFFFFF));
    }

    #[test]
    fn test_window_to_canvas() {
        assert_eq!(window_to_canvas(480.0, 270.0, 960, 540, 1920, 1080), (960.0, 540.0));
        assert_eq!(window_to_canvas(10.0, 20.0, 1920, 1080, 1920, 1080), (10.0, 20.0));
        assert_eq!(window_to_canvas(3.0, 4.0, 0, 0, 1920, 1080), (3.0, 4.0));
    }
}
