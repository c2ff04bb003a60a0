#[inline]
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    // 0RGB, the layout softbuffer presents
    (b as u32) | ((g as u32) << 8) | ((r as u32) << 16)
}

/// Stroke/fill color with straight alpha (0 = invisible, 255 = opaque)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn packed(self) -> u32 {
        pack_rgb(self.r, self.g, self.b)
    }
}

#[inline]
pub fn lerp_color_u32(a: u32, b: u32, w256: u32) -> u32 {
    // w256 in [0, 256]; inv = 256 - w256
    let inv = 256 - w256;
    // R and B together (00RR00BB)
    let rb = ((a & 0x00FF00FF) * inv + (b & 0x00FF00FF) * w256) >> 8 & 0x00FF00FF;
    // G alone (0000GG00)
    let g = ((a & 0x0000FF00) * inv + (b & 0x0000FF00) * w256) >> 8 & 0x0000FF00;
    rb | g
}

/// Source-over blend of `src` onto the packed pixel `dst`
#[inline]
pub fn blend(dst: u32, src: Rgba) -> u32 {
    match src.a {
        0 => dst,
        255 => src.packed(),
        // map 0..=255 onto 0..=256 so full alpha stays exact
        a => lerp_color_u32(dst, src.packed(), a as u32 + (a as u32 >> 7)),
    }
}
