use image::{Rgba, RgbaImage};

/// Multiply every pixel's color by `color`, keeping alpha.
///
/// White glyphs take on `color` exactly; black stays black.
pub fn tint(image: &RgbaImage, color: [u8; 3]) -> RgbaImage {
    let mut out = image.clone();
    for px in out.pixels_mut() {
        let Rgba([r, g, b, a]) = *px;
        *px = Rgba([mul(r, color[0]), mul(g, color[1]), mul(b, color[2]), a]);
    }
    out
}

fn mul(c: u8, t: u8) -> u8 {
    ((c as u32 * t as u32 + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_becomes_tint_and_alpha_is_kept() {
        let img = RgbaImage::from_pixel(2, 1, Rgba([255, 255, 255, 77]));
        let out = tint(&img, [10, 200, 30]);
        assert_eq!(*out.get_pixel(1, 0), Rgba([10, 200, 30, 77]));
    }

    #[test]
    fn black_stays_black() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]));
        assert_eq!(*tint(&img, [255, 0, 9]).get_pixel(0, 0), Rgba([0, 0, 0, 255]));
    }
}
