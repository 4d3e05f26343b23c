use image::{Rgba, RgbaImage};

use crate::error::{GenError, Result};

/// RGBA pixel grid threaded through compositing steps.
///
/// Every drawing operation returns a new `Canvas`; the receiver is left as it
/// was. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Fully transparent canvas.
    ///
    /// Panics if the pixel buffer size overflows; use [`Canvas::try_new`] for
    /// caller-supplied dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// Fully transparent canvas, or [`GenError::CanvasTooLarge`] when
    /// `width * height * 4` bytes cannot be addressed.
    pub fn try_new(width: u32, height: u32) -> Result<Self> {
        let fits = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .is_some_and(|n| n <= isize::MAX as usize);
        if !fits {
            return Err(GenError::CanvasTooLarge { width, height });
        }
        Ok(Self::new(width, height))
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Draw `src` with its top-left corner at `(x, y)`, blending with "src over dst".
    ///
    /// Parts of `src` outside the canvas are clipped; negative and
    /// out-of-range origins are fine. The result has the canvas's dimensions.
    pub fn paste(&self, src: &RgbaImage, x: i64, y: i64) -> Canvas {
        let mut out = self.clone();
        out.paste_in_place(src, x, y);
        out
    }

    pub(crate) fn paste_in_place(&mut self, src: &RgbaImage, x: i64, y: i64) {
        let (cw, ch) = (self.width() as i64, self.height() as i64);
        let (sw, sh) = (src.width() as i64, src.height() as i64);

        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + sw).min(cw);
        let y1 = (y + sh).min(ch);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for dy in y0..y1 {
            for dx in x0..x1 {
                let top = *src.get_pixel((dx - x) as u32, (dy - y) as u32);
                let dst = self.image.get_pixel_mut(dx as u32, dy as u32);
                *dst = blend_over(*dst, top);
            }
        }
    }
}

/// Porter-Duff "over" for non-premultiplied RGBA8.
///
/// A fully transparent `src` returns `dst` untouched; a fully opaque one
/// returns `src` exactly.
pub fn blend_over(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let sa = src[3] as u32;
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }
    let da = dst[3] as u32;
    let inv = 255 - sa;
    // output alpha scaled by 255
    let oa = sa * 255 + da * inv;

    let channel = |s: u8, d: u8| -> u8 {
        let num = s as u32 * sa * 255 + d as u32 * da * inv;
        ((num + oa / 2) / oa) as u8
    };
    Rgba([
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        ((oa + 127) / 255) as u8,
    ])
}

/// Compose `src` over `canvas` at `(x, y)` and return the result.
pub fn paste_image(canvas: &Canvas, src: &RgbaImage, x: i64, y: i64) -> Canvas {
    canvas.paste(src, x, y)
}
