use image::{DynamicImage, Rgba, RgbaImage};

use crate::image::Image;

/// Replaces the pixels of `image` with their grayscale version.
pub fn grayscale_in_place(image: &mut Image) {
    image.pixels = DynamicImage::ImageRgba8(grayscale(&image.pixels));
}

/// Averages the three color channels at 16-bit precision and narrows the result to 8 bits.
/// Alpha is carried over, narrowed the same way.
///
/// Both the average and the narrowing truncate rather than round.
/// Since 8-bit values are widened as `v * 257`, the output maps to itself.
pub fn grayscale(image: &DynamicImage) -> RgbaImage {
    let wide = image.to_rgba16();
    RgbaImage::from_fn(wide.width(), wide.height(), |x, y| {
        gray_pixel(*wide.get_pixel(x, y))
    })
}

#[inline]
fn gray_pixel(pixel: Rgba<u16>) -> Rgba<u8> {
    let [r, g, b, a] = pixel.0;
    let sum = u32::from(r) + u32::from(g) + u32::from(b);
    let y = ((sum / 3) >> 8) as u8;
    Rgba([y, y, y, (a >> 8) as u8])
}
