//! Helpers shared between all encoders

use std::borrow::Cow;

use image::{ColorType, DynamicImage, ImageBuffer, Luma, LumaA, RgbaImage};

/// Picks the smallest 8-bit pixel format that stores `image` without loss.
/// When `allow_alpha` is false the alpha channel is dropped unconditionally.
pub fn optimize_pixel_format(image: &DynamicImage, allow_alpha: bool) -> Cow<'_, DynamicImage> {
    let rgba = match image {
        DynamicImage::ImageRgba8(pixels) => Cow::Borrowed(pixels),
        other => Cow::Owned(other.to_rgba8()),
    };

    let transforms = find_pixel_optimizations(&rgba);
    let opaque = transforms.opaque || !allow_alpha;
    let target = match (transforms.grayscale, opaque) {
        (true, true) => ColorType::L8,
        (true, false) => ColorType::La8,
        (false, true) => ColorType::Rgb8,
        (false, false) => ColorType::Rgba8,
    };

    if image.color() == target {
        Cow::Borrowed(image)
    } else {
        Cow::Owned(rgba_to_color(rgba, target))
    }
}

fn rgba_to_color(rgba: Cow<'_, RgbaImage>, color: ColorType) -> DynamicImage {
    let (width, height) = rgba.dimensions();
    match color {
        // for gray pixels any one of the color channels holds the value
        ColorType::L8 => DynamicImage::ImageLuma8(ImageBuffer::from_fn(width, height, |x, y| {
            Luma([rgba.get_pixel(x, y)[0]])
        })),
        ColorType::La8 => DynamicImage::ImageLumaA8(ImageBuffer::from_fn(width, height, |x, y| {
            let pixel = rgba.get_pixel(x, y);
            LumaA([pixel[0], pixel[3]])
        })),
        ColorType::Rgb8 => DynamicImage::ImageRgba8(rgba.into_owned()).to_rgb8().into(),
        _ => DynamicImage::ImageRgba8(rgba.into_owned()),
    }
}

#[derive(Copy, Clone, PartialEq, Eq)]
struct PixelFormatTransforms {
    grayscale: bool,
    opaque: bool,
}

fn find_pixel_optimizations(input: &RgbaImage) -> PixelFormatTransforms {
    // all transforms are assumed to be valid until proven invalid
    let mut result = PixelFormatTransforms {
        grayscale: true,
        opaque: true,
    };

    for row in input.rows() {
        for pixel in row {
            let [r, g, b, a] = pixel.0;
            result.grayscale &= (r == g) & (r == b);
            result.opaque &= a == u8::MAX;
        }
        // checked once per row so the loop above stays branch-free
        if !result.grayscale && !result.opaque {
            return result;
        }
    }

    result
}
