use std::io::Write;

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

use crate::encoders::common::optimize_pixel_format;
use crate::{error::FilterError, filter_try, plan::Modifiers};

/// Quality used when none is requested, same as libjpeg's default
const DEFAULT_QUALITY: u8 = 75;

pub fn encode<W: Write>(
    pixels: &DynamicImage,
    writer: &mut W,
    modifiers: &Modifiers,
) -> Result<(), FilterError> {
    let quality = modifiers.quality.unwrap_or(DEFAULT_QUALITY).clamp(1, 100);
    let encoder = JpegEncoder::new_with_quality(writer, quality);
    // JPEG cannot store transparency
    let pixels_to_write = optimize_pixel_format(pixels, false);
    filter_try!(EncodeFailure, pixels_to_write.write_with_encoder(encoder));
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ColorType, ImageFormat, Rgba, RgbaImage};

    use super::*;

    #[test]
    fn drops_alpha_and_stores_luma() {
        let pixels = RgbaImage::from_pixel(8, 8, Rgba([128, 128, 128, 10]));
        let mut buf = Vec::new();
        encode(
            &DynamicImage::ImageRgba8(pixels),
            &mut buf,
            &Modifiers { quality: Some(100) },
        )
        .unwrap();

        let decoded = image::load(Cursor::new(buf), ImageFormat::Jpeg).unwrap();
        assert_eq!(decoded.color(), ColorType::L8);
        assert_eq!((decoded.width(), decoded.height()), (8, 8));
        let value = decoded.as_luma8().unwrap().get_pixel(4, 4)[0];
        assert!(value.abs_diff(128) <= 2, "got {value}");
    }

    #[test]
    fn zero_quality_is_clamped() {
        let pixels = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255]));
        let mut buf = Vec::new();
        encode(
            &DynamicImage::ImageRgba8(pixels),
            &mut buf,
            &Modifiers { quality: Some(0) },
        )
        .unwrap();
        assert!(!buf.is_empty());
    }
}
