use std::io::Write;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::DynamicImage;

use crate::encoders::common::optimize_pixel_format;
use crate::plan::Modifiers;
use crate::{error::FilterError, filter_try};

pub fn encode<W: Write>(
    pixels: &DynamicImage,
    writer: &mut W,
    modifiers: &Modifiers,
) -> Result<(), FilterError> {
    let (compression, filter) = quality_to_compression_parameters(modifiers.quality);
    let encoder = PngEncoder::new_with_quality(writer, compression, filter);
    let pixels_to_write = optimize_pixel_format(pixels, true);
    filter_try!(EncodeFailure, pixels_to_write.write_with_encoder(encoder));
    Ok(())
}

// The tens digit picks the compression effort and the ones digit the row filter,
// following https://www.imagemagick.org/script/command-line-options.php#quality
fn quality_to_compression_parameters(quality: Option<u8>) -> (CompressionType, FilterType) {
    let Some(quality) = quality else {
        return (CompressionType::Default, FilterType::Adaptive);
    };

    let compression = match quality / 10 {
        0..=3 => CompressionType::Fast,
        4..=6 => CompressionType::Default,
        _ => CompressionType::Best,
    };
    match quality % 10 {
        // Fast compression needs filtering for a reasonable compression ratio,
        // so it gets the fastest filter instead of no filter at all.
        0 if compression == CompressionType::Fast => (compression, FilterType::Up),
        0 => (compression, FilterType::NoFilter),
        1 => (compression, FilterType::Sub),
        2 => (compression, FilterType::Up),
        3 => (compression, FilterType::Avg),
        4 => (compression, FilterType::Paeth),
        5..=7 => (compression, FilterType::Adaptive),
        // filters 8 and 9 override compression level selection
        8 => (CompressionType::Fast, FilterType::Adaptive),
        _ => (CompressionType::Fast, FilterType::Up),
    }
}
