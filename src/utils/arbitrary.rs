//! Helpers for using `quickcheck`'s `Arbitrary` trait

use image::{DynamicImage, ImageBuffer, LumaA, Rgb, Rgba};
use quickcheck::{Arbitrary, Gen};

/// A small random image in one of the pixel formats the decoders produce
#[derive(Debug, Clone)]
pub struct ArbitraryImage(pub DynamicImage);

impl Arbitrary for ArbitraryImage {
    fn arbitrary(gen: &mut Gen) -> Self {
        let width = u32::arbitrary(gen) % 16;
        let height = u32::arbitrary(gen) % 16;
        let image = match u8::arbitrary(gen) % 4 {
            0 => DynamicImage::ImageRgba8(ImageBuffer::from_fn(width, height, |_, _| {
                Rgba([0; 4].map(|_: u8| u8::arbitrary(gen)))
            })),
            1 => DynamicImage::ImageRgba16(ImageBuffer::from_fn(width, height, |_, _| {
                Rgba([0; 4].map(|_: u16| u16::arbitrary(gen)))
            })),
            2 => DynamicImage::ImageRgb8(ImageBuffer::from_fn(width, height, |_, _| {
                Rgb([0; 3].map(|_: u8| u8::arbitrary(gen)))
            })),
            _ => DynamicImage::ImageLumaA8(ImageBuffer::from_fn(width, height, |_, _| {
                LumaA([0; 2].map(|_: u8| u8::arbitrary(gen)))
            })),
        };
        Self(image)
    }
}
