use image::DynamicImage;

use crate::format::Format;

#[derive(Debug, Clone)]
pub struct Image {
    /// The format the pixels were decoded from, if they came from a file
    pub format: Option<Format>,
    pub pixels: DynamicImage,
}
