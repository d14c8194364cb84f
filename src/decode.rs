use std::path::Path;

use image::DynamicImage;
use log::debug;

use crate::{
    error::FilterError,
    filter_err,
    format::{self, Format},
    image::Image,
};

/// Reads and decodes the file at `path`.
/// If the format has not been explicitly specified, guesses the format based on file contents,
/// and failing that, on the file extension.
pub fn load(path: &Path, explicit: Option<Format>) -> Result<Image, FilterError> {
    let bytes = std::fs::read(path).map_err(|error| {
        filter_err!(FileOpenFailure, "unable to open image `{}': {error}", path.display())
    })?;
    // sniffing is pointless when the caller already told us what to expect
    let probe = match explicit {
        Some(_) => None,
        None => image::guess_format(&bytes).ok(),
    };
    let format = format::resolve(explicit, path, probe)?;
    let pixels = decode(&bytes, format)?;
    debug!(
        "decoded {}x{} {:?} image from {}",
        pixels.width(),
        pixels.height(),
        pixels.color(),
        path.display()
    );
    Ok(Image {
        format: Some(format),
        pixels,
    })
}

pub fn decode(bytes: &[u8], format: Format) -> Result<DynamicImage, FilterError> {
    image::load_from_memory_with_format(bytes, format.into())
        .map_err(|err| filter_err!(DecodeFailure, "unable to decode {} image: {err}", format.name()))
}
