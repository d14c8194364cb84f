use std::{
    io::{BufWriter, Write},
    path::Path,
};

use image::DynamicImage;
use log::debug;

use crate::{
    encoders,
    error::FilterError,
    filter_err, filter_try,
    format::{self, Format},
    image::Image,
    plan::Modifiers,
};

/// Serializes `pixels` as `format` into `writer`.
pub fn encode<W: Write>(
    pixels: &DynamicImage,
    format: Format,
    writer: &mut W,
    modifiers: &Modifiers,
) -> Result<(), FilterError> {
    match format {
        Format::Png => encoders::png::encode(pixels, writer, modifiers),
        Format::Jpeg => encoders::jpeg::encode(pixels, writer, modifiers),
    }
}

/// Encodes `image` into the file at `path`.
///
/// The data is staged in a temporary file next to the destination which is renamed
/// over it only once everything has been written, so a failed run never leaves
/// a truncated image behind.
pub fn save(
    image: &Image,
    path: &Path,
    explicit: Option<Format>,
    modifiers: &Modifiers,
) -> Result<Format, FilterError> {
    let format = format::resolve_for_encoding(explicit, path, image.format)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut builder = tempfile::Builder::new();
    builder.prefix(".img-filter").suffix(".tmp");
    // NamedTempFile defaults to 0600; let the umask decide like File::create would
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let staging = builder.tempfile_in(dir).map_err(|error| {
        filter_err!(FileOpenFailure, "unable to open output file `{}': {error}", path.display())
    })?;
    debug!("staging output in {}", staging.path().display());

    // Wrap in BufWriter for performance
    let mut writer = BufWriter::new(staging);
    encode(&image.pixels, format, &mut writer, modifiers)?;
    // Dropping the BufWriter would flush too, but would swallow the error.
    let staging = filter_try!(EncodeFailure, writer.into_inner());

    staging.persist(path).map_err(|error| {
        filter_err!(FileOpenFailure, "unable to write output file `{}': {}", path.display(), error.error)
    })?;
    Ok(format)
}
