//! Deciding which codec to use for reading and writing an image.

use std::{path::Path, str::FromStr};

use image::ImageFormat;
use log::{debug, warn};
use strum::{EnumString, IntoStaticStr, VariantArray};

use crate::{error::FilterError, filter_err};

/// The container formats this tool can read and write.
#[derive(EnumString, IntoStaticStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    #[strum(to_string = "png")]
    Png,
    #[strum(to_string = "jpeg", serialize = "jpg")]
    Jpeg,
}

impl Format {
    /// Parses a format named on the command line. Names are case-sensitive.
    /// An empty string counts as "not specified".
    pub fn from_explicit(name: &str) -> Result<Option<Self>, FilterError> {
        if name.is_empty() {
            return Ok(None);
        }
        Self::from_str(name).map(Some).map_err(|_| {
            let supported: Vec<&str> = Self::VARIANTS.iter().map(Format::name).collect();
            filter_err!(
                UnknownFormat,
                "unknown image format `{name}', expected one of: {}",
                supported.join(", ")
            )
        })
    }

    /// Unlike explicit names, extensions are matched regardless of case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        Self::from_str(&extension.to_ascii_lowercase()).ok()
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl From<Format> for ImageFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Png => ImageFormat::Png,
            Format::Jpeg => ImageFormat::Jpeg,
        }
    }
}

impl TryFrom<ImageFormat> for Format {
    type Error = FilterError;

    fn try_from(format: ImageFormat) -> Result<Self, Self::Error> {
        match format {
            ImageFormat::Png => Ok(Format::Png),
            ImageFormat::Jpeg => Ok(Format::Jpeg),
            other => Err(filter_err!(
                UnknownFormat,
                "no decode delegate for this image format `{}'",
                other.extensions_str().first().unwrap_or(&"").to_ascii_uppercase()
            )),
        }
    }
}

/// Picks the format for `path`.
///
/// An explicitly requested format always wins. Next comes the container detected
/// from the file contents, which is only available when decoding.
/// The file extension is the last resort.
pub fn resolve(
    explicit: Option<Format>,
    path: &Path,
    content_probe: Option<ImageFormat>,
) -> Result<Format, FilterError> {
    if let Some(format) = explicit {
        debug!("using explicitly requested format {}", format.name());
        return Ok(format);
    }
    if let Some(sniffed) = content_probe {
        let format = Format::try_from(sniffed)?;
        debug!("detected {} from the contents of {}", format.name(), path.display());
        return Ok(format);
    }
    if let Some(format) = Format::from_path(path) {
        debug!("guessed {} from the extension of {}", format.name(), path.display());
        return Ok(format);
    }
    let extension = path.extension().unwrap_or_default();
    Err(filter_err!(
        UnknownFormat,
        "no delegate for this image format `{}'",
        extension.to_ascii_uppercase().display()
    ))
}

/// Encoding has no contents to probe, so when the output path does not say
/// which format to use, the format the image was decoded from is reused.
pub fn resolve_for_encoding(
    explicit: Option<Format>,
    path: &Path,
    input_format: Option<Format>,
) -> Result<Format, FilterError> {
    match resolve(explicit, path, None) {
        Ok(format) => Ok(format),
        Err(err) => match input_format {
            Some(format) => {
                if let Some(named) = unsupported_extension(path) {
                    warn!(
                        "{} names a {named:?} file, but it will contain {} data",
                        path.display(),
                        format.name()
                    );
                }
                debug!("falling back to the input format {}", format.name());
                Ok(format)
            }
            None => Err(err),
        },
    }
}

/// The format `path`'s extension refers to, if that is a format we cannot write
fn unsupported_extension(path: &Path) -> Option<ImageFormat> {
    let named = ImageFormat::from_path(path).ok()?;
    Format::try_from(named).is_err().then_some(named)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn explicit_names() {
        assert_eq!(Format::from_explicit("png").unwrap(), Some(Format::Png));
        assert_eq!(Format::from_explicit("jpeg").unwrap(), Some(Format::Jpeg));
        assert_eq!(Format::from_explicit("jpg").unwrap(), Some(Format::Jpeg));
        assert_eq!(Format::from_explicit("").unwrap(), None);
    }

    #[test]
    fn unsupported_explicit_name() {
        for name in ["bmp", "gif", "pngg", " png", "PNG", "JPG", "Jpeg"] {
            let err = Format::from_explicit(name).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnknownFormat, "{name}");
        }
    }

    #[test]
    fn canonical_names() {
        assert_eq!(Format::Png.name(), "png");
        assert_eq!(Format::Jpeg.name(), "jpeg");
    }

    #[test]
    fn extension() {
        let cases = [
            ("a.png", Some(Format::Png)),
            ("dir/a.jpg", Some(Format::Jpeg)),
            ("a.jpeg", Some(Format::Jpeg)),
            ("A.PNG", Some(Format::Png)),
            ("b.Jpg", Some(Format::Jpeg)),
            ("a.jpg_grayscale", None),
            ("a.bmp", None),
            ("noext", None),
        ];
        for (path, expected) in cases {
            assert_eq!(Format::from_path(Path::new(path)), expected, "{path}");
        }
    }

    #[test]
    fn explicit_beats_probe_and_extension() {
        let format = resolve(
            Some(Format::Jpeg),
            Path::new("a.png"),
            Some(ImageFormat::Png),
        )
        .unwrap();
        assert_eq!(format, Format::Jpeg);
    }

    #[test]
    fn probe_beats_extension() {
        let format = resolve(None, Path::new("a.jpg"), Some(ImageFormat::Png)).unwrap();
        assert_eq!(format, Format::Png);
    }

    #[test]
    fn unsupported_probe_is_an_error() {
        let err = resolve(None, Path::new("a.png"), Some(ImageFormat::Gif)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownFormat);
    }

    #[test]
    fn extension_is_the_last_resort() {
        assert_eq!(resolve(None, Path::new("a.jpeg"), None).unwrap(), Format::Jpeg);
        let err = resolve(None, Path::new("a.tiff"), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownFormat);
        assert!(err.to_string().contains("`TIFF'"));
    }

    #[test]
    fn encoding_falls_back_to_input_format() {
        let path = Path::new("photo.jpg_grayscale");
        assert_eq!(
            resolve_for_encoding(None, path, Some(Format::Jpeg)).unwrap(),
            Format::Jpeg
        );
        assert_eq!(
            resolve_for_encoding(None, Path::new("out.png"), Some(Format::Jpeg)).unwrap(),
            Format::Png
        );
        assert_eq!(
            resolve_for_encoding(Some(Format::Png), path, Some(Format::Jpeg)).unwrap(),
            Format::Png
        );
        assert!(resolve_for_encoding(None, path, None).is_err());
    }

    #[test]
    fn unsupported_output_extension_is_noticed() {
        assert_eq!(unsupported_extension(Path::new("out.bmp")), Some(ImageFormat::Bmp));
        assert_eq!(unsupported_extension(Path::new("out.GIF")), Some(ImageFormat::Gif));
        assert_eq!(unsupported_extension(Path::new("out.png")), None);
        assert_eq!(unsupported_extension(Path::new("photo.jpg_grayscale")), None);
        // the write itself still goes ahead in the input format
        assert_eq!(
            resolve_for_encoding(None, Path::new("out.bmp"), Some(Format::Png)).unwrap(),
            Format::Png
        );
    }
}
