use std::ffi::{OsStr, OsString};

/// Suffix appended to the input path when no output path is given
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_grayscale";

/// Appends `suffix` to the very end of the path, after the extension if there is one.
/// Works on the raw `OsStr` so that paths that aren't valid UTF-8 are preserved.
pub fn append_suffix_to_path(path: &OsStr, suffix: &OsStr) -> OsString {
    let mut result = path.to_owned();
    result.push(suffix);
    result
}
