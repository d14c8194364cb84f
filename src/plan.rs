use std::{ffi::OsStr, path::PathBuf};

use log::{debug, info};

use crate::{
    decode, encode,
    error::FilterError,
    format::Format,
    operations,
    utils::filename::{append_suffix_to_path, DEFAULT_OUTPUT_SUFFIX},
};

/// Everything needed to convert one image, as requested on the command line
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExecutionPlan {
    pub input: PathBuf,
    /// Explicit output path. Derived from `input` when absent.
    pub output: Option<PathBuf>,
    pub input_format: Option<Format>,
    pub output_format: Option<Format>,
    pub modifiers: Modifiers,
}

/// Settings that only affect how the result is encoded
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Modifiers {
    /// 0 to 100, see the individual encoders for how it is interpreted
    pub quality: Option<u8>,
}

impl ExecutionPlan {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }

    /// An explicit output path wins; otherwise `_grayscale` is appended to the input path.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => PathBuf::from(append_suffix_to_path(
                self.input.as_os_str(),
                OsStr::new(DEFAULT_OUTPUT_SUFFIX),
            )),
        }
    }

    pub fn execute(&self) -> Result<(), FilterError> {
        let output = self.output_path();
        debug!("writing {} to {}", self.input.display(), output.display());

        let mut image = decode::load(&self.input, self.input_format)?;
        operations::grayscale_in_place(&mut image);
        let format = encode::save(&image, &output, self.output_format, &self.modifiers)?;

        info!(
            "converted {} to grayscale {} at {}",
            self.input.display(),
            format.name(),
            output.display()
        );
        Ok(())
    }
}
