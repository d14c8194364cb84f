//! Command-line argument parsing.
//!
//! Flags use a single dash (`-o out.png`) with a long-form double dash accepted too,
//! and values may be attached with `=`. Parsing stops at the first positional argument
//! or at `--`, so only the input path may follow it.

use std::{
    ffi::{OsStr, OsString},
    path::PathBuf,
    str::FromStr,
};

use strum::{EnumString, IntoStaticStr, VariantArray};

use crate::{error::FilterError, filter_err, format::Format, plan::ExecutionPlan};

#[derive(EnumString, IntoStaticStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg {
    #[strum(serialize = "o")]
    Output,
    #[strum(serialize = "f")]
    Format,
    #[strum(serialize = "i")]
    InputFormat,
    #[strum(serialize = "q")]
    Quality,
    #[strum(to_string = "help", serialize = "h")]
    Help,
}

impl Arg {
    pub fn needs_value(&self) -> bool {
        !matches!(self, Arg::Help)
    }

    pub fn value_name(&self) -> &'static str {
        match self {
            Arg::Output => "path",
            Arg::Format | Arg::InputFormat => "format",
            Arg::Quality => "value",
            Arg::Help => "",
        }
    }

    pub fn help_text(&self) -> &'static str {
        match self {
            Arg::Output => "the file path to write the resulting image to",
            Arg::Format => "the format (png, jpeg) to use for encoding the resulting image",
            Arg::InputFormat => "the format of the input image, instead of detecting it",
            Arg::Quality => "encoder quality from 0 to 100",
            Arg::Help => "show this help message",
        }
    }
}

/// What the command line asks us to do
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    Help,
    Run(ExecutionPlan),
}

pub fn parse_args(args: Vec<OsString>) -> Result<Invocation, FilterError> {
    let mut plan = ExecutionPlan::default();
    let mut positional = Vec::new();

    let mut iter = args.into_iter().skip(1); // skip argv[0], path to our binary
    while let Some(raw_arg) = iter.next() {
        if raw_arg == "--" {
            positional.extend(iter);
            break;
        }
        if !is_flag(&raw_arg) {
            positional.push(raw_arg);
            positional.extend(iter);
            break;
        }

        let (name, inline_value) = split_flag(raw_arg)?;
        let arg = Arg::from_str(&name)
            .map_err(|_| filter_err!(InvalidArgument, "flag provided but not defined: -{name}"))?;
        if !arg.needs_value() {
            return Ok(Invocation::Help);
        }
        let value = match inline_value {
            Some(value) => value,
            None => iter
                .next()
                .ok_or_else(|| filter_err!(InvalidArgument, "flag needs an argument: -{name}"))?,
        };
        apply_arg(&mut plan, arg, &value)?;
    }

    let mut positional = positional.into_iter();
    let input = positional
        .next()
        .ok_or_else(|| filter_err!(MissingArgument, "no image path provided"))?;
    if let Some(extra) = positional.next() {
        return Err(filter_err!(
            InvalidArgument,
            "unexpected argument `{}' after the image path",
            extra.to_string_lossy()
        ));
    }
    plan.input = PathBuf::from(input);
    Ok(Invocation::Run(plan))
}

fn apply_arg(plan: &mut ExecutionPlan, arg: Arg, value: &OsStr) -> Result<(), FilterError> {
    match arg {
        Arg::Output => plan.output = Some(PathBuf::from(value)),
        Arg::Format => plan.output_format = parse_format(value)?,
        Arg::InputFormat => plan.input_format = parse_format(value)?,
        Arg::Quality => plan.modifiers.quality = Some(parse_quality(value)?),
        Arg::Help => unreachable!("help takes no value"),
    }
    Ok(())
}

fn parse_format(value: &OsStr) -> Result<Option<Format>, FilterError> {
    let name = value
        .to_str()
        .ok_or_else(|| filter_err!(UnknownFormat, "unknown image format `{}'", value.display()))?;
    Format::from_explicit(name)
}

fn parse_quality(value: &OsStr) -> Result<u8, FilterError> {
    let invalid = || filter_err!(InvalidArgument, "invalid argument for option `-q': {}", value.display());
    let quality: u8 = value
        .to_str()
        .ok_or_else(invalid)?
        .trim()
        .parse()
        .map_err(|_| invalid())?;
    if quality > 100 {
        return Err(invalid());
    }
    Ok(quality)
}

/// A lone `-` is a filename, everything else starting with a dash is a flag
fn is_flag(arg: &OsStr) -> bool {
    let bytes = arg.as_encoded_bytes();
    bytes.len() > 1 && bytes[0] == b'-'
}

/// Splits `-name=value` or `--name` into the name and the optional attached value
fn split_flag(raw_arg: OsString) -> Result<(String, Option<OsString>), FilterError> {
    let string = raw_arg
        .into_string()
        .map_err(|s| filter_err!(InvalidArgument, "bad flag syntax: {}", s.display()))?;
    let without_dashes = string
        .strip_prefix("--")
        .or_else(|| string.strip_prefix('-'))
        .unwrap_or(&string);
    if without_dashes.is_empty() || without_dashes.starts_with(['-', '=']) {
        return Err(filter_err!(InvalidArgument, "bad flag syntax: {string}"));
    }
    Ok(match without_dashes.split_once('=') {
        Some((name, value)) => (name.to_owned(), Some(OsString::from(value))),
        None => (without_dashes.to_owned(), None),
    })
}
