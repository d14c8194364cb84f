use std::io::Write;

use current_platform::CURRENT_PLATFORM;
use strum::VariantArray;

use crate::args::Arg;

pub const BIN_NAME: &str = "img-filter";

pub fn print_help() {
    let mut stdout = std::io::stdout().lock();
    // nothing sensible to do if stdout is gone
    let _ = write_help(&mut stdout);
}

/// Printed to stderr when the command line is unusable
pub fn print_usage() {
    let mut stderr = std::io::stderr().lock();
    let _ = write_usage(&mut stderr);
}

pub fn write_help(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Version: {}", version_string())?;
    writeln!(out, "License: {}", env!("CARGO_PKG_LICENSE"))?;
    write_usage(out)
}

pub fn write_usage(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Usage: {BIN_NAME} [flags] path/to/image")?;
    writeln!(out)?;
    writeln!(out, "Flags:")?;
    for arg in Arg::VARIANTS {
        let name: &'static str = arg.into();
        let flag = format!("-{name} {}", arg.value_name());
        writeln!(out, "  {flag:16} {}", arg.help_text())?;
    }
    Ok(())
}

fn version_string() -> String {
    let cpu = CURRENT_PLATFORM.split('-').next().unwrap_or("unknown");
    let version = env!("CARGO_PKG_VERSION");
    format!("{BIN_NAME} {version} {cpu}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lists_every_flag() {
        let mut out = Vec::new();
        write_help(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Version: img-filter "));
        assert!(text.contains("Usage: img-filter [flags] path/to/image"));
        for flag in ["-o path", "-f format", "-i format", "-q value", "-help"] {
            assert!(text.contains(flag), "missing {flag} in:\n{text}");
        }
    }
}
