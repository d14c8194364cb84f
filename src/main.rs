use std::ffi::OsString;

use img_filter::{
    args::{self, Invocation},
    error::{ErrorKind, FilterError},
    help,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let arguments: Vec<_> = std::env::args_os().collect();

    if let Err(e) = real_main(arguments) {
        eprintln!("{}", e);
        if e.kind() == ErrorKind::MissingArgument {
            help::print_usage();
        }
        std::process::exit(1);
    }
}

fn real_main(args: Vec<OsString>) -> Result<(), FilterError> {
    match args::parse_args(args)? {
        Invocation::Help => help::print_help(),
        Invocation::Run(plan) => plan.execute()?,
    }
    Ok(())
}
