//! A minimal host that starts the collector's option processing and barrier check, reports,
//! and exits.
//!
//! ```text
//! gc-probe [-XX:Name=value | -XX:+Name | -XX:-Name]... [-version]
//! ```
//!
//! Exits with 0 if the configuration is usable and 1 otherwise.

use std::process::ExitCode;

use gcbarrier::build_info;
use gcbarrier::memory_manager;
use gcbarrier::{GCBuilder, OptionError, StartupError};

const OPTION_PREFIX: &str = "-XX:";

enum Arg<'a> {
    Option { name: &'a str, value: &'a str },
    Version,
}

fn parse_arg(arg: &str) -> Result<Arg<'_>, OptionError> {
    if arg == "-version" {
        return Ok(Arg::Version);
    }
    let malformed = || OptionError::Malformed {
        arg: arg.to_string(),
    };
    let body = arg.strip_prefix(OPTION_PREFIX).ok_or_else(malformed)?;
    if let Some(name) = body.strip_prefix('+') {
        Ok(Arg::Option {
            name,
            value: "true",
        })
    } else if let Some(name) = body.strip_prefix('-') {
        Ok(Arg::Option {
            name,
            value: "false",
        })
    } else {
        let (name, value) = body.split_once('=').ok_or_else(malformed)?;
        Ok(Arg::Option { name, value })
    }
}

fn run(args: &[String]) -> Result<(), StartupError> {
    let mut builder = GCBuilder::new()?;
    let mut print_version = false;
    for arg in args {
        match parse_arg(arg)? {
            Arg::Option { name, value } => memory_manager::process(&mut builder, name, value)?,
            Arg::Version => print_version = true,
        }
    }
    let startup = memory_manager::gc_init(&builder)?;
    if print_version {
        println!("{}", build_info::version_string());
        println!(
            "GC mode: {}, heuristics: {}",
            startup.mode(),
            startup.heuristic()
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error occurred during initialization of GC");
            for line in e.diagnostics() {
                println!("Error: {}", line);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
