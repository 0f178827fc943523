//! cla: checks that Python instance attributes are first assigned in the
//! class body, `__init__`, or `__post_init__` (rule CLA001).

#![allow(clippy::print_stderr)]

mod args;
mod driver;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::args::CliArgs;

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    if args.list_rules {
        print!("{}", driver::render_rule_listing());
        return;
    }

    let result = driver::run(&args.paths);
    for (file, error) in &result.failed_files {
        eprintln!("{}: {}", file.display(), error);
    }
    match driver::render(&result, args.format) {
        Ok(rendered) => {
            if !rendered.is_empty() {
                print!("{rendered}");
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    }
    std::process::exit(result.exit_code());
}
