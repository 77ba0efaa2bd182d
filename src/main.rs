//! # BASIC
//!
//! A line-numbered integer BASIC.
//!

use basic::mach::{Listing, Runtime, DEFAULT_LINE_LIMIT};
use basic::term;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "A line-numbered integer BASIC interpreter")]
struct Args {
    /// Program file to load before the session starts
    file: Option<PathBuf>,

    /// Run the loaded program immediately
    #[arg(long, requires = "file")]
    run: bool,

    /// Execution count at which a single line stops the program
    #[arg(long, value_name = "N", default_value_t = DEFAULT_LINE_LIMIT)]
    line_limit: u32,
}

fn main() {
    let args = Args::parse();
    let mut runtime = Runtime::with_line_limit(args.line_limit);
    if let Some(file) = &args.file {
        match term::load(file, Listing::with_limit(args.line_limit)) {
            Ok(listing) => runtime.set_listing(listing),
            Err(error) => {
                eprintln!("{}: {}", file.display(), error);
                std::process::exit(1);
            }
        }
        if args.run {
            runtime.enter("RUN");
        }
    }
    std::process::exit(term::main(runtime));
}
