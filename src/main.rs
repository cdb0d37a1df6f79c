use std::io::{self, BufWriter};

use clap::Parser;

use autoweka_tools::cli::ParamTableArgs;
use autoweka_tools::error::Result;
use autoweka_tools::logging;
use autoweka_tools::params::collect_sections;
use autoweka_tools::render::write_document;

fn main() {
    logging::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = ParamTableArgs::parse();

    // A missing root is not an error: every table just comes out empty.
    let sections = collect_sections(&args.param_dir)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_document(&mut out, &sections)
}
