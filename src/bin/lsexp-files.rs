// src/bin/lsexp-files.rs
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lsexp::error::Result;
use lsexp::listing;

#[derive(Parser, Debug)]
#[command(
    name = "lsexp-files",
    version = lsexp::VERSION,
    about = "List a directory's immediate files as (file1 file2 ...)"
)]
struct Args {
    /// Directory whose immediate file children are listed
    dir: PathBuf,
}

fn run(args: &Args) -> Result<()> {
    let mut out = io::stdout().lock();
    listing::write_files(&mut out, &args.dir)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
