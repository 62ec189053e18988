// src/bin/lsexp-git-status.rs
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use lsexp::error::Result;
use lsexp::git::{self, Scope};

#[derive(Parser, Debug)]
#[command(
    name = "lsexp-git-status",
    version = lsexp::VERSION,
    about = "Report git porcelain status as ((\"code\" . \"path\") ...)"
)]
struct Args {
    /// Pass any value to query the whole repository (-uall) instead of the
    /// current directory
    #[arg(value_name = "RECURSIVE")]
    recursive: Vec<OsString>,
}

fn run(args: &Args) -> Result<()> {
    let scope = Scope::from_arg_presence(!args.recursive.is_empty());
    let mut out = io::stdout().lock();
    git::write_status(&mut out, scope)?;
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
