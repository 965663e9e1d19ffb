use clap::Parser;

use randfill::cli::{self, Args};
use randfill::error::Result;

fn main() {
    let args = Args::parse();

    if let Err(e) = run_app(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_app(args: Args) -> Result<()> {
    cli::run(args)?;
    Ok(())
}
