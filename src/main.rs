use clap::Parser;
use gcodesvg::cli::{run, Args};
use gcodesvg::init_logging;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose)?;

    run(&args)
}
