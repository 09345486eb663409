//! CLI entry point for the heart collage layout tool

use clap::Parser;
use heartcollage::io::cli::{Cli, TargetProcessor};
use heartcollage::io::logging::init_logger;

fn main() -> heartcollage::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);
    let mut processor = TargetProcessor::new(cli)?;
    processor.process()
}
