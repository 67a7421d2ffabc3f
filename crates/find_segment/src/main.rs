// crates/find_segment/src/main.rs

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use find_segment::find_segment;

/// Prints the \inputminted directive for a `// Segment <name>` region of a file.
#[derive(Parser, Debug)]
#[command(name = "find_segment", version, about)]
struct Cli {
    /// Source file containing the segment markers
    file_path: PathBuf,

    /// Name used in `// Segment <name> begin` / `// Segment <name> end`
    segment_name: String,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // stdout carries only the directive.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match find_segment(&cli.file_path, &cli.segment_name)? {
        Some(directive) => {
            println!("{}", directive);
            Ok(())
        }
        None => {
            log::debug!(
                "Segment '{}' not found in {}",
                cli.segment_name,
                cli.file_path.display()
            );
            std::process::exit(-1);
        }
    }
}
