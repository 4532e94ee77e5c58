mod index;
mod output;
mod query;
mod repl;

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use termcolor::ColorChoice;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "wlx")]
#[command(about = "Terminal-first word-to-line lookup for plain text")]
struct Cli {
    /// Text file to index before the lookup session starts
    #[arg(default_value = "src/main.rs")]
    file: PathBuf,

    /// Log per-token indexing detail to stderr
    #[arg(short, long)]
    verbose: bool,

    /// When to color report output
    #[arg(long, value_enum, default_value = "auto")]
    color: ColorArg,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(value: ColorArg) -> Self {
        match value {
            ColorArg::Auto => ColorChoice::Auto,
            ColorArg::Always => ColorChoice::Always,
            ColorArg::Never => ColorChoice::Never,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let index = index::build_index(&cli.file)?;
    let color = output::stdout_color(cli.color.into());
    repl::run(&index, color)?;

    Ok(())
}

/// Logs go to stderr so the lookup transcript on stdout stays clean.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
