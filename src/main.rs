use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, anyhow};
use clap::{ArgAction, Parser};
use confjson::{parse, to_json, util::position::Location};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// confjson reads a configuration document from standard input and writes
/// the values it describes as JSON.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the JSON file to write.
    #[arg(short, long)]
    output: PathBuf,

    /// Write the JSON on a single line instead of pretty-printing it.
    #[arg(long)]
    compact: bool,

    /// Log more detail to standard error (`-v` for debug, `-vv` for trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        },
    }
}

/// Installs a stderr subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .with_target(false)
                             .init();
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mut source = String::new();
    io::stdin().read_to_string(&mut source)
               .context("failed to read the configuration from standard input")?;

    let document = parse(&source).map_err(|e| {
                                      let location = Location::of(&source, e.offset());
                                      anyhow!("{location}: {e}")
                                  })?;

    let json = to_json(&document, !args.compact).context("failed to encode the result as JSON")?;
    fs::write(&args.output, json).with_context(|| {
                                     format!("failed to write {}", args.output.display())
                                 })?;

    info!(output = %args.output.display(), values = document.values().len(), "wrote document");
    Ok(())
}
