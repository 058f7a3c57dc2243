use std::io;
use std::path::PathBuf;
use clap::Parser;

use xzqh_reader::xzqh::prompt;
use xzqh_reader::{PromptOptions, XzqhReader};

/// Look up administrative regions by name in a binary region file
#[derive(Parser, Debug)]
#[command(name = "xzqh", version, long_about = None)]
struct Args {
    /// Path to the region data file
    #[arg(default_value = "xzqh.bin")]
    file: PathBuf,

    /// Run a single query and exit instead of prompting
    #[arg(short, long)]
    name: Option<String>,

    /// Input that ends the interactive loop
    #[arg(long = "quit", default_value = "q")]
    quit_word: String,

    /// Enable verbose logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    logger(args.verbose, std::env::var("RUST_LOG").ok().as_deref()).init();

    if let Err(e) = run(&args) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}

/// Warn by default, `RUST_LOG` directives on top, `--verbose` raises to debug.
fn logger(verbose: bool, rust_log: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Warn);
    if let Some(filters) = rust_log {
        builder.parse_filters(filters);
    }
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    println!("Loading {}...", args.file.display());
    let reader = XzqhReader::open(&args.file).map_err(|e| {
        format!(
            "Could not load {}: {}\nMake sure the file was produced by the region data generator.",
            args.file.display(),
            e
        )
    })?;
    let data = reader.data();

    let stdout = io::stdout();
    match &args.name {
        Some(name) => {
            prompt::answer(&data, name, &mut stdout.lock())?;
        }
        None => {
            let options = PromptOptions::with_quit_word(args.quit_word.as_str());
            prompt::run(&data, io::stdin().lock(), stdout.lock(), &options)?;
        }
    }
    Ok(())
}
