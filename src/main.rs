//! Command-line renderer: reads a JSON scene description and writes the
//! rendered image.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use tracing::info;

use shape_canvas::{init_logging, AddPolicy, Canvas};

const USAGE: &str = "\
Usage: shape-canvas <config.json> [options]

Options:
  -o, --output <path>   Output image path (default: output.png)
      --no-grid         Suppress the coordinate grid
      --strict          Reject the whole scene on any invalid shape record
  -v, --verbose         Enable debug logging
  -h, --help            Show this help
";

struct Args {
    config: PathBuf,
    output: PathBuf,
    no_grid: bool,
    strict: bool,
    verbose: bool,
}

fn parse_args() -> Result<Option<Args>> {
    let mut config = None;
    let mut output = PathBuf::from("output.png");
    let mut no_grid = false;
    let mut strict = false;
    let mut verbose = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "-o" | "--output" => {
                let value = args.next().context("--output requires a path")?;
                output = PathBuf::from(value);
            }
            "--no-grid" => no_grid = true,
            "--strict" => strict = true,
            "-v" | "--verbose" => verbose = true,
            other if other.starts_with('-') => bail!("unknown option '{other}'"),
            other => {
                if config.replace(PathBuf::from(other)).is_some() {
                    bail!("only one configuration file may be given");
                }
            }
        }
    }

    let config = config.context("missing configuration file argument")?;
    Ok(Some(Args {
        config,
        output,
        no_grid,
        strict,
        verbose,
    }))
}

fn run(args: Args) -> Result<()> {
    init_logging(args.verbose);

    let (config, records) = shape_canvas::config::load_file(&args.config)
        .with_context(|| format!("failed to load scene from {}", args.config.display()))?;

    let mut canvas = Canvas::new(config)?;
    if args.strict {
        canvas = canvas.with_policy(AddPolicy::Strict);
    }
    if args.no_grid {
        canvas.hide_grid();
    }

    let total = records.len();
    let added = canvas.add_records(&records)?;
    info!(added, total, "scene loaded");

    canvas.render().save(&args.output)?;
    Ok(())
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprint!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
