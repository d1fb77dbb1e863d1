// File: crates/weightplot-cli/src/main.rs
// Summary: Pipeline driver: read the XML weight log, smooth the series,
// and plot raw weights against the trend as a PostScript chart.

mod ingest;

use std::fs;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use weightplot_core::{smoothed, ChartLayout, Smoothing, TrendRenderer};
use weightplot_ps::PostScriptSurface;

const USAGE: &str = "usage: weightplot <input.xml> [output.ps] [--smoothing exponential|window]";

struct Options {
    input: PathBuf,
    output: PathBuf,
    smoothing: Smoothing,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options> {
    let mut input = None;
    let mut output = None;
    let mut smoothing = Smoothing::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--smoothing" => {
                let value = args.next().with_context(|| USAGE.to_string())?;
                smoothing = Smoothing::parse(&value).with_context(|| {
                    format!("unknown smoothing '{value}' (expected exponential or window)")
                })?;
            }
            _ if input.is_none() => input = Some(PathBuf::from(arg)),
            _ if output.is_none() => output = Some(PathBuf::from(arg)),
            _ => bail!("unexpected argument '{arg}'\n{USAGE}"),
        }
    }

    let input = input.with_context(|| USAGE.to_string())?;
    let output = output.unwrap_or_else(|| input.with_extension("ps"));
    Ok(Options { input, output, smoothing })
}

fn main() -> Result<()> {
    let opts = parse_args(std::env::args().skip(1))?;

    let text = fs::read_to_string(&opts.input)
        .with_context(|| format!("reading {}", opts.input.display()))?;
    let log = ingest::parse_document(&text)
        .with_context(|| format!("parsing {}", opts.input.display()))?;

    // Ingestion is best-effort; the run fails here, before any output, if
    // anything was malformed.
    if log.has_error() {
        bail!("{} contains malformed records", opts.input.display());
    }
    println!(
        "Loaded {} entries (seed average {})",
        log.len(),
        log.seed_average()
    );

    let file = fs::File::create(&opts.output)
        .with_context(|| format!("creating {}", opts.output.display()))?;
    let surface = PostScriptSurface::new(BufWriter::new(file))
        .with_context(|| format!("writing {}", opts.output.display()))?;

    let mut renderer =
        TrendRenderer::new(surface, log.seed_average(), ChartLayout::default());
    for (date, weight, average) in smoothed(&log, opts.smoothing) {
        renderer
            .plot(date, weight, average)
            .with_context(|| format!("plotting entry {date}"))?;
    }
    renderer
        .finish()
        .finish()
        .with_context(|| format!("finalizing {}", opts.output.display()))?;

    println!("Wrote {}", opts.output.display());
    Ok(())
}
