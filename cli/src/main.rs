//! lucky-dip: print lottery draws to the terminal
//!
//! Each draw is written as `slot-<i>=<n>` lines, or as a JSON object keyed by
//! slot name with `--json`. `--fields` declares which form fields exist;
//! slots without a field are skipped (or fail the run with `--strict`).
//! Logs go to stderr; set `RUST_LOG=debug` to see skipped slots.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{Map, Value};
use tracing::{debug, info};

use lucky_dip_core_rs::sink::{FormSlots, WriterSink};
use lucky_dip_core_rs::{DrawGenerator, DrawRecord, GeneratorConfig, MissingSlotPolicy};

#[derive(Parser, Debug)]
#[command(name = "lucky-dip", about = "Generate six unique lottery numbers in ascending order")]
struct Args {
    /// JSON generator config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fixed RNG seed (overrides the config file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Slot name prefix (overrides the config file)
    #[arg(short, long)]
    prefix: Option<String>,

    /// Form fields present in the target, comma separated (default: all six slots)
    #[arg(short, long, value_delimiter = ',')]
    fields: Vec<String>,

    /// Number of draws to print
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Print JSON objects instead of name=value lines
    #[arg(long)]
    json: bool,

    /// Fail on a missing output slot instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Print a replayable record of a single draw
    #[arg(long, conflicts_with_all = ["count", "json", "fields"])]
    record: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args, &mut out)
}

fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let config = build_config(args)?;
    let generator = DrawGenerator::new(config).context("invalid generator config")?;
    let prefix = generator.config().slot_prefix.clone();

    if args.record {
        let record = DrawRecord::capture(&generator)?;
        info!(seed = record.rng_seed, draw = %record.draw, "draw recorded");
        writeln!(out, "{}", record.to_json()?)?;
        return Ok(());
    }

    let (mut rng, seed) = generator.source();
    info!(seed, count = args.count, "generating draws");

    for i in 0..args.count {
        let report = if args.json {
            let mut form = declared_form(&prefix, &args.fields);
            let report = generator.generate_and_populate(&mut rng, &mut form)?;
            writeln!(out, "{}", Value::Object(form_to_json(&form)))?;
            report
        } else {
            if i > 0 {
                writeln!(out)?;
            }
            let mut sink = if args.fields.is_empty() {
                WriterSink::new(&mut *out, &prefix)
            } else {
                WriterSink::with_fields(&mut *out, &prefix, args.fields.iter().cloned())
            };
            generator.generate_and_populate(&mut rng, &mut sink)?
        };
        debug!(
            draw = %report.draw,
            skipped = report.skipped.len(),
            "draw written"
        );
    }

    Ok(())
}

/// Merge the config file (if any) with command-line overrides
fn build_config(args: &Args) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!(file = %path.display(), "loading generator config");
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            GeneratorConfig::from_json(&json)?
        }
        None => GeneratorConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.rng_seed = Some(seed);
    }
    if let Some(prefix) = &args.prefix {
        config.slot_prefix = prefix.clone();
    }
    if args.strict {
        config.missing_slot = MissingSlotPolicy::Fail;
    }

    config.validate()?;
    Ok(config)
}

fn declared_form(prefix: &str, fields: &[String]) -> FormSlots {
    if fields.is_empty() {
        FormSlots::new(prefix)
    } else {
        FormSlots::with_fields(prefix, fields.iter().cloned())
    }
}

fn form_to_json(form: &FormSlots) -> Map<String, Value> {
    form.filled()
        .map(|(name, value)| (name.to_string(), Value::from(value)))
        .collect()
}
