mod output;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use typedex_ingest::{enrich_batch, parse_records};
use typedex_matchup::TypeProfile;

/// Number of enriched records echoed after a batch
const SAMPLE_SIZE: usize = 5;

#[derive(Parser, Debug)]
#[command(name = "typedex", version, about = "Pokemon type matchups")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show what a type profile hits hard, is weak to, resists and is immune to
    Matchup {
        /// One or two types: `fire`, `ground flying` or `ground/flying`
        #[arg(required = true)]
        types: Vec<String>,

        /// Print the relations as JSON
        #[arg(long)]
        json: bool,
    },

    /// Attach type relations to a JSON array of Pokemon records
    Enrich {
        /// JSON file holding an array of records
        input: PathBuf,

        /// Where to write the enriched array (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_tracing();

    match Cli::parse().command {
        Command::Matchup { types, json } => run_matchup(&types, json),
        Command::Enrich { input, output } => run_enrich(&input, output.as_deref()),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_matchup(args: &[String], json: bool) -> Result<()> {
    let names: Vec<&str> = args.iter().flat_map(|arg| arg.split('/')).collect();

    let profile = TypeProfile::parse(names.as_slice())
        .with_context(|| format!("Cannot compute matchups for {:?}", names.join("/")))?;
    let relations = profile.relations();

    if json {
        println!("{}", serde_json::to_string_pretty(&relations)?);
    } else {
        print!("{}", output::render_relations(&profile, &relations));
    }

    Ok(())
}

fn run_enrich(input: &Path, output: Option<&Path>) -> Result<()> {
    let raw = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let records = parse_records(&raw)
        .with_context(|| format!("Failed to parse records from {}", input.display()))?;

    tracing::info!(count = records.len(), input = %input.display(), "Enriching records");

    let report = enrich_batch(&records);

    tracing::info!(
        succeeded = report.succeeded(),
        failed = report.failed(),
        total = report.total(),
        "Batch complete"
    );
    for sample in output::lowest_numbered(&report.enriched, SAMPLE_SIZE) {
        tracing::info!("{}", output::render_sample(sample));
    }

    let body = serde_json::to_string_pretty(&report.enriched)?;
    match output {
        Some(path) => {
            fs::write(path, body + "\n")
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(output = %path.display(), "Wrote enriched records");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", body)?;
        }
    }

    Ok(())
}
