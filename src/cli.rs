use crate::report::{render_assessment, render_metric_table};
use crate::server;
use clap::{Args, Parser, Subcommand};
use sample_quality::assessment::{assess, Assessment};
use sample_quality::error::AppError;
use sample_quality::import::SampleImporter;
use sample_quality::prediction::{HeuristicPredictor, QualityPredictor};
use sample_quality::quality::{metric_definitions, Domain, Sample};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Sample Quality",
    about = "Evaluate milk, water, and wine samples against quality thresholds",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Assess samples from a JSON document or a CSV export
    Evaluate(EvaluateArgs),
    /// Print the metric definitions for a domain
    Metrics(MetricsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// Sample domain: milk, water, or wine
    #[arg(long)]
    domain: Domain,
    /// JSON document mapping field names to values
    #[arg(long, conflicts_with = "csv", required_unless_present = "csv")]
    sample: Option<PathBuf>,
    /// CSV export with one sample per row
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Emit JSON instead of a text report
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct MetricsArgs {
    #[arg(long)]
    domain: Domain,
    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluate(args),
        Command::Metrics(args) => run_metrics(args),
    }
}

fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        domain,
        sample,
        csv,
        json,
    } = args;

    let samples = match (sample, csv) {
        (Some(path), _) => {
            let document = std::fs::read_to_string(path)?;
            vec![serde_json::from_str::<Sample>(&document)?]
        }
        (None, Some(path)) => SampleImporter::from_path(domain, path)?,
        (None, None) => Vec::new(),
    };

    let predictor = HeuristicPredictor::new();
    let assessments = samples
        .iter()
        .map(|sample| {
            let prediction = predictor.predict(domain, sample);
            assess(domain, sample, &prediction)
        })
        .collect::<Result<Vec<Assessment>, _>>()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&assessments)?);
        return Ok(());
    }

    for (index, assessment) in assessments.iter().enumerate() {
        if assessments.len() > 1 {
            println!("Sample {}", index + 1);
        }
        print!("{}", render_assessment(assessment));
    }
    Ok(())
}

fn run_metrics(args: MetricsArgs) -> Result<(), AppError> {
    let definitions = metric_definitions(args.domain);
    if args.json {
        println!("{}", serde_json::to_string_pretty(definitions)?);
    } else {
        print!("{}", render_metric_table(args.domain, definitions));
    }
    Ok(())
}
