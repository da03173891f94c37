use anyhow::Context;
use clap::Parser;
use str_dist::{
    report::{DEFAULT_LEFT, DEFAULT_RIGHT},
    Report, ReportOptions,
};
use tracing_subscriber::EnvFilter;

/// Compute distances between two strings using different methods.
#[derive(Parser, Debug)]
#[command(name = "str-dist", version, about)]
struct Cli {
    #[arg(default_value = DEFAULT_LEFT)]
    left: String,

    #[arg(default_value = DEFAULT_RIGHT)]
    right: String,

    /// Bucket count of the code point histograms
    #[arg(long, default_value_t = 10)]
    bins: usize,

    /// Text distance algorithm to evaluate, repeatable (default: all)
    #[arg(long = "algorithm", value_name = "NAME")]
    algorithms: Vec<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log every computed metric to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let mut options = ReportOptions {
        bins: cli.bins,
        ..Default::default()
    };
    if !cli.algorithms.is_empty() {
        options.algorithms = cli.algorithms;
    }

    let report = Report::build(&cli.left, &cli.right, &options);

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing report")?
        );
    } else {
        println!("{report}");
    }
    Ok(())
}
