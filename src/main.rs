mod input;
mod output;
mod parser;
mod record;

use std::path::PathBuf;

use clap::Parser;

/// Extract structured anomaly records from free-text RAN diagnostic reports.
#[derive(Parser)]
#[command(
    name = "ran_anomaly_extract",
    about = "Extract structured anomaly records from free-text RAN diagnostic reports"
)]
struct Cli {
    /// Input payload: JSON array, single object, or newline-delimited JSON
    #[arg(default_value = "payload.json")]
    input: PathBuf,
    /// JSON output path
    #[arg(default_value = "anomalies.json")]
    out_json: PathBuf,
    /// CSV output path
    #[arg(default_value = "anomalies.csv")]
    out_csv: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let items = input::load_items(&cli.input)?;
    let records = parser::extract_records(&items);

    output::write_json(&cli.out_json, &records)?;
    output::write_csv(&cli.out_csv, &records)?;

    println!(
        "Wrote {} anomalies -> {} & {}",
        records.len(),
        cli.out_json.display(),
        cli.out_csv.display()
    );
    Ok(())
}
