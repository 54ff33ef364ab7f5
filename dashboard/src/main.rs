use anyhow::Context;
use clap::Parser;
use log::info;
use source::fetch::DatasetSource;
use source::synthetic::{build_synthetic_dataset, SyntheticConfig};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use workflow::config::DashboardConfig;
use workflow::runner::Runner;

mod gui_bridge;
mod source;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Launch records dashboard driver")]
struct Args {
    /// CSV file path or http(s) URL of the launch table
    #[arg(long)]
    source: Option<String>,
    /// Load a dashboard config from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Generate a seeded synthetic table with this many rows instead of reading a source
    #[arg(long)]
    synthetic_rows: Option<usize>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Site to select; `ALL` selects every site
    #[arg(long)]
    site: Option<String>,
    #[arg(long)]
    payload_low: Option<f64>,
    #[arg(long)]
    payload_high: Option<f64>,
    /// Print both chart tables for the given controls as JSON
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Serve the chart tables over HTTP until Ctrl+C
    #[arg(long, default_value_t = false)]
    serve: bool,
    #[arg(long)]
    bind: Option<SocketAddr>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::default(),
    }
    .with_overrides(args.source.clone(), args.bind);

    let dataset = match args.synthetic_rows {
        Some(rows) => build_synthetic_dataset(&SyntheticConfig {
            rows,
            seed: args.seed,
            ..Default::default()
        })?,
        None => DatasetSource::parse(&config.source)
            .load()
            .with_context(|| format!("loading launch records from {}", config.source))?,
    };

    let runner = Runner::new(Arc::new(dataset), &config);

    if args.offline {
        let controls =
            runner.controls_from(args.site.as_deref(), args.payload_low, args.payload_high);
        let result = runner.execute(&controls);
        let report =
            serde_json::to_string_pretty(&result).context("serializing dashboard result")?;
        println!("{}", report);
    }

    if args.serve {
        gui_bridge::bridge::serve(runner, config.bind)?;
    } else if !args.offline {
        info!(
            "loaded {} records; pass --offline or --serve to produce charts",
            runner.dataset().len()
        );
    }

    Ok(())
}
