mod args;
mod flow_counts;
mod lookup_table;
mod output;
mod parsers;
mod protocol_map;
mod records;
mod tests;

use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

use anyhow::Context;
use args::{Cli, Config, ExportMethodType};
use clap::Parser;
use flow_counts::{aggregate, FlowCounts};
use log::{debug, error, info, warn};
use lookup_table::LookupTable;
use output::ReportWriter;
use protocol_map::ProtocolMap;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    // If a config file is provided it replaces the flags
    let config: Config = if let Some(config_path) = cli.config_file.clone() {
        match confy::load_path::<Config>(&config_path) {
            Ok(config) => config,
            Err(e) => {
                error!("Error loading configuration file: {:?}", e);
                std::process::exit(1);
            }
        }
    } else {
        Config::from(cli)
    };

    let start = Instant::now();
    if let Err(e) = run_with_config(&config) {
        error!("{:#}", e);
        std::process::exit(1);
    }
    info!("Duration: {:.4} seconds", start.elapsed().as_secs_f64());
}

/// Loads both tables, counts the flow log and writes the report.
fn run_with_config(config: &Config) -> anyhow::Result<FlowCounts> {
    debug!("Running with {:?}", config);

    let protocols = ProtocolMap::load(&config.input.protocol_map).with_context(|| {
        format!(
            "failed to load protocol map {:?}",
            config.input.protocol_map
        )
    })?;
    let lookup = LookupTable::load(&config.input.lookup_table).with_context(|| {
        format!(
            "failed to load lookup table {:?}",
            config.input.lookup_table
        )
    })?;
    if protocols.is_empty() {
        warn!("Protocol map is empty, no protocol number will resolve");
    }
    if lookup.is_empty() {
        warn!("Lookup table is empty, every flow will be {}", flow_counts::UNTAGGED);
    }

    let flow_log = File::open(&config.input.flow_log)
        .with_context(|| format!("failed to open flow log {:?}", config.input.flow_log))?;
    let counts = aggregate(BufReader::new(flow_log), &protocols, &lookup)
        .with_context(|| format!("failed to read flow log {:?}", config.input.flow_log))?;

    let mut writer = ReportWriter::new(config.output.output, &config.output.export_path)
        .with_context(|| {
            format!(
                "failed to open report output {:?}",
                config.output.export_path
            )
        })?;
    writer.write_report(&counts).context("failed to write report")?;
    writer
        .flush_and_close()
        .context("failed to flush report")?;

    if config.output.output == ExportMethodType::File {
        info!(
            "Processing complete. Results saved to {}",
            config.output.export_path
        );
    }
    Ok(counts)
}
