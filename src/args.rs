use clap::{Args, Parser};
use serde::{Deserialize, Serialize};

#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Load all settings from a TOML configuration file instead of the flags
    #[clap(long)]
    pub config_file: Option<String>,

    /// Input files
    #[clap(flatten)]
    pub input: InputConfig,

    /// Output method
    #[clap(flatten)]
    pub output: OutputConfig,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputConfig {
    /// CSV mapping protocol numbers to keywords (columns Decimal, Keyword)
    #[clap(long, default_value = "inputfiles/protocol_number_mapping.csv")]
    pub protocol_map: String,

    /// CSV mapping destination port and protocol to a tag (columns dstport, protocol, tag)
    #[clap(long, default_value = "inputfiles/lookup_table_refer.csv")]
    pub lookup_table: String,

    /// Flow log file in version 2 format, one record per line
    #[clap(long, default_value = "inputfiles/flow_log_data.txt")]
    pub flow_log: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            protocol_map: String::from("inputfiles/protocol_number_mapping.csv"),
            lookup_table: String::from("inputfiles/lookup_table_refer.csv"),
            flow_log: String::from("inputfiles/flow_log_data.txt"),
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Output method
    #[clap(short, long, value_enum, default_value_t = ExportMethodType::File)]
    pub output: ExportMethodType,

    /// File path for the report (used if method is File)
    #[clap(long, default_value = "outputfiles/output_counts.txt")]
    pub export_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            output: ExportMethodType::File,
            export_path: String::from("outputfiles/output_counts.txt"),
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExportMethodType {
    /// The report will be printed to the console
    Print,

    /// The report will be written to a file
    File,
}

/// Settings for one run, from the flags or a configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            input: cli.input,
            output: cli.output,
        }
    }
}
