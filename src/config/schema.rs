use chrono::NaiveDate;
use serde::Deserialize;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_num_servers")]
    pub num_servers: u32,
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,
    #[serde(default = "default_num_days")]
    pub num_days: u32,
    #[serde(default = "default_missing_data_prob")]
    pub missing_data_prob: f64,
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u32,
    #[serde(default)]
    pub execution: ExecutionMode,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    Sequential,
    #[default]
    Parallel,
}

impl ExecutionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Parallel => "parallel",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
}
