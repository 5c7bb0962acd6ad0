use chrono::NaiveDate;

use super::schema::{Config, ExecutionMode, OutputConfig};

pub(super) fn default_num_servers() -> u32 {
    1000
}

pub(super) fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("literal date is valid")
}

pub(super) fn default_num_days() -> u32 {
    30
}

pub(super) fn default_missing_data_prob() -> f64 {
    0.1
}

pub(super) fn default_interval_secs() -> u32 {
    30
}

pub(super) fn default_output_path() -> String {
    "test_server_metrics.csv".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_servers: default_num_servers(),
            start_date: default_start_date(),
            num_days: default_num_days(),
            missing_data_prob: default_missing_data_prob(),
            interval_secs: default_interval_secs(),
            execution: ExecutionMode::default(),
            seed: None,
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}
