use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

/// One fixed-interval sample of a host's resource usage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRow {
    #[serde(rename = "date_time", serialize_with = "serialize_timestamp")]
    pub timestamp: NaiveDateTime,
    pub host_name: String,
    #[serde(serialize_with = "serialize_two_decimals")]
    pub cpu_used_percent: f64,
    #[serde(serialize_with = "serialize_two_decimals")]
    pub mem_used_percent: f64,
}

fn serialize_timestamp<S: Serializer>(
    timestamp: &NaiveDateTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&timestamp.format("%Y-%m-%d %H:%M:%S"))
}

// Percent columns always carry exactly two decimal places in the output.
fn serialize_two_decimals<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("{value:.2}"))
}
