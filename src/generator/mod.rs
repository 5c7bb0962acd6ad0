mod row;
mod sampler;
#[cfg(test)]
mod tests;

use chrono::{Duration, NaiveTime};
use rand::Rng;

use crate::config::Config;

pub use row::MetricRow;

use sampler::{sample_cpu, sample_mem, server_rng};

/// Generates the full time-ordered row sequence for one server.
///
/// Each day in the window is either skipped entirely (the missing-telemetry
/// draw) or emitted in full: one row per interval step from midnight up to,
/// but not including, the next midnight. All draws for a server come from a
/// stream seeded from the run seed and the server id, so a fixed seed
/// reproduces identical rows regardless of execution mode.
pub fn generate_server_rows(config: &Config, seed: u64, server_id: u32) -> Vec<MetricRow> {
    let host_name = format!("host_{}", server_id);
    let mut rng = server_rng(seed, server_id);
    let interval = Duration::seconds(i64::from(config.interval_secs));
    let rows_per_day = (86_400 / config.interval_secs) as usize;
    let mut rows = Vec::with_capacity(rows_per_day * config.num_days as usize);

    for day_offset in 0..config.num_days {
        let day = config.start_date + Duration::days(i64::from(day_offset));
        if rng.gen::<f64>() < config.missing_data_prob {
            continue;
        }

        let midnight = day.and_time(NaiveTime::MIN);
        let next_midnight = midnight + Duration::days(1);
        let mut timestamp = midnight;
        while timestamp < next_midnight {
            rows.push(MetricRow {
                timestamp,
                host_name: host_name.clone(),
                cpu_used_percent: sample_cpu(&mut rng),
                mem_used_percent: sample_mem(&mut rng),
            });
            timestamp += interval;
        }
    }

    rows
}
