use std::collections::HashMap;

use chrono::{Duration, NaiveDate};

use crate::config::{Config, ExecutionMode, OutputConfig};

use super::generate_server_rows;

fn test_config(num_servers: u32, num_days: u32, missing_data_prob: f64) -> Config {
    Config {
        num_servers,
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
        num_days,
        missing_data_prob,
        interval_secs: 30,
        execution: ExecutionMode::Sequential,
        seed: Some(7),
        output: OutputConfig {
            path: "test_server_metrics.csv".to_string(),
        },
    }
}

#[test]
fn full_day_covers_thirty_second_grid() {
    let config = test_config(1, 1, 0.0);
    let rows = generate_server_rows(&config, 7, 1);

    assert_eq!(rows.len(), 2880);
    assert_eq!(rows[0].timestamp.to_string(), "2024-01-01 00:00:00");
    assert_eq!(
        rows.last().expect("non-empty").timestamp.to_string(),
        "2024-01-01 23:59:30"
    );
    for pair in rows.windows(2) {
        assert_eq!(pair[1].timestamp - pair[0].timestamp, Duration::seconds(30));
    }
    assert!(rows.iter().all(|row| row.host_name == "host_1"));
}

#[test]
fn coarser_interval_shrinks_the_grid() {
    let mut config = test_config(1, 1, 0.0);
    config.interval_secs = 3600;
    let rows = generate_server_rows(&config, 7, 1);

    assert_eq!(rows.len(), 24);
    assert_eq!(rows[0].timestamp.to_string(), "2024-01-01 00:00:00");
    assert_eq!(
        rows.last().expect("non-empty").timestamp.to_string(),
        "2024-01-01 23:00:00"
    );
}

#[test]
fn non_dividing_interval_stops_short_of_midnight() {
    let mut config = test_config(1, 1, 0.0);
    config.interval_secs = 7000;
    let rows = generate_server_rows(&config, 7, 1);

    // 86400 / 7000 leaves a remainder; the grid ends wherever the last
    // full step lands before midnight.
    assert_eq!(rows.len(), 13);
    assert_eq!(rows[0].timestamp.to_string(), "2024-01-01 00:00:00");
    assert_eq!(
        rows.last().expect("non-empty").timestamp.to_string(),
        "2024-01-01 23:20:00"
    );
}

#[test]
fn included_days_are_all_or_nothing() {
    let config = test_config(1, 60, 0.5);
    let rows = generate_server_rows(&config, 123, 1);

    let mut per_day: HashMap<NaiveDate, usize> = HashMap::new();
    for row in &rows {
        *per_day.entry(row.timestamp.date()).or_default() += 1;
    }
    assert!(!per_day.is_empty(), "60 days at p=0.5 should keep some");
    assert!(per_day.len() < 60, "60 days at p=0.5 should drop some");
    for (day, count) in per_day {
        assert_eq!(count, 2880, "day {day} is partial");
    }
}

#[test]
fn values_stay_in_bounds_with_two_decimals() {
    let config = test_config(1, 1, 0.0);
    let rows = generate_server_rows(&config, 99, 1);

    for row in &rows {
        assert!((10.0..=90.0).contains(&row.cpu_used_percent));
        assert!((20.0..=95.0).contains(&row.mem_used_percent));
        assert_eq!(
            row.cpu_used_percent,
            (row.cpu_used_percent * 100.0).round() / 100.0
        );
        assert_eq!(
            row.mem_used_percent,
            (row.mem_used_percent * 100.0).round() / 100.0
        );
    }
}

#[test]
fn missing_probability_one_yields_no_rows() {
    let config = test_config(1, 10, 1.0);
    assert!(generate_server_rows(&config, 7, 1).is_empty());
}

#[test]
fn missing_probability_zero_yields_the_full_window() {
    let config = test_config(1, 3, 0.0);
    assert_eq!(generate_server_rows(&config, 7, 1).len(), 3 * 2880);
}

#[test]
fn zero_days_yields_no_rows() {
    let config = test_config(1, 0, 0.0);
    assert!(generate_server_rows(&config, 7, 1).is_empty());
}

#[test]
fn same_seed_reproduces_identical_rows() {
    let config = test_config(1, 5, 0.3);
    let first = generate_server_rows(&config, 2024, 1);
    let second = generate_server_rows(&config, 2024, 1);
    assert_eq!(first, second);
}

#[test]
fn different_servers_draw_distinct_values() {
    let config = test_config(2, 1, 0.0);
    let one = generate_server_rows(&config, 7, 1);
    let two = generate_server_rows(&config, 7, 2);

    assert_eq!(one.len(), two.len());
    let cpu_one: Vec<f64> = one.iter().map(|row| row.cpu_used_percent).collect();
    let cpu_two: Vec<f64> = two.iter().map(|row| row.cpu_used_percent).collect();
    assert_ne!(cpu_one, cpu_two);
}
