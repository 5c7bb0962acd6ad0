
use rayon::prelude::*;

use crate::config::{Config, ExecutionMode};
use crate::generator::{generate_server_rows, MetricRow};

/// Runs the per-server generator for every configured server and flattens
/// the results into one collection, host blocks in ascending-id order.
///
/// The parallel path fans out over rayon's global pool (one thread per
/// available core) and collects in submission order, so both modes produce
/// the same row sequence for a given seed. A panicking worker propagates to
/// the caller and aborts the run before anything is written.
pub fn generate_dataset(config: &Config, seed: u64) -> Vec<MetricRow> {
    let server_ids = 1..=config.num_servers;
    match config.execution {
        ExecutionMode::Sequential => server_ids
            .flat_map(|server_id| generate_server_rows(config, seed, server_id))
            .collect(),
        ExecutionMode::Parallel => {
            let per_server: Vec<Vec<MetricRow>> = server_ids
                .into_par_iter()
                .map(|server_id| generate_server_rows(config, seed, server_id))
                .collect();
            per_server.into_iter().flatten().collect()
        }
    }
}
