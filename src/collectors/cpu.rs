use std::time::Duration;

use sysinfo::System;

use crate::error::CollectionError;

/// Window between the two counter refreshes that the utilization average is
/// computed over.
pub const SAMPLE_WINDOW: Duration = Duration::from_secs(1);

/// Average CPU utilization (0-100) across all cores over [`SAMPLE_WINDOW`].
///
/// sysinfo derives usage from the delta between two refreshes, so this
/// refreshes, sleeps the window, and refreshes again before reading.
pub async fn cpu_percent(system: &mut System) -> Result<f64, CollectionError> {
    system.refresh_cpu_all();
    tokio::time::sleep(SAMPLE_WINDOW).await;
    system.refresh_cpu_all();

    let cpus = system.cpus();
    if cpus.is_empty() {
        return Err(CollectionError::Unavailable("no CPUs reported"));
    }

    let total: f64 = cpus.iter().map(|cpu| f64::from(cpu.cpu_usage())).sum();
    Ok(total / cpus.len() as f64)
}
