use sysinfo::System;

use crate::error::CollectionError;

const BYTES_PER_GB: f64 = 1_000_000_000.0;

/// Current memory usage, absolute and relative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryReading {
    /// Used memory in decimal gigabytes (1e9 bytes).
    pub used_gb: f64,
    /// Used memory as a percentage of total, 0-100.
    pub used_percent: f64,
}

pub fn memory_usage(system: &mut System) -> Result<MemoryReading, CollectionError> {
    system.refresh_memory();

    let total = system.total_memory();
    if total == 0 {
        return Err(CollectionError::Unavailable("total memory reported as zero"));
    }
    let used = system.used_memory();

    Ok(MemoryReading {
        used_gb: used as f64 / BYTES_PER_GB,
        used_percent: used as f64 / total as f64 * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_plausible_values_from_this_host() {
        let mut system = System::new();
        let reading = memory_usage(&mut system).unwrap();
        assert!(reading.used_gb > 0.0);
        assert!(reading.used_percent > 0.0 && reading.used_percent <= 100.0);
    }
}
