use serde::{Deserialize, Serialize};

use crate::collectors::memory::MemoryReading;

/// One immutable set of measured values, produced per loop iteration and
/// sent to the collector exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSnapshot {
    pub cpu_percent: f64,
    pub ram_used_gb: f64,
    pub ram_used_percent: f64,
    /// Degrees Celsius; `0` doubles as the "unavailable" sentinel on the
    /// wire. Check `temperature_available` to tell the two apart.
    pub temperature_c: f64,
    #[serde(skip)]
    pub temperature_available: bool,
}

impl SystemSnapshot {
    /// Combines the collector outputs. A failed temperature reading is
    /// passed as `None` and substituted with the `0` sentinel.
    pub fn assemble(cpu_percent: f64, memory: MemoryReading, temperature: Option<f64>) -> Self {
        Self {
            cpu_percent,
            ram_used_gb: memory.used_gb,
            ram_used_percent: memory.used_percent,
            temperature_c: temperature.unwrap_or(0.0),
            temperature_available: temperature.is_some(),
        }
    }
}
