//! Metric collectors. Each one acquires exactly one metric from the OS;
//! temperature is the only platform-dependent source and lives behind the
//! [`temperature::TemperatureSource`] trait.

#[cfg(target_os = "linux")]
pub mod linux;
#[cfg(windows)]
pub mod windows;

pub mod cpu;
pub mod memory;
pub mod temperature;

use async_trait::async_trait;
use sysinfo::System;

use crate::error::CollectionError;
use self::memory::MemoryReading;
use self::temperature::TemperatureSource;

/// The three probe capabilities the polling loop needs. Production code uses
/// [`SystemProbes`]; tests substitute fakes to script per-collector failures.
#[async_trait]
pub trait Probes: Send {
    /// Average CPU utilization over the 1-second sampling window. Blocks
    /// (asynchronously) for that window.
    async fn cpu_percent(&mut self) -> Result<f64, CollectionError>;

    async fn memory(&mut self) -> Result<MemoryReading, CollectionError>;

    async fn temperature(&mut self) -> Result<f64, CollectionError>;
}

/// Real probes backed by sysinfo plus the platform-selected temperature
/// source.
pub struct SystemProbes {
    system: System,
    temperature: Box<dyn TemperatureSource>,
}

impl SystemProbes {
    pub fn new(temperature: Box<dyn TemperatureSource>) -> Self {
        Self {
            system: System::new(),
            temperature,
        }
    }
}

#[async_trait]
impl Probes for SystemProbes {
    async fn cpu_percent(&mut self) -> Result<f64, CollectionError> {
        cpu::cpu_percent(&mut self.system).await
    }

    async fn memory(&mut self) -> Result<MemoryReading, CollectionError> {
        memory::memory_usage(&mut self.system)
    }

    async fn temperature(&mut self) -> Result<f64, CollectionError> {
        self.temperature.measure()
    }
}
