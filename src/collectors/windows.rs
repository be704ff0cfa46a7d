use serde::Deserialize;
use wmi::{COMLibrary, WMIConnection};

use crate::error::CollectionError;

use super::temperature::{tenths_kelvin_to_celsius, TemperatureSource};

#[derive(Deserialize)]
#[serde(rename = "Win32_TemperatureProbe")]
#[serde(rename_all = "PascalCase")]
struct TemperatureProbe {
    current_temperature: u32,
}

/// Reads the CPU temperature through WMI's `Win32_TemperatureProbe` class,
/// which reports tenths of a Kelvin.
pub struct WmiProbeSource;

impl WmiProbeSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WmiProbeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TemperatureSource for WmiProbeSource {
    fn name(&self) -> &'static str {
        "wmi-probe"
    }

    fn measure(&self) -> Result<f64, CollectionError> {
        // COM apartments are per-thread, so the connection is rebuilt on
        // each reading rather than held across iterations.
        let com = COMLibrary::new()?;
        let connection = WMIConnection::new(com)?;
        let probes: Vec<TemperatureProbe> = connection.query()?;

        let probe = probes
            .first()
            .ok_or(CollectionError::Unavailable("no temperature probes found"))?;
        Ok(tenths_kelvin_to_celsius(probe.current_temperature))
    }
}
