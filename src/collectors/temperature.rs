use crate::error::CollectionError;

/// A platform-specific thermal reading capability. One concrete source is
/// selected at startup by [`platform_source`]; everything downstream of the
/// selection is platform-agnostic.
pub trait TemperatureSource: Send {
    fn name(&self) -> &'static str;

    /// Current temperature in degrees Celsius.
    fn measure(&self) -> Result<f64, CollectionError>;
}

/// Picks the temperature source for the current platform. On platforms with
/// no implemented source, returns one that fails every reading, so the loop
/// reports the sentinel each iteration.
pub fn platform_source() -> Box<dyn TemperatureSource> {
    #[cfg(target_os = "linux")]
    {
        Box::new(super::linux::ThermalZoneSource::default())
    }
    #[cfg(windows)]
    {
        Box::new(super::windows::WmiProbeSource::new())
    }
    #[cfg(not(any(target_os = "linux", windows)))]
    {
        Box::new(UnsupportedSource)
    }
}

#[cfg(not(any(target_os = "linux", windows)))]
struct UnsupportedSource;

#[cfg(not(any(target_os = "linux", windows)))]
impl TemperatureSource for UnsupportedSource {
    fn name(&self) -> &'static str {
        "unsupported"
    }

    fn measure(&self) -> Result<f64, CollectionError> {
        Err(crate::error::PlatformUnsupported {
            os: std::env::consts::OS,
        }
        .into())
    }
}

/// Converts a WMI-style reading in tenths of a Kelvin to degrees Celsius.
pub fn tenths_kelvin_to_celsius(raw: u32) -> f64 {
    f64::from(raw) / 10.0 - 273.15
}
