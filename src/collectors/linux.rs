use std::fs;
use std::path::PathBuf;

use crate::error::CollectionError;

use super::temperature::TemperatureSource;

const THERMAL_ZONE_PATH: &str = "/sys/class/thermal/thermal_zone0/temp";

/// Reads the CPU temperature from the kernel's thermal-zone pseudo-file,
/// which exposes millidegrees Celsius as ASCII text.
pub struct ThermalZoneSource {
    path: PathBuf,
}

impl ThermalZoneSource {
    /// Source reading from an explicit path; tests point this at a fixture.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for ThermalZoneSource {
    fn default() -> Self {
        Self::at(THERMAL_ZONE_PATH)
    }
}

impl TemperatureSource for ThermalZoneSource {
    fn name(&self) -> &'static str {
        "thermal-zone"
    }

    fn measure(&self) -> Result<f64, CollectionError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| CollectionError::Read {
            path: self.path.display().to_string(),
            source,
        })?;

        let trimmed = raw.trim();
        let millidegrees: f64 = trimmed.parse().map_err(|_| CollectionError::Parse {
            path: self.path.display().to_string(),
            content: trimmed.to_string(),
        })?;

        Ok(millidegrees / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn fixture(name: &str, content: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("hostbeat-thermal-{name}-{}", std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn parses_millidegrees_with_trailing_newline() {
        let path = fixture("ok", "45000\n");
        let source = ThermalZoneSource::at(&path);
        assert_eq!(source.measure().unwrap(), 45.0);
        fs::remove_file(path).ok();
    }

    #[test]
    fn fractional_reading() {
        let path = fixture("fractional", "55300");
        let source = ThermalZoneSource::at(&path);
        assert!((source.measure().unwrap() - 55.3).abs() < 1e-9);
        fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let source = ThermalZoneSource::at("/nonexistent/thermal_zone0/temp");
        assert!(matches!(
            source.measure().unwrap_err(),
            CollectionError::Read { .. }
        ));
    }

    #[test]
    fn garbage_content_is_a_parse_error() {
        let path = fixture("garbage", "not-a-number\n");
        let source = ThermalZoneSource::at(&path);
        match source.measure().unwrap_err() {
            CollectionError::Parse { content, .. } => assert_eq!(content, "not-a-number"),
            other => panic!("expected parse error, got {other}"),
        }
        fs::remove_file(path).ok();
    }
}
