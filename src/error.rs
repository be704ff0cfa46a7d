//! Error taxonomy shared across collectors, transport and startup.

use thiserror::Error;

/// A metric source failed to produce a reading.
#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed reading in {path}: {content:?}")]
    Parse { path: String, content: String },

    #[error("system query returned no data: {0}")]
    Unavailable(&'static str),

    #[error(transparent)]
    Unsupported(#[from] PlatformUnsupported),

    #[cfg(windows)]
    #[error("WMI query failed: {0}")]
    Wmi(#[from] wmi::WMIError),
}

/// Temperature collection requested on a platform with no implemented source.
#[derive(Debug, Error)]
#[error("temperature collection is not supported on {os}")]
pub struct PlatformUnsupported {
    pub os: &'static str,
}

/// Sending a snapshot to the collector endpoint failed.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("request to collector failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("collector rejected snapshot: status {status}: {body}")]
    Status { status: u16, body: String },
}
