use std::io;

use thiserror::Error;

/// Why a probe failed. Only surfaced by the `diagnose` functions; the
/// boolean probes collapse every variant into `false`.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("local sockets are not supported on this platform")]
    Unsupported,
    #[error("failed to resolve '{host}': {source}")]
    Resolve {
        host: String,
        #[source]
        source: io::Error,
    },
    #[error("'{host}' did not resolve to any IPv4 address")]
    NoAddress { host: String },
    #[error("connect to {target} failed: {source}")]
    Connect {
        target: String,
        #[source]
        source: io::Error,
    },
}

impl ProbeError {
    /// Whether the failure happened before any socket was opened.
    pub fn is_resolution(&self) -> bool {
        matches!(self, ProbeError::Resolve { .. } | ProbeError::NoAddress { .. })
    }
}
