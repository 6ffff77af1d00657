//! # Address Values
//!
//! The two address kinds a probe accepts. Both are validated once at
//! construction so the probing code can hand them to the OS as-is.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::UsageError;

/// Size of `sockaddr_un::sun_path` on the current platform.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub const SUN_PATH_CAPACITY: usize = 108;
#[cfg(not(any(target_os = "linux", target_os = "android")))]
pub const SUN_PATH_CAPACITY: usize = 104;

/// Longest path accepted, leaving room for the terminating NUL.
pub const MAX_SOCKET_PATH_LEN: usize = SUN_PATH_CAPACITY - 1;

/// Filesystem path of a local (UNIX-domain) stream socket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalSocketAddress {
    path: PathBuf,
}

impl LocalSocketAddress {
    /// Validates `path` against the platform `sun_path` capacity.
    ///
    /// Paths that would not fit are rejected rather than truncated.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, UsageError> {
        let path: PathBuf = path.into();
        let len: usize = path.as_os_str().len();

        if len == 0 {
            return Err(UsageError::EmptyPath);
        }
        if path.as_os_str().as_encoded_bytes().contains(&0) {
            return Err(UsageError::PathContainsNul);
        }
        if len > MAX_SOCKET_PATH_LEN {
            return Err(UsageError::PathTooLong {
                len,
                max: MAX_SOCKET_PATH_LEN,
            });
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for LocalSocketAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unix:{}", self.path.display())
    }
}

/// A host token (IPv4 literal or DNS name) and a TCP port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkAddress {
    host: String,
    port: u16,
}

impl NetworkAddress {
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self, UsageError> {
        let host: String = host.into();
        if host.is_empty() {
            return Err(UsageError::EmptyHost);
        }
        if host.contains(':') {
            return Err(UsageError::Ipv6Unsupported(host));
        }
        Ok(Self { host, port })
    }

    /// Builds an address from a textual port, as received from a command line.
    pub fn parse(host: &str, port: &str) -> Result<Self, UsageError> {
        Self::new(host, parse_port(port)?)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for NetworkAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Parses a port number, refusing anything outside `0..=65535`.
pub fn parse_port(s: &str) -> Result<u16, UsageError> {
    s.trim()
        .parse::<u16>()
        .map_err(|_| UsageError::InvalidPort(s.to_string()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
