//! # Probe Endpoint Model
//!
//! An endpoint is either a local socket path or a host and port. It can be
//! built from positional arguments (one argument is a path, two are a host
//! and a port) or parsed from a single string:
//! * **Local**: `/run/app.sock`, `./app.sock`, `unix:/run/app.sock`.
//! * **Network**: `127.0.0.1:2375`, `example.org:80`, `tcp://example.org:80`.
//! * **Lists**: comma separated, e.g. `/run/app.sock, 127.0.0.1:2375`.

use std::fmt;
use std::str::FromStr;

use crate::error::UsageError;
use crate::network::address::{LocalSocketAddress, NetworkAddress};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// A filesystem-path-addressed stream socket.
    Local(LocalSocketAddress),
    /// A TCP endpoint reached over IPv4.
    Network(NetworkAddress),
}

impl Endpoint {
    /// Selects the endpoint kind from the number of arguments.
    ///
    /// One argument is a socket path, two are a host followed by a port.
    /// Any other count is a usage error.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, UsageError> {
        match args {
            [path] => Ok(Endpoint::Local(LocalSocketAddress::new(path.as_ref())?)),
            [host, port] => Ok(Endpoint::Network(NetworkAddress::parse(
                host.as_ref(),
                port.as_ref(),
            )?)),
            _ => Err(UsageError::WrongArity(args.len())),
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Endpoint::Local(_))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Local(addr) => write!(f, "{addr}"),
            Endpoint::Network(addr) => write!(f, "tcp://{addr}"),
        }
    }
}

impl From<LocalSocketAddress> for Endpoint {
    fn from(addr: LocalSocketAddress) -> Self {
        Endpoint::Local(addr)
    }
}

impl From<NetworkAddress> for Endpoint {
    fn from(addr: NetworkAddress) -> Self {
        Endpoint::Network(addr)
    }
}

impl FromStr for Endpoint {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s: &str = s.trim();

        if let Some(path) = s.strip_prefix("unix:") {
            return Ok(Endpoint::Local(LocalSocketAddress::new(path)?));
        }

        if s.starts_with('/') || s.starts_with('.') {
            return Ok(Endpoint::Local(LocalSocketAddress::new(s)?));
        }

        let authority: &str = s.strip_prefix("tcp://").unwrap_or(s);
        if authority.starts_with('[') {
            return Err(UsageError::Ipv6Unsupported(authority.to_string()));
        }

        let Some((host, port)) = authority.rsplit_once(':') else {
            return Err(UsageError::InvalidEndpoint(s.to_string()));
        };

        Ok(Endpoint::Network(NetworkAddress::parse(host, port)?))
    }
}

/// Parses a comma-separated list of endpoints, skipping empty entries.
pub fn parse_list(s: &str) -> Result<Vec<Endpoint>, UsageError> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(Endpoint::from_str)
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
