//! # Daemon Transport Selection
//!
//! A daemon such as `dockerd` may be reachable over its control socket and,
//! on development machines, over a plain TCP port (handy for inspecting
//! traffic). The transport is picked once at start-up by probing:
//!
//! 1. Outside production, the TCP endpoint wins if it accepts connections.
//! 2. Otherwise the local socket is used if it accepts connections.
//! 3. Otherwise there is no usable transport.

use sockprobe_common::error::UsageError;
use sockprobe_common::network::address::{LocalSocketAddress, NetworkAddress};
use sockprobe_common::network::endpoint::Endpoint;
use tracing::debug;

use crate::prober;

pub const DEFAULT_SOCKET: &str = "/var/run/docker.sock";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 2375;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaemonConfig {
    pub socket: LocalSocketAddress,
    pub tcp: NetworkAddress,
    /// In production the TCP endpoint is never considered.
    pub production: bool,
}

impl DaemonConfig {
    pub fn new(socket: &str, host: &str, port: u16, production: bool) -> Result<Self, UsageError> {
        Ok(Self {
            socket: LocalSocketAddress::new(socket)?,
            tcp: NetworkAddress::new(host, port)?,
            production,
        })
    }
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            socket: LocalSocketAddress::new(DEFAULT_SOCKET)
                .unwrap_or_else(|e| unreachable!("default socket path is valid: {e}")),
            tcp: NetworkAddress::new(DEFAULT_HOST, DEFAULT_PORT)
                .unwrap_or_else(|e| unreachable!("default tcp address is valid: {e}")),
            production: true,
        }
    }
}

/// Probes the configured transports and returns the first usable one.
pub fn select_transport(cfg: &DaemonConfig) -> Option<Endpoint> {
    select_transport_with(cfg, prober::probe)
}

/// [`select_transport`] with a caller-supplied probe.
pub fn select_transport_with<F>(cfg: &DaemonConfig, mut probe: F) -> Option<Endpoint>
where
    F: FnMut(&Endpoint) -> bool,
{
    if !cfg.production {
        let tcp: Endpoint = Endpoint::Network(cfg.tcp.clone());
        if probe(&tcp) {
            debug!("daemon: TCP socket connected");
            return Some(tcp);
        }
    }

    let socket: Endpoint = Endpoint::Local(cfg.socket.clone());
    if probe(&socket) {
        debug!("daemon: UNIX local socket connected");
        return Some(socket);
    }

    None
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    fn dev() -> DaemonConfig {
        DaemonConfig {
            production: false,
            ..DaemonConfig::default()
        }
    }

    #[test]
    fn defaults_match_docker() {
        let cfg = DaemonConfig::default();
        assert_eq!(cfg.socket.to_string(), "unix:/var/run/docker.sock");
        assert_eq!(cfg.tcp.to_string(), "127.0.0.1:2375");
        assert!(cfg.production);
    }

    #[test]
    fn production_never_probes_tcp() {
        let mut probed: Vec<Endpoint> = Vec::new();
        let selected = select_transport_with(&DaemonConfig::default(), |e| {
            probed.push(e.clone());
            true
        });

        assert!(matches!(selected, Some(Endpoint::Local(_))));
        assert_eq!(probed.len(), 1);
        assert!(probed[0].is_local());
    }

    #[test]
    fn development_prefers_tcp() {
        let selected = select_transport_with(&dev(), |_| true);
        assert!(matches!(selected, Some(Endpoint::Network(_))));
    }

    #[test]
    fn development_falls_back_to_socket() {
        let selected = select_transport_with(&dev(), |e| e.is_local());
        assert!(matches!(selected, Some(Endpoint::Local(_))));
    }

    #[test]
    fn nothing_reachable_selects_nothing() {
        assert_eq!(select_transport_with(&dev(), |_| false), None);
        assert_eq!(select_transport_with(&DaemonConfig::default(), |_| false), None);
    }

    #[test]
    fn config_rejects_invalid_input() {
        assert!(DaemonConfig::new("", DEFAULT_HOST, DEFAULT_PORT, true).is_err());
        assert!(DaemonConfig::new(DEFAULT_SOCKET, "", DEFAULT_PORT, true).is_err());
    }
}
