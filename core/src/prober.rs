//! # Connectivity Prober
//!
//! Answers "can a connection be established right now?" for an [`Endpoint`].
//!
//! Every probe is a single blocking attempt: open one socket, connect,
//! close. There is no timeout beyond the OS default and no retry. Callers
//! running inside an async runtime should move the call onto a blocking
//! worker (e.g. `tokio::task::spawn_blocking`).
//!
//! The boolean functions collapse every failure into `false`. The
//! `diagnose` functions return the same outcome with its cause attached.

pub mod local;
pub mod resolver;
pub mod tcp;

use sockprobe_common::error::UsageError;
use sockprobe_common::network::endpoint::Endpoint;

use crate::error::ProbeError;

/// Returns `true` if a connection to `endpoint` can be established.
pub fn probe(endpoint: &Endpoint) -> bool {
    match endpoint {
        Endpoint::Local(addr) => local::probe(addr),
        Endpoint::Network(addr) => tcp::probe(addr),
    }
}

/// Like [`probe`], but reports why the connection could not be made.
pub fn diagnose(endpoint: &Endpoint) -> Result<(), ProbeError> {
    match endpoint {
        Endpoint::Local(addr) => local::diagnose(addr),
        Endpoint::Network(addr) => tcp::diagnose(addr),
    }
}

/// Probes from positional arguments: `[path]` or `[host, port]`.
///
/// Argument errors are returned before any socket is created.
pub fn probe_args<S: AsRef<str>>(args: &[S]) -> Result<bool, UsageError> {
    let endpoint: Endpoint = Endpoint::from_args(args)?;
    Ok(probe(&endpoint))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
