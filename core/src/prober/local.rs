//! Local (UNIX-domain) socket probing.

use sockprobe_common::network::address::LocalSocketAddress;
use tracing::{debug, trace};

use crate::error::ProbeError;

/// Returns `true` if something accepts connections on the socket path.
pub fn probe(addr: &LocalSocketAddress) -> bool {
    match diagnose(addr) {
        Ok(()) => true,
        Err(e) => {
            debug!("{addr} unreachable: {e}");
            false
        }
    }
}

/// Connects to the socket path once and closes the stream again.
#[cfg(unix)]
pub fn diagnose(addr: &LocalSocketAddress) -> Result<(), ProbeError> {
    use std::os::unix::net::UnixStream;

    trace!("connecting to {addr}");
    // The stream owns the descriptor; it is closed on drop, on every path.
    let stream: UnixStream =
        UnixStream::connect(addr.path()).map_err(|source| ProbeError::Connect {
            target: addr.to_string(),
            source,
        })?;
    drop(stream);

    debug!("{addr} accepted the connection");
    Ok(())
}

#[cfg(not(unix))]
pub fn diagnose(addr: &LocalSocketAddress) -> Result<(), ProbeError> {
    trace!("local sockets unavailable, skipping {addr}");
    Err(ProbeError::Unsupported)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
