use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr, ToSocketAddrs};

use tracing::trace;

/// Resolves `host` through the system resolver and keeps the first IPv4
/// address it returns.
///
/// `Ok(None)` means the lookup succeeded but produced no IPv4 address.
pub fn resolve_first_v4(host: &str) -> io::Result<Option<Ipv4Addr>> {
    let addrs = (host, 0u16).to_socket_addrs()?;
    let first: Option<Ipv4Addr> = first_v4(addrs);
    trace!("resolved {host} to {first:?}");
    Ok(first)
}

fn first_v4(addrs: impl IntoIterator<Item = SocketAddr>) -> Option<Ipv4Addr> {
    addrs.into_iter().find_map(|addr| match addr.ip() {
        IpAddr::V4(v4) => Some(v4),
        IpAddr::V6(_) => None,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
