//! TCP probing over IPv4.

use std::io;
use std::net::{Ipv4Addr, SocketAddrV4, TcpStream};

use sockprobe_common::network::address::NetworkAddress;
use tracing::{debug, trace};

use crate::error::ProbeError;
use crate::prober::resolver;

/// Returns `true` if a TCP connection to `addr` can be established.
pub fn probe(addr: &NetworkAddress) -> bool {
    match diagnose(addr) {
        Ok(()) => true,
        Err(e) => {
            debug!("{addr} unreachable: {e}");
            false
        }
    }
}

/// Resolves `addr` with the system resolver and connects once.
pub fn diagnose(addr: &NetworkAddress) -> Result<(), ProbeError> {
    diagnose_with(addr, resolver::resolve_first_v4, connect)
}

/// Probe with an explicit resolver and connector.
///
/// A host that parses as an IPv4 literal is used directly and `resolve` is
/// not called. When resolution fails or yields nothing, `connect` is never
/// called.
pub fn diagnose_with<R, C>(
    addr: &NetworkAddress,
    mut resolve: R,
    mut connect: C,
) -> Result<(), ProbeError>
where
    R: FnMut(&str) -> io::Result<Option<Ipv4Addr>>,
    C: FnMut(SocketAddrV4) -> io::Result<()>,
{
    let host: &str = addr.host();

    let ip: Ipv4Addr = match host.parse::<Ipv4Addr>() {
        Ok(ip) => ip,
        Err(_) => resolve(host)
            .map_err(|source| ProbeError::Resolve {
                host: host.to_string(),
                source,
            })?
            .ok_or_else(|| ProbeError::NoAddress {
                host: host.to_string(),
            })?,
    };

    let target: SocketAddrV4 = SocketAddrV4::new(ip, addr.port());
    trace!("connecting to {target} for {addr}");

    connect(target).map_err(|source| ProbeError::Connect {
        target: target.to_string(),
        source,
    })?;

    debug!("{addr} accepted the connection on {target}");
    Ok(())
}

fn connect(target: SocketAddrV4) -> io::Result<()> {
    let stream: TcpStream = TcpStream::connect(target)?;
    drop(stream);
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
