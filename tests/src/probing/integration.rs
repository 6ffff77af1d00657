#![cfg(test)]
use std::str::FromStr;

use sockprobe_common::error::UsageError;
use sockprobe_common::network::address::NetworkAddress;
use sockprobe_common::network::endpoint::Endpoint;
use sockprobe_core::error::ProbeError;
use sockprobe_core::prober::{self, tcp};

use crate::util;

#[cfg(unix)]
#[test]
fn local_socket_with_listener_is_reachable() {
    let server = util::LocalServer::start().unwrap();
    assert_eq!(prober::probe_args(&[server.path_str()]), Ok(true));
}

#[test]
fn local_socket_without_listener_is_unreachable() {
    let (_dir, path) = util::missing_socket().unwrap();
    assert_eq!(prober::probe_args(&[path]), Ok(false));
}

#[test]
fn tcp_listener_is_reachable() {
    let (_listener, port) = util::tcp_server().unwrap();
    let port: String = port.to_string();
    assert_eq!(prober::probe_args(&["127.0.0.1", port.as_str()]), Ok(true));
}

#[test]
fn tcp_without_listener_is_unreachable() {
    let port: String = util::closed_port().unwrap().to_string();
    assert_eq!(prober::probe_args(&["127.0.0.1", port.as_str()]), Ok(false));
}

#[test]
fn unresolvable_host_is_unreachable() {
    assert_eq!(
        prober::probe_args(&["nonexistent.invalid.hostname.test", "80"]),
        Ok(false)
    );

    let addr = NetworkAddress::new("nonexistent.invalid.hostname.test", 80).unwrap();
    let err: ProbeError = tcp::diagnose(&addr).unwrap_err();
    assert!(err.is_resolution(), "expected a resolution failure, got {err}");
}

#[test]
fn zero_arguments_is_a_usage_error() {
    let none: [&str; 0] = [];
    assert_eq!(prober::probe_args(&none), Err(UsageError::WrongArity(0)));
}

#[test]
fn three_arguments_is_a_usage_error() {
    assert_eq!(
        prober::probe_args(&["127.0.0.1", "80", "/tmp/x"]),
        Err(UsageError::WrongArity(3))
    );
}

#[test]
fn argument_count_selects_the_strategy() {
    assert!(matches!(
        Endpoint::from_args(&["/tmp/x"]),
        Ok(Endpoint::Local(_))
    ));
    assert!(matches!(
        Endpoint::from_args(&["127.0.0.1", "9999"]),
        Ok(Endpoint::Network(_))
    ));

    // A single host-looking argument is still a path.
    let (_listener, port) = util::tcp_server().unwrap();
    let single: String = format!("127.0.0.1:{port}");
    assert_eq!(prober::probe_args(&[single]), Ok(false));
}

#[test]
fn repeated_probes_agree() {
    let (_listener, open) = util::tcp_server().unwrap();
    let closed: u16 = util::closed_port().unwrap();
    let open = Endpoint::Network(NetworkAddress::new("127.0.0.1", open).unwrap());
    let closed = Endpoint::Network(NetworkAddress::new("127.0.0.1", closed).unwrap());

    for _ in 0..5 {
        assert!(prober::probe(&open));
        assert!(!prober::probe(&closed));
    }
}

#[cfg(unix)]
#[test]
fn parsed_endpoints_probe_like_positional_ones() {
    let server = util::LocalServer::start().unwrap();
    let (_listener, port) = util::tcp_server().unwrap();

    let local = Endpoint::from_str(&format!("unix:{}", server.path_str())).unwrap();
    let tcp = Endpoint::from_str(&format!("tcp://localhost:{port}")).unwrap();

    assert!(prober::probe(&local));
    assert!(prober::diagnose(&tcp).is_ok());
}
