//! Descriptor accounting runs in its own binary so no concurrent test
//! opens or closes descriptors while it counts.
#![cfg(target_os = "linux")]

use sockprobe_common::network::address::{LocalSocketAddress, NetworkAddress};
use sockprobe_common::network::endpoint::Endpoint;
use sockprobe_core::prober;
use sockprobe_integration_tests::util;

#[test]
fn probes_do_not_leak_descriptors() {
    let server = util::LocalServer::start().unwrap();
    let (_dir, missing) = util::missing_socket().unwrap();
    let (_listener, open_port) = util::tcp_server().unwrap();
    let closed_port: u16 = util::closed_port().unwrap();

    let endpoints: Vec<Endpoint> = vec![
        LocalSocketAddress::new(server.path.clone()).unwrap().into(),
        LocalSocketAddress::new(missing).unwrap().into(),
        NetworkAddress::new("127.0.0.1", open_port).unwrap().into(),
        NetworkAddress::new("127.0.0.1", closed_port).unwrap().into(),
        NetworkAddress::new("nonexistent.invalid.hostname.test", 80).unwrap().into(),
    ];

    // Warm up resolver state that may keep descriptors cached.
    for endpoint in &endpoints {
        prober::probe(endpoint);
    }

    let before: usize = util::open_fd_count().unwrap();
    let mut reachable: usize = 0;
    for _ in 0..20 {
        for endpoint in &endpoints {
            if prober::probe(endpoint) {
                reachable += 1;
            }
        }
        let none: [&str; 0] = [];
        assert!(prober::probe_args(&none).is_err());
    }
    let after: usize = util::open_fd_count().unwrap();

    assert_eq!(reachable, 40);
    assert_eq!(before, after, "descriptors leaked: {before} before, {after} after");
}
