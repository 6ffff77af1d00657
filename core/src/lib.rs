//! # sockprobe core
//!
//! Blocking reachability checks for local sockets and TCP endpoints.
//!
//! * [`prober`]: the connect-probe and its dispatch over [`Endpoint`].
//! * [`daemon`]: picks a reachable transport for a daemon that listens on
//!   both a local socket and a TCP port.
//!
//! [`Endpoint`]: sockprobe_common::network::endpoint::Endpoint

pub mod daemon;
pub mod error;
pub mod prober;
