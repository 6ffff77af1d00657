use crate::terminal::colors;
use colored::*;
use sockprobe_common::network::endpoint::Endpoint;

pub fn endpoint_kind(endpoint: &Endpoint) -> &'static str {
    match endpoint {
        Endpoint::Local(_) => "unix",
        Endpoint::Network(_) => "tcp",
    }
}

pub fn endpoint_to_key_value_pair(endpoint: &Endpoint) -> (String, ColoredString) {
    let value: ColoredString = match endpoint {
        Endpoint::Local(addr) => addr.path().display().to_string().color(colors::LOCAL_SOCKET),
        Endpoint::Network(addr) => addr.to_string().color(colors::NETWORK_ADDR),
    };
    (String::from(endpoint_kind(endpoint)), value)
}

pub fn reachability(reachable: bool) -> ColoredString {
    if reachable {
        "reachable".color(colors::REACHABLE).bold()
    } else {
        "unreachable".color(colors::UNREACHABLE).bold()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
