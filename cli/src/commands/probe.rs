use std::process::ExitCode;

use anyhow::Context;
use colored::*;
use sockprobe_common::config::Config;
use sockprobe_common::network::endpoint::Endpoint;
use sockprobe_core::error::ProbeError;
use sockprobe_core::prober;

use crate::terminal::{colors, format, print};

pub struct Probed {
    pub endpoint: Endpoint,
    pub reachable: bool,
    pub cause: Option<ProbeError>,
}

/// Runs one blocking probe. The cause is only collected when explaining.
pub fn run(endpoint: Endpoint, explain: bool) -> Probed {
    if explain {
        let cause: Option<ProbeError> = prober::diagnose(&endpoint).err();
        Probed {
            reachable: cause.is_none(),
            cause,
            endpoint,
        }
    } else {
        let reachable: bool = prober::probe(&endpoint);
        Probed {
            endpoint,
            reachable,
            cause: None,
        }
    }
}

pub async fn probe(args: Vec<String>, cfg: &Config) -> anyhow::Result<ExitCode> {
    let endpoint: Endpoint = Endpoint::from_args(&args)?;
    let explain: bool = cfg.explain;

    let probed: Probed = tokio::task::spawn_blocking(move || run(endpoint, explain))
        .await
        .context("probe task failed")?;

    report(&probed, cfg);
    Ok(exit_code(probed.reachable))
}

pub fn report(probed: &Probed, cfg: &Config) {
    if probed.reachable && cfg.quiet > 1 {
        return;
    }

    let (key, value) = format::endpoint_to_key_value_pair(&probed.endpoint);
    print::aligned_line(&key, format!("{} {}", value, format::reachability(probed.reachable)));

    if let Some(cause) = &probed.cause {
        print::print_status(format!("  {}", cause.to_string().color(colors::UNREACHABLE)));
    }
}

pub fn exit_code(reachable: bool) -> ExitCode {
    if reachable {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
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
