use std::process::ExitCode;

use anyhow::Context;
use sockprobe_common::config::Config;
use sockprobe_common::network::endpoint::Endpoint;
use sockprobe_common::{error, success};
use sockprobe_core::daemon::{self, DaemonConfig};

use crate::terminal::{format, print};

pub async fn daemon(daemon_cfg: DaemonConfig, cfg: &Config) -> anyhow::Result<ExitCode> {
    print::header("selecting daemon transport", cfg.quiet);
    print::set_key_width(["unix", "tcp", "mode"]);
    print::aligned_line("mode", if daemon_cfg.production { "production" } else { "development" });
    if !daemon_cfg.production {
        print::aligned_line("tcp", daemon_cfg.tcp.to_string());
    }
    print::aligned_line("unix", daemon_cfg.socket.path().display().to_string());

    let selected: Option<Endpoint> =
        tokio::task::spawn_blocking(move || daemon::select_transport(&daemon_cfg))
            .await
            .context("transport selection failed")?;

    match selected {
        Some(endpoint) => {
            success!("daemon reachable over {} at {endpoint}", format::endpoint_kind(&endpoint));
            Ok(ExitCode::SUCCESS)
        }
        None => {
            error!("Unable to connect to the daemon");
            Ok(ExitCode::FAILURE)
        }
    }
}
