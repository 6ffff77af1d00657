mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, check, daemon, probe};
use sockprobe_common::error;
use sockprobe_common::error::UsageError;
use sockprobe_core::daemon::DaemonConfig;
use terminal::{logging, print};

const USAGE_EXIT_CODE: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(&cfg);
    print::banner(cfg.quiet);

    let result: anyhow::Result<ExitCode> = match commands.command {
        Commands::Probe { args } => probe::probe(args, &cfg).await,
        Commands::Check { targets } => check::check(&targets, &cfg).await,
        Commands::Daemon { socket, host, port, dev } => {
            match DaemonConfig::new(&socket, &host, port, !dev) {
                Ok(daemon_cfg) => daemon::daemon(daemon_cfg, &cfg).await,
                Err(e) => Err(e.into()),
            }
        }
    };

    match result {
        Ok(code) => code,
        Err(e) if e.downcast_ref::<UsageError>().is_some() => {
            error!("{e}");
            ExitCode::from(USAGE_EXIT_CODE)
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
