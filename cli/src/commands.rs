pub mod check;
pub mod daemon;
pub mod probe;

use clap::{ArgAction, Parser, Subcommand};
use sockprobe_common::config::Config;
use sockprobe_core::daemon::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SOCKET};

#[derive(Parser)]
#[command(name = "sockprobe")]
#[command(about = "Checks whether a local socket or TCP endpoint accepts connections.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Less output; repeat to print only failures
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// More log output; repeat for every connection attempt
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print why an endpoint could not be reached
    #[arg(short, long, global = true)]
    pub explain: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Probe a socket path, or a host and a port
    #[command(alias = "p")]
    Probe {
        /// `<PATH>` or `<HOST> <PORT>`
        #[arg(num_args = 0..)]
        args: Vec<String>,
    },
    /// Probe a comma-separated list of endpoints concurrently
    #[command(alias = "c")]
    Check {
        /// e.g. `/run/app.sock,127.0.0.1:8080,tcp://example.org:80`
        targets: String,
    },
    /// Pick the transport a daemon can be reached over
    #[command(alias = "d")]
    Daemon {
        #[arg(long, default_value = DEFAULT_SOCKET)]
        socket: String,
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Development mode: prefer the TCP endpoint when it is reachable
        #[arg(long)]
        dev: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            verbose: self.verbose,
            explain: self.explain,
        }
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
