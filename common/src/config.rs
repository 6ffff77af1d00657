/// Tracing target used for success lines.
pub const SUCCESS_TARGET: &str = "sockprobe::success";

/// Tracing target used for raw terminal output.
pub const PRINT_TARGET: &str = "sockprobe::print";

#[derive(Debug, Default, Clone, Copy)]
pub struct Config {
    /// Suppresses decorative output. A second level also hides per-endpoint lines.
    pub quiet: u8,
    /// Raises the log level; `-v` shows probe outcomes, `-vv` shows every attempt.
    pub verbose: u8,
    /// Print the cause of a failed probe.
    pub explain: bool,
}
