use thiserror::Error;

/// Programmer errors. These are reported to the caller and never collapsed
/// into an unreachable result.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum UsageError {
    /// A probe takes a socket path or a host and a port, nothing else.
    #[error("wrong number of arguments: expected 1 (path) or 2 (host, port), got {0}")]
    WrongArity(usize),
    #[error("invalid port '{0}': expected an integer in 0..=65535")]
    InvalidPort(String),
    #[error("host must not be empty")]
    EmptyHost,
    #[error("socket path must not be empty")]
    EmptyPath,
    #[error("socket path contains a NUL byte")]
    PathContainsNul,
    #[error("socket path is {len} bytes long, the platform allows at most {max}")]
    PathTooLong { len: usize, max: usize },
    #[error("IPv6 literals are not supported: {0}")]
    Ipv6Unsupported(String),
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
}
