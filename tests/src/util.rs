use std::net::TcpListener;
#[cfg(unix)]
use std::os::unix::net::UnixListener;
use std::path::PathBuf;

use tempfile::TempDir;

/// A listening local socket that lives as long as the value.
#[cfg(unix)]
pub struct LocalServer {
    pub path: PathBuf,
    _listener: UnixListener,
    _dir: TempDir,
}

#[cfg(unix)]
impl LocalServer {
    pub fn start() -> anyhow::Result<Self> {
        let dir: TempDir = tempfile::tempdir()?;
        let path: PathBuf = dir.path().join("test.sock");
        let listener: UnixListener = UnixListener::bind(&path)?;
        Ok(Self {
            path,
            _listener: listener,
            _dir: dir,
        })
    }

    pub fn path_str(&self) -> String {
        self.path.display().to_string()
    }
}

/// A socket path inside a fresh directory where nothing listens.
pub fn missing_socket() -> anyhow::Result<(TempDir, String)> {
    let dir: TempDir = tempfile::tempdir()?;
    let path: String = dir.path().join("test.sock").display().to_string();
    Ok((dir, path))
}

/// A TCP listener on an ephemeral loopback port.
pub fn tcp_server() -> anyhow::Result<(TcpListener, u16)> {
    let listener: TcpListener = TcpListener::bind("127.0.0.1:0")?;
    let port: u16 = listener.local_addr()?.port();
    Ok((listener, port))
}

/// A loopback port that was free a moment ago.
pub fn closed_port() -> anyhow::Result<u16> {
    let (_listener, port) = tcp_server()?;
    Ok(port)
}

/// Number of descriptors currently open in this process.
#[cfg(target_os = "linux")]
pub fn open_fd_count() -> anyhow::Result<usize> {
    Ok(std::fs::read_dir("/proc/self/fd")?.count())
}
