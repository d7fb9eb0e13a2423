//! Driver management - spawning and readiness-checking chromedriver
//!
//! One driver process serves a whole suite run; browser sessions are created
//! against it one per test case.

use std::process::{Child, Command, Stdio};
use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

use crate::config::DriverConfig;
use crate::error::{HarnessError, HarnessResult};

/// Handle to a running chromedriver process
pub struct DriverHandle {
    child: Child,
    url: String,
    port: u16,
}

impl DriverHandle {
    /// Locate and spawn chromedriver, then wait for it to report ready.
    pub async fn spawn(config: DriverConfig) -> HarnessResult<Self> {
        let binary = match &config.binary {
            Some(path) => path.clone(),
            None => which::which("chromedriver").map_err(|_| HarnessError::DriverNotFound)?,
        };

        let port = config.port.unwrap_or_else(find_free_port);
        let url = format!("http://127.0.0.1:{}", port);

        info!("Spawning {} on port {}", binary.display(), port);

        let child = Command::new(&binary)
            .arg(format!("--port={}", port))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                HarnessError::DriverStartup(format!(
                    "Failed to spawn {}: {}",
                    binary.display(),
                    e
                ))
            })?;

        let handle = DriverHandle {
            child,
            url: url.clone(),
            port,
        };

        // Wait for the driver to accept session requests
        handle.wait_for_ready(config.startup_timeout).await?;

        info!("Driver is ready at {}", url);
        Ok(handle)
    }

    /// Poll the driver's status endpoint until it reports ready.
    async fn wait_for_ready(&self, timeout_duration: Duration) -> HarnessResult<()> {
        let status_url = format!("{}/status", self.url);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()?;

        let start = std::time::Instant::now();
        let mut attempts = 0;

        while start.elapsed() < timeout_duration {
            attempts += 1;

            match client.get(&status_url).send().await {
                Ok(resp) if resp.status().is_success() => {
                    let body: serde_json::Value = resp.json().await?;
                    if body["value"]["ready"].as_bool().unwrap_or(false) {
                        return Ok(());
                    }
                }
                Ok(resp) => {
                    warn!("Status check returned {}", resp.status());
                }
                Err(e) => {
                    if attempts == 1 {
                        info!("Waiting for driver to start...");
                    }
                    // Connection refused is expected while the driver is starting
                    if !e.is_connect() {
                        warn!("Status check error: {}", e);
                    }
                }
            }

            sleep(Duration::from_millis(100)).await;
        }

        Err(HarnessError::DriverUnresponsive(attempts))
    }

    /// WebDriver endpoint served by this process
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Stop the driver process and any browsers it still owns.
    pub fn stop(&mut self) -> HarnessResult<()> {
        info!("Stopping driver (pid: {})", self.child.id());

        // Try graceful shutdown first
        #[cfg(unix)]
        {
            use nix::sys::signal::{kill, Signal};
            use nix::unistd::Pid;

            let pid = Pid::from_raw(self.child.id() as i32);
            if kill(pid, Signal::SIGTERM).is_ok() {
                std::thread::sleep(Duration::from_millis(200));
            }
        }

        // Force kill if still running
        let _ = self.child.kill();
        let _ = self.child.wait();

        Ok(())
    }
}

impl Drop for DriverHandle {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}

/// Find a free port to use
fn find_free_port() -> u16 {
    use std::net::TcpListener;

    TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind to find free port")
        .local_addr()
        .expect("Failed to get local addr")
        .port()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_free_port() {
        let port1 = find_free_port();
        let port2 = find_free_port();

        // Ports should be in valid range
        assert!(port1 > 1024);
        assert!(port2 > 1024);
    }
}
