//! Helpers for integration tests that run the service as a child process.

use anyhow::Context as _;
use serde_json::Value;
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::{Child, Command};
use std::time::{Duration, Instant};

/// Kills the wrapped child process when dropped.
pub struct KillOnDrop(pub Child);

impl Drop for KillOnDrop {
    fn drop(&mut self) {
        let _ = self.0.kill();
        let _ = self.0.wait();
    }
}

/// Pick an unused TCP port on localhost.
///
/// The port is not reserved; another process may still bind it first.
///
/// # Errors
///
/// Returns an error if an ephemeral localhost port cannot be bound.
pub fn pick_unused_port() -> anyhow::Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0").context("bind ephemeral port")?;
    Ok(listener.local_addr()?.port())
}

/// Poll `url` until it answers with a 2xx status.
///
/// # Errors
///
/// Returns an error if `timeout_dur` elapses first.
pub async fn wait_http_ok(url: &str, timeout_dur: Duration) -> anyhow::Result<()> {
    let client = reqwest::Client::new();
    let deadline = Instant::now() + timeout_dur;
    while Instant::now() < deadline {
        if let Ok(resp) = client.get(url).send().await
            && resp.status().is_success()
        {
            return Ok(());
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    anyhow::bail!("timed out waiting for {url}")
}

/// Write a `{"clients": ...}` config document to `dir/client_config.json`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_client_config(dir: &Path, clients: &Value) -> anyhow::Result<PathBuf> {
    let path = dir.join("client_config.json");
    let doc = serde_json::json!({ "clients": clients });
    std::fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Spawn `bin` with the config path and port passed through the environment.
///
/// # Errors
///
/// Returns an error if the process cannot be started.
pub fn spawn_service(bin: &str, config_path: &Path, port: u16) -> anyhow::Result<KillOnDrop> {
    let child = Command::new(bin)
        .env("CLIENT_CONFIG_PATH", config_path)
        .env("HOST", "127.0.0.1")
        .env("PORT", port.to_string())
        .env("LOG_LEVEL", "warn")
        .spawn()
        .with_context(|| format!("spawn {bin}"))?;
    Ok(KillOnDrop(child))
}
