//! Best-effort launch of the system browser.

use tracing::warn;

/// Spawn the platform opener pointed at `url`, fire-and-forget. Not being
/// able to open a browser is not fatal; the address is already printed.
pub fn open_url(url: &str) {
    #[cfg(target_os = "macos")]
    let result = tokio::process::Command::new("open").arg(url).spawn();

    #[cfg(target_os = "linux")]
    let result = tokio::process::Command::new("xdg-open").arg(url).spawn();

    #[cfg(target_os = "windows")]
    let result = tokio::process::Command::new("cmd")
        .args(["/C", "start", url])
        .spawn();

    if let Err(e) = result {
        warn!("failed to open browser: {}", e);
    }
}
