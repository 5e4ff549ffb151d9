//! "Open" escape hatch: hand a panel's address to the system browser.

use std::process::{Command, Stdio};

use msb_common::EmbedError;
use tracing::info;
use url::Url;

/// Open `url` in the default browser. Fire-and-forget: the child process is
/// not awaited. An empty url does nothing; anything but http(s) is refused.
pub fn open_external(url: &str) -> Result<(), EmbedError> {
    if url.is_empty() {
        return Ok(());
    }
    if !is_web_address(url) {
        return Err(EmbedError::NotWeb(url.to_string()));
    }
    let mut command = launcher_command(url).ok_or(EmbedError::Unsupported)?;
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| EmbedError::Launch(e.to_string()))?;
    info!(url, "opened in external browser");
    Ok(())
}

fn is_web_address(url: &str) -> bool {
    Url::parse(url).is_ok_and(|u| matches!(u.scheme(), "http" | "https"))
}

/// The platform command that opens `url`, if this platform has one.
#[cfg(target_os = "macos")]
fn launcher_command(url: &str) -> Option<Command> {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    Some(cmd)
}

#[cfg(target_os = "windows")]
fn launcher_command(url: &str) -> Option<Command> {
    // Not `cmd /C start`: cmd would split the url at `&`.
    let mut cmd = Command::new("rundll32");
    cmd.args(["url.dll,FileProtocolHandler", url]);
    Some(cmd)
}

#[cfg(all(unix, not(target_os = "macos")))]
fn launcher_command(url: &str) -> Option<Command> {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    Some(cmd)
}

#[cfg(not(any(unix, target_os = "windows")))]
fn launcher_command(_url: &str) -> Option<Command> {
    None
}
