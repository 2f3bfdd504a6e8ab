//! Opening the generated file with the platform's default viewer.

use std::path::Path;
use std::process::Command;

/// Open `path` in the default application. Failures are logged only.
pub fn open(path: &Path) {
    let mut command = viewer_command(path);
    match command.spawn() {
        Ok(_) => log::debug!("opened {}", path.display()),
        Err(e) => log::warn!("could not open {}: {}", path.display(), e),
    }
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}
