//! External action launcher
//!
//! Spawns the external program for a menu action and detaches from it
//! immediately: the child is never waited on and its exit status is
//! never observed. Spawn failures are logged and otherwise dropped, so
//! a missing executable never disturbs the navigation loop.

use std::process::{Command, Stdio};

use crate::core::menu::Action;
use crate::core::menu_file::ToolsConfig;

/// Launch the external program for `action`, best-effort
pub fn dispatch(action: &Action, tools: &ToolsConfig) {
    let mut command = match action {
        Action::OpenEditor { path } => {
            let mut cmd = Command::new(&tools.editor);
            cmd.arg(path);
            cmd
        }
        Action::OpenUrl { url } => url_command(url),
        Action::OpenApp { app } => app_command(app),
    };

    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    match command.spawn() {
        Ok(child) => {
            tracing::debug!(pid = child.id(), %action, "launched");
        }
        Err(e) => {
            tracing::warn!(%action, error = %e, "failed to launch");
        }
    }
}

#[cfg(target_os = "macos")]
fn url_command(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(target_os = "windows")]
fn url_command(url: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", url]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn url_command(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

#[cfg(target_os = "macos")]
fn app_command(app: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.args(["-a", app]);
    cmd
}

#[cfg(target_os = "windows")]
fn app_command(app: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", app]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn app_command(app: &str) -> Command {
    Command::new(app)
}
