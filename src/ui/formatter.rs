//! Pure formatting functions for UI output.
//!
//! `format_*` functions build the text and are tested directly; `display_*`
//! functions only print it.

use crate::check::UpdateStatus;

/// One-line error with a red `ERROR:` label.
pub fn format_error(message: &str) -> String {
    format!("\x1b[31mERROR:\x1b[0m {}", message)
}

/// Print an error message to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Lines describing an update check outcome.
///
/// One of three fixed templates; the outdated case adds an upgrade hint.
pub fn format_update_status(status: &UpdateStatus) -> Vec<String> {
    match status {
        UpdateStatus::UpToDate { installed, latest } => vec![format!(
            "installed version {} is the same as the latest version {}",
            installed, latest
        )],
        UpdateStatus::Outdated {
            installed,
            latest,
            url,
        } => vec![
            format!(
                "installed version {} is older than the latest version {}",
                installed, latest
            ),
            format!("To upgrade visit {}", url),
        ],
        UpdateStatus::Newer { installed, latest } => vec![format!(
            "(unexpected?) installed version {} is newer than the latest version {}",
            installed, latest
        )],
    }
}

/// Print the outcome of an update check.
pub fn display_update_status(status: &UpdateStatus) {
    for line in format_update_status(status) {
        println!("{}", line);
    }
}

pub fn format_version(full_version: &str) -> String {
    format!("tryrelease version {}", full_version)
}

/// Print the version of this build.
pub fn display_version(full_version: &str) {
    println!("{}", format_version(full_version));
}

pub fn format_platform(os: &str, arch: &str) -> String {
    format!("OS: {}\nArchitecture: {}", os, arch)
}

/// Print host OS and architecture.
pub fn display_platform() {
    println!(
        "{}",
        format_platform(std::env::consts::OS, std::env::consts::ARCH)
    );
}
