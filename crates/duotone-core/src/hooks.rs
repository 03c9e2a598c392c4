//! Post-processing hooks
//!
//! Invoke the Flutter packaging commands that consume the generated logo
//! variants: launcher icon and native splash regeneration.

use std::process::Command;

/// Run an external command, inheriting stdio.
///
/// Fails when the binary is missing from PATH or exits non-zero; the exit
/// code is carried in the error message.
pub fn run_command(program: &str, args: &[&str]) -> Result<(), String> {
    let status = Command::new(program).args(args).status().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            format!(
                "{} command not found. Make sure it is installed and in PATH",
                program
            )
        } else {
            format!("Failed to run {}: {}", program, e)
        }
    })?;

    if status.success() {
        Ok(())
    } else {
        match status.code() {
            Some(code) => Err(format!("{} command failed with exit code {}", program, code)),
            None => Err(format!("{} command terminated by signal", program)),
        }
    }
}

/// Run a flutter subcommand (e.g. `pub run flutter_launcher_icons`).
pub fn run_flutter_command(args: &[&str]) -> Result<(), String> {
    run_command("flutter", args)
}

/// Regenerate app launcher icons from the current logo variants.
pub fn run_launcher_icons() -> Result<(), String> {
    run_flutter_command(&["pub", "run", "flutter_launcher_icons"])
}

/// Regenerate the native splash screens from the current logo variants.
pub fn run_native_splash() -> Result<(), String> {
    run_flutter_command(&["pub", "run", "flutter_native_splash:create"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_command_missing_binary() {
        let result = run_command("duotone-binary-that-does-not-exist", &[]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("command not found"));
    }

    #[test]
    #[cfg(unix)]
    fn test_run_command_success() {
        let result = run_command("true", &[]);
        assert!(result.is_ok(), "true should exit zero: {:?}", result);
    }

    #[test]
    #[cfg(unix)]
    fn test_run_command_nonzero_exit() {
        let result = run_command("sh", &["-c", "exit 3"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("exit code 3"));
    }
}
