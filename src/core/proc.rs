//! The pathdisplay processes module.
//!
//! Implements [get_os_command_output], a synchronous shim for running an external
//! program and collecting its output line by line, and the [CommandOutput] it returns.
//!
//! Pickers use it to produce the raw path lists that get formatted afterwards,
//! for example from `git ls-files` or `fd`.

use crate::error::{Error, Result};
use crate::utils::{Level, notify};

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};

/// Output of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    stdout: Vec<String>,
    stderr: Vec<String>,
    code: Option<i32>,
}

impl CommandOutput {
    pub fn stdout(&self) -> &[String] {
        &self.stdout
    }

    pub fn stderr(&self) -> &[String] {
        &self.stderr
    }

    /// Exit code, None if the process was killed by a signal
    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs `cmd[0]` with the remaining elements as arguments and waits for it.
///
/// Runs in `cwd` when given. Output is split into lines, invalid UTF-8 is replaced.
///
/// # Errors
/// - [Error::InvalidArgument] for an empty `cmd`
/// - [Error::CommandNotFound] if the program is not on PATH
/// - [Error::Io] if spawning or waiting fails
pub fn get_os_command_output<S: AsRef<OsStr>>(
    cmd: &[S],
    cwd: Option<&Path>,
) -> Result<CommandOutput> {
    let Some((program, args)) = cmd.split_first() else {
        notify(
            "get_os_command_output",
            Level::Error,
            "cmd has to be a non-empty list",
        );
        return Err(Error::InvalidArgument("cmd must not be empty".into()));
    };

    let program = program.as_ref();
    let resolved = which::which(program)
        .map_err(|_| Error::CommandNotFound(program.to_string_lossy().into_owned()))?;

    let mut command = Command::new(resolved);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    let output = command.output()?;
    if !output.status.success() {
        tracing::debug!(
            program = %program.to_string_lossy(),
            code = ?output.status.code(),
            "command exited unsuccessfully"
        );
    }

    Ok(CommandOutput {
        stdout: split_lines(&output.stdout),
        stderr: split_lines(&output.stderr),
        code: output.status.code(),
    })
}

fn split_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh_available() -> bool {
        which::which("sh").is_ok()
    }

    /// Macro to skip tests if `sh` is not available.
    macro_rules! skip_if_no_sh {
        () => {
            if !sh_available() {
                return Ok(());
            }
        };
    }

    #[test]
    fn test_empty_command() {
        let cmd: [&str; 0] = [];
        let err = get_os_command_output(&cmd, None);
        assert!(matches!(err, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_missing_command() {
        let err = get_os_command_output(&["pathdisplay-no-such-program-42"], None);
        assert!(matches!(
            err,
            Err(Error::CommandNotFound(name)) if name == "pathdisplay-no-such-program-42"
        ));
    }

    #[test]
    fn test_collects_stdout_stderr_and_code() -> Result<()> {
        skip_if_no_sh!();
        let out = get_os_command_output(
            &["sh", "-c", "printf 'a\\nb\\n'; printf 'oops\\n' >&2; exit 3"],
            None,
        )?;
        assert_eq!(out.stdout(), &["a", "b"]);
        assert_eq!(out.stderr(), &["oops"]);
        assert_eq!(out.code(), Some(3));
        assert!(!out.success());
        Ok(())
    }
}
