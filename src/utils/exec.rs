//! External command execution utilities.
//!
//! Provides a Builder-based API for running external commands with
//! captured output and uniform failure reporting.
//!
//! # Examples
//!
//! ```ignore
//! use crate::utils::exec::Cmd;
//!
//! let output = Cmd::new("git")
//!     .args(["ls-files", "-m"])
//!     .cwd(root)
//!     .run()?;
//! ```

use crate::debug;
use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
    process::{Command, ExitStatus, Output},
};
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Failure modes of a single external command invocation.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The process could not be started (missing binary, permissions).
    #[error("Failed to execute `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran and exited with a non-zero status.
    #[error("{}", failure_message(.program, .status, .stderr))]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Format error message for a failed command.
fn failure_message(program: &str, status: &ExitStatus, stderr: &str) -> String {
    let detail = stderr.trim();
    if detail.is_empty() {
        format!("Command `{program}` failed with {status}")
    } else {
        format!("Command `{program}` failed with {status}\n{detail}")
    }
}

// ============================================================================
// Builder API
// ============================================================================

/// Command builder for external process execution.
///
/// Provides a fluent API for configuring and running external commands.
#[derive(Default)]
pub struct Cmd {
    program: OsString,
    args: Vec<OsString>,
    cwd: Option<PathBuf>,
}

impl Cmd {
    /// Create a new command builder.
    pub fn new<S: AsRef<OsStr>>(program: S) -> Self {
        Self {
            program: program.as_ref().to_owned(),
            ..Default::default()
        }
    }

    /// Add a single argument.
    pub fn arg<S: AsRef<OsStr>>(mut self, arg: S) -> Self {
        let arg = arg.as_ref();
        if !arg.is_empty() {
            self.args.push(arg.to_owned());
        }
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for arg in args {
            let arg = arg.as_ref();
            if !arg.is_empty() {
                self.args.push(arg.to_owned());
            }
        }
        self
    }

    /// Set working directory.
    pub fn cwd<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.cwd = Some(dir.as_ref().to_owned());
        self
    }

    /// Get the program name for error messages.
    fn program_name(&self) -> String {
        self.program.to_string_lossy().to_string()
    }

    /// Execute the command and return its captured output.
    ///
    /// A non-zero exit status is an error. Anything the process wrote
    /// to stderr while succeeding is forwarded to the verbose log.
    pub fn run(self) -> Result<Output, ExecError> {
        let name = self.program_name();
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);

        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|source| ExecError::Spawn {
            program: name.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(ExecError::Failed {
                program: name,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        if !stderr.is_empty() {
            debug!(&name; "{stderr}");
        }

        Ok(output)
    }
}

// ============================================================================
// Tests
// ============================================================================
