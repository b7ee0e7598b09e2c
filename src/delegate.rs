//! Delegation to the real external tput.
//!
//! Anything the built-in table does not cover is handed to the full tput
//! binary with the original argument vector, stdio inherited, exit status
//! propagated verbatim. The external tool is an opaque collaborator - its
//! output is never parsed, buffered, or transformed.

use std::process::{Command, Stdio};

use anyhow::Result;

/// Errors from invoking the external tool.
#[derive(Debug, thiserror::Error)]
pub enum DelegateError {
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
}

/// External collaborator that receives everything the table does not cover.
pub trait Delegate {
    /// Run the external tool with the given argument vector and return its
    /// exit status.
    fn run(&self, args: &[String]) -> Result<i32>;
}

/// The real tput binary.
#[derive(Debug, Clone)]
pub struct Tput {
    program: String,
}

impl Tput {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Delegate for Tput {
    fn run(&self, args: &[String]) -> Result<i32> {
        let status = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| DelegateError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        Ok(exit_code(status))
    }
}

/// Shell convention for a signal-killed child: 128 + signal number.
#[cfg(unix)]
fn exit_code(status: std::process::ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status
        .code()
        .or_else(|| status.signal().map(|sig| 128 + sig))
        .unwrap_or(1)
}

#[cfg(not(unix))]
fn exit_code(status: std::process::ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
