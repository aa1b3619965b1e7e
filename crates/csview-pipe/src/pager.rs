//! Spawning a pager and writing into it.
//!
//! The renderer writes to any [`Write`]; a [`PagerProcess`] is one, backed
//! by the pager's stdin. The pager inherits our stdout and stderr so it can
//! take over the terminal.

use std::io::{self, Write};
use std::process::{Child, ChildStdin, ExitStatus, Stdio};

use thiserror::Error;

use crate::shell::shell_command;

/// Environment variable naming the pager command.
pub const PAGER_ENV: &str = "CSVIEW_PAGER";

/// Pager used when [`PAGER_ENV`] is unset.
pub const DEFAULT_PAGER: &str = "less";

/// Options handed to `less` unless the user set `LESS` themselves:
/// chop long lines, quit when the table fits on one screen.
const DEFAULT_LESS_FLAGS: &str = "-SF";

#[derive(Debug, Error)]
pub enum PipeError {
    #[error("failed to start pager `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("pager `{command}` failed with status {status}")]
    CommandFailed { command: String, status: ExitStatus },
}

/// A pager command and the environment it runs with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pager {
    command: String,
    env: Vec<(String, String)>,
}

impl Pager {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            env: Vec::new(),
        }
    }

    /// The pager from `CSVIEW_PAGER`, or `less` with `LESS=-SF` when unset.
    ///
    /// An existing `LESS` setting is left alone.
    pub fn from_env() -> Self {
        let command = std::env::var(PAGER_ENV)
            .ok()
            .filter(|cmd| !cmd.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PAGER.to_string());
        let pager = Self::new(command);
        if pager.command == DEFAULT_PAGER && std::env::var_os("LESS").is_none() {
            pager.env("LESS", DEFAULT_LESS_FLAGS)
        } else {
            pager
        }
    }

    /// Set an environment variable for the pager process.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Environment overrides, in the order they were added.
    pub fn envs(&self) -> &[(String, String)] {
        &self.env
    }

    /// Start the pager with a pipe on its stdin.
    pub fn spawn(&self) -> Result<PagerProcess, PipeError> {
        let mut cmd = shell_command(&self.command);
        cmd.envs(self.env.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::piped())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = cmd.spawn().map_err(|source| PipeError::Spawn {
            command: self.command.clone(),
            source,
        })?;
        let stdin = child.stdin.take();
        tracing::debug!(command = %self.command, pid = child.id(), "spawned pager");

        Ok(PagerProcess {
            command: self.command.clone(),
            child,
            stdin,
        })
    }
}

/// A running pager. Bytes written here are what the user pages through.
#[derive(Debug)]
pub struct PagerProcess {
    command: String,
    child: Child,
    stdin: Option<ChildStdin>,
}

impl PagerProcess {
    /// Close the pager's input and wait for the user to quit it.
    pub fn finish(mut self) -> Result<(), PipeError> {
        if let Some(mut stdin) = self.stdin.take() {
            // the pager may already be gone if the user quit early
            match stdin.flush() {
                Err(e) if e.kind() != io::ErrorKind::BrokenPipe => return Err(e.into()),
                _ => {}
            }
        }
        let status = self.child.wait()?;
        tracing::debug!(command = %self.command, %status, "pager exited");
        if !status.success() {
            return Err(PipeError::CommandFailed {
                command: self.command.clone(),
                status,
            });
        }
        Ok(())
    }

    fn stdin(&mut self) -> io::Result<&mut ChildStdin> {
        self.stdin
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "pager input closed"))
    }
}

impl Write for PagerProcess {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stdin()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdin()?.flush()
    }
}
