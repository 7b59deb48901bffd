//! Running external programs (`openssl`, `python`) with a timeout.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

pub mod tokio_runner;


const REDACTED: &str = "[REDACTED]";

pub struct CommandRequest {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    /// Written to the child's stdin followed by a newline
    pub stdin: Option<SecretString>,
    pub working_dir: Option<PathBuf>,
    pub timeout: Duration,
    /// Positions in `args` hidden from `Debug`
    secret_args: Vec<usize>,
}

impl CommandRequest {
    pub fn new(program: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args: vec![],
            stdin: None,
            working_dir: None,
            timeout,
            secret_args: vec![],
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_owned());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|arg| arg.as_ref().to_owned()));
        self
    }

    /// Passed on the command line as is but never printed.
    pub fn secret_arg(mut self, arg: &SecretString) -> Self {
        self.secret_args.push(self.args.len());
        self.args.push(arg.expose_secret().into());
        self
    }

    pub fn stdin(mut self, input: SecretString) -> Self {
        self.stdin = Some(input);
        self
    }

    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn program_name(&self) -> String {
        self.program.display().to_string()
    }
}

impl fmt::Debug for CommandRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<_> = self
            .args
            .iter()
            .enumerate()
            .map(|(index, arg)| {
                if self.secret_args.contains(&index) {
                    Cow::Borrowed(REDACTED)
                } else {
                    arg.to_string_lossy()
                }
            })
            .collect();

        f.debug_struct("CommandRequest")
            .field("program", &self.program)
            .field("args", &args)
            .field("stdin", &self.stdin)
            .field("working_dir", &self.working_dir)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when terminated by a signal
    pub status: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("`{program}` exited with status {status:?}: {stderr}")]
    Failed {
        program: String,
        status: Option<i32>,
        stderr: String,
    },
    #[error("expected output `{}` was not produced", .0.display())]
    MissingOutput(PathBuf),
    #[error("`{0}` timed out")]
    Timeout(String),
    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("I/O error while running `{program}`: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs the command to completion. A non-zero exit status is not an error at this level.
    async fn run(&self, request: CommandRequest) -> Result<CommandOutput, CommandError>;
}

pub async fn run_successful(
    runner: &dyn CommandRunner,
    request: CommandRequest,
) -> Result<CommandOutput, CommandError> {
    let program = request.program_name();
    let output = runner.run(request).await?;

    if !output.success() {
        return Err(CommandError::Failed {
            program,
            status: output.status,
            stderr: output.stderr,
        });
    }

    Ok(output)
}

/// Exit status 0 alone is not trusted: `expected` must exist afterwards.
pub async fn run_expecting_file(
    runner: &dyn CommandRunner,
    request: CommandRequest,
    expected: &Path,
) -> Result<CommandOutput, CommandError> {
    let output = run_successful(runner, request).await?;

    if !matches!(tokio::fs::try_exists(expected).await, Ok(true)) {
        return Err(CommandError::MissingOutput(expected.to_owned()));
    }

    Ok(output)
}
