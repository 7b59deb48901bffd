use std::io::ErrorKind;
use std::process::Stdio;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use super::{CommandError, CommandOutput, CommandRequest, CommandRunner};

/// Spawns real processes via `tokio::process`. Children are killed when the
/// future is dropped, so a timed out or cancelled call leaves nothing behind.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner;

#[async_trait]
impl CommandRunner for TokioCommandRunner {
    async fn run(&self, request: CommandRequest) -> Result<CommandOutput, CommandError> {
        let program = request.program_name();

        let mut command = Command::new(&request.program);
        command
            .args(&request.args)
            .stdin(if request.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(dir) = &request.working_dir {
            command.current_dir(dir);
        }

        let mut child = command.spawn().map_err(|source| CommandError::Spawn {
            program: program.clone(),
            source,
        })?;

        let input = request.stdin;
        let execution = async move {
            if let (Some(input), Some(mut stdin)) = (input, child.stdin.take()) {
                let mut line = input.expose_secret().as_bytes().to_vec();
                line.push(b'\n');
                match stdin.write_all(&line).await {
                    // the child may exit without reading its input
                    Err(err) if err.kind() != ErrorKind::BrokenPipe => return Err(err),
                    _ => {}
                }
            }

            child.wait_with_output().await
        };

        let output = tokio::time::timeout(request.timeout, execution)
            .await
            .map_err(|_| CommandError::Timeout(program.clone()))?
            .map_err(|source| CommandError::Io {
                program: program.clone(),
                source,
            })?;

        let result = CommandOutput {
            status: output.status.code(),
            stdout: output.stdout,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        tracing::debug!(program, status = ?result.status, "Command finished");

        Ok(result)
    }
}
