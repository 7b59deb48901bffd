use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::{PdfSignRequest, PdfSigner, PdfSignerError};
use crate::config::core_config::PdfSignerConfig;
use crate::provider::command::{CommandRequest, CommandRunner, run_expecting_file};

/// Runs the pyHanko signing script:
/// `python <script> <cert> <password> <input> <output> <page> <x1> <y1> <x2> <y2> <ca>`
pub struct PyHankoPdfSigner {
    runner: Arc<dyn CommandRunner>,
    python: PathBuf,
    script: PathBuf,
    timeout: Duration,
}

impl PyHankoPdfSigner {
    pub fn new(runner: Arc<dyn CommandRunner>, config: &PdfSignerConfig) -> Self {
        Self {
            runner,
            python: config.python.to_owned(),
            script: config.script.to_owned(),
            timeout: config.timeout,
        }
    }
}

#[async_trait]
impl PdfSigner for PyHankoPdfSigner {
    async fn sign(&self, request: PdfSignRequest) -> Result<(), PdfSignerError> {
        let position = request.position;

        // the script only accepts the password as an argument
        let command = CommandRequest::new(&self.python, self.timeout)
            .arg(&self.script)
            .arg(&request.certificate)
            .secret_arg(&request.password)
            .arg(&request.input)
            .arg(&request.output)
            .arg(position.page.to_string())
            .arg(position.x1.to_string())
            .arg(position.y1.to_string())
            .arg(position.x2.to_string())
            .arg(position.y2.to_string())
            .arg(&request.ca_certificate);

        let output = run_expecting_file(self.runner.as_ref(), command, &request.output).await?;

        tracing::debug!(
            stdout = %String::from_utf8_lossy(&output.stdout),
            "pyHanko finished"
        );

        Ok(())
    }
}
