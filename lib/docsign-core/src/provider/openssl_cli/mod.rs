//! Thin wrapper over the `openssl` command line tool.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use super::command::{
    CommandError, CommandOutput, CommandRequest, CommandRunner, run_expecting_file,
};
use crate::config::core_config::OpensslConfig;


#[derive(Clone)]
pub struct OpensslCli {
    runner: Arc<dyn CommandRunner>,
    binary: PathBuf,
    timeout: Duration,
}

pub struct SignRequestParams<'a> {
    pub csr: &'a Path,
    pub ca_certificate: &'a Path,
    pub ca_key: &'a Path,
    pub ca_serial: &'a Path,
    pub days: u32,
    pub extensions_file: &'a Path,
    pub extensions: &'a str,
    pub out: &'a Path,
}

pub struct Pkcs12ExportParams<'a> {
    pub key: &'a Path,
    pub certificate: &'a Path,
    /// Bundled into the container with `-certfile` when present
    pub ca_certificate: Option<&'a Path>,
    pub password: &'a SecretString,
    pub out: &'a Path,
}

impl OpensslCli {
    pub fn new(runner: Arc<dyn CommandRunner>, config: &OpensslConfig) -> Self {
        Self {
            runner,
            binary: config.binary.to_owned(),
            timeout: config.timeout,
        }
    }

    fn command(&self) -> CommandRequest {
        CommandRequest::new(&self.binary, self.timeout)
    }

    pub async fn generate_rsa_key(&self, out: &Path, bits: u32) -> Result<(), CommandError> {
        let request = self
            .command()
            .arg("genrsa")
            .arg("-out")
            .arg(out)
            .arg(bits.to_string());

        run_expecting_file(self.runner.as_ref(), request, out).await?;
        Ok(())
    }

    /// `req -new -x509` using a config file for subject and extensions
    pub async fn self_sign_with_config(
        &self,
        key: &Path,
        config: &Path,
        extensions: &str,
        days: u32,
        out: &Path,
    ) -> Result<(), CommandError> {
        let request = self
            .command()
            .args(["req", "-new", "-x509", "-days"])
            .arg(days.to_string())
            .arg("-key")
            .arg(key)
            .arg("-out")
            .arg(out)
            .arg("-config")
            .arg(config)
            .arg("-extensions")
            .arg(extensions);

        run_expecting_file(self.runner.as_ref(), request, out).await?;
        Ok(())
    }

    /// `req -new -x509` with an inline `-subj`
    pub async fn self_sign_with_subject(
        &self,
        key: &Path,
        subject: &str,
        days: u32,
        out: &Path,
    ) -> Result<(), CommandError> {
        let request = self
            .command()
            .args(["req", "-new", "-x509", "-key"])
            .arg(key)
            .arg("-out")
            .arg(out)
            .arg("-days")
            .arg(days.to_string())
            .arg("-subj")
            .arg(subject);

        run_expecting_file(self.runner.as_ref(), request, out).await?;
        Ok(())
    }

    pub async fn create_signing_request(
        &self,
        key: &Path,
        config: &Path,
        out: &Path,
    ) -> Result<(), CommandError> {
        let request = self
            .command()
            .args(["req", "-new", "-key"])
            .arg(key)
            .arg("-out")
            .arg(out)
            .arg("-config")
            .arg(config);

        run_expecting_file(self.runner.as_ref(), request, out).await?;
        Ok(())
    }

    pub async fn sign_request(&self, params: SignRequestParams<'_>) -> Result<(), CommandError> {
        let request = self
            .command()
            .args(["x509", "-req", "-in"])
            .arg(params.csr)
            .arg("-CA")
            .arg(params.ca_certificate)
            .arg("-CAkey")
            .arg(params.ca_key)
            .arg("-CAcreateserial")
            .arg("-CAserial")
            .arg(params.ca_serial)
            .arg("-out")
            .arg(params.out)
            .arg("-days")
            .arg(params.days.to_string())
            .arg("-extensions")
            .arg(params.extensions)
            .arg("-extfile")
            .arg(params.extensions_file);

        run_expecting_file(self.runner.as_ref(), request, params.out).await?;
        Ok(())
    }

    /// Export password is passed on stdin, never on the command line.
    pub async fn export_pkcs12(&self, params: Pkcs12ExportParams<'_>) -> Result<(), CommandError> {
        let mut request = self
            .command()
            .args(["pkcs12", "-export", "-out"])
            .arg(params.out)
            .arg("-inkey")
            .arg(params.key)
            .arg("-in")
            .arg(params.certificate);

        if let Some(ca_certificate) = params.ca_certificate {
            request = request.arg("-certfile").arg(ca_certificate);
        }

        let request = request
            .args(["-passout", "stdin"])
            .stdin(SecretString::from(params.password.expose_secret()));

        run_expecting_file(self.runner.as_ref(), request, params.out).await?;
        Ok(())
    }

    /// `pkcs12 -info -noout`; the raw output is returned so callers can classify failures.
    pub async fn pkcs12_info(
        &self,
        file: &Path,
        password: &SecretString,
        timeout: Duration,
    ) -> Result<CommandOutput, CommandError> {
        let request = CommandRequest::new(&self.binary, timeout)
            .args(["pkcs12", "-info", "-noout", "-in"])
            .arg(file)
            .args(["-passin", "stdin"])
            .stdin(SecretString::from(password.expose_secret()));

        self.runner.run(request).await
    }
}
