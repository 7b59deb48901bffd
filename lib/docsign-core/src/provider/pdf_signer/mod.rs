use std::path::PathBuf;

use async_trait::async_trait;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::command::CommandError;

pub mod pyhanko;


/// Visible signature box. Coordinates are in PDF points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignaturePosition {
    pub page: u32,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Default for SignaturePosition {
    fn default() -> Self {
        Self {
            page: 1,
            x1: 100.0,
            y1: 275.0,
            x2: 250.0,
            y2: 250.0,
        }
    }
}

#[derive(Debug)]
pub struct PdfSignRequest {
    pub certificate: PathBuf,
    pub password: SecretString,
    pub input: PathBuf,
    pub output: PathBuf,
    pub position: SignaturePosition,
    pub ca_certificate: PathBuf,
}

#[derive(Debug, Error)]
pub enum PdfSignerError {
    #[error(transparent)]
    Command(#[from] CommandError),
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait PdfSigner: Send + Sync {
    /// Writes the signed document to `request.output`
    async fn sign(&self, request: PdfSignRequest) -> Result<(), PdfSignerError>;
}
