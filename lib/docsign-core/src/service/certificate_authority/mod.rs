use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::core_config::CertificateAuthorityConfig;
use crate::provider::openssl_cli::OpensslCli;

pub mod dto;
pub mod service;

mod openssl_config;

/// File based CA driven through the `openssl` CLI.
#[derive(Clone)]
pub struct CertificateAuthorityService {
    openssl: OpensslCli,
    config: CertificateAuthorityConfig,
    /// Held while `openssl x509` reads and advances the serial file
    serial_lock: Arc<Mutex<()>>,
}

impl CertificateAuthorityService {
    pub fn new(openssl: OpensslCli, config: CertificateAuthorityConfig) -> Self {
        Self {
            openssl,
            config,
            serial_lock: Arc::default(),
        }
    }
}
