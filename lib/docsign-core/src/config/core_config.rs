use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::Figment;
#[cfg(feature = "config_env")]
use figment::providers::Env;
#[cfg(feature = "config_json")]
use figment::providers::Json;
#[cfg(feature = "config_yaml")]
use figment::providers::Yaml;
use figment::providers::{Data, Format};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_with::{DurationSeconds, serde_as};
use strum::{Display, EnumString};

use super::{ConfigParsingError, ConfigValidationError};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoCustomConfig;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppCustomConfigSerdeDTO<Custom> {
    #[serde(default)]
    pub(super) app: Custom,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig<Custom> {
    pub core: CoreConfig,
    #[serde(default)]
    pub app: Custom,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreConfig {
    #[serde(default)]
    pub certificate_authority: CertificateAuthorityConfig,
    #[serde(default)]
    pub openssl: OpensslConfig,
    #[serde(default)]
    pub pkcs12_validator: Pkcs12ValidatorConfig,
    #[serde(default)]
    pub pdf_signer: PdfSignerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl CoreConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let ca = &self.certificate_authority;
        if ca.key_bits < 2048 {
            return Err(ConfigValidationError::InvalidValue {
                field: "certificateAuthority.keyBits",
                reason: format!("{} is below 2048", ca.key_bits),
            });
        }

        if ca.validity_days == 0 || ca.issued_validity_days == 0 {
            return Err(ConfigValidationError::InvalidValue {
                field: "certificateAuthority.validityDays",
                reason: "must be positive".to_string(),
            });
        }

        let country = &ca.subject.country;
        if country.len() != 2 || !country.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigValidationError::InvalidValue {
                field: "certificateAuthority.subject.country",
                reason: format!("`{country}` is not a two letter country code"),
            });
        }

        if self.storage.max_document_size == 0 {
            return Err(ConfigValidationError::InvalidValue {
                field: "storage.maxDocumentSize",
                reason: "must be positive".to_string(),
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificateAuthorityConfig {
    pub directory: PathBuf,
    pub key_bits: u32,
    /// Lifetime of the CA certificate itself
    pub validity_days: u32,
    /// Lifetime of certificates issued to users
    pub issued_validity_days: u32,
    pub subject: CertificateSubjectConfig,
}

impl Default for CertificateAuthorityConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("SistemaCA"),
            key_bits: 2048,
            validity_days: 3650,
            issued_validity_days: 365,
            subject: Default::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificateSubjectConfig {
    pub country: String,
    pub state: String,
    pub locality: String,
    pub organization: String,
    pub organizational_unit: String,
    pub common_name: String,
}

impl Default for CertificateSubjectConfig {
    fn default() -> Self {
        Self {
            country: "MX".to_string(),
            state: "Estado de México".to_string(),
            locality: "Ciudad de México".to_string(),
            organization: "Sistema de Firma Digital".to_string(),
            organizational_unit: "Autoridad Certificadora".to_string(),
            common_name: "Sistema CA".to_string(),
        }
    }
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OpensslConfig {
    pub binary: PathBuf,
    #[serde_as(as = "DurationSeconds<u64>")]
    pub timeout: Duration,
}

impl Default for OpensslConfig {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("openssl"),
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Default, Copy, Clone, Display, EnumString, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pkcs12ValidatorType {
    #[default]
    #[serde(rename = "NATIVE")]
    #[strum(serialize = "NATIVE")]
    Native,
    #[serde(rename = "OPENSSL_CLI")]
    #[strum(serialize = "OPENSSL_CLI")]
    OpensslCli,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pkcs12ValidatorConfig {
    pub r#type: Pkcs12ValidatorType,
    #[serde_as(as = "DurationSeconds<u64>")]
    pub timeout: Duration,
}

impl Default for Pkcs12ValidatorConfig {
    fn default() -> Self {
        Self {
            r#type: Pkcs12ValidatorType::Native,
            timeout: Duration::from_secs(10),
        }
    }
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PdfSignerConfig {
    pub python: PathBuf,
    pub script: PathBuf,
    #[serde_as(as = "DurationSeconds<u64>")]
    pub timeout: Duration,
}

impl Default for PdfSignerConfig {
    fn default() -> Self {
        Self {
            python: PathBuf::from("python"),
            script: PathBuf::from("API_Pyhanko/firmar-pdf.py"),
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageConfig {
    pub document_directory: PathBuf,
    /// Bytes
    pub max_document_size: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            document_directory: PathBuf::from("uploads"),
            max_document_size: 10 * 1024 * 1024,
        }
    }
}

pub enum InputFormat {
    #[cfg(feature = "config_yaml")]
    Yaml(Data<Yaml>),
    #[cfg(feature = "config_json")]
    Json(Data<Json>),
}

impl InputFormat {
    #[cfg(feature = "config_yaml")]
    pub fn yaml_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Yaml(Yaml::file(p))
    }

    #[cfg(feature = "config_yaml")]
    pub fn yaml_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Yaml(Yaml::string(s.as_ref()))
    }

    #[cfg(feature = "config_json")]
    pub fn json_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Json(Json::file(p))
    }

    #[cfg(feature = "config_json")]
    pub fn json_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Json(Json::string(s.as_ref()))
    }
}

impl<Custom> AppConfig<Custom>
where
    Custom: Serialize + DeserializeOwned + Default,
{
    pub fn from_files(files: &[impl AsRef<Path>]) -> Result<Self, ConfigParsingError> {
        let mut inputs: Vec<InputFormat> = Vec::with_capacity(files.len());

        for path in files {
            #[cfg(feature = "config_yaml")]
            if path
                .as_ref()
                .extension()
                .is_some_and(|ext| ext == "yml" || ext == "yaml")
            {
                inputs.push(InputFormat::yaml_file(path));
                continue;
            }

            #[cfg(feature = "config_json")]
            if path.as_ref().extension() == Some("json".as_ref()) {
                inputs.push(InputFormat::json_file(path));
                continue;
            }

            return Err(ConfigParsingError::GeneralParsingError(format!(
                "Unsupported file or missing file extension: {:?}",
                path.as_ref().to_str()
            )));
        }

        AppConfig::parse(inputs)
    }

    #[cfg(feature = "config_yaml")]
    pub fn from_yaml(
        configs: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, ConfigParsingError> {
        let inputs = configs.into_iter().map(InputFormat::yaml_str);

        AppConfig::parse(inputs)
    }

    pub fn parse(
        inputs: impl IntoIterator<Item = InputFormat>,
    ) -> Result<Self, ConfigParsingError> {
        let mut figment = Figment::new();

        for data in inputs {
            figment = match data {
                #[cfg(feature = "config_yaml")]
                InputFormat::Yaml(content) => figment.merge(content),
                #[cfg(feature = "config_json")]
                InputFormat::Json(content) => figment.merge(content),
            };
        }

        #[cfg(feature = "config_env")]
        {
            figment = figment.merge(Env::prefixed("DOCSIGN_").split("__").lowercase(false));
        }

        let core = figment
            .extract::<CoreConfig>()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;
        let custom = figment
            .extract::<AppCustomConfigSerdeDTO<Custom>>()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;

        Ok(Self {
            core,
            app: custom.app,
        })
    }
}
