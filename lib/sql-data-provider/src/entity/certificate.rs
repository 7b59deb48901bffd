use docsign_core::model::certificate::{Certificate, CertificateEncryption};
use docsign_core::repository::error::DataLayerError;
use one_dto_mapper::{From, Into};
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use shared_types::{CertificateId, UserId};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "certificate")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: CertificateId,
    pub user_id: UserId,
    pub file_name: String,
    pub certificate_type: String,
    pub alias: Option<String>,
    pub issuer: Option<String>,
    pub valid_from: Option<OffsetDateTime>,
    pub valid_to: Option<OffsetDateTime>,
    pub is_system: bool,
    pub encryption_scheme: Option<EncryptionScheme>,
    pub salt: Option<String>,
    pub iv: Option<String>,
    pub data: Vec<u8>,
    pub created_date: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Eq, PartialEq, EnumIter, DeriveActiveEnum, Into, From)]
#[from(docsign_core::model::certificate::EncryptionScheme)]
#[into(docsign_core::model::certificate::EncryptionScheme)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum EncryptionScheme {
    #[sea_orm(string_value = "PBKDF2_SHA512_AES256_CBC")]
    Pbkdf2Sha512Aes256Cbc,
}

impl From<Certificate> for ActiveModel {
    fn from(certificate: Certificate) -> Self {
        let (encryption_scheme, salt, iv) = match certificate.encryption {
            Some(encryption) => (
                Some(encryption.scheme.into()),
                Some(encryption.salt),
                Some(encryption.iv),
            ),
            None => (None, None, None),
        };

        Self {
            id: Set(certificate.id),
            user_id: Set(certificate.user_id),
            file_name: Set(certificate.file_name),
            certificate_type: Set(certificate.certificate_type),
            alias: Set(certificate.alias),
            issuer: Set(certificate.issuer),
            valid_from: Set(certificate.valid_from),
            valid_to: Set(certificate.valid_to),
            is_system: Set(certificate.is_system),
            encryption_scheme: Set(encryption_scheme),
            salt: Set(salt),
            iv: Set(iv),
            data: Set(certificate.data),
            created_date: Set(certificate.created_date),
        }
    }
}

impl TryFrom<Model> for Certificate {
    type Error = DataLayerError;

    fn try_from(value: Model) -> Result<Self, Self::Error> {
        let encryption = match (value.encryption_scheme, value.salt, value.iv) {
            (Some(scheme), Some(salt), Some(iv)) => Some(CertificateEncryption {
                scheme: scheme.into(),
                salt,
                iv,
            }),
            (None, None, None) => None,
            _ => return Err(DataLayerError::MappingError),
        };

        Ok(Self {
            id: value.id,
            user_id: value.user_id,
            file_name: value.file_name,
            certificate_type: value.certificate_type,
            alias: value.alias,
            issuer: value.issuer,
            valid_from: value.valid_from,
            valid_to: value.valid_to,
            is_system: value.is_system,
            encryption,
            data: value.data,
            created_date: value.created_date,
        })
    }
}
