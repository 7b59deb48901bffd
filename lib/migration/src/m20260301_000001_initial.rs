use sea_orm_migration::prelude::*;

use crate::datatype::ColumnDefExt;

#[derive(DeriveMigrationName)]
pub struct Migration;

const UNIQUE_CERTIFICATE_USER_FILE_NAME_INDEX: &str = "index-Certificate-UserId-FileName-Unique";
const CERTIFICATE_USER_CREATED_DATE_INDEX: &str = "index-Certificate-UserId-CreatedDate";
const DOCUMENT_USER_CREATED_DATE_INDEX: &str = "index-Document-UserId-CreatedDate";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Certificate::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Certificate::Id)
                            .char_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Certificate::UserId).char_len(36).not_null())
                    .col(ColumnDef::new(Certificate::FileName).string().not_null())
                    .col(
                        ColumnDef::new(Certificate::CertificateType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Certificate::Alias).string())
                    .col(ColumnDef::new(Certificate::Issuer).string())
                    .col(ColumnDef::new(Certificate::ValidFrom).datetime_second_precision(manager))
                    .col(ColumnDef::new(Certificate::ValidTo).datetime_second_precision(manager))
                    .col(
                        ColumnDef::new(Certificate::IsSystem)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Certificate::EncryptionScheme).string())
                    .col(ColumnDef::new(Certificate::Salt).string())
                    .col(ColumnDef::new(Certificate::Iv).string())
                    .col(
                        ColumnDef::new(Certificate::Data)
                            .large_blob(manager)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Certificate::CreatedDate)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_CERTIFICATE_USER_FILE_NAME_INDEX)
                    .table(Certificate::Table)
                    .col(Certificate::UserId)
                    .col(Certificate::FileName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(CERTIFICATE_USER_CREATED_DATE_INDEX)
                    .table(Certificate::Table)
                    .col(Certificate::UserId)
                    .col(Certificate::CreatedDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Document::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Document::Id)
                            .char_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Document::UserId).char_len(36).not_null())
                    .col(ColumnDef::new(Document::OriginalName).string().not_null())
                    .col(ColumnDef::new(Document::FileName).string().not_null())
                    .col(ColumnDef::new(Document::Path).string().not_null())
                    .col(ColumnDef::new(Document::Size).big_integer().not_null())
                    .col(ColumnDef::new(Document::MimeType).string().not_null())
                    .col(
                        ColumnDef::new(Document::CreatedDate)
                            .datetime_millisecond_precision(manager)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Document::State).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(DOCUMENT_USER_CREATED_DATE_INDEX)
                    .table(Document::Table)
                    .col(Document::UserId)
                    .col(Document::CreatedDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Document::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Certificate::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Certificate {
    Table,
    Id,
    UserId,
    FileName,
    CertificateType,
    Alias,
    Issuer,
    ValidFrom,
    ValidTo,
    IsSystem,
    EncryptionScheme,
    Salt,
    Iv,
    Data,
    CreatedDate,
}

#[derive(Iden)]
pub enum Document {
    Table,
    Id,
    UserId,
    OriginalName,
    FileName,
    Path,
    Size,
    MimeType,
    CreatedDate,
    State,
}
