use sea_orm_migration::prelude::*;

use crate::datatype::ColumnDefExt;
use crate::m20260301_000001_initial::Document;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // sqlite only supports one column per ALTER TABLE
        manager
            .alter_table(
                Table::alter()
                    .table(Document::Table)
                    .add_column(
                        ColumnDef::new(SignedDocument::SignedDate)
                            .datetime_millisecond_precision(manager),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(Document::Table)
                    .add_column(ColumnDef::new(SignedDocument::SignedBy).string())
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(Document::Table)
                    .add_column(ColumnDef::new(SignedDocument::SignedPath).string())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for column in [
            SignedDocument::SignedPath,
            SignedDocument::SignedBy,
            SignedDocument::SignedDate,
        ] {
            manager
                .alter_table(
                    Table::alter()
                        .table(Document::Table)
                        .drop_column(column)
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }
}

#[derive(Iden)]
enum SignedDocument {
    SignedDate,
    SignedBy,
    SignedPath,
}
