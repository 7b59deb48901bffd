use sea_orm_migration::prelude::*;
pub use sea_orm_migration::MigratorTrait;

pub(crate) mod datatype;

mod m20260301_000001_initial;
mod m20260309_000001_document_signature_columns;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_initial::Migration),
            Box::new(m20260309_000001_document_signature_columns::Migration),
        ]
    }
}
