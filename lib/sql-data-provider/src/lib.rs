use std::sync::Arc;

use docsign_core::repository::DataRepository;
use docsign_core::repository::certificate_repository::CertificateRepository;
use docsign_core::repository::document_repository::DocumentRepository;
use migration::{Migrator, MigratorTrait};
use sea_orm::{DatabaseConnection, DbErr};

use crate::certificate::CertificateProvider;
use crate::document::DocumentProvider;

pub mod certificate;
pub mod document;
pub mod entity;

mod mapper;

#[cfg(test)]
pub mod test_utilities;

pub type DbConn = DatabaseConnection;

#[derive(Clone)]
pub struct DataLayer {
    #[allow(unused)]
    db: DatabaseConnection,
    certificate_repository: Arc<dyn CertificateRepository>,
    document_repository: Arc<dyn DocumentRepository>,
}

impl DataLayer {
    pub fn build(db: DbConn) -> Self {
        Self {
            certificate_repository: Arc::new(CertificateProvider { db: db.clone() }),
            document_repository: Arc::new(DocumentProvider { db: db.clone() }),
            db,
        }
    }
}

/// Connects and applies all pending migrations.
pub async fn db_conn(database_url: impl Into<String>) -> Result<DbConn, DbErr> {
    let db = sea_orm::Database::connect(database_url.into()).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

impl DataRepository for DataLayer {
    fn get_certificate_repository(&self) -> Arc<dyn CertificateRepository> {
        self.certificate_repository.clone()
    }

    fn get_document_repository(&self) -> Arc<dyn DocumentRepository> {
        self.document_repository.clone()
    }
}
