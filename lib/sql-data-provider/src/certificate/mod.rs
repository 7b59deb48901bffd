use sea_orm::DatabaseConnection;

pub mod repository;

pub(crate) struct CertificateProvider {
    pub db: DatabaseConnection,
}
