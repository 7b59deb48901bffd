use sea_orm::DatabaseConnection;

pub mod repository;

pub(crate) struct DocumentProvider {
    pub db: DatabaseConnection,
}
