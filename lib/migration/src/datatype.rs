use sea_orm_migration::prelude::*;

pub trait ColumnDefExt {
    fn large_blob(&mut self, manager: &SchemaManager) -> &mut ColumnDef;
    fn datetime_millisecond_precision(&mut self, manager: &SchemaManager) -> &mut ColumnDef;
    fn datetime_second_precision(&mut self, manager: &SchemaManager) -> &mut ColumnDef;
}

impl ColumnDefExt for ColumnDef {
    fn large_blob(&mut self, _manager: &SchemaManager) -> &mut ColumnDef {
        self.blob();

        #[cfg(feature = "mysql")]
        if matches!(
            _manager.get_database_backend(),
            sea_orm::DatabaseBackend::MySql
        ) {
            self.custom(extension::mysql::MySqlType::LongBlob);
        }

        self
    }

    fn datetime_millisecond_precision(&mut self, manager: &SchemaManager) -> &mut ColumnDef {
        self.custom(Alias::new(datetime_type(manager, 3)))
    }

    fn datetime_second_precision(&mut self, manager: &SchemaManager) -> &mut ColumnDef {
        self.custom(Alias::new(datetime_type(manager, 0)))
    }
}

fn datetime_type(manager: &SchemaManager, precision: u8) -> String {
    match manager.get_database_backend() {
        sea_orm::DatabaseBackend::MySql => format!("datetime({precision})"),
        sea_orm::DatabaseBackend::Postgres => format!("timestamp({precision})"),
        sea_orm::DatabaseBackend::Sqlite => "datetime".to_string(),
    }
}
