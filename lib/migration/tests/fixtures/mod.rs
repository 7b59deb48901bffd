use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, QueryResult, Statement};

pub(super) async fn migrated_connection() -> DatabaseConnection {
    let conn = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&conn, None).await.unwrap();
    conn
}

pub(super) async fn fetch_schema() -> Schema {
    Schema {
        conn: migrated_connection().await,
    }
}

async fn pragma(conn: &DatabaseConnection, query: String) -> Vec<QueryResult> {
    conn.query_all(Statement::from_string(DbBackend::Sqlite, query))
        .await
        .unwrap()
}

pub(super) async fn table_exists(conn: &DatabaseConnection, name: &str) -> bool {
    let rows = pragma(
        conn,
        format!("SELECT name FROM sqlite_master WHERE type = 'table' AND name = '{name}'"),
    )
    .await;
    !rows.is_empty()
}

#[derive(Debug)]
pub(super) struct Schema {
    conn: DatabaseConnection,
}

impl Schema {
    pub async fn table(&self, name: &str) -> Table {
        assert!(
            table_exists(&self.conn, name).await,
            "Table {name} does not exist"
        );

        let columns = pragma(&self.conn, format!("PRAGMA table_info('{name}')"))
            .await
            .into_iter()
            .map(|row| ColumnInfo {
                name: row.try_get("", "name").unwrap(),
                r#type: row.try_get("", "type").unwrap(),
                not_null: row.try_get::<i32>("", "notnull").unwrap() != 0,
                default: row.try_get("", "dflt_value").unwrap(),
                primary_key: row.try_get::<i32>("", "pk").unwrap() != 0,
            })
            .collect();

        let mut indexes = vec![];
        for row in pragma(&self.conn, format!("PRAGMA index_list('{name}')")).await {
            let index_name: String = row.try_get("", "name").unwrap();
            let unique = row.try_get::<i32>("", "unique").unwrap() != 0;
            let columns = pragma(&self.conn, format!("PRAGMA index_info('{index_name}')"))
                .await
                .into_iter()
                .map(|row| row.try_get::<String>("", "name").unwrap())
                .collect();
            indexes.push(IndexInfo {
                name: index_name,
                unique,
                columns,
            });
        }

        Table {
            name: name.to_string(),
            columns,
            indexes,
        }
    }
}

#[derive(Debug, Clone)]
struct ColumnInfo {
    name: String,
    r#type: String,
    not_null: bool,
    default: Option<String>,
    primary_key: bool,
}

#[derive(Debug, Clone)]
struct IndexInfo {
    name: String,
    unique: bool,
    columns: Vec<String>,
}

#[derive(Debug, Clone)]
pub(super) struct Table {
    name: String,
    columns: Vec<ColumnInfo>,
    indexes: Vec<IndexInfo>,
}

impl Table {
    pub fn column(&self, name: &str) -> Column {
        let column = self.columns.iter().find(|column| column.name == name);
        assert!(
            column.is_some(),
            "Column {name} does not exist in table {}",
            self.name
        );
        Column {
            info: column.unwrap().to_owned(),
            table: self.name.to_owned(),
        }
    }

    pub fn columns(&self, columns: &[&str]) -> &Self {
        for column in columns {
            self.column(column);
        }
        for column in &self.columns {
            assert!(
                columns.contains(&column.name.as_str()),
                "Unknown column {} exists in table {}",
                column.name,
                self.name
            );
        }
        self
    }

    pub fn index(&self, name: &str, unique: bool, columns: &[&str]) -> &Self {
        let index = self.indexes.iter().find(|index| index.name == name);
        assert!(
            index.is_some(),
            "No index with name {name} exists in table {}",
            self.name
        );
        let index = index.unwrap();

        assert_eq!(
            index.unique, unique,
            "Index name {name} in table {}: wrong uniqueness",
            self.name
        );
        assert_eq!(
            index.columns, columns,
            "Index name {name} in table {}: wrong column/order",
            self.name
        );
        self
    }
}

#[derive(Debug)]
pub(super) enum ColumnType {
    Uuid,
    Timestamp,
    Boolean,
    Blob,
}

impl ColumnType {
    fn sqlite_name(&self) -> &'static str {
        match self {
            Self::Uuid => "char(36)",
            Self::Timestamp => "datetime",
            Self::Boolean => "boolean",
            Self::Blob => "blob",
        }
    }
}

#[derive(Debug)]
pub(super) struct Column {
    info: ColumnInfo,
    table: String,
}

impl Column {
    pub fn r#type(&self, r#type: ColumnType) -> &Self {
        assert_eq!(
            self.info.r#type.to_lowercase(),
            r#type.sqlite_name(),
            "Column {} in table {}: invalid type",
            self.info.name,
            self.table
        );
        self
    }

    pub fn nullable(&self, nullable: bool) -> &Self {
        assert_eq!(
            !self.info.not_null,
            nullable,
            "Column {} in table {}: invalid nullability",
            self.info.name,
            self.table
        );
        self
    }

    pub fn has_default(&self, has_default: bool) -> &Self {
        assert_eq!(
            self.info.default.is_some(),
            has_default,
            "Column {} in table {}: invalid default value",
            self.info.name,
            self.table
        );
        self
    }

    pub fn primary_key(&self) -> &Self {
        assert!(
            self.info.primary_key,
            "Column {} in table {} not a primary key",
            self.info.name,
            self.table
        );
        self
    }
}
