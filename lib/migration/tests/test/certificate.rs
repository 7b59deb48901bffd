use crate::fixtures::{ColumnType, fetch_schema};

#[tokio::test]
async fn test_db_schema_certificate() {
    let schema = fetch_schema().await;

    let certificate = schema.table("certificate").await;
    certificate
        .columns(&[
            "id",
            "user_id",
            "file_name",
            "certificate_type",
            "alias",
            "issuer",
            "valid_from",
            "valid_to",
            "is_system",
            "encryption_scheme",
            "salt",
            "iv",
            "data",
            "created_date",
        ])
        .index(
            "index-Certificate-UserId-FileName-Unique",
            true,
            &["user_id", "file_name"],
        )
        .index(
            "index-Certificate-UserId-CreatedDate",
            false,
            &["user_id", "created_date"],
        );

    certificate
        .column("id")
        .r#type(ColumnType::Uuid)
        .nullable(false)
        .has_default(false)
        .primary_key();
    certificate
        .column("user_id")
        .r#type(ColumnType::Uuid)
        .nullable(false);
    certificate.column("file_name").nullable(false);
    certificate.column("certificate_type").nullable(false);
    certificate.column("alias").nullable(true);
    certificate.column("issuer").nullable(true);
    certificate
        .column("valid_from")
        .r#type(ColumnType::Timestamp)
        .nullable(true);
    certificate
        .column("valid_to")
        .r#type(ColumnType::Timestamp)
        .nullable(true);
    certificate
        .column("is_system")
        .r#type(ColumnType::Boolean)
        .nullable(false)
        .has_default(true);
    certificate.column("encryption_scheme").nullable(true);
    certificate.column("salt").nullable(true);
    certificate.column("iv").nullable(true);
    certificate
        .column("data")
        .r#type(ColumnType::Blob)
        .nullable(false);
    certificate
        .column("created_date")
        .r#type(ColumnType::Timestamp)
        .nullable(false)
        .has_default(false);
}
