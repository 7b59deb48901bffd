use crate::fixtures::{ColumnType, fetch_schema};

#[tokio::test]
async fn test_db_schema_document() {
    let schema = fetch_schema().await;

    let document = schema.table("document").await;
    document
        .columns(&[
            "id",
            "user_id",
            "original_name",
            "file_name",
            "path",
            "size",
            "mime_type",
            "created_date",
            "state",
            "signed_date",
            "signed_by",
            "signed_path",
        ])
        .index(
            "index-Document-UserId-CreatedDate",
            false,
            &["user_id", "created_date"],
        );

    document
        .column("id")
        .r#type(ColumnType::Uuid)
        .nullable(false)
        .primary_key();
    document
        .column("user_id")
        .r#type(ColumnType::Uuid)
        .nullable(false);
    document.column("original_name").nullable(false);
    document.column("file_name").nullable(false);
    document.column("path").nullable(false);
    document.column("size").nullable(false);
    document.column("mime_type").nullable(false);
    document
        .column("created_date")
        .r#type(ColumnType::Timestamp)
        .nullable(false);
    document.column("state").nullable(false);

    // added by the signature columns migration
    document
        .column("signed_date")
        .r#type(ColumnType::Timestamp)
        .nullable(true);
    document.column("signed_by").nullable(true);
    document.column("signed_path").nullable(true);
}
