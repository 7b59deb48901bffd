use docsign_core::model::document::Document;
use docsign_core::repository::error::DataLayerError;
use one_dto_mapper::{From, Into};
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use shared_types::{DocumentId, UserId};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "document")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: DocumentId,
    pub user_id: UserId,
    pub original_name: String,
    pub file_name: String,
    pub path: String,
    pub size: i64,
    pub mime_type: String,
    pub created_date: OffsetDateTime,
    pub state: DocumentState,
    pub signed_date: Option<OffsetDateTime>,
    pub signed_by: Option<String>,
    pub signed_path: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Eq, PartialEq, EnumIter, DeriveActiveEnum, Into, From)]
#[from(docsign_core::model::document::DocumentState)]
#[into(docsign_core::model::document::DocumentState)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum DocumentState {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "SIGNED")]
    Signed,
}

impl TryFrom<Document> for ActiveModel {
    type Error = DataLayerError;

    fn try_from(document: Document) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Set(document.id),
            user_id: Set(document.user_id),
            original_name: Set(document.original_name),
            file_name: Set(document.file_name),
            path: Set(document.path),
            size: Set(i64::try_from(document.size).map_err(|_| DataLayerError::MappingError)?),
            mime_type: Set(document.mime_type),
            created_date: Set(document.created_date),
            state: Set(document.state.into()),
            signed_date: Set(document.signed_date),
            signed_by: Set(document.signed_by),
            signed_path: Set(document.signed_path),
        })
    }
}

impl TryFrom<Model> for Document {
    type Error = DataLayerError;

    fn try_from(value: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            user_id: value.user_id,
            original_name: value.original_name,
            file_name: value.file_name,
            path: value.path,
            size: u64::try_from(value.size).map_err(|_| DataLayerError::MappingError)?,
            mime_type: value.mime_type,
            created_date: value.created_date,
            state: value.state.into(),
            signed_date: value.signed_date,
            signed_by: value.signed_by,
            signed_path: value.signed_path,
        })
    }
}
