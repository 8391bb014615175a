use sea_orm::entity::prelude::*;

/// One looked-up word, keyed by (word, language, user_id).
///
/// `user_id = NULL` marks an anonymous record. Uniqueness of the key is enforced by two
/// indexes: one over owned rows and a partial one over anonymous rows.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "word_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub word: String,
    /// `"chinese"` or `"english"`.
    pub language: String,
    #[sea_orm(column_type = "Text")]
    pub definition: String,
    pub query_times: i32,
    pub user_id: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
