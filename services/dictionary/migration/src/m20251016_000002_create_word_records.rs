use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// NULLs are distinct in a plain unique index, so anonymous rows need their own
/// partial index. Supported by both SQLite and PostgreSQL.
const CREATE_ANONYMOUS_KEY_INDEX: &str = "CREATE UNIQUE INDEX IF NOT EXISTS \
     uq_word_records_anonymous_key ON word_records (word, language) WHERE user_id IS NULL";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WordRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WordRecords::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WordRecords::Word).string_len(255).not_null())
                    .col(
                        ColumnDef::new(WordRecords::Language)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(ColumnDef::new(WordRecords::Definition).text().not_null())
                    .col(
                        ColumnDef::new(WordRecords::QueryTimes)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(WordRecords::UserId).integer().null())
                    .col(
                        ColumnDef::new(WordRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(WordRecords::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_word_records_user_id")
                            .from(WordRecords::Table, WordRecords::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_word_records_owner_key")
                    .table(WordRecords::Table)
                    .col(WordRecords::Word)
                    .col(WordRecords::Language)
                    .col(WordRecords::UserId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(CREATE_ANONYMOUS_KEY_INDEX)
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_word_records_user_id_query_times")
                    .table(WordRecords::Table)
                    .col(WordRecords::UserId)
                    .col(WordRecords::QueryTimes)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WordRecords::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum WordRecords {
    Table,
    Id,
    Word,
    Language,
    Definition,
    QueryTimes,
    UserId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
