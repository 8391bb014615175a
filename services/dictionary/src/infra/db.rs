use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, SqlErr, TransactionTrait, sea_query::Expr,
};

use wordbook_core::sea_ext::FilterByOwner as _;
use wordbook_dictionary_schema::{users, word_records};
use wordbook_domain::history::HistoryLimit;
use wordbook_domain::id::UserId;
use wordbook_domain::language::Language;

use crate::domain::repository::{UserRepository, WordRecordRepository};
use crate::domain::types::{NewUser, User, WordRecord};
use crate::error::DictionaryError;

/// Upsert attempts before a unique-key conflict is reported as an error.
const UPSERT_ATTEMPTS: usize = 3;

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Run `attempt` (called with the 1-based attempt number) again while it fails with a
/// unique-key conflict, at most [`UPSERT_ATTEMPTS`] times in total.
async fn retry_on_conflict<T, F, Fut>(mut attempt: F) -> Result<T, DbErr>
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = Result<T, DbErr>>,
{
    let mut n = 1;
    loop {
        match attempt(n).await {
            Err(e) if is_unique_violation(&e) && n < UPSERT_ATTEMPTS => {
                tracing::debug!(attempt = n, "word record insert conflicted, retrying as update");
                n += 1;
            }
            result => return result,
        }
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DictionaryError> {
        let model = users::Entity::find_by_id(i32::from(id))
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DictionaryError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .context("find user by username")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DictionaryError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &NewUser) -> Result<User, DictionaryError> {
        let inserted = users::ActiveModel {
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            display_name: Set(user.display_name.clone()),
            is_active: Set(true),
            created_at: Set(Utc::now()),
            last_login: Set(None),
            ..Default::default()
        }
        .insert(&self.db)
        .await;

        match inserted {
            Ok(model) => Ok(user_from_model(model)),
            Err(e) if is_unique_violation(&e) => {
                // Lost a race with a concurrent registration.
                if self.find_by_username(&user.username).await?.is_some() {
                    Err(DictionaryError::UsernameTaken)
                } else {
                    Err(DictionaryError::EmailTaken)
                }
            }
            Err(e) => Err(anyhow::Error::new(e).context("create user").into()),
        }
    }

    async fn record_login(&self, id: UserId, at: DateTime<Utc>) -> Result<(), DictionaryError> {
        users::ActiveModel {
            id: Set(i32::from(id)),
            last_login: Set(Some(at)),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("record user login")?;
        Ok(())
    }

    async fn set_active(&self, username: &str, active: bool) -> Result<bool, DictionaryError> {
        let result = users::Entity::update_many()
            .col_expr(users::Column::IsActive, Expr::value(active))
            .filter(users::Column::Username.eq(username))
            .exec(&self.db)
            .await
            .context("set user active flag")?;
        Ok(result.rows_affected > 0)
    }

    async fn list(&self) -> Result<Vec<User>, DictionaryError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: UserId(model.id),
        username: model.username,
        email: model.email,
        password_hash: model.password_hash,
        display_name: model.display_name,
        is_active: model.is_active,
        created_at: model.created_at,
        last_login: model.last_login,
    }
}

// ── Word record repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbWordRecordRepository {
    pub db: DatabaseConnection,
}

impl DbWordRecordRepository {
    /// One read-modify-write inside a transaction. Bumps the existing row if any, otherwise
    /// inserts. A concurrent insert of the same key fails here with a unique violation.
    async fn upsert_once(
        &self,
        word: &str,
        language: Language,
        definition: &str,
        owner: Option<i32>,
    ) -> Result<word_records::Model, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let updated = word_records::Entity::update_many()
            .col_expr(
                word_records::Column::QueryTimes,
                Expr::col(word_records::Column::QueryTimes).add(1),
            )
            .col_expr(word_records::Column::Definition, Expr::value(definition))
            .col_expr(word_records::Column::UpdatedAt, Expr::value(now))
            .filter(word_records::Column::Word.eq(word))
            .filter(word_records::Column::Language.eq(language.as_str()))
            .filter_owner(word_records::Column::UserId, owner)
            .exec(&txn)
            .await?;

        let model = if updated.rows_affected == 0 {
            word_records::ActiveModel {
                word: Set(word.to_owned()),
                language: Set(language.as_str().to_owned()),
                definition: Set(definition.to_owned()),
                query_times: Set(1),
                user_id: Set(owner),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await?
        } else {
            word_records::Entity::find()
                .filter(word_records::Column::Word.eq(word))
                .filter(word_records::Column::Language.eq(language.as_str()))
                .filter_owner(word_records::Column::UserId, owner)
                .one(&txn)
                .await?
                .ok_or_else(|| DbErr::RecordNotFound("updated word record".to_owned()))?
        };

        txn.commit().await?;
        Ok(model)
    }
}

impl WordRecordRepository for DbWordRecordRepository {
    async fn upsert(
        &self,
        word: &str,
        language: Language,
        definition: &str,
        user_id: Option<UserId>,
    ) -> Result<WordRecord, DictionaryError> {
        let owner = user_id.map(i32::from);
        let model =
            retry_on_conflict(move |_| self.upsert_once(word, language, definition, owner))
                .await
                .context("upsert word record")?;
        Ok(record_from_model(model)?)
    }

    async fn find(
        &self,
        word: &str,
        language: Language,
        user_id: Option<UserId>,
    ) -> Result<Option<WordRecord>, DictionaryError> {
        let model = word_records::Entity::find()
            .filter(word_records::Column::Word.eq(word))
            .filter(word_records::Column::Language.eq(language.as_str()))
            .filter_owner(word_records::Column::UserId, user_id.map(i32::from))
            .one(&self.db)
            .await
            .context("find word record")?;
        Ok(model.map(record_from_model).transpose()?)
    }

    async fn ranked(
        &self,
        user_id: Option<UserId>,
        limit: HistoryLimit,
    ) -> Result<Vec<WordRecord>, DictionaryError> {
        let models = word_records::Entity::find()
            .filter_owner(word_records::Column::UserId, user_id.map(i32::from))
            .order_by_desc(word_records::Column::QueryTimes)
            .order_by_asc(word_records::Column::Id)
            .limit(limit.0)
            .all(&self.db)
            .await
            .context("list ranked word records")?;
        models
            .into_iter()
            .map(|m| record_from_model(m).map_err(DictionaryError::from))
            .collect()
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<WordRecord>, DictionaryError> {
        let models = word_records::Entity::find()
            .filter(word_records::Column::UserId.eq(i32::from(user_id)))
            .order_by_desc(word_records::Column::UpdatedAt)
            .order_by_desc(word_records::Column::Id)
            .all(&self.db)
            .await
            .context("list word records by user")?;
        models
            .into_iter()
            .map(|m| record_from_model(m).map_err(DictionaryError::from))
            .collect()
    }
}

fn record_from_model(model: word_records::Model) -> anyhow::Result<WordRecord> {
    let language = model
        .language
        .parse::<Language>()
        .with_context(|| format!("word record {} has bad language tag", model.id))?;
    Ok(WordRecord {
        id: model.id,
        word: model.word,
        language,
        definition: model.definition,
        query_times: model.query_times,
        user_id: model.user_id.map(UserId),
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}
