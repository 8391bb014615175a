use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum_test::TestServer;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use wordbook_dictionary::domain::repository::{DefinitionProvider, UserRepository};
use wordbook_dictionary::domain::types::{NewUser, ProviderError, User};
use wordbook_dictionary::infra::db::{DbUserRepository, DbWordRecordRepository};
use wordbook_dictionary::router::build_router;
use wordbook_dictionary::state::AppState;
use wordbook_dictionary_migration::Migrator;
use wordbook_domain::prompt::PromptStyle;
use wordbook_session::SessionSettings;
use wordbook_testing::session::TEST_SECRET;

/// Word the stub provider always fails on.
pub const FAILING_WORD: &str = "test";

/// Fresh in-memory SQLite database with all migrations applied.
pub async fn test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub fn user_repo(db: &DatabaseConnection) -> DbUserRepository {
    DbUserRepository { db: db.clone() }
}

pub fn record_repo(db: &DatabaseConnection) -> DbWordRecordRepository {
    DbWordRecordRepository { db: db.clone() }
}

/// Insert a user straight through the repository. The hash is not a real PHC string.
pub async fn seed_user(db: &DatabaseConnection, username: &str) -> User {
    user_repo(db)
        .create(&NewUser {
            username: username.to_owned(),
            email: format!("{username}@example.com"),
            password_hash: "not-a-real-hash".to_owned(),
            display_name: None,
        })
        .await
        .unwrap()
}

// ── StubProvider ─────────────────────────────────────────────────────────────

/// Numbers its answers (`definition #1`, `definition #2`, ...) and fails on
/// [`FAILING_WORD`].
#[derive(Default)]
pub struct StubProvider {
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl DefinitionProvider for StubProvider {
    async fn fetch_definition(&self, prompt: &str) -> Result<String, ProviderError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if prompt.contains(&format!("\"{FAILING_WORD}\"")) {
            return Err(ProviderError::Api {
                status: 503,
                message: "model overloaded".to_owned(),
            });
        }
        Ok(format!("definition #{n}"))
    }
}

// ── Test server ──────────────────────────────────────────────────────────────

pub struct TestApp {
    pub server: TestServer,
    pub db: DatabaseConnection,
}

pub async fn test_app() -> TestApp {
    let db = test_db().await;
    let state = AppState {
        db: db.clone(),
        provider: Arc::new(StubProvider::default()),
        session: SessionSettings::new(TEST_SECRET, false),
        prompt_style: PromptStyle::Standard,
    };
    let server = TestServer::new(build_router(state)).unwrap();
    TestApp { server, db }
}
