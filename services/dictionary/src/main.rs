use std::sync::Arc;
use std::time::Duration;

use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use wordbook_core::config::Config;
use wordbook_core::tracing::init_tracing;
use wordbook_dictionary::config::DictionaryConfig;
use wordbook_dictionary::infra::gemini::GeminiClient;
use wordbook_dictionary::router::build_router;
use wordbook_dictionary::state::AppState;
use wordbook_dictionary_migration::Migrator;
use wordbook_session::SessionSettings;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = DictionaryConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .expect("failed to apply migrations");
    }

    let provider = GeminiClient::new(
        config.gemini_api_key,
        config.gemini_model,
        config.gemini_base_url,
        Duration::from_secs(config.gemini_timeout_secs),
    )
    .expect("failed to build Gemini client");
    info!(
        model = provider.model_name(),
        style = %config.prompt_style,
        "definition provider ready"
    );

    let state = AppState {
        db,
        provider: Arc::new(provider),
        session: SessionSettings::new(config.secret_key, config.cookie_secure),
        prompt_style: config.prompt_style,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("dictionary service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
