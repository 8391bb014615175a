use serde::Deserialize;

use wordbook_core::config::Config;
use wordbook_domain::prompt::PromptStyle;

/// Dictionary service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct DictionaryConfig {
    /// sea-orm connection URL, SQLite or PostgreSQL. Env var: `DATABASE_URL`.
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// TCP port for the HTTP server (default 3217). Env var: `PORT`.
    #[serde(default = "default_port")]
    pub port: u16,
    /// HMAC secret for signing session tokens. Env var: `SECRET_KEY`.
    #[serde(default = "default_secret_key")]
    pub secret_key: String,
    pub gemini_api_key: String,
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
    #[serde(default = "default_gemini_base_url")]
    pub gemini_base_url: String,
    #[serde(default = "default_gemini_timeout_secs")]
    pub gemini_timeout_secs: u64,
    /// `standard` or `detailed`. Env var: `PROMPT_STYLE`.
    #[serde(default = "default_prompt_style")]
    pub prompt_style: PromptStyle,
    /// Mark the session cookie `Secure`. Env var: `COOKIE_SECURE`.
    #[serde(default)]
    pub cookie_secure: bool,
    /// Apply pending migrations before serving. Env var: `RUN_MIGRATIONS`.
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

impl Config for DictionaryConfig {}

fn default_database_url() -> String {
    "sqlite://dictionary.db?mode=rwc".to_owned()
}

fn default_port() -> u16 {
    3217
}

fn default_secret_key() -> String {
    "dev-secret-key-change-in-production".to_owned()
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash".to_owned()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_owned()
}

fn default_gemini_timeout_secs() -> u64 {
    60
}

fn default_prompt_style() -> PromptStyle {
    PromptStyle::Detailed
}

fn default_run_migrations() -> bool {
    true
}
