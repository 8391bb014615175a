use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Dictionary service error variants.
///
/// `Display` is the user-facing message and goes out verbatim in the response body.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("請輸入要查詢的單詞")]
    EmptyWord,
    #[error("請填寫所有必填欄位")]
    MissingFields,
    #[error("密碼長度至少6個字符")]
    PasswordTooShort,
    #[error("請輸入用戶名和密碼")]
    MissingCredentials,
    #[error("用戶名已存在")]
    UsernameTaken,
    #[error("電子郵件已被註冊")]
    EmailTaken,
    #[error("註冊失敗，請稍後再試")]
    RegistrationFailed,
    #[error("用戶不存在")]
    UserNotFound,
    #[error("密碼錯誤")]
    WrongPassword,
    #[error("帳戶已被停用")]
    AccountDisabled,
    #[error("登入失敗，請稍後再試")]
    LoginFailed,
    #[error("請先登入以使用此功能")]
    Unauthorized,
    #[error("獲取歷史記錄失敗")]
    HistoryUnavailable,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl DictionaryError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyWord => "EMPTY_WORD",
            Self::MissingFields => "MISSING_FIELDS",
            Self::PasswordTooShort => "PASSWORD_TOO_SHORT",
            Self::MissingCredentials => "MISSING_CREDENTIALS",
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::RegistrationFailed => "REGISTRATION_FAILED",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::WrongPassword => "WRONG_PASSWORD",
            Self::AccountDisabled => "ACCOUNT_DISABLED",
            Self::LoginFailed => "LOGIN_FAILED",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::HistoryUnavailable => "HISTORY_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Replace an `Internal` error with `fallback`, logging the cause. Other variants pass
    /// through unchanged.
    pub(crate) fn or_generic(self, fallback: Self, operation: &'static str) -> Self {
        match self {
            Self::Internal(e) => {
                tracing::error!(error = format!("{e:#}"), operation, "store operation failed");
                fallback
            }
            other => other,
        }
    }
}

impl IntoResponse for DictionaryError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::EmptyWord
            | Self::MissingFields
            | Self::PasswordTooShort
            | Self::MissingCredentials
            | Self::UsernameTaken
            | Self::EmailTaken
            | Self::RegistrationFailed => StatusCode::BAD_REQUEST,
            Self::UserNotFound
            | Self::WrongPassword
            | Self::AccountDisabled
            | Self::LoginFailed
            | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::HistoryUnavailable | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = format!("{e:#}"), kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
