use chrono::Utc;

use wordbook_domain::id::UserId;

use crate::domain::repository::{PasswordHasher, UserRepository};
use crate::domain::types::{NewUser, User};
use crate::error::DictionaryError;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_CHARS: usize = 6;

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
}

pub struct RegisterUseCase<R: UserRepository, H: PasswordHasher> {
    pub users: R,
    pub hasher: H,
}

impl<R: UserRepository, H: PasswordHasher> RegisterUseCase<R, H> {
    /// All fields are trimmed; a blank display name is stored as none.
    pub async fn execute(&self, input: RegisterInput) -> Result<User, DictionaryError> {
        let username = input.username.trim();
        let email = input.email.trim();
        let password = input.password.trim();
        let display_name = input
            .display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_owned);

        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(DictionaryError::MissingFields);
        }
        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(DictionaryError::PasswordTooShort);
        }

        self.create(username, email, password, display_name)
            .await
            .map_err(|e| e.or_generic(DictionaryError::RegistrationFailed, "register"))
    }

    async fn create(
        &self,
        username: &str,
        email: &str,
        password: &str,
        display_name: Option<String>,
    ) -> Result<User, DictionaryError> {
        if self.users.find_by_username(username).await?.is_some() {
            return Err(DictionaryError::UsernameTaken);
        }
        if self.users.find_by_email(email).await?.is_some() {
            return Err(DictionaryError::EmailTaken);
        }

        let user = self
            .users
            .create(&NewUser {
                username: username.to_owned(),
                email: email.to_owned(),
                password_hash: self.hasher.hash(password)?,
                display_name,
            })
            .await?;
        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }
}

// ── Authenticate ─────────────────────────────────────────────────────────────

pub struct LoginInput {
    /// Username, or email when no username matches.
    pub identifier: String,
    pub password: String,
}

pub struct AuthenticateUseCase<R: UserRepository, H: PasswordHasher> {
    pub users: R,
    pub hasher: H,
}

impl<R: UserRepository, H: PasswordHasher> AuthenticateUseCase<R, H> {
    /// Checks, in order: identity exists, password matches, account is active.
    /// On success `last_login` is stored and reflected in the returned user.
    pub async fn execute(&self, input: LoginInput) -> Result<User, DictionaryError> {
        let identifier = input.identifier.trim();
        let password = input.password.trim();
        if identifier.is_empty() || password.is_empty() {
            return Err(DictionaryError::MissingCredentials);
        }

        self.authenticate(identifier, password)
            .await
            .map_err(|e| e.or_generic(DictionaryError::LoginFailed, "authenticate"))
    }

    async fn authenticate(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<User, DictionaryError> {
        let found = match self.users.find_by_username(identifier).await? {
            Some(user) => Some(user),
            None => self.users.find_by_email(identifier).await?,
        };
        let mut user = found.ok_or(DictionaryError::UserNotFound)?;

        if !self.hasher.verify(password, &user.password_hash) {
            return Err(DictionaryError::WrongPassword);
        }
        if !user.is_active {
            return Err(DictionaryError::AccountDisabled);
        }

        let now = Utc::now();
        self.users.record_login(user.id, now).await?;
        user.last_login = Some(now);
        tracing::info!(user_id = %user.id, "user logged in");
        Ok(user)
    }
}

// ── GetCurrentUser ───────────────────────────────────────────────────────────

pub struct GetCurrentUserUseCase<R: UserRepository> {
    pub users: R,
}

impl<R: UserRepository> GetCurrentUserUseCase<R> {
    /// The session's user, or `None` when anonymous or the user no longer exists.
    pub async fn execute(
        &self,
        user_id: Option<UserId>,
    ) -> Result<Option<User>, DictionaryError> {
        match user_id {
            Some(id) => self.users.find_by_id(id).await,
            None => Ok(None),
        }
    }
}

// ── SetUserActive ────────────────────────────────────────────────────────────

pub struct SetUserActiveUseCase<R: UserRepository> {
    pub users: R,
}

impl<R: UserRepository> SetUserActiveUseCase<R> {
    pub async fn execute(&self, username: &str, active: bool) -> Result<(), DictionaryError> {
        if !self.users.set_active(username, active).await? {
            return Err(DictionaryError::UserNotFound);
        }
        tracing::info!(username, active, "user active flag changed");
        Ok(())
    }
}
