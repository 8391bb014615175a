pub mod auth;
pub mod health;
pub mod history;
pub mod lookup;
pub mod user;
