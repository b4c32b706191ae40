//! The console's single identity type, in two representations:
//!
//! - [`AdminUser`] (server only) — the complete `admin_users` row, loaded via
//!   [`sqlx::FromRow`]. Carries the Argon2id PHC hash and the audit
//!   timestamp; neither ever leaves the server.
//! - [`AdminInfo`] — the client-safe projection that crosses the
//!   server/client boundary via server functions. The `Uuid` becomes a
//!   `String` so it works in WASM.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full admin record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct AdminUser {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl AdminUser {
    /// Convert to AdminInfo for client consumption.
    pub fn to_info(&self) -> AdminInfo {
        AdminInfo {
            id: self.id.to_string(),
            username: self.username.clone(),
        }
    }
}

/// Admin information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminInfo {
    pub id: String,
    pub username: String,
}
