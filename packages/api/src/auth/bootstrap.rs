//! First-run admin provisioning.
//!
//! Admin accounts are not creatable through the console, so a fresh
//! deployment needs one seeded out of band. When `ADMIN_USERNAME` and
//! `ADMIN_PASSWORD` are both set, the server upserts that account at startup
//! with a freshly hashed password; otherwise this is a no-op.

use sqlx::PgPool;

use super::{hash_password, verify_password};

/// Ensure the bootstrap admin from the environment exists.
///
/// Idempotent: an existing row with a matching password is left untouched,
/// and a changed `ADMIN_PASSWORD` re-hashes on the next start.
pub async fn bootstrap_admin(pool: &PgPool) -> Result<(), String> {
    let (Ok(username), Ok(password)) = (
        std::env::var("ADMIN_USERNAME"),
        std::env::var("ADMIN_PASSWORD"),
    ) else {
        return Ok(());
    };

    let existing: Option<(String,)> =
        sqlx::query_as("SELECT password_hash FROM admin_users WHERE username = $1")
            .bind(&username)
            .fetch_optional(pool)
            .await
            .map_err(|e| e.to_string())?;

    if let Some((hash,)) = existing {
        if verify_password(&password, &hash).unwrap_or(false) {
            return Ok(());
        }
    }

    let password_hash = hash_password(&password)?;
    sqlx::query(
        "INSERT INTO admin_users (username, password_hash) VALUES ($1, $2)
         ON CONFLICT (username) DO UPDATE SET password_hash = $2",
    )
    .bind(&username)
    .bind(&password_hash)
    .execute(pool)
    .await
    .map_err(|e| e.to_string())?;

    tracing::info!(username = %username, "bootstrap admin provisioned");
    Ok(())
}
