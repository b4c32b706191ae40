//! # API crate — shared fullstack server functions for the admin console
//!
//! This crate defines every Dioxus server function the web frontend calls,
//! along with the server-only modules backing them.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | `server` | Argon2id password hashing, session key, bootstrap admin provisioning |
//! | [`client`] | `server` | reqwest client for the remote organization service |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | — | The admin account row (`AdminUser`) and its client-safe projection (`AdminInfo`) |
//!
//! ## Server functions exposed here
//!
//! Each `#[server]` function compiles to full server logic when the `server`
//! feature is enabled and to a thin HTTP stub for the WASM client build.
//!
//! - **Authentication**: `get_current_admin`, `login`, `logout`
//! - **Organizations**: `list_organizations`, `get_organization`,
//!   `set_verification_status`, `delete_organization`
//!
//! All organization operations require an authenticated admin session; the
//! remote service's base URL never reaches the client.

use dioxus::prelude::*;
use domain::{Organization, VerificationStatus};

pub mod auth;
#[cfg(feature = "server")]
pub mod client;
pub mod db;
pub mod models;

pub use models::AdminInfo;

/// Generic credential failure message. Deliberately identical for unknown
/// usernames, wrong passwords, and lookup errors.
#[cfg(feature = "server")]
const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Resolve the admin id stored in the session, or fail.
#[cfg(feature = "server")]
async fn require_admin(session: &tower_sessions::Session) -> Result<uuid::Uuid, ServerFnError> {
    let admin_id: Option<String> = session
        .get(auth::SESSION_ADMIN_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(admin_id) = admin_id else {
        return Err(ServerFnError::new("Not authenticated"));
    };

    uuid::Uuid::parse_str(&admin_id).map_err(|e| ServerFnError::new(e.to_string()))
}

/// Get the currently authenticated admin from the session, if any.
#[server]
pub async fn get_current_admin() -> Result<Option<AdminInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::AdminUser;

    let session: tower_sessions::Session = extract()
        .await
        .map_err(|e| ServerFnError::new(format!("{e:?}")))?;

    let admin_id: Option<String> = session
        .get(auth::SESSION_ADMIN_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(admin_id) = admin_id else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let admin_uuid =
        uuid::Uuid::parse_str(&admin_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let admin: Option<AdminUser> = sqlx::query_as("SELECT * FROM admin_users WHERE id = $1")
        .bind(admin_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(admin.map(|a| a.to_info()))
}

/// Log in with username and password.
///
/// Verifies the password against the stored Argon2id PHC hash and stores the
/// admin id in the session. Every failure path returns the same generic
/// message; the underlying cause goes to the server log only.
#[server]
pub async fn login(username: String, password: String) -> Result<AdminInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::AdminUser;

    let session: tower_sessions::Session = extract()
        .await
        .map_err(|e| ServerFnError::new(format!("{e:?}")))?;
    let username = username.trim().to_string();

    let pool = get_pool().await.map_err(|e| {
        tracing::error!("login: database unavailable: {e}");
        ServerFnError::new(INVALID_CREDENTIALS)
    })?;

    let admin: Option<AdminUser> =
        sqlx::query_as("SELECT * FROM admin_users WHERE username = $1")
            .bind(&username)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                tracing::error!("login: lookup failed: {e}");
                ServerFnError::new(INVALID_CREDENTIALS)
            })?;

    let Some(admin) = admin else {
        return Err(ServerFnError::new(INVALID_CREDENTIALS));
    };

    let valid = auth::verify_password(&password, &admin.password_hash).map_err(|e| {
        tracing::error!("login: stored hash for {username} is malformed: {e}");
        ServerFnError::new(INVALID_CREDENTIALS)
    })?;

    if !valid {
        return Err(ServerFnError::new(INVALID_CREDENTIALS));
    }

    session
        .insert(auth::SESSION_ADMIN_ID_KEY, admin.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(username = %admin.username, "admin logged in");
    Ok(admin.to_info())
}

/// Log out the current admin by clearing the session.
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    let session: tower_sessions::Session = extract()
        .await
        .map_err(|e| ServerFnError::new(format!("{e:?}")))?;
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

/// Fetch the first page of organizations from the remote service.
#[server]
pub async fn list_organizations() -> Result<Vec<Organization>, ServerFnError> {
    let session: tower_sessions::Session = extract()
        .await
        .map_err(|e| ServerFnError::new(format!("{e:?}")))?;
    require_admin(&session).await?;

    let orgs = client::get_client()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?
        .fetch_organizations()
        .await
        .map_err(|e| {
            tracing::error!("organization fetch failed: {e}");
            ServerFnError::new(e.to_string())
        })?;

    Ok(orgs)
}

/// Fetch a single organization by id.
///
/// The service exposes no single-resource endpoint, so this fetches the
/// collection and scans for the id.
#[server]
pub async fn get_organization(id: i64) -> Result<Organization, ServerFnError> {
    let session: tower_sessions::Session = extract()
        .await
        .map_err(|e| ServerFnError::new(format!("{e:?}")))?;
    require_admin(&session).await?;

    client::get_client()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?
        .fetch_organization_by_id(id)
        .await
        .map_err(|e| {
            tracing::error!("organization {id} lookup failed: {e}");
            ServerFnError::new(e.to_string())
        })
}

/// Request a verification-status transition for an organization.
///
/// Returns the server's authoritative updated record so callers reconcile
/// against it instead of patching in the requested status.
#[server]
pub async fn set_verification_status(
    id: i64,
    status: VerificationStatus,
) -> Result<Organization, ServerFnError> {
    let session: tower_sessions::Session = extract()
        .await
        .map_err(|e| ServerFnError::new(format!("{e:?}")))?;
    let admin = require_admin(&session).await?;

    let updated = client::get_client()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?
        .verify_organization(id, status)
        .await
        .map_err(|e| {
            tracing::error!("status change for organization {id} failed: {e}");
            ServerFnError::new(e.to_string())
        })?;

    tracing::info!(admin = %admin, organization = id, status = ?updated.status(), "verification status changed");
    Ok(updated)
}

/// Delete an organization on the remote service.
#[server]
pub async fn delete_organization(id: i64) -> Result<(), ServerFnError> {
    let session: tower_sessions::Session = extract()
        .await
        .map_err(|e| ServerFnError::new(format!("{e:?}")))?;
    let admin = require_admin(&session).await?;

    client::get_client()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?
        .delete_organization(id)
        .await
        .map_err(|e| {
            tracing::error!("delete of organization {id} failed: {e}");
            ServerFnError::new(e.to_string())
        })?;

    tracing::info!(admin = %admin, organization = id, "organization deleted");
    Ok(())
}
