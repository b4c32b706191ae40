//! Session data keys.

/// Key under which the authenticated admin's id is stored in the session.
pub const SESSION_ADMIN_ID_KEY: &str = "admin_id";
