//! Admin authentication: password hashing, session key, bootstrap provisioning.

#[cfg(feature = "server")]
mod bootstrap;
#[cfg(feature = "server")]
mod password;
#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use bootstrap::bootstrap_admin;
#[cfg(feature = "server")]
pub use password::{hash_password, verify_password};
#[cfg(feature = "server")]
pub use session::SESSION_ADMIN_ID_KEY;
