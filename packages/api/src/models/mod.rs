//! Admin account models.

mod admin;

#[cfg(feature = "server")]
pub use admin::AdminUser;
pub use admin::AdminInfo;
