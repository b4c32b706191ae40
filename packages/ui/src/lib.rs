//! Shared UI for the admin console: auth context, toasts, the list-page
//! controller, and the presentation components the views assemble.

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

mod toast;
pub use toast::{push_toast, use_toasts, Toast, ToastHost, ToastLevel, ToastProvider, ToastStack};

mod controller;
pub use controller::{confirm_delete, use_org_list, OrgListController};

mod status_badge;
pub use status_badge::StatusBadge;

mod search_bar;
pub use search_bar::SearchBar;

mod stat_card;
pub use stat_card::StatCard;

mod org_table;
pub use org_table::OrganizationTable;

mod document_modal;
pub use document_modal::DocumentModal;
