pub mod models;
pub mod state;

pub use models::{
    status_counts, Organization, OrganizationsPage, Profile, StatusCounts, VerificationStatus,
};
pub use state::{
    reduce, visible_organizations, DocumentModal, ListAction, ListScope, ListState,
};
