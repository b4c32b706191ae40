//! List-page view state: explicit state plus a pure reducer.
//!
//! Every list page (all organizations, pending, approved) runs the same state
//! machine: fetch a snapshot on mount, filter it to the page's scope, search
//! it client-side, and reconcile mutations the server confirmed. The state
//! lives in [`ListState`] and changes only through [`reduce`], keyed by
//! [`ListAction`] — independent of any rendering framework, so the whole
//! workflow is unit-testable without a UI.
//!
//! Status transitions exposed to the operator: `pending → approved`,
//! `pending → rejected`, and `approved → pending` (revoke). No transition
//! originates from `rejected`.

use crate::models::{Organization, VerificationStatus};

/// Which subset of organizations a list page shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListScope {
    All,
    Pending,
    Approved,
}

impl ListScope {
    /// Whether an organization belongs on a page with this scope.
    pub fn admits(&self, org: &Organization) -> bool {
        match self {
            Self::All => true,
            Self::Pending => {
                org.status() == Some(VerificationStatus::Pending) && org.role == "organization"
            }
            Self::Approved => org.status() == Some(VerificationStatus::Approved),
        }
    }
}

/// Document preview modal state.
///
/// Both fields are set together when the modal opens and cleared together
/// when it closes; they are never updated independently.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentModal {
    pub organization_id: i64,
    pub document_url: String,
}

/// State held by one list page.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState {
    /// The page's snapshot, already narrowed to its [`ListScope`].
    pub organizations: Vec<Organization>,
    pub search_term: String,
    pub loading: bool,
    /// User-facing banner shown when the initial fetch failed.
    pub error: Option<String>,
    /// Guards concurrent mutating actions: while true, the UI disables
    /// approve/reject/revoke/delete buttons.
    pub is_processing: bool,
    pub modal: Option<DocumentModal>,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            organizations: Vec::new(),
            search_term: String::new(),
            loading: true,
            error: None,
            is_processing: false,
            modal: None,
        }
    }
}

/// Everything that can happen to a list page.
#[derive(Clone, Debug, PartialEq)]
pub enum ListAction {
    FetchStarted,
    /// Full snapshot from the service; the reducer applies the scope filter.
    FetchSucceeded(Vec<Organization>),
    FetchFailed(String),
    SearchChanged(String),
    MutationStarted,
    /// The server confirmed a status transition. Carries the server's
    /// authoritative record, which replaces the local copy wholesale.
    StatusChanged(Organization),
    /// The server confirmed a deletion.
    Deleted(i64),
    /// Dispatched after every mutating call, success or failure.
    MutationFinished,
    ModalOpened {
        organization_id: i64,
        document_url: String,
    },
    ModalClosed,
}

/// Apply one action to the page state.
pub fn reduce(state: &mut ListState, action: ListAction, scope: ListScope) {
    match action {
        ListAction::FetchStarted => {
            state.loading = true;
            state.error = None;
        }
        ListAction::FetchSucceeded(orgs) => {
            state.organizations = orgs.into_iter().filter(|o| scope.admits(o)).collect();
            state.loading = false;
            state.error = None;
        }
        ListAction::FetchFailed(message) => {
            state.organizations.clear();
            state.loading = false;
            state.error = Some(message);
        }
        ListAction::SearchChanged(term) => {
            state.search_term = term;
        }
        ListAction::MutationStarted => {
            state.is_processing = true;
        }
        ListAction::StatusChanged(updated) => {
            let id = updated.id;
            let still_admitted = scope.admits(&updated);
            if let Some(slot) = state.organizations.iter_mut().find(|o| o.id == id) {
                *slot = updated;
            }
            if !still_admitted {
                state.organizations.retain(|o| o.id != id);
            }
            state.modal = None;
        }
        ListAction::Deleted(id) => {
            state.organizations.retain(|o| o.id != id);
            if state
                .modal
                .as_ref()
                .is_some_and(|m| m.organization_id == id)
            {
                state.modal = None;
            }
        }
        ListAction::MutationFinished => {
            state.is_processing = false;
        }
        ListAction::ModalOpened {
            organization_id,
            document_url,
        } => {
            state.modal = Some(DocumentModal {
                organization_id,
                document_url,
            });
        }
        ListAction::ModalClosed => {
            state.modal = None;
        }
    }
}

/// Organizations visible under the current search term.
///
/// Case-insensitive substring match against the profile name, the email, or
/// the concatenated "first last" name. Purely client-side over the fetched
/// snapshot; an empty term shows everything.
pub fn visible_organizations(state: &ListState) -> Vec<&Organization> {
    let term = state.search_term.to_lowercase();
    state
        .organizations
        .iter()
        .filter(|org| {
            if term.is_empty() {
                return true;
            }
            let profile_name = org
                .profile
                .as_ref()
                .map(|p| p.name.to_lowercase())
                .unwrap_or_default();
            let full_name = format!("{} {}", org.first_name, org.last_name).to_lowercase();
            profile_name.contains(&term)
                || org.email.to_lowercase().contains(&term)
                || full_name.contains(&term)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{status_counts, Profile};

    fn profile(id: i64, name: &str, status: VerificationStatus) -> Profile {
        Profile {
            id,
            name: name.to_string(),
            description: String::new(),
            logo_url: String::new(),
            contact_phone: String::new(),
            website_url: String::new(),
            verification_id: Some(format!("https://cdn.example.com/docs/{id}.jpg")),
            verification_status: status,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
            user: id,
        }
    }

    fn org(id: i64, name: &str, role: &str, status: Option<VerificationStatus>) -> Organization {
        Organization {
            id,
            email: format!("{}@example.com", name.to_lowercase()),
            role: role.to_string(),
            first_name: "Jordan".to_string(),
            last_name: format!("Smith{id}"),
            is_active: true,
            date_joined: "2023-11-05T08:00:00Z".to_string(),
            username: name.to_lowercase(),
            profile: status.map(|s| profile(id, name, s)),
        }
    }

    fn with_status(mut o: Organization, status: VerificationStatus) -> Organization {
        if let Some(p) = o.profile.as_mut() {
            p.verification_status = status;
        }
        o
    }

    fn fixture() -> Vec<Organization> {
        vec![
            org(1, "Acme", "organization", Some(VerificationStatus::Pending)),
            org(2, "Beta", "organization", Some(VerificationStatus::Approved)),
            org(3, "Gamma", "organization", Some(VerificationStatus::Rejected)),
            org(4, "Delta", "attendee", Some(VerificationStatus::Pending)),
            org(5, "Epsilon", "organization", None),
        ]
    }

    #[test]
    fn test_pending_scope_requires_organization_role() {
        let mut state = ListState::default();
        reduce(&mut state, ListAction::FetchSucceeded(fixture()), ListScope::Pending);
        let ids: Vec<i64> = state.organizations.iter().map(|o| o.id).collect();
        // Delta is pending but not an organization; Epsilon has no profile.
        assert_eq!(ids, vec![1]);
        assert!(!state.loading);
    }

    #[test]
    fn test_approved_scope() {
        let mut state = ListState::default();
        reduce(&mut state, ListAction::FetchSucceeded(fixture()), ListScope::Approved);
        let ids: Vec<i64> = state.organizations.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_all_scope_keeps_everything() {
        let mut state = ListState::default();
        reduce(&mut state, ListAction::FetchSucceeded(fixture()), ListScope::All);
        assert_eq!(state.organizations.len(), 5);
    }

    #[test]
    fn test_two_org_snapshot_counts() {
        // Two-organization snapshot: Acme pending, Beta approved.
        let snapshot = vec![
            org(1, "Acme", "organization", Some(VerificationStatus::Pending)),
            org(2, "Beta", "organization", Some(VerificationStatus::Approved)),
        ];

        let mut pending = ListState::default();
        reduce(&mut pending, ListAction::FetchSucceeded(snapshot.clone()), ListScope::Pending);
        assert_eq!(pending.organizations.len(), 1);
        assert_eq!(pending.organizations[0].display_name(), "Acme");

        let mut approved = ListState::default();
        reduce(&mut approved, ListAction::FetchSucceeded(snapshot.clone()), ListScope::Approved);
        assert_eq!(approved.organizations.len(), 1);
        assert_eq!(approved.organizations[0].display_name(), "Beta");

        let mut all = ListState::default();
        reduce(&mut all, ListAction::FetchSucceeded(snapshot), ListScope::All);
        let counts = status_counts(&all.organizations);
        assert_eq!(counts.total, 2);
        assert_eq!(counts.approved, 1);
        assert_eq!(counts.pending, 1);
    }

    #[test]
    fn test_fetch_failure_leaves_empty_list_with_banner() {
        let mut state = ListState::default();
        reduce(&mut state, ListAction::FetchSucceeded(fixture()), ListScope::All);
        reduce(&mut state, ListAction::FetchStarted, ListScope::All);
        reduce(
            &mut state,
            ListAction::FetchFailed("Failed to load organizations.".to_string()),
            ListScope::All,
        );
        assert!(state.organizations.is_empty());
        assert_eq!(state.error.as_deref(), Some("Failed to load organizations."));
        assert!(!state.loading);
    }

    #[test]
    fn test_search_is_case_insensitive_and_idempotent() {
        let mut state = ListState::default();
        reduce(&mut state, ListAction::FetchSucceeded(fixture()), ListScope::All);
        reduce(&mut state, ListAction::SearchChanged("ACME".to_string()), ListScope::All);

        let once: Vec<i64> = visible_organizations(&state).iter().map(|o| o.id).collect();
        assert_eq!(once, vec![1]);

        // Filtering again with the same term yields the same result.
        reduce(&mut state, ListAction::SearchChanged("ACME".to_string()), ListScope::All);
        let twice: Vec<i64> = visible_organizations(&state).iter().map(|o| o.id).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_search_matches_email_and_full_name() {
        let mut state = ListState::default();
        reduce(&mut state, ListAction::FetchSucceeded(fixture()), ListScope::All);

        reduce(
            &mut state,
            ListAction::SearchChanged("beta@example".to_string()),
            ListScope::All,
        );
        assert_eq!(visible_organizations(&state).len(), 1);

        reduce(
            &mut state,
            ListAction::SearchChanged("jordan smith3".to_string()),
            ListScope::All,
        );
        let by_name: Vec<i64> = visible_organizations(&state).iter().map(|o| o.id).collect();
        assert_eq!(by_name, vec![3]);
    }

    #[test]
    fn test_revoke_removes_from_approved_view() {
        let mut approved = ListState::default();
        reduce(&mut approved, ListAction::FetchSucceeded(fixture()), ListScope::Approved);
        assert_eq!(approved.organizations.len(), 1);

        let revoked = with_status(
            org(2, "Beta", "organization", Some(VerificationStatus::Approved)),
            VerificationStatus::Pending,
        );
        reduce(&mut approved, ListAction::MutationStarted, ListScope::Approved);
        reduce(&mut approved, ListAction::StatusChanged(revoked.clone()), ListScope::Approved);
        reduce(&mut approved, ListAction::MutationFinished, ListScope::Approved);
        assert!(approved.organizations.is_empty());
        assert!(!approved.is_processing);

        // A fresh all-organizations fetch shows the record again, now pending.
        let mut all = ListState::default();
        let mut snapshot = fixture();
        snapshot[1] = revoked;
        reduce(&mut all, ListAction::FetchSucceeded(snapshot), ListScope::All);
        let beta = all.organizations.iter().find(|o| o.id == 2).unwrap();
        assert_eq!(beta.status(), Some(VerificationStatus::Pending));
    }

    #[test]
    fn test_approval_updates_in_place_on_all_view() {
        let mut state = ListState::default();
        reduce(&mut state, ListAction::FetchSucceeded(fixture()), ListScope::All);

        let approved = with_status(
            org(1, "Acme", "organization", Some(VerificationStatus::Pending)),
            VerificationStatus::Approved,
        );
        reduce(&mut state, ListAction::StatusChanged(approved), ListScope::All);

        let acme = state.organizations.iter().find(|o| o.id == 1).unwrap();
        assert_eq!(acme.status(), Some(VerificationStatus::Approved));
        assert_eq!(state.organizations.len(), 5);
    }

    #[test]
    fn test_approval_removes_from_pending_view_and_closes_modal() {
        let mut state = ListState::default();
        reduce(&mut state, ListAction::FetchSucceeded(fixture()), ListScope::Pending);
        reduce(
            &mut state,
            ListAction::ModalOpened {
                organization_id: 1,
                document_url: "https://cdn.example.com/docs/1.jpg".to_string(),
            },
            ListScope::Pending,
        );

        let approved = with_status(
            org(1, "Acme", "organization", Some(VerificationStatus::Pending)),
            VerificationStatus::Approved,
        );
        reduce(&mut state, ListAction::StatusChanged(approved), ListScope::Pending);
        assert!(state.organizations.is_empty());
        assert_eq!(state.modal, None);
    }

    #[test]
    fn test_failed_mutation_leaves_state_unchanged() {
        let mut state = ListState::default();
        reduce(&mut state, ListAction::FetchSucceeded(fixture()), ListScope::All);
        let before = state.clone();

        // A failed call dispatches only the processing guard actions.
        reduce(&mut state, ListAction::MutationStarted, ListScope::All);
        assert!(state.is_processing);
        reduce(&mut state, ListAction::MutationFinished, ListScope::All);

        assert_eq!(state, before);
    }

    #[test]
    fn test_delete_removes_record_and_its_modal() {
        let mut state = ListState::default();
        reduce(&mut state, ListAction::FetchSucceeded(fixture()), ListScope::All);
        reduce(
            &mut state,
            ListAction::ModalOpened {
                organization_id: 2,
                document_url: "https://cdn.example.com/docs/2.jpg".to_string(),
            },
            ListScope::All,
        );

        reduce(&mut state, ListAction::Deleted(2), ListScope::All);
        assert!(state.organizations.iter().all(|o| o.id != 2));
        assert_eq!(state.modal, None);
    }

    #[test]
    fn test_modal_fields_set_and_cleared_together() {
        let mut state = ListState::default();
        reduce(
            &mut state,
            ListAction::ModalOpened {
                organization_id: 1,
                document_url: "https://cdn.example.com/docs/1.jpg".to_string(),
            },
            ListScope::All,
        );
        let modal = state.modal.as_ref().unwrap();
        assert_eq!(modal.organization_id, 1);
        assert_eq!(modal.document_url, "https://cdn.example.com/docs/1.jpg");

        reduce(&mut state, ListAction::ModalClosed, ListScope::All);
        assert_eq!(state.modal, None);
    }
}
