//! Per-page controller for the organization list views.
//!
//! Owns one [`ListState`] signal and pushes every change through
//! [`domain::reduce`]; the async work (server calls, toasts, the processing
//! guard) lives here so the views stay declarative. All three list pages use
//! the same controller with a different [`ListScope`].

use dioxus::prelude::*;
use domain::{reduce, ListAction, ListScope, ListState, Organization, VerificationStatus};

use crate::toast::{push_toast, use_toasts, ToastLevel, ToastStack};

const FETCH_FAILED: &str = "Failed to load organizations. Please try again later.";
const MUTATION_FAILED: &str = "Failed to update the organization status. Please try again.";
const DELETE_FAILED: &str = "Failed to delete the organization. Please try again.";
const NO_DOCUMENT: &str = "This organization has not uploaded a verification document.";

/// Controller handle. `Copy`, so event handlers can move it freely.
#[derive(Clone, Copy)]
pub struct OrgListController {
    scope: ListScope,
    pub state: Signal<ListState>,
    toasts: Signal<ToastStack>,
}

/// Create the controller for a list page and fetch its snapshot on mount.
pub fn use_org_list(scope: ListScope) -> OrgListController {
    let state = use_signal(ListState::default);
    let toasts = use_toasts();
    let controller = OrgListController {
        scope,
        state,
        toasts,
    };

    let _loader = use_resource(move || async move {
        controller.load().await;
    });

    controller
}

impl OrgListController {
    pub fn scope(&self) -> ListScope {
        self.scope
    }

    fn dispatch(&self, action: ListAction) {
        let mut state = self.state;
        let scope = self.scope;
        reduce(&mut state.write(), action, scope);
    }

    fn toast(&self, level: ToastLevel, message: &str) {
        let mut toasts = self.toasts;
        push_toast(&mut toasts, level, message);
    }

    fn is_processing(&self) -> bool {
        self.state.peek().is_processing
    }

    /// Fetch the page's snapshot. Failures become the list-level banner.
    pub async fn load(&self) {
        self.dispatch(ListAction::FetchStarted);
        match api::list_organizations().await {
            Ok(orgs) => self.dispatch(ListAction::FetchSucceeded(orgs)),
            Err(e) => {
                tracing::error!("fetching organizations failed: {e}");
                self.dispatch(ListAction::FetchFailed(FETCH_FAILED.to_string()));
            }
        }
    }

    pub fn search(&self, term: String) {
        self.dispatch(ListAction::SearchChanged(term));
    }

    /// Request a status transition for one organization.
    ///
    /// No-op while another mutation is in flight. On success the server's
    /// authoritative record is reconciled into the list; on failure exactly
    /// one error toast fires and the state stays as it was. The processing
    /// guard clears on both paths.
    pub fn set_status(&self, id: i64, status: VerificationStatus) {
        if self.is_processing() {
            return;
        }
        let controller = *self;
        spawn(async move {
            controller.dispatch(ListAction::MutationStarted);
            match api::set_verification_status(id, status).await {
                Ok(updated) => {
                    controller.dispatch(ListAction::StatusChanged(updated));
                    controller.toast(ToastLevel::Success, success_message(status));
                }
                Err(e) => {
                    tracing::error!("status change for organization {id} failed: {e}");
                    controller.toast(ToastLevel::Error, MUTATION_FAILED);
                }
            }
            controller.dispatch(ListAction::MutationFinished);
        });
    }

    /// Delete an organization after interactive confirmation.
    pub fn delete(&self, id: i64, name: String) {
        if self.is_processing() {
            return;
        }
        if !confirm_delete(&name) {
            return;
        }
        let controller = *self;
        spawn(async move {
            controller.dispatch(ListAction::MutationStarted);
            match api::delete_organization(id).await {
                Ok(()) => {
                    controller.dispatch(ListAction::Deleted(id));
                    controller.toast(ToastLevel::Success, "Organization deleted.");
                }
                Err(e) => {
                    tracing::error!("delete of organization {id} failed: {e}");
                    controller.toast(ToastLevel::Error, DELETE_FAILED);
                }
            }
            controller.dispatch(ListAction::MutationFinished);
        });
    }

    /// Open the document modal for an organization, or warn when it never
    /// uploaded a document.
    pub fn view_document(&self, org: &Organization) {
        let document = org
            .profile
            .as_ref()
            .and_then(|p| p.verification_id.clone());
        match document {
            Some(url) => self.dispatch(ListAction::ModalOpened {
                organization_id: org.id,
                document_url: url,
            }),
            None => self.toast(ToastLevel::Warning, NO_DOCUMENT),
        }
    }

    pub fn close_modal(&self) {
        self.dispatch(ListAction::ModalClosed);
    }
}

fn success_message(status: VerificationStatus) -> &'static str {
    match status {
        VerificationStatus::Approved => "Organization approved.",
        VerificationStatus::Rejected => "Organization rejected.",
        VerificationStatus::Pending => "Organization approval revoked.",
        VerificationStatus::Unknown => "Organization updated.",
    }
}

/// Interactive confirmation before a destructive delete.
#[cfg(target_arch = "wasm32")]
pub fn confirm_delete(name: &str) -> bool {
    web_sys::window()
        .and_then(|w| {
            w.confirm_with_message(&format!(
                "Are you sure you want to delete {name}? This action cannot be undone."
            ))
            .ok()
        })
        .unwrap_or(false)
}

/// Non-browser targets have no confirm dialog; the web build is the only
/// shipped frontend.
#[cfg(not(target_arch = "wasm32"))]
pub fn confirm_delete(_name: &str) -> bool {
    true
}
