//! Pending verifications page. Only organizations awaiting review appear
//! here, and the modal footer offers the approve/reject pair directly.

use dioxus::prelude::*;
use domain::{visible_organizations, ListScope, VerificationStatus};
use ui::{use_org_list, DocumentModal, OrganizationTable, SearchBar, StatCard};

use crate::Route;

#[component]
pub fn Pending() -> Element {
    let controller = use_org_list(ListScope::Pending);
    let nav = use_navigator();

    let state = (controller.state)();
    let visible: Vec<_> = visible_organizations(&state)
        .into_iter()
        .cloned()
        .collect();

    let modal_name = state.modal.as_ref().and_then(|m| {
        state
            .organizations
            .iter()
            .find(|o| o.id == m.organization_id)
            .map(|o| o.display_name())
    });

    rsx! {
        div {
            class: "page",

            div {
                class: "page-heading",
                h1 { "Pending Verifications" }
                p { "Review submitted documents and approve or reject each request." }
            }

            div {
                class: "stat-grid",
                StatCard {
                    title: "Awaiting Review",
                    value: state.organizations.len(),
                    caption: "Verification requests in the queue",
                    class: "stat-card stat-card-pending",
                }
            }

            SearchBar {
                value: state.search_term.clone(),
                on_change: move |term| controller.search(term),
            }

            if let Some(err) = state.error.clone() {
                div { class: "page-error", "{err}" }
            } else if state.loading {
                div { class: "page-placeholder", "Loading pending verifications..." }
            } else if visible.is_empty() {
                div { class: "page-placeholder", "No pending verifications." }
            } else {
                OrganizationTable {
                    organizations: visible,
                    is_processing: state.is_processing,
                    show_delete: false,
                    on_select: move |id| {
                        nav.push(Route::OrganizationDetail { id });
                    },
                    on_view_document: move |org| controller.view_document(&org),
                    on_set_status: move |(id, status)| controller.set_status(id, status),
                }
            }

            if let Some(modal) = state.modal.clone() {
                DocumentModal {
                    document_url: modal.document_url.clone(),
                    organization_name: modal_name.clone().unwrap_or_default(),
                    on_close: move |_| controller.close_modal(),

                    button {
                        class: "btn btn-approve",
                        disabled: state.is_processing,
                        onclick: move |_| {
                            controller.set_status(modal.organization_id, VerificationStatus::Approved)
                        },
                        "Approve"
                    }
                    button {
                        class: "btn btn-reject",
                        disabled: state.is_processing,
                        onclick: move |_| {
                            controller.set_status(modal.organization_id, VerificationStatus::Rejected)
                        },
                        "Reject"
                    }
                }
            }
        }
    }
}
