//! All-organizations page: stat cards, search, the full table, and the
//! document preview modal.

use dioxus::prelude::*;
use domain::{status_counts, visible_organizations, ListScope, VerificationStatus};
use ui::{use_org_list, DocumentModal, OrganizationTable, SearchBar, StatCard};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let controller = use_org_list(ListScope::All);
    let nav = use_navigator();

    let state = (controller.state)();
    let counts = status_counts(&state.organizations);
    let visible: Vec<_> = visible_organizations(&state)
        .into_iter()
        .cloned()
        .collect();

    // Status of the organization behind the open modal decides its footer.
    let modal_status = state.modal.as_ref().and_then(|m| {
        state
            .organizations
            .iter()
            .find(|o| o.id == m.organization_id)
            .and_then(|o| o.status())
    });
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
                h1 { "Organizations" }
                p { "All organizations registered on the platform." }
            }

            div {
                class: "stat-grid",
                StatCard {
                    title: "Total Organizations",
                    value: counts.total,
                    caption: "Registered on the platform",
                    class: "stat-card stat-card-total",
                }
                StatCard {
                    title: "Approved Organizations",
                    value: counts.approved,
                    caption: "Verified and approved",
                    class: "stat-card stat-card-approved",
                }
                StatCard {
                    title: "Pending Verifications",
                    value: counts.pending,
                    caption: "Awaiting review",
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
                div { class: "page-placeholder", "Loading organizations..." }
            } else if visible.is_empty() {
                div { class: "page-placeholder", "No organizations found." }
            } else {
                OrganizationTable {
                    organizations: visible,
                    is_processing: state.is_processing,
                    show_delete: true,
                    on_select: move |id| {
                        nav.push(Route::OrganizationDetail { id });
                    },
                    on_view_document: move |org| controller.view_document(&org),
                    on_set_status: move |(id, status)| controller.set_status(id, status),
                    on_delete: move |(id, name)| controller.delete(id, name),
                }
            }

            if let Some(modal) = state.modal.clone() {
                DocumentModal {
                    document_url: modal.document_url.clone(),
                    organization_name: modal_name.clone().unwrap_or_default(),
                    on_close: move |_| controller.close_modal(),

                    if modal_status == Some(VerificationStatus::Pending) {
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
                    if modal_status == Some(VerificationStatus::Approved) {
                        button {
                            class: "btn btn-revoke",
                            disabled: state.is_processing,
                            onclick: move |_| {
                                controller.set_status(modal.organization_id, VerificationStatus::Pending)
                            },
                            "Revoke approval"
                        }
                    }
                }
            }
        }
    }
}
