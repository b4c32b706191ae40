//! Approved organizations page. Approval can be revoked from here, which
//! sends the organization back to the pending queue.

use dioxus::prelude::*;
use domain::{visible_organizations, ListScope};
use ui::{use_org_list, DocumentModal, OrganizationTable, SearchBar, StatCard};

use crate::Route;

#[component]
pub fn Approved() -> Element {
    let controller = use_org_list(ListScope::Approved);
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
                h1 { "Approved Organizations" }
                p { "Organizations that passed verification." }
            }

            div {
                class: "stat-grid",
                StatCard {
                    title: "Approved",
                    value: state.organizations.len(),
                    caption: "Currently verified organizations",
                    class: "stat-card stat-card-approved",
                }
            }

            SearchBar {
                value: state.search_term.clone(),
                on_change: move |term| controller.search(term),
            }

            if let Some(err) = state.error.clone() {
                div { class: "page-error", "{err}" }
            } else if state.loading {
                div { class: "page-placeholder", "Loading approved organizations..." }
            } else if visible.is_empty() {
                div { class: "page-placeholder", "No approved organizations." }
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
                }
            }
        }
    }
}
