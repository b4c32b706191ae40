use dioxus::prelude::*;
use domain::{Organization, VerificationStatus};

use crate::StatusBadge;

/// Organization list table.
///
/// Row actions follow the status state machine: pending rows can be approved
/// or rejected, approved rows can be revoked, and nothing transitions out of
/// rejected. All mutating buttons are disabled while a mutation is in flight.
#[component]
pub fn OrganizationTable(
    organizations: Vec<Organization>,
    is_processing: bool,
    #[props(default = false)] show_delete: bool,
    /// Row click-through to the detail page.
    on_select: EventHandler<i64>,
    on_view_document: EventHandler<Organization>,
    on_set_status: EventHandler<(i64, VerificationStatus)>,
    #[props(default)] on_delete: Option<EventHandler<(i64, String)>>,
) -> Element {
    rsx! {
        table {
            class: "org-table",
            thead {
                tr {
                    th { "Organization" }
                    th { "Contact" }
                    th { "Status" }
                    th { "Joined" }
                    th { "Actions" }
                }
            }
            tbody {
                for org in organizations {
                    OrganizationRow {
                        key: "{org.id}",
                        org: org.clone(),
                        is_processing,
                        show_delete,
                        on_select,
                        on_view_document,
                        on_set_status,
                        on_delete,
                    }
                }
            }
        }
    }
}

#[component]
fn OrganizationRow(
    org: Organization,
    is_processing: bool,
    show_delete: bool,
    on_select: EventHandler<i64>,
    on_view_document: EventHandler<Organization>,
    on_set_status: EventHandler<(i64, VerificationStatus)>,
    on_delete: Option<EventHandler<(i64, String)>>,
) -> Element {
    let id = org.id;
    let name = org.display_name();
    let status = org.status();
    let logo_url = org.profile.as_ref().map(|p| p.logo_url.clone());
    let can_verify = status == Some(VerificationStatus::Pending) && org.role == "organization";
    let can_revoke = status == Some(VerificationStatus::Approved);
    let org_for_view = org.clone();

    rsx! {
        tr {
            td {
                class: "org-cell",
                onclick: move |_| on_select.call(id),
                if let Some(url) = logo_url {
                    img { class: "org-logo", src: "{url}", alt: "{name}" }
                }
                div {
                    div { class: "org-name", "{name}" }
                    div { class: "org-username", "{org.username}" }
                }
            }
            td {
                div { "{org.email}" }
                div { class: "org-contact-person", "{org.first_name} {org.last_name}" }
            }
            td {
                StatusBadge { status }
            }
            td { "{org.date_joined}" }
            td {
                class: "org-actions",
                if org.profile.is_some() {
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_view_document.call(org_for_view.clone()),
                        "View document"
                    }
                }
                if can_verify {
                    button {
                        class: "btn btn-approve",
                        disabled: is_processing,
                        onclick: move |_| on_set_status.call((id, VerificationStatus::Approved)),
                        "Approve"
                    }
                    button {
                        class: "btn btn-reject",
                        disabled: is_processing,
                        onclick: move |_| on_set_status.call((id, VerificationStatus::Rejected)),
                        "Reject"
                    }
                }
                if can_revoke {
                    button {
                        class: "btn btn-revoke",
                        disabled: is_processing,
                        onclick: move |_| on_set_status.call((id, VerificationStatus::Pending)),
                        "Revoke"
                    }
                }
                if show_delete {
                    if let Some(on_delete) = on_delete {
                        button {
                            class: "btn btn-delete",
                            disabled: is_processing,
                            onclick: {
                                let name = name.clone();
                                move |_| on_delete.call((id, name.clone()))
                            },
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}
