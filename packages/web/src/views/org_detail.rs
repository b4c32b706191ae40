//! Single-organization page. Owns its own copy of the record rather than a
//! list controller; mutations reconcile the server's returned record into the
//! local signal.

use dioxus::prelude::*;
use domain::{Organization, VerificationStatus};
use ui::{confirm_delete, push_toast, use_toasts, DocumentModal, StatusBadge, ToastLevel};

use crate::Route;

#[component]
pub fn OrganizationDetail(id: i64) -> Element {
    let mut org = use_signal(|| None::<Organization>);
    let mut loaded = use_signal(|| false);
    let mut load_error = use_signal(|| false);
    let mut processing = use_signal(|| false);
    let mut show_document = use_signal(|| false);
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let _loader = use_resource(move || async move {
        match api::get_organization(id).await {
            Ok(record) => org.set(Some(record)),
            Err(e) => {
                tracing::error!("fetching organization {id} failed: {e}");
                load_error.set(true);
            }
        }
        loaded.set(true);
    });

    let set_status = move |status: VerificationStatus| {
        if processing() {
            return;
        }
        spawn(async move {
            processing.set(true);
            match api::set_verification_status(id, status).await {
                Ok(updated) => {
                    org.set(Some(updated));
                    show_document.set(false);
                    let message = match status {
                        VerificationStatus::Pending => "Organization approval revoked.",
                        VerificationStatus::Approved => "Organization approved.",
                        VerificationStatus::Rejected => "Organization rejected.",
                        VerificationStatus::Unknown => "Organization updated.",
                    };
                    push_toast(&mut toasts, ToastLevel::Success, message);
                }
                Err(e) => {
                    tracing::error!("status change for organization {id} failed: {e}");
                    push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        "Failed to update the organization status. Please try again.",
                    );
                }
            }
            processing.set(false);
        });
    };

    let delete = move |name: String| {
        if processing() {
            return;
        }
        if !confirm_delete(&name) {
            return;
        }
        spawn(async move {
            processing.set(true);
            match api::delete_organization(id).await {
                Ok(()) => {
                    push_toast(&mut toasts, ToastLevel::Success, "Organization deleted.");
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::error!("delete of organization {id} failed: {e}");
                    push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        "Failed to delete the organization. Please try again.",
                    );
                    processing.set(false);
                }
            }
        });
    };

    let current = org();

    rsx! {
        div {
            class: "page",

            button {
                class: "btn btn-outline",
                onclick: move |_| {
                    nav.push(Route::Dashboard {});
                },
                "\u{2190} Back to organizations"
            }

            if load_error() {
                div { class: "page-error", "Failed to load the organization. Please try again later." }
            } else if current.is_none() && loaded() {
                div { class: "page-placeholder", "Organization not found." }
            } else if let Some(org_record) = current {
                {detail_card(org_record, processing(), show_document, set_status, delete)}
            } else {
                div { class: "page-placeholder", "Loading organization..." }
            }
        }
    }
}

fn detail_card(
    org: Organization,
    processing: bool,
    mut show_document: Signal<bool>,
    mut set_status: impl FnMut(VerificationStatus) + Copy + 'static,
    mut delete: impl FnMut(String) + Copy + 'static,
) -> Element {
    let name = org.display_name();
    let status = org.status();
    let profile = org.profile.clone();
    let document_url = profile.as_ref().and_then(|p| p.verification_id.clone());
    let delete_name = name.clone();

    rsx! {
        div {
            class: "detail-card",

            div {
                class: "detail-header",
                if let Some(p) = profile.as_ref() {
                    if !p.logo_url.is_empty() {
                        img { class: "org-logo", src: "{p.logo_url}", alt: "{name} logo" }
                    }
                }
                div {
                    h1 { "{name}" }
                    span { class: "org-username", "@{org.username}" }
                }
                StatusBadge { status }
            }

            div {
                class: "detail-grid",
                div {
                    class: "detail-field",
                    span { class: "detail-label", "Email" }
                    span { "{org.email}" }
                }
                div {
                    class: "detail-field",
                    span { class: "detail-label", "Contact person" }
                    span { "{org.first_name} {org.last_name}" }
                }
                div {
                    class: "detail-field",
                    span { class: "detail-label", "Joined" }
                    span { "{org.date_joined}" }
                }
                div {
                    class: "detail-field",
                    span { class: "detail-label", "Account" }
                    span { if org.is_active { "Active" } else { "Inactive" } }
                }
                if let Some(p) = profile.as_ref() {
                    div {
                        class: "detail-field",
                        span { class: "detail-label", "Phone" }
                        span { "{p.contact_phone}" }
                    }
                    div {
                        class: "detail-field",
                        span { class: "detail-label", "Website" }
                        a { href: "{p.website_url}", target: "_blank", "{p.website_url}" }
                    }
                    div {
                        class: "detail-field detail-field-wide",
                        span { class: "detail-label", "Description" }
                        span { "{p.description}" }
                    }
                    div {
                        class: "detail-field",
                        span { class: "detail-label", "Profile created" }
                        span { "{p.created_at}" }
                    }
                    div {
                        class: "detail-field",
                        span { class: "detail-label", "Profile updated" }
                        span { "{p.updated_at}" }
                    }
                } else {
                    div {
                        class: "detail-field detail-field-wide",
                        span { class: "detail-label", "Profile" }
                        span { "This account has no organization profile." }
                    }
                }
            }

            div {
                class: "detail-actions",
                if document_url.is_some() {
                    button {
                        class: "btn btn-outline",
                        disabled: processing,
                        onclick: move |_| show_document.set(true),
                        "View document"
                    }
                } else {
                    span { class: "detail-no-document", "No verification document uploaded." }
                }
                if status == Some(VerificationStatus::Pending) && org.role == "organization" {
                    button {
                        class: "btn btn-approve",
                        disabled: processing,
                        onclick: move |_| set_status(VerificationStatus::Approved),
                        "Approve"
                    }
                    button {
                        class: "btn btn-reject",
                        disabled: processing,
                        onclick: move |_| set_status(VerificationStatus::Rejected),
                        "Reject"
                    }
                }
                if status == Some(VerificationStatus::Approved) {
                    button {
                        class: "btn btn-revoke",
                        disabled: processing,
                        onclick: move |_| set_status(VerificationStatus::Pending),
                        "Revoke approval"
                    }
                }
                button {
                    class: "btn btn-delete",
                    disabled: processing,
                    onclick: move |_| delete(delete_name.clone()),
                    "Delete"
                }
            }
        }

        if show_document() {
            if let Some(url) = document_url.clone() {
                DocumentModal {
                    document_url: url,
                    organization_name: name.clone(),
                    on_close: move |_| show_document.set(false),

                    if status == Some(VerificationStatus::Pending) {
                        button {
                            class: "btn btn-approve",
                            disabled: processing,
                            onclick: move |_| set_status(VerificationStatus::Approved),
                            "Approve"
                        }
                        button {
                            class: "btn btn-reject",
                            disabled: processing,
                            onclick: move |_| set_status(VerificationStatus::Rejected),
                            "Reject"
                        }
                    }
                }
            }
        }
    }
}
