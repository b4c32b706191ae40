use dioxus::prelude::*;
use domain::VerificationStatus;

/// Colored badge for a verification status.
///
/// Anything outside the known set renders as an explicit "Unknown" badge;
/// accounts without a profile get "No profile".
#[component]
pub fn StatusBadge(status: Option<VerificationStatus>) -> Element {
    let (class, label) = match status {
        Some(VerificationStatus::Approved) => ("badge badge-approved", "Approved"),
        Some(VerificationStatus::Pending) => ("badge badge-pending", "Pending"),
        Some(VerificationStatus::Rejected) => ("badge badge-rejected", "Rejected"),
        Some(VerificationStatus::Unknown) => ("badge badge-unknown", "Unknown"),
        None => ("badge badge-unknown", "No profile"),
    };

    rsx! {
        span {
            class: "{class}",
            "{label}"
        }
    }
}
