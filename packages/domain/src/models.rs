//! # Domain models for organizations and their verification profiles
//!
//! Defines the data structures delivered by the remote organization service
//! and shared across the workspace. These types are `Serialize + Deserialize`
//! so they can cross the server/client boundary via Dioxus server functions.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Organization`] | A registered account. Carries contact fields, a `role` tag, and an optional [`Profile`]. Accounts without a profile cannot be verification-managed. |
//! | [`Profile`] | Verification-relevant metadata: display name, contact info, the verification document reference, and the current [`VerificationStatus`]. |
//! | [`OrganizationsPage`] | The paginated envelope returned by the list endpoint. Only `results` is consumed; the service is queried for the first page only. |
//! | [`VerificationStatus`] | The single authoritative status enumeration. The legacy spelling `denied` parses as [`VerificationStatus::Rejected`]; anything unrecognized parses as [`VerificationStatus::Unknown`]. |
//!
//! A payload that violates this schema (wrong type, missing required field)
//! fails deserialization instead of being silently coerced.

use serde::{Deserialize, Serialize};

/// Verification status of an organization's profile.
///
/// Canonical wire spellings are `pending`, `approved`, and `rejected`. The
/// service historically emitted `denied` as a synonym for `rejected`; it is
/// accepted on input and normalized here, so nothing downstream ever sees it.
/// Values outside the known set parse as [`VerificationStatus::Unknown`],
/// which renders as an explicit "Unknown" badge and is never sent back out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Pending,
    Approved,
    #[serde(alias = "denied")]
    Rejected,
    #[serde(other)]
    Unknown,
}

impl VerificationStatus {
    /// Canonical query-string value for the verify endpoint.
    ///
    /// Returns `None` for [`VerificationStatus::Unknown`], which is a
    /// parse-time fallback and never a valid transition target.
    pub fn as_query_value(&self) -> Option<&'static str> {
        match self {
            Self::Pending => Some("pending"),
            Self::Approved => Some("approved"),
            Self::Rejected => Some("rejected"),
            Self::Unknown => None,
        }
    }

    /// Human-readable badge label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Unknown => "Unknown",
        }
    }
}

/// Verification profile attached to an organization account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub logo_url: String,
    pub contact_phone: String,
    pub website_url: String,
    /// Reference to the verification document. Despite the name this is an
    /// image URL, shown in the document preview modal. `None` means the
    /// organization never uploaded one.
    pub verification_id: Option<String>,
    pub verification_status: VerificationStatus,
    /// RFC 3339 timestamp as delivered by the service.
    pub created_at: String,
    /// RFC 3339 timestamp as delivered by the service.
    pub updated_at: String,
    /// Identifier of the owning [`Organization`].
    pub user: i64,
}

/// A registered account on the platform.
///
/// The service models organizations as user accounts with
/// `role == "organization"` and an attached [`Profile`]. The client holds a
/// transient copy fetched per page mount; the service owns the records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: i64,
    pub email: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    /// RFC 3339 timestamp as delivered by the service.
    pub date_joined: String,
    pub username: String,
    #[serde(default)]
    pub profile: Option<Profile>,
}

impl Organization {
    /// Display name: the profile name, falling back to "first last".
    pub fn display_name(&self) -> String {
        match &self.profile {
            Some(p) if !p.name.is_empty() => p.name.clone(),
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }

    /// Current verification status, or `None` when the account has no
    /// profile and therefore cannot be verification-managed.
    pub fn status(&self) -> Option<VerificationStatus> {
        self.profile.as_ref().map(|p| p.verification_status)
    }
}

/// Paginated envelope returned by `GET /organizations/`.
///
/// `count`, `next`, and `previous` are received but not consumed: only the
/// first page is ever shown.
#[derive(Clone, Debug, Deserialize)]
pub struct OrganizationsPage {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<Organization>,
}

/// Dashboard summary counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
}

/// Counts for the dashboard stat cards.
pub fn status_counts(organizations: &[Organization]) -> StatusCounts {
    let mut counts = StatusCounts {
        total: organizations.len(),
        ..StatusCounts::default()
    };
    for org in organizations {
        match org.status() {
            Some(VerificationStatus::Approved) => counts.approved += 1,
            Some(VerificationStatus::Pending) => counts.pending += 1,
            _ => {}
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_json(status: &str) -> String {
        format!(
            r#"{{
                "id": 7,
                "name": "Acme Events",
                "description": "Runs conferences",
                "logo_url": "https://cdn.example.com/acme.png",
                "contact_phone": "+1 555 0100",
                "website_url": "https://acme.example.com",
                "verification_id": "https://cdn.example.com/docs/acme.jpg",
                "verification_status": "{status}",
                "created_at": "2024-01-10T09:30:00Z",
                "updated_at": "2024-02-01T12:00:00Z",
                "user": 1
            }}"#
        )
    }

    fn org_json(id: i64, profile: Option<&str>) -> String {
        let profile_field = profile
            .map(|p| format!(r#","profile": {p}"#))
            .unwrap_or_default();
        format!(
            r#"{{
                "id": {id},
                "email": "org{id}@example.com",
                "role": "organization",
                "first_name": "Ada",
                "last_name": "Lovelace",
                "is_active": true,
                "date_joined": "2023-11-05T08:00:00Z",
                "username": "org{id}"
                {profile_field}
            }}"#
        )
    }

    #[test]
    fn test_parse_organization_with_profile() {
        let org: Organization =
            serde_json::from_str(&org_json(1, Some(&profile_json("pending")))).unwrap();
        assert_eq!(org.id, 1);
        assert_eq!(org.status(), Some(VerificationStatus::Pending));
        assert_eq!(org.display_name(), "Acme Events");
    }

    #[test]
    fn test_parse_organization_without_profile() {
        let org: Organization = serde_json::from_str(&org_json(2, None)).unwrap();
        assert_eq!(org.profile, None);
        assert_eq!(org.status(), None);
        assert_eq!(org.display_name(), "Ada Lovelace");
    }

    #[test]
    fn test_denied_parses_as_rejected() {
        let org: Organization =
            serde_json::from_str(&org_json(3, Some(&profile_json("denied")))).unwrap();
        assert_eq!(org.status(), Some(VerificationStatus::Rejected));
    }

    #[test]
    fn test_unrecognized_status_parses_as_unknown() {
        let org: Organization =
            serde_json::from_str(&org_json(4, Some(&profile_json("in_review")))).unwrap();
        assert_eq!(org.status(), Some(VerificationStatus::Unknown));
        assert_eq!(VerificationStatus::Unknown.label(), "Unknown");
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        // No email field.
        let payload = r#"{"id": 5, "role": "organization"}"#;
        assert!(serde_json::from_str::<Organization>(payload).is_err());
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let bad = org_json(6, None).replace("\"is_active\": true", "\"is_active\": \"yes\"");
        assert!(serde_json::from_str::<Organization>(&bad).is_err());
    }

    #[test]
    fn test_canonical_query_values() {
        assert_eq!(VerificationStatus::Rejected.as_query_value(), Some("rejected"));
        assert_eq!(VerificationStatus::Approved.as_query_value(), Some("approved"));
        assert_eq!(VerificationStatus::Pending.as_query_value(), Some("pending"));
        assert_eq!(VerificationStatus::Unknown.as_query_value(), None);

        // A status parsed from the legacy spelling still serializes canonically.
        let parsed: VerificationStatus = serde_json::from_str("\"denied\"").unwrap();
        assert_eq!(parsed.as_query_value(), Some("rejected"));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"rejected\"");
    }

    #[test]
    fn test_envelope_keeps_results_only() {
        let payload = format!(
            r#"{{
                "count": 42,
                "next": "https://svc.example.com/api/v1/organizations/?page=2",
                "previous": null,
                "results": [{}]
            }}"#,
            org_json(1, Some(&profile_json("approved")))
        );
        let page: OrganizationsPage = serde_json::from_str(&payload).unwrap();
        assert_eq!(page.count, 42);
        assert_eq!(page.results.len(), 1);
    }

    #[test]
    fn test_status_counts() {
        let orgs: Vec<Organization> = vec![
            serde_json::from_str(&org_json(1, Some(&profile_json("pending")))).unwrap(),
            serde_json::from_str(&org_json(2, Some(&profile_json("approved")))).unwrap(),
            serde_json::from_str(&org_json(3, None)).unwrap(),
        ];
        let counts = status_counts(&orgs);
        assert_eq!(counts.total, 3);
        assert_eq!(counts.approved, 1);
        assert_eq!(counts.pending, 1);
    }
}
