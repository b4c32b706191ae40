//! # HTTP client for the remote organization service
//!
//! The sole point of contact with the network. Wraps the service's REST
//! surface (`GET /organizations/`, `POST /organizations/{id}/verify/`,
//! `DELETE /organizations/{id}/`) and decodes responses into the validated
//! [`domain`] model. Failures are never retried; the caller decides what to
//! surface.
//!
//! The client is a lazy process-wide singleton configured from
//! `ORG_SERVICE_URL` (e.g. `https://platform.example.com/api/v1/`), with a
//! 10-second request timeout so a hung call cannot latch the UI's processing
//! guard forever.

use std::time::Duration;

use domain::{Organization, OrganizationsPage, VerificationStatus};
use reqwest::{Client, Response};
use thiserror::Error;
use tokio::sync::OnceCell;
use url::Url;

#[derive(Debug, Error)]
pub enum OrgClientError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("request timed out")]
    Timeout,
    #[error("http {status}: {body}")]
    Http { status: u16, body: String },
    #[error("invalid payload: {0}")]
    Validation(String),
    #[error("organization {0} not found")]
    NotFound(i64),
    #[error("invalid url: {0}")]
    Url(String),
    #[error("\"{0}\" is not a valid transition target")]
    InvalidStatus(String),
}

/// Client for the remote organization service.
#[derive(Debug, Clone)]
pub struct OrgClient {
    base: Url,
    http: Client,
}

impl OrgClient {
    pub fn new(base_url: &str) -> Result<Self, OrgClientError> {
        // Url::join drops the last path segment unless the base ends in '/'.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base = Url::parse(&normalized).map_err(|e| OrgClientError::Url(e.to_string()))?;
        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(concat!("org-admin/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| OrgClientError::Transport(e.to_string()))?;
        Ok(Self { base, http })
    }

    /// Fetches the first page of organizations.
    ///
    /// The envelope's pagination metadata is received but not consumed.
    pub async fn fetch_organizations(&self) -> Result<Vec<Organization>, OrgClientError> {
        let url = self.endpoint("organizations/")?;
        let response = self.http.get(url).send().await.map_err(map_send_error)?;
        let page: OrganizationsPage = decode(check_status(response).await?).await?;
        Ok(page.results)
    }

    /// Fetches a single organization by scanning the full collection.
    ///
    /// The service exposes no single-resource endpoint.
    pub async fn fetch_organization_by_id(
        &self,
        id: i64,
    ) -> Result<Organization, OrgClientError> {
        self.fetch_organizations()
            .await?
            .into_iter()
            .find(|org| org.id == id)
            .ok_or(OrgClientError::NotFound(id))
    }

    /// Requests a verification-status transition and returns the updated
    /// record from the response body.
    ///
    /// The query value is always the canonical spelling: a status parsed from
    /// the legacy "denied" synonym goes out as `rejected`.
    pub async fn verify_organization(
        &self,
        id: i64,
        status: VerificationStatus,
    ) -> Result<Organization, OrgClientError> {
        let url = self.verify_url(id, status)?;
        let response = self.http.post(url).send().await.map_err(map_send_error)?;
        decode(check_status(response).await?).await
    }

    /// Deletes an organization. Route follows the verify endpoint's base path.
    pub async fn delete_organization(&self, id: i64) -> Result<(), OrgClientError> {
        let url = self.endpoint(&format!("organizations/{id}/"))?;
        let response = self.http.delete(url).send().await.map_err(map_send_error)?;
        check_status(response).await?;
        Ok(())
    }

    fn endpoint(&self, path: &str) -> Result<Url, OrgClientError> {
        self.base
            .join(path)
            .map_err(|e| OrgClientError::Url(e.to_string()))
    }

    fn verify_url(&self, id: i64, status: VerificationStatus) -> Result<Url, OrgClientError> {
        let value = status
            .as_query_value()
            .ok_or_else(|| OrgClientError::InvalidStatus(format!("{status:?}")))?;
        let mut url = self.endpoint(&format!("organizations/{id}/verify/"))?;
        url.query_pairs_mut().append_pair("status", value);
        Ok(url)
    }
}

fn map_send_error(e: reqwest::Error) -> OrgClientError {
    if e.is_timeout() {
        OrgClientError::Timeout
    } else {
        OrgClientError::Transport(e.to_string())
    }
}

async fn check_status(response: Response) -> Result<Response, OrgClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(OrgClientError::Http {
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, OrgClientError> {
    let body = response
        .text()
        .await
        .map_err(|e| OrgClientError::Transport(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| OrgClientError::Validation(e.to_string()))
}

static CLIENT: OnceCell<OrgClient> = OnceCell::const_new();

/// Get or initialize the shared client.
/// Uses the ORG_SERVICE_URL environment variable for the base URL.
pub async fn get_client() -> Result<&'static OrgClient, OrgClientError> {
    CLIENT
        .get_or_try_init(|| async {
            dotenvy::dotenv().ok();
            let base_url = std::env::var("ORG_SERVICE_URL")
                .map_err(|_| OrgClientError::Url("ORG_SERVICE_URL must be set".to_string()))?;
            OrgClient::new(&base_url)
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> OrgClient {
        // No trailing slash: new() must normalize it before joining.
        OrgClient::new("https://platform.example.com/api/v1").unwrap()
    }

    #[test]
    fn test_endpoint_preserves_base_path() {
        let url = client().endpoint("organizations/").unwrap();
        assert_eq!(
            url.as_str(),
            "https://platform.example.com/api/v1/organizations/"
        );
    }

    #[test]
    fn test_verify_url_uses_canonical_status() {
        let url = client()
            .verify_url(9, VerificationStatus::Rejected)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://platform.example.com/api/v1/organizations/9/verify/?status=rejected"
        );
    }

    #[test]
    fn test_verify_url_refuses_unknown() {
        assert!(matches!(
            client().verify_url(9, VerificationStatus::Unknown),
            Err(OrgClientError::InvalidStatus(_))
        ));
    }

    #[test]
    fn test_delete_route_shape() {
        let url = client().endpoint(&format!("organizations/{}/", 12)).unwrap();
        assert_eq!(
            url.as_str(),
            "https://platform.example.com/api/v1/organizations/12/"
        );
    }
}
