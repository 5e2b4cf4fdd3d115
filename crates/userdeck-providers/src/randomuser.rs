//! Reqwest-backed randomuser.me source.
//!
//! Owns transport details only: URL construction, HTTP status mapping and
//! JSON decoding into records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use userdeck_types::UserRecord;

use crate::decode::{body_preview, decode_users};
use crate::traits::{FetchRequest, UserSource};
use crate::{FetchError, Result};

pub const DEFAULT_BASE_URL: &str = "https://randomuser.me/api";

const USER_AGENT: &str = concat!("userdeck/", env!("CARGO_PKG_VERSION"));

/// Live source issuing `GET {base}/?results=N&nat=a,b`
pub struct RandomUserApi {
    client: Client,
    base_url: Url,
}

impl RandomUserApi {
    /// Build a source without a request timeout. A request that never
    /// answers keeps the caller waiting.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| FetchError::InvalidRequest(format!("bad base URL '{}': {}", base_url, e)))?;

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full request URL for a fetch request
    pub fn request_url(&self, request: &FetchRequest) -> Result<Url> {
        build_request_url(&self.base_url, request)
    }
}

#[async_trait]
impl UserSource for RandomUserApi {
    fn describe(&self) -> String {
        self.base_url.to_string()
    }

    async fn fetch_users(&self, request: &FetchRequest) -> Result<Vec<UserRecord>> {
        let url = self.request_url(request)?;
        tracing::debug!(%url, "requesting users");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        let users = decode_users(body.as_ref())?;
        tracing::debug!(count = users.len(), "decoded users");
        Ok(users)
    }
}

fn build_request_url(base: &Url, request: &FetchRequest) -> Result<Url> {
    if request.count == 0 {
        return Err(FetchError::InvalidRequest(
            "results must be at least 1".to_string(),
        ));
    }
    if let Some(bad) = request
        .nationalities
        .iter()
        .find(|nat| nat.is_empty() || !nat.chars().all(|c| c.is_ascii_alphabetic()))
    {
        return Err(FetchError::InvalidRequest(format!(
            "nationality codes must be letters only, got '{}'",
            bad
        )));
    }

    let mut url = base.clone();
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    let mut query = format!("results={}", request.count);
    if !request.nationalities.is_empty() {
        query.push_str("&nat=");
        query.push_str(&request.nationalities.join(","));
    }
    url.set_query(Some(&query));

    Ok(url)
}

fn map_status_error(status: StatusCode, body: &[u8]) -> FetchError {
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            FetchError::Timeout(format!("status {}", status.as_u16()))
        }
        _ => FetchError::Status {
            code: status.as_u16(),
            body_preview: body_preview(body),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn base() -> Url {
        Url::parse(DEFAULT_BASE_URL).unwrap()
    }

    #[test]
    fn test_default_request_url_matches_api_contract() {
        let url = build_request_url(&base(), &FetchRequest::default()).unwrap();
        assert_eq!(url.as_str(), "https://randomuser.me/api/?results=12&nat=us,gb");
    }

    #[test]
    fn test_request_url_keeps_existing_trailing_slash() {
        let base = Url::parse("http://127.0.0.1:8080/api/").unwrap();
        let request = FetchRequest::new(3, vec!["fr".to_string()]);

        let url = build_request_url(&base, &request).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/api/?results=3&nat=fr");
    }

    #[test]
    fn test_request_url_without_nationalities() {
        let url = build_request_url(&base(), &FetchRequest::new(5, Vec::new())).unwrap();
        assert_eq!(url.as_str(), "https://randomuser.me/api/?results=5");
    }

    #[rstest]
    #[case::zero_results(FetchRequest::new(0, vec!["us".to_string()]))]
    #[case::injected_param(FetchRequest::new(12, vec!["us&seed=x".to_string()]))]
    #[case::blank_nat(FetchRequest::new(12, vec![String::new()]))]
    fn test_request_url_rejects_bad_parameters(#[case] request: FetchRequest) {
        let err = build_request_url(&base(), &request).unwrap_err();
        assert!(matches!(err, FetchError::InvalidRequest(_)));
    }

    #[rstest]
    #[case::not_found(StatusCode::NOT_FOUND, Some(404))]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR, Some(500))]
    #[case::unavailable(StatusCode::SERVICE_UNAVAILABLE, Some(503))]
    #[case::request_timeout(StatusCode::REQUEST_TIMEOUT, None)]
    #[case::gateway_timeout(StatusCode::GATEWAY_TIMEOUT, None)]
    fn test_maps_http_statuses(#[case] status: StatusCode, #[case] expected_code: Option<u16>) {
        let err = map_status_error(status, b"{\"error\": \"Uh oh, something has gone wrong\"}");
        match expected_code {
            Some(code) => match err {
                FetchError::Status {
                    code: actual,
                    body_preview,
                } => {
                    assert_eq!(actual, code);
                    assert!(body_preview.contains("Uh oh"));
                }
                other => panic!("expected Status error, got {:?}", other),
            },
            None => assert!(matches!(err, FetchError::Timeout(_))),
        }
    }

    #[test]
    fn test_rejects_unparseable_base_url() {
        assert!(matches!(
            RandomUserApi::new("not a url"),
            Err(FetchError::InvalidRequest(_))
        ));
    }
}
