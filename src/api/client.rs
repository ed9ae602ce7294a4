//! HTTP client for the random user generator endpoint.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::api::error::FetchError;
use crate::config::ApiConfig;
use crate::model::User;

/// Response envelope: `{ "results": [...], "info": {...} }`.
///
/// Only the records matter; the `info` block is ignored.
#[derive(Debug, Deserialize)]
struct UserBatch {
    results: Vec<User>,
}

/// Client bound to one generator endpoint and batch size.
pub struct ApiClient {
    client: Client,
    url: String,
}

impl ApiClient {
    pub fn new(api: &ApiConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(api.connect_timeout())
            .timeout(api.request_timeout())
            .build()
            .expect("Failed to build HTTP client");

        let url = format!("{}/?results={}", api.base_url.trim_end_matches('/'), api.results);

        Self { client, url }
    }

    /// Full request URL, including the batch size query.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch one batch of users from the endpoint.
    pub async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        debug!(url = %self.url, "requesting user batch");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: self.url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        // Read the full body before decoding so a broken payload is
        // classified as a decode failure, not a transport one.
        let body = response.text().await.map_err(|e| FetchError::Transport {
            url: self.url.clone(),
            source: e,
        })?;

        parse_batch(&body)
    }
}

/// Decode a response body into its user records.
pub(crate) fn parse_batch(body: &str) -> Result<Vec<User>, FetchError> {
    let batch: UserBatch =
        serde_json::from_str(body).map_err(|e| FetchError::Decode { source: e })?;
    Ok(batch.results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Gender;

    #[test]
    fn builds_url_from_endpoint_and_batch_size() {
        let api = ApiConfig {
            base_url: "https://randomuser.me/api/".to_string(),
            results: 100,
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&api);
        assert_eq!(client.url(), "https://randomuser.me/api/?results=100");
    }

    #[test]
    fn parses_a_generator_envelope() {
        let body = r#"{
            "results": [
                {
                    "gender": "male",
                    "name": { "title": "Mr", "first": "Jonas", "last": "Petersen" },
                    "location": {
                        "city": "Aarhus",
                        "state": "Midtjylland",
                        "country": "Denmark"
                    },
                    "registered": { "date": "2012-03-10T08:15:00.000Z", "age": 13 }
                }
            ],
            "info": { "seed": "abc", "results": 1, "page": 1, "version": "1.4" }
        }"#;

        let users = parse_batch(body).expect("envelope should decode");
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].full_name(), "Jonas Petersen");
        assert_eq!(users[0].gender, Gender::Male);
        assert_eq!(users[0].location.country, "Denmark");
    }

    #[test]
    fn rejects_a_body_without_results() {
        let err = parse_batch(r#"{"error": "rate limited"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
    }

    #[test]
    fn rejects_non_json_bodies() {
        let err = parse_batch("<html>gateway timeout</html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
    }
}
