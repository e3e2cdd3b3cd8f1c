//! attackontitanapi.com character fetcher.
use std::time::Duration;

use serde_json::Value;
use tracing::{info, warn};

use crate::error::Error;
use crate::state::{Character, CharacterId};

/// Default base URL of the public character API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.attackontitanapi.com";

/// What: One-shot HTTP client for the character directory.
///
/// Details:
/// - No caching, retry, or pagination; every call is a single GET.
/// - The `reqwest::Client` is reused so connections are pooled.
#[derive(Clone, Debug)]
pub struct CharacterClient {
    /// Shared HTTP client.
    http: reqwest::Client,
    /// API base URL without trailing slash.
    base_url: String,
}

impl CharacterClient {
    /// What: Build a client for `base_url` with the given request timeout.
    ///
    /// Inputs:
    /// - `base_url`: API root, e.g. `https://api.attackontitanapi.com` (trailing `/` ignored)
    /// - `timeout`: Per-request timeout applied by `reqwest`
    ///
    /// Output:
    /// - Ready client; falls back to a default `reqwest::Client` if the builder fails.
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("titandex/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// API base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// What: Fetch the full character collection.
    ///
    /// Output:
    /// - `Ok(Vec<Character>)` from the response's `results` array, in API order.
    ///
    /// Details:
    /// - Elements that cannot be normalized into a `Character` are skipped and logged.
    /// - A response without a `results` array is treated as a failure.
    ///
    /// # Errors
    /// - `Error::FetchFailed` on transport errors, non-success status, or malformed JSON.
    pub async fn list_all(&self) -> Result<Vec<Character>, Error> {
        let url = format!("{}/characters", self.base_url);
        let body = self.get_json(&url).await?;
        let Some(arr) = body.get("results").and_then(Value::as_array) else {
            warn!(url = %url, "character list response had no results array");
            return Err(Error::FetchFailed("response had no results".into()));
        };
        let mut items = Vec::with_capacity(arr.len());
        let mut skipped = 0usize;
        for raw in arr {
            match Character::from_value(raw) {
                Some(c) => items.push(c),
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            warn!(skipped, "skipped character records without a valid id");
        }
        info!(count = items.len(), "parsed character list");
        Ok(items)
    }

    /// What: Fetch a single character by id.
    ///
    /// Inputs:
    /// - `id`: Character identifier embedded in the request path
    ///
    /// Output:
    /// - `Ok(Character)` when the body is a usable character record.
    ///
    /// # Errors
    /// - `Error::FetchFailed` on transport errors, non-success status, malformed JSON,
    ///   or a body that is not a character.
    pub async fn get_by_id(&self, id: CharacterId) -> Result<Character, Error> {
        let url = format!("{}/characters/{id}", self.base_url);
        let body = self.get_json(&url).await?;
        Character::from_value(&body).ok_or_else(|| {
            warn!(id = %id, "character response was not a usable record");
            Error::FetchFailed(format!("no data for character {id}"))
        })
    }

    /// GET `url` and parse the body as JSON, mapping every failure to `FetchFailed`.
    async fn get_json(&self, url: &str) -> Result<Value, Error> {
        let resp = self.http.get(url).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "character API request failed");
            Error::from(e)
        })?;
        let status = resp.status();
        let body = resp.text().await?;
        info!(
            url = %url,
            status = status.as_u16(),
            bytes = body.len(),
            "fetched character API"
        );
        if !status.is_success() {
            let preview: String = body.chars().take(300).collect();
            warn!(
                status = status.as_u16(),
                preview = preview,
                "character API returned non-success status"
            );
            return Err(Error::FetchFailed(format!("HTTP status {status}")));
        }
        serde_json::from_str(&body)
            .map_err(|e| Error::FetchFailed(format!("invalid JSON from {url}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> CharacterClient {
        CharacterClient::new(&format!("{}/", server.uri()), Duration::from_secs(5))
    }

    #[tokio::test]
    /// What: `list_all` reads the `results` array and skips records without an id.
    ///
    /// Inputs:
    /// - Mock `GET /characters` with two valid records and one null id
    ///
    /// Output:
    /// - Two characters in API order.
    async fn list_all_parses_results_and_skips_invalid() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/characters"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "info": {"count": 3},
                "results": [
                    {"id": 1, "name": "Eren Yeager", "age": "19"},
                    {"id": null, "name": "Broken"},
                    {"id": 2, "name": "Mikasa Ackerman", "species": ["Human"]}
                ]
            })))
            .mount(&server)
            .await;

        let items = client_for(&server).list_all().await.expect("list");
        let names: Vec<&str> = items.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Eren Yeager", "Mikasa Ackerman"]);
        assert_eq!(items[1].species, vec!["Human".to_string()]);
    }

    #[tokio::test]
    /// What: `get_by_id` embeds the id in the path and returns the record.
    async fn get_by_id_fetches_single_character() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/characters/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 5, "name": "Levi Ackerman", "occupation": "Captain"
            })))
            .mount(&server)
            .await;

        let c = client_for(&server)
            .get_by_id(CharacterId(5))
            .await
            .expect("detail");
        assert_eq!(c.name, "Levi Ackerman");
        assert_eq!(c.occupation.as_deref(), Some("Captain"));
    }

    #[tokio::test]
    /// What: Non-success statuses and unusable bodies map to `FetchFailed`.
    ///
    /// Inputs:
    /// - 500 on the list endpoint, 404 on one detail, an empty object on another
    ///
    /// Output:
    /// - `Err(Error::FetchFailed(_))` for each call.
    async fn failures_map_to_fetch_failed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/characters"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/characters/404"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/characters/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(matches!(client.list_all().await, Err(Error::FetchFailed(_))));
        assert!(matches!(
            client.get_by_id(CharacterId(404)).await,
            Err(Error::FetchFailed(_))
        ));
        assert!(matches!(
            client.get_by_id(CharacterId(7)).await,
            Err(Error::FetchFailed(_))
        ));
    }

    #[tokio::test]
    /// What: An unreachable host surfaces as `FetchFailed` instead of panicking.
    async fn unreachable_host_is_fetch_failed() {
        let client = CharacterClient::new("http://127.0.0.1:9", Duration::from_secs(2));
        assert!(matches!(client.list_all().await, Err(Error::FetchFailed(_))));
    }

    #[test]
    /// What: Trailing slashes are stripped from the base URL.
    fn base_url_is_normalized() {
        let c = CharacterClient::new("https://api.example.test///", Duration::from_secs(1));
        assert_eq!(c.base_url(), "https://api.example.test");
    }
}
