//! GitHub signal collector: repository language histogram and description text.
//!
//! The collector never fails. Any problem reaching GitHub or reading its answer
//! degrades to `GithubSignal::Unavailable`, which the merger treats as "no signal".
//! `AppState` holds an `Arc<dyn SignalSource>` so tests can swap the backend.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Public repository data gathered for one GitHub user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GithubProfile {
    /// Lowercased primary language → number of repositories, in first-seen order.
    pub languages: Vec<(String, u32)>,
    /// Every repository description, lowercased, each prefixed by a single space.
    pub descriptions: String,
}

impl GithubProfile {
    fn record_language(&mut self, language: &str) {
        let language = language.to_lowercase();
        match self.languages.iter_mut().find(|(name, _)| *name == language) {
            Some((_, count)) => *count += 1,
            None => self.languages.push((language, 1)),
        }
    }
}

/// Outcome of a GitHub lookup.
///
/// `Present` with an empty profile means the user exists but has nothing to offer;
/// `Unavailable` means the lookup itself did not produce repository records.
#[derive(Debug, Clone, PartialEq)]
pub enum GithubSignal {
    Present(GithubProfile),
    Unavailable { reason: String },
}

impl GithubSignal {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        GithubSignal::Unavailable {
            reason: reason.into(),
        }
    }

    /// The profile to merge; `Unavailable` contributes nothing.
    pub fn profile(&self) -> Option<&GithubProfile> {
        match self {
            GithubSignal::Present(profile) => Some(profile),
            GithubSignal::Unavailable { .. } => None,
        }
    }
}

/// Anything that can turn a profile URL into a GitHub signal.
#[async_trait]
pub trait SignalSource: Send + Sync {
    async fn collect(&self, profile_url: &str) -> GithubSignal;
}

/// Unauthenticated client for the public repository-listing endpoint.
#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    api_base: String,
}

impl GithubClient {
    pub fn new(api_base: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build GitHub HTTP client")?;
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_repos(&self, username: &str) -> Result<Value, reqwest::Error> {
        let url = format!("{}/users/{}/repos", self.api_base, username);
        debug!("Fetching GitHub repositories: {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            debug!("GitHub returned {status} for {username}");
        }
        response.json::<Value>().await
    }
}

#[async_trait]
impl SignalSource for GithubClient {
    async fn collect(&self, profile_url: &str) -> GithubSignal {
        let Some(username) = username_from_url(profile_url) else {
            debug!("No usable GitHub username in {profile_url:?}");
            return GithubSignal::unavailable("no GitHub username in profile URL");
        };

        let body = match self.fetch_repos(&username).await {
            Ok(body) => body,
            Err(e) => {
                warn!("GitHub lookup for {username} failed: {e}");
                return GithubSignal::unavailable(format!("request failed: {e}"));
            }
        };

        match profile_from_repos(&body) {
            Some(profile) => {
                info!(
                    "GitHub signal for {username}: {} languages",
                    profile.languages.len()
                );
                GithubSignal::Present(profile)
            }
            None => {
                let message = body
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("response was not a repository list");
                warn!("GitHub lookup for {username} returned no repositories: {message}");
                GithubSignal::unavailable(message)
            }
        }
    }
}

/// Derives a GitHub username from a profile URL: the last non-empty path segment.
///
/// Query strings and fragments are ignored. Segments containing anything other than
/// ASCII alphanumerics, `-` or `_` are rejected.
pub fn username_from_url(profile_url: &str) -> Option<String> {
    let path = profile_url
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim();
    let username = path.split('/').filter(|s| !s.is_empty()).last()?;

    let valid = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    valid.then(|| username.to_string())
}

/// Folds a repository-listing response into a profile.
///
/// Returns `None` when the body is not a JSON array. Array elements that are not
/// objects, and non-string `language`/`description` values, are skipped.
pub fn profile_from_repos(body: &Value) -> Option<GithubProfile> {
    let repos = body.as_array()?;
    let mut profile = GithubProfile::default();

    for repo in repos {
        if let Some(language) = repo.get("language").and_then(Value::as_str) {
            if !language.is_empty() {
                profile.record_language(language);
            }
        }
        let description = repo
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default();
        profile.descriptions.push(' ');
        profile.descriptions.push_str(&description.to_lowercase());
    }

    Some(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Path, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
    use serde_json::json;

    async fn fake_repos(Path(user): Path<String>) -> axum::response::Response {
        match user.as_str() {
            "octocat" => Json(json!([
                {"name": "a", "language": "Python", "description": "Pandas notebooks"},
                {"name": "b", "language": "python", "description": null},
                {"name": "c", "language": "Rust", "description": "CLI tooling"},
                {"name": "d", "language": null, "description": "Docker configs"}
            ]))
            .into_response(),
            "empty" => Json(json!([])).into_response(),
            "limited" => (
                StatusCode::FORBIDDEN,
                Json(json!({"message": "API rate limit exceeded"})),
            )
                .into_response(),
            "garbled" => (StatusCode::OK, "<html>oops</html>").into_response(),
            "slow" => {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Json(json!([])).into_response()
            }
            _ => (
                StatusCode::NOT_FOUND,
                Json(json!({"message": "Not Found"})),
            )
                .into_response(),
        }
    }

    async fn spawn_fake_github() -> String {
        let app = Router::new().route("/users/:user/repos", get(fake_repos));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client(base: &str) -> GithubClient {
        GithubClient::new(base, Duration::from_millis(500)).unwrap()
    }

    #[test]
    fn test_username_from_plain_profile_url() {
        assert_eq!(
            username_from_url("https://github.com/octocat"),
            Some("octocat".to_string())
        );
    }

    #[test]
    fn test_username_ignores_trailing_slash_query_and_fragment() {
        assert_eq!(
            username_from_url("https://github.com/octo-cat/?tab=repositories#top"),
            Some("octo-cat".to_string())
        );
    }

    #[test]
    fn test_username_from_bare_handle() {
        assert_eq!(username_from_url("  octocat  "), Some("octocat".to_string()));
    }

    #[test]
    fn test_username_rejects_empty_and_odd_segments() {
        assert_eq!(username_from_url(""), None);
        assert_eq!(username_from_url("https://github.com/"), None);
        assert_eq!(username_from_url("https://github.com/a b"), None);
        assert_eq!(username_from_url("https://github.com/.."), None);
    }

    #[test]
    fn test_profile_counts_languages_case_insensitively() {
        let body = json!([
            {"language": "Python"},
            {"language": "PYTHON"},
            {"language": "Go"}
        ]);
        let profile = profile_from_repos(&body).unwrap();
        assert_eq!(
            profile.languages,
            vec![("python".to_string(), 2), ("go".to_string(), 1)]
        );
    }

    #[test]
    fn test_profile_concatenates_lowercased_descriptions() {
        let body = json!([
            {"description": "Kubernetes Operator"},
            {"description": null},
            {"description": "AWS Lambda"}
        ]);
        let profile = profile_from_repos(&body).unwrap();
        assert_eq!(profile.descriptions, " kubernetes operator  aws lambda");
    }

    #[test]
    fn test_profile_rejects_non_array_body() {
        assert_eq!(profile_from_repos(&json!({"message": "Not Found"})), None);
        assert_eq!(profile_from_repos(&json!("text")), None);
    }

    #[test]
    fn test_profile_skips_non_object_elements() {
        let profile = profile_from_repos(&json!([1, "x", {"language": "Java"}])).unwrap();
        assert_eq!(profile.languages, vec![("java".to_string(), 1)]);
    }

    #[tokio::test]
    async fn test_collect_present_profile() {
        let base = spawn_fake_github().await;
        let signal = client(&base).collect("https://github.com/octocat").await;

        let profile = signal.profile().expect("signal should be present");
        assert_eq!(
            profile.languages,
            vec![("python".to_string(), 2), ("rust".to_string(), 1)]
        );
        assert!(profile.descriptions.contains("pandas notebooks"));
        assert!(profile.descriptions.contains("docker configs"));
    }

    #[tokio::test]
    async fn test_collect_existing_user_without_repos_is_present_but_empty() {
        let base = spawn_fake_github().await;
        let signal = client(&base).collect("https://github.com/empty").await;
        assert_eq!(signal, GithubSignal::Present(GithubProfile::default()));
    }

    #[tokio::test]
    async fn test_collect_unknown_user_degrades_to_unavailable() {
        let base = spawn_fake_github().await;
        let signal = client(&base).collect("https://github.com/nobody-here").await;
        assert_eq!(signal, GithubSignal::unavailable("Not Found"));
    }

    #[tokio::test]
    async fn test_collect_rate_limited_degrades_to_unavailable() {
        let base = spawn_fake_github().await;
        let signal = client(&base).collect("https://github.com/limited").await;
        assert_eq!(signal, GithubSignal::unavailable("API rate limit exceeded"));
    }

    #[tokio::test]
    async fn test_collect_malformed_body_degrades_to_unavailable() {
        let base = spawn_fake_github().await;
        let signal = client(&base).collect("https://github.com/garbled").await;
        assert!(signal.profile().is_none());
    }

    #[tokio::test]
    async fn test_collect_times_out_to_unavailable() {
        let base = spawn_fake_github().await;
        let signal = client(&base).collect("https://github.com/slow").await;
        assert!(matches!(signal, GithubSignal::Unavailable { .. }));
    }

    #[tokio::test]
    async fn test_collect_unreachable_host_degrades_to_unavailable() {
        let signal = client("http://127.0.0.1:1").collect("octocat").await;
        assert!(matches!(signal, GithubSignal::Unavailable { .. }));
    }

    #[tokio::test]
    async fn test_collect_without_username_skips_request() {
        let signal = client("http://127.0.0.1:1").collect("").await;
        assert_eq!(
            signal,
            GithubSignal::unavailable("no GitHub username in profile URL")
        );
    }
}
