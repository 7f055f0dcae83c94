//! Remote list fetching with per-resource fallback
//!
//! A `RemoteListFetcher` performs exactly one read of its resource and folds
//! the outcome into a settled `FetchState`. Failures never escape: they end up
//! in `FetchState::error` and are reported to the operator log.

use serde::Serialize;
use tracing::warn;

use super::fallback::FallbackPolicy;
use crate::models::{ExperienceRecord, SiteConfig};
use crate::providers::RemoteListClient;

/// The two timeline resources shown on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    WorkExperience,
    Volunteering,
}

impl Resource {
    /// Lowercase name used in loading/error lines and logs
    pub fn label(&self) -> &'static str {
        match self {
            Resource::WorkExperience => "work experience",
            Resource::Volunteering => "volunteering",
        }
    }

    /// Section heading
    pub fn heading(&self) -> &'static str {
        match self {
            Resource::WorkExperience => "Work Experience",
            Resource::Volunteering => "Volunteering",
        }
    }

    /// Path segment for the JSON API
    pub fn slug(&self) -> &'static str {
        match self {
            Resource::WorkExperience => "work",
            Resource::Volunteering => "volunteering",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "work" => Some(Resource::WorkExperience),
            "volunteering" => Some(Resource::Volunteering),
            _ => None,
        }
    }

    /// Only the primary timeline substitutes embedded data on failure
    pub fn fallback(&self) -> FallbackPolicy {
        match self {
            Resource::WorkExperience => FallbackPolicy::EmbeddedWorkExperience,
            Resource::Volunteering => FallbackPolicy::Empty,
        }
    }

    /// Endpoint for this resource
    pub fn url<'a>(&self, config: &'a SiteConfig) -> &'a str {
        match self {
            Resource::WorkExperience => config.work_experience_url.as_str(),
            Resource::Volunteering => config.volunteering_url.as_str(),
        }
    }
}

/// Per-resource fetch state.
///
/// `error` is only ever set on a settled (`loading == false`) state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchState {
    pub items: Vec<ExperienceRecord>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for FetchState {
    fn default() -> Self {
        Self::pending()
    }
}

impl FetchState {
    /// Initial state: no items, loading
    pub fn pending() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn succeeded(items: Vec<ExperienceRecord>) -> Self {
        Self {
            items,
            loading: false,
            error: None,
        }
    }

    /// Failed fetch; `items` is whatever the fallback policy provides
    pub fn failed(message: impl Into<String>, items: Vec<ExperienceRecord>) -> Self {
        Self {
            items,
            loading: false,
            error: Some(message.into()),
        }
    }

    pub fn is_settled(&self) -> bool {
        !self.loading
    }
}

/// One-shot reader for a single resource
#[derive(Debug, Clone)]
pub struct RemoteListFetcher {
    client: RemoteListClient,
    resource: Resource,
    url: String,
}

impl RemoteListFetcher {
    pub fn new(client: RemoteListClient, resource: Resource, url: impl Into<String>) -> Self {
        Self {
            client,
            resource,
            url: url.into(),
        }
    }

    /// Fetcher for `resource` at the endpoint configured in `config`
    pub fn for_resource(client: RemoteListClient, resource: Resource, config: &SiteConfig) -> Self {
        Self::new(client, resource, resource.url(config))
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    /// Run the single fetch attempt and return the settled state
    pub async fn load(&self) -> FetchState {
        match self.client.fetch_experiences(&self.url).await {
            Ok(items) => FetchState::succeeded(items),
            Err(e) => {
                warn!(
                    resource = self.resource.label(),
                    code = e.code_str(),
                    "⚠️ Failed to fetch {}: {}",
                    self.resource.label(),
                    e.message
                );
                FetchState::failed(e.message, self.resource.fallback().items())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fallback::work_experience;

    #[test]
    fn test_pending_state() {
        let state = FetchState::pending();
        assert!(state.loading);
        assert!(state.items.is_empty());
        assert!(state.error.is_none());
        assert!(!state.is_settled());
    }

    #[test]
    fn test_failed_state_is_settled_with_error() {
        let state = FetchState::failed("Failed to fetch: 500", Vec::new());
        assert!(state.is_settled());
        assert_eq!(state.error.as_deref(), Some("Failed to fetch: 500"));
    }

    #[test]
    fn test_resource_slugs() {
        for resource in [Resource::WorkExperience, Resource::Volunteering] {
            assert_eq!(Resource::from_slug(resource.slug()), Some(resource));
        }
        assert_eq!(Resource::from_slug("education"), None);
    }

    #[test]
    fn test_resource_urls_follow_config() {
        let config = SiteConfig::default().with_endpoints("http://w", "http://v");
        assert_eq!(Resource::WorkExperience.url(&config), "http://w");
        assert_eq!(Resource::Volunteering.url(&config), "http://v");
    }

    #[tokio::test]
    async fn test_unreachable_work_experience_uses_fallback() {
        let fetcher = RemoteListFetcher::new(
            RemoteListClient::new(),
            Resource::WorkExperience,
            "http://127.0.0.1:9/work.json",
        );
        let state = fetcher.load().await;
        assert!(!state.loading);
        assert!(state.error.is_some());
        assert_eq!(state.items, work_experience());
    }

    #[tokio::test]
    async fn test_unreachable_volunteering_stays_empty() {
        let fetcher = RemoteListFetcher::new(
            RemoteListClient::new(),
            Resource::Volunteering,
            "http://127.0.0.1:9/volunteering.json",
        );
        let state = fetcher.load().await;
        assert!(!state.loading);
        assert!(state.error.is_some());
        assert!(state.items.is_empty());
    }
}
