//! Project detail panel state
//!
//! The panel moves between a small set of states driven by events. Each
//! fetch is tagged with the identifier it was issued for; a completion whose
//! tag no longer matches the identifier being loaded is dropped, so opening
//! a second project before the first arrives never shows stale content.

use crate::content::{DetailSource, MarkdownRenderer, Project};
use crate::error::DetailError;

/// What the detail panel currently shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailState {
    #[default]
    Idle,
    Loading {
        slug: String,
    },
    Loaded {
        slug: String,
        html: String,
    },
    NotFound {
        slug: String,
    },
    Error {
        slug: String,
        reason: String,
    },
}

/// Inputs to the panel state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailEvent {
    RequestStart { slug: String },
    RequestSuccess { slug: String, html: String },
    RequestNotFound { slug: String },
    RequestFailure { slug: String, reason: String },
    Close,
}

impl DetailEvent {
    /// Identifier the event refers to, `None` for `Close`
    pub fn slug(&self) -> Option<&str> {
        match self {
            DetailEvent::RequestStart { slug }
            | DetailEvent::RequestSuccess { slug, .. }
            | DetailEvent::RequestNotFound { slug }
            | DetailEvent::RequestFailure { slug, .. } => Some(slug),
            DetailEvent::Close => None,
        }
    }
}

impl DetailState {
    /// Identifier the panel is showing or loading
    pub fn active_slug(&self) -> Option<&str> {
        match self {
            DetailState::Idle => None,
            DetailState::Loading { slug }
            | DetailState::Loaded { slug, .. }
            | DetailState::NotFound { slug }
            | DetailState::Error { slug, .. } => Some(slug),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DetailState::Loading { .. })
    }

    /// Apply one event
    ///
    /// Completions are only accepted while loading the same identifier;
    /// anything else leaves the state untouched.
    pub fn apply(self, event: DetailEvent) -> DetailState {
        match (self, event) {
            (_, DetailEvent::Close) => DetailState::Idle,
            (_, DetailEvent::RequestStart { slug }) => DetailState::Loading { slug },
            (DetailState::Loading { slug: active }, DetailEvent::RequestSuccess { slug, html })
                if active == slug =>
            {
                DetailState::Loaded { slug, html }
            }
            (DetailState::Loading { slug: active }, DetailEvent::RequestNotFound { slug })
                if active == slug =>
            {
                DetailState::NotFound { slug }
            }
            (
                DetailState::Loading { slug: active },
                DetailEvent::RequestFailure { slug, reason },
            ) if active == slug => DetailState::Error { slug, reason },
            (state, event) => {
                tracing::debug!(
                    "Discarding stale detail result for {:?} (active: {:?})",
                    event.slug(),
                    state.active_slug()
                );
                state
            }
        }
    }
}

/// A pending fetch, tagged with the identifier it was issued for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    slug: String,
}

impl DetailRequest {
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Fetch and render the document, producing the completion event
    pub async fn run(&self, source: &dyn DetailSource, renderer: &MarkdownRenderer) -> DetailEvent {
        self.completion(source.fetch(&self.slug).await, renderer)
    }

    /// Turn a fetch result obtained elsewhere into this request's completion
    pub fn completion(
        &self,
        result: Result<String, DetailError>,
        renderer: &MarkdownRenderer,
    ) -> DetailEvent {
        let slug = self.slug.clone();
        match result {
            Ok(markdown) => DetailEvent::RequestSuccess {
                slug,
                html: renderer.render(&markdown),
            },
            Err(DetailError::NotFound(_)) => DetailEvent::RequestNotFound { slug },
            Err(e) => {
                tracing::error!("Error fetching project details: {}", e);
                DetailEvent::RequestFailure {
                    slug,
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// The detail panel: current state plus the request guard
#[derive(Debug, Default)]
pub struct DetailPanel {
    state: DetailState,
}

impl DetailPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    fn dispatch(&mut self, event: DetailEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(event);
    }

    /// Start loading `slug`, superseding whatever was pending
    pub fn begin(&mut self, slug: &str) -> DetailRequest {
        self.dispatch(DetailEvent::RequestStart {
            slug: slug.to_string(),
        });
        DetailRequest {
            slug: slug.to_string(),
        }
    }

    /// Open the panel for a project
    ///
    /// Projects without a detail document need no fetch; the panel is left
    /// idle and `None` is returned.
    pub fn open(&mut self, project: &Project) -> Option<DetailRequest> {
        match project.detail_slug() {
            Some(slug) => Some(self.begin(slug)),
            None => {
                self.dispatch(DetailEvent::Close);
                None
            }
        }
    }

    /// Re-issue the request for a panel in the error state
    pub fn retry(&mut self) -> Option<DetailRequest> {
        match &self.state {
            DetailState::Error { slug, .. } => {
                let slug = slug.clone();
                Some(self.begin(&slug))
            }
            _ => None,
        }
    }

    /// Apply a completion; returns whether it was accepted
    pub fn complete(&mut self, event: DetailEvent) -> bool {
        let before = self.state.clone();
        self.dispatch(event);
        self.state != before
    }

    pub fn close(&mut self) {
        self.dispatch(DetailEvent::Close);
    }

    /// Begin, fetch and complete in one go
    pub async fn load(
        &mut self,
        slug: &str,
        source: &dyn DetailSource,
        renderer: &MarkdownRenderer,
    ) -> &DetailState {
        let request = self.begin(slug);
        let event = request.run(source, renderer).await;
        self.complete(event);
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CONVERSION_FAILED_PLACEHOLDER, NO_CONTENT_PLACEHOLDER};
    use async_trait::async_trait;
    use std::collections::HashMap;

    /// In-memory source; slugs mapped to `None` fail with a transport error
    struct MockSource {
        docs: HashMap<String, Option<String>>,
    }

    impl MockSource {
        fn new(docs: &[(&str, Option<&str>)]) -> Self {
            Self {
                docs: docs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl DetailSource for MockSource {
        async fn fetch(&self, slug: &str) -> Result<String, DetailError> {
            match self.docs.get(slug) {
                Some(Some(doc)) => Ok(doc.clone()),
                Some(None) => Err(DetailError::Transport("connection reset".to_string())),
                None => Err(DetailError::NotFound(slug.to_string())),
            }
        }
    }

    fn project(detail_file: Option<&str>) -> Project {
        Project {
            title: "Secure API".to_string(),
            description: "A hardened REST API".to_string(),
            tags: vec![],
            github_url: None,
            live_url: None,
            detail_file: detail_file.map(str::to_string),
        }
    }

    #[test]
    fn test_transitions() {
        let state = DetailState::Idle.apply(DetailEvent::RequestStart { slug: "a".into() });
        assert_eq!(state, DetailState::Loading { slug: "a".into() });

        let state = state.apply(DetailEvent::RequestSuccess {
            slug: "a".into(),
            html: "<p>x</p>".into(),
        });
        assert_eq!(
            state,
            DetailState::Loaded {
                slug: "a".into(),
                html: "<p>x</p>".into()
            }
        );

        assert_eq!(state.apply(DetailEvent::Close), DetailState::Idle);
    }

    #[test]
    fn test_not_found_and_failure_transitions() {
        let loading = DetailState::Loading { slug: "a".into() };
        assert_eq!(
            loading
                .clone()
                .apply(DetailEvent::RequestNotFound { slug: "a".into() }),
            DetailState::NotFound { slug: "a".into() }
        );
        assert_eq!(
            loading.apply(DetailEvent::RequestFailure {
                slug: "a".into(),
                reason: "timeout".into()
            }),
            DetailState::Error {
                slug: "a".into(),
                reason: "timeout".into()
            }
        );
    }

    #[test]
    fn test_completion_without_pending_request_is_ignored() {
        let state = DetailState::Idle.apply(DetailEvent::RequestSuccess {
            slug: "a".into(),
            html: "<p>x</p>".into(),
        });
        assert_eq!(state, DetailState::Idle);
    }

    #[test]
    fn test_superseded_result_is_discarded() {
        let mut panel = DetailPanel::new();
        let first = panel.begin("first");
        let second = panel.begin("second");
        assert_eq!(first.slug(), "first");
        assert_eq!(second.slug(), "second");

        // The second request resolves first, then the stale one arrives
        assert!(panel.complete(DetailEvent::RequestSuccess {
            slug: "second".into(),
            html: "<p>second</p>".into(),
        }));
        assert!(!panel.complete(DetailEvent::RequestSuccess {
            slug: "first".into(),
            html: "<p>first</p>".into(),
        }));

        assert_eq!(
            panel.state(),
            &DetailState::Loaded {
                slug: "second".into(),
                html: "<p>second</p>".into()
            }
        );
    }

    #[test]
    fn test_stale_result_while_still_loading_is_discarded() {
        let mut panel = DetailPanel::new();
        panel.begin("first");
        panel.begin("second");
        assert!(!panel.complete(DetailEvent::RequestFailure {
            slug: "first".into(),
            reason: "late".into(),
        }));
        assert_eq!(panel.state(), &DetailState::Loading { slug: "second".into() });
    }

    #[test]
    fn test_result_after_close_is_discarded() {
        let mut panel = DetailPanel::new();
        panel.begin("a");
        panel.close();
        assert!(!panel.complete(DetailEvent::RequestNotFound { slug: "a".into() }));
        assert_eq!(panel.state(), &DetailState::Idle);
    }

    #[tokio::test]
    async fn test_load_renders_markdown() {
        let source = MockSource::new(&[("secure-api", Some("# Secure API\n\nUses **TLS**"))]);
        let mut panel = DetailPanel::new();
        let state = panel
            .load("secure-api", &source, &MarkdownRenderer::new())
            .await;
        match state {
            DetailState::Loaded { slug, html } => {
                assert_eq!(slug, "secure-api");
                assert!(html.contains("<h1>Secure API</h1>"));
                assert!(html.contains("<strong>TLS</strong>"));
            }
            other => panic!("unexpected state: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_document_is_not_found_state() {
        let source = MockSource::new(&[]);
        let mut panel = DetailPanel::new();
        let state = panel.load("ghost", &source, &MarkdownRenderer::new()).await;
        assert_eq!(state, &DetailState::NotFound { slug: "ghost".into() });
    }

    #[tokio::test]
    async fn test_transport_failure_is_error_state_and_retryable() {
        let source = MockSource::new(&[("flaky", None)]);
        let renderer = MarkdownRenderer::new();
        let mut panel = DetailPanel::new();
        panel.load("flaky", &source, &renderer).await;
        assert!(matches!(panel.state(), DetailState::Error { slug, .. } if slug == "flaky"));

        let retry = panel.retry().unwrap();
        assert_eq!(retry.slug(), "flaky");
        assert!(panel.state().is_loading());
    }

    #[tokio::test]
    async fn test_placeholders_flow_through_loaded_state() {
        let source = MockSource::new(&[("empty", Some("  ")), ("blank-code", Some("```\n```"))]);
        let renderer = MarkdownRenderer::new();
        let mut panel = DetailPanel::new();

        let state = panel.load("empty", &source, &renderer).await.clone();
        assert!(matches!(state, DetailState::Loaded { html, .. } if html == NO_CONTENT_PLACEHOLDER));

        let state = panel.load("blank-code", &source, &renderer).await.clone();
        assert!(
            matches!(state, DetailState::Loaded { html, .. } if html == CONVERSION_FAILED_PLACEHOLDER)
        );
    }

    #[test]
    fn test_open_project_without_detail() {
        let mut panel = DetailPanel::new();
        panel.begin("other");
        assert!(panel.open(&project(None)).is_none());
        assert_eq!(panel.state(), &DetailState::Idle);

        let request = panel.open(&project(Some("secure-api.md"))).unwrap();
        assert_eq!(request.slug(), "secure-api");
        assert!(panel.retry().is_none());
    }
}
