use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::ReferenceFetcher;
use super::error::{ReferenceError, ReferenceResult};

#[derive(Debug, Clone)]
enum CannedReference {
    Text(String),
    NotFound,
    Unavailable(u16),
}

/// In-memory [`ReferenceFetcher`] with per-title canned answers.
///
/// Titles without a canned answer get the default text, or `NotFound` when no
/// default is set. Every call is recorded.
#[derive(Debug, Default)]
pub struct MockReferenceFetcher {
    articles: HashMap<String, CannedReference>,
    default_text: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl MockReferenceFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers every unknown title with `text`.
    pub fn with_default_text(mut self, text: impl Into<String>) -> Self {
        self.default_text = Some(text.into());
        self
    }

    pub fn with_article(mut self, title: impl Into<String>, text: impl Into<String>) -> Self {
        self.articles
            .insert(title.into(), CannedReference::Text(text.into()));
        self
    }

    pub fn with_missing(mut self, title: impl Into<String>) -> Self {
        self.articles.insert(title.into(), CannedReference::NotFound);
        self
    }

    /// Makes `title` fail as if the service answered with `status`.
    pub fn with_unavailable(mut self, title: impl Into<String>, status: u16) -> Self {
        self.articles
            .insert(title.into(), CannedReference::Unavailable(status));
        self
    }

    /// Titles requested so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }
}

#[async_trait]
impl ReferenceFetcher for MockReferenceFetcher {
    async fn fetch(&self, title: &str) -> ReferenceResult<String> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(title.to_string());
        }

        let canned = self
            .articles
            .get(title)
            .cloned()
            .or_else(|| self.default_text.clone().map(CannedReference::Text));

        match canned {
            Some(CannedReference::Text(text)) => Ok(text),
            Some(CannedReference::Unavailable(status)) => Err(ReferenceError::Status { status }),
            Some(CannedReference::NotFound) | None => Err(ReferenceError::NotFound {
                title: title.to_string(),
            }),
        }
    }
}
