//! MediaWiki `query`/`extracts` client.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use tracing::{debug, warn};

use super::ReferenceFetcher;
use super::error::{ReferenceError, ReferenceResult};
use super::sections::ArticleSections;
use crate::constants::{DEFAULT_WIKIPEDIA_URL, USER_AGENT};

#[derive(Debug, Deserialize)]
struct QueryResponse {
    query: QueryBody,
}

#[derive(Debug, Deserialize)]
struct QueryBody {
    #[serde(default)]
    pages: HashMap<String, Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    extract: Option<String>,
}

/// Fetches article lead sections from a MediaWiki API endpoint.
#[derive(Debug, Clone)]
pub struct WikipediaFetcher {
    http: HttpClient,
    api_url: String,
}

impl WikipediaFetcher {
    /// Creates a client for `api_url` whose requests fail after `timeout`.
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> ReferenceResult<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            api_url: api_url.into(),
        })
    }

    /// Client for the public English Wikipedia.
    pub fn english(timeout: Duration) -> ReferenceResult<Self> {
        Self::new(DEFAULT_WIKIPEDIA_URL, timeout)
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Full plain-text extract of the article titled exactly `title`.
    pub async fn fetch_extract(&self, title: &str) -> ReferenceResult<String> {
        let resp = self
            .http
            .get(&self.api_url)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("prop", "extracts"),
                ("explaintext", "1"),
                ("titles", title),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            warn!(title, status = %resp.status(), "Reference lookup rejected");
            return Err(ReferenceError::Status {
                status: resp.status().as_u16(),
            });
        }

        let body: QueryResponse = resp
            .json()
            .await
            .map_err(|e| ReferenceError::MalformedResponse {
                reason: e.to_string(),
            })?;

        body.query
            .pages
            .into_values()
            .next()
            .and_then(|page| page.extract)
            .ok_or_else(|| ReferenceError::NotFound {
                title: title.to_string(),
            })
    }
}

#[async_trait]
impl ReferenceFetcher for WikipediaFetcher {
    async fn fetch(&self, title: &str) -> ReferenceResult<String> {
        let extract = self.fetch_extract(title).await?;
        let lead = ArticleSections::parse(&extract).into_lead();

        debug!(
            title,
            extract_len = extract.len(),
            lead_len = lead.len(),
            "Fetched reference article"
        );

        Ok(lead)
    }
}
