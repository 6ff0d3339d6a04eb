//! HTTP client for the SixGPT validator endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::QualityEvaluator;
use super::error::{QualityError, QualityResult};
use crate::constants::DEFAULT_SIXGPT_URL;

const EVALUATE_QUESTION: &str = "validator/evaluate-question";
const EVALUATE_ANSWER: &str = "validator/evaluate-answer";
const UNIQUENESS: &str = "validator/uniqueness";

const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, Serialize)]
struct QuestionRequest<'a> {
    question: &'a str,
    context: &'a str,
}

#[derive(Debug, Serialize)]
struct AnswerRequest<'a> {
    question: &'a str,
    answer: &'a str,
    context: &'a str,
}

#[derive(Debug, Serialize)]
struct UniquenessRequest<'a> {
    task: &'static str,
    contexts: &'a [String],
}

#[derive(Debug, Deserialize)]
struct RatingResponse {
    rating: f64,
}

/// [`QualityEvaluator`] backed by the rating service.
#[derive(Debug, Clone)]
pub struct SixgptEvaluator {
    http: HttpClient,
    base_url: String,
    api_key: Option<String>,
}

impl SixgptEvaluator {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> QualityResult<Self> {
        let http = HttpClient::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    pub fn with_default_url(api_key: Option<String>, timeout: Duration) -> QualityResult<Self> {
        Self::new(DEFAULT_SIXGPT_URL, api_key, timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn rate<B: Serialize + ?Sized>(
        &self,
        endpoint: &'static str,
        body: &B,
    ) -> QualityResult<f64> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let mut req = self.http.post(url).json(body);
        if let Some(key) = &self.api_key {
            req = req.header(API_KEY_HEADER, key);
        }

        let resp = req.send().await?;
        if !resp.status().is_success() {
            warn!(endpoint, status = %resp.status(), "Rating request rejected");
            return Err(QualityError::Status {
                endpoint,
                status: resp.status().as_u16(),
            });
        }

        let body: RatingResponse = resp
            .json()
            .await
            .map_err(|e| QualityError::MalformedResponse {
                endpoint,
                reason: e.to_string(),
            })?;

        if !body.rating.is_finite() {
            return Err(QualityError::MalformedResponse {
                endpoint,
                reason: format!("non-finite rating {}", body.rating),
            });
        }

        debug!(endpoint, rating = body.rating, "Received rating");
        Ok(body.rating)
    }
}

#[async_trait]
impl QualityEvaluator for SixgptEvaluator {
    async fn evaluate_question(&self, question: &str, context: &str) -> QualityResult<f64> {
        self.rate(EVALUATE_QUESTION, &QuestionRequest { question, context })
            .await
    }

    async fn evaluate_answer(
        &self,
        question: &str,
        answer: &str,
        context: &str,
    ) -> QualityResult<f64> {
        self.rate(
            EVALUATE_ANSWER,
            &AnswerRequest {
                question,
                answer,
                context,
            },
        )
        .await
    }

    async fn uniqueness(&self, topics: &[String]) -> QualityResult<f64> {
        self.rate(
            UNIQUENESS,
            &UniquenessRequest {
                task: "uniqueness",
                contexts: topics,
            },
        )
        .await
    }
}
