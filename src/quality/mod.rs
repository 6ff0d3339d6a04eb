//! Question, answer and topic-diversity ratings.
//!
//! [`QualityEvaluator`] abstracts the external rating service so the
//! verification engine can be driven by deterministic stand-ins in tests.

pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod sixgpt;


use async_trait::async_trait;

pub use error::{QualityError, QualityResult};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockQualityEvaluator;
pub use sixgpt::SixgptEvaluator;

#[async_trait]
/// Rates questions, answers and the diversity of a topic set.
pub trait QualityEvaluator: Send + Sync {
    /// Rates how well `question` is posed against `context`.
    async fn evaluate_question(&self, question: &str, context: &str) -> QualityResult<f64>;

    /// Rates how well `answer` answers `question` given `context`.
    async fn evaluate_answer(
        &self,
        question: &str,
        answer: &str,
        context: &str,
    ) -> QualityResult<f64>;

    /// Rates how diverse the given topics are.
    async fn uniqueness(&self, topics: &[String]) -> QualityResult<f64>;
}
