use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::QualityEvaluator;
use super::error::{QualityError, QualityResult};

/// Fixed-rating [`QualityEvaluator`] with switchable failures.
#[derive(Debug)]
pub struct MockQualityEvaluator {
    question_rating: f64,
    answer_rating: f64,
    uniqueness_rating: f64,
    fail_questions: bool,
    fail_answers_after: Option<usize>,
    fail_uniqueness: bool,
    question_calls: AtomicUsize,
    answer_calls: AtomicUsize,
    uniqueness_calls: AtomicUsize,
}

impl Default for MockQualityEvaluator {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

impl MockQualityEvaluator {
    pub fn new(question_rating: f64, answer_rating: f64, uniqueness_rating: f64) -> Self {
        Self {
            question_rating,
            answer_rating,
            uniqueness_rating,
            fail_questions: false,
            fail_answers_after: None,
            fail_uniqueness: false,
            question_calls: AtomicUsize::new(0),
            answer_calls: AtomicUsize::new(0),
            uniqueness_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_questions(mut self) -> Self {
        self.fail_questions = true;
        self
    }

    /// Answers succeed `successes` times, then every call fails.
    pub fn failing_answers_after(mut self, successes: usize) -> Self {
        self.fail_answers_after = Some(successes);
        self
    }

    pub fn failing_uniqueness(mut self) -> Self {
        self.fail_uniqueness = true;
        self
    }

    pub fn question_calls(&self) -> usize {
        self.question_calls.load(Ordering::SeqCst)
    }

    pub fn answer_calls(&self) -> usize {
        self.answer_calls.load(Ordering::SeqCst)
    }

    pub fn uniqueness_calls(&self) -> usize {
        self.uniqueness_calls.load(Ordering::SeqCst)
    }

    fn unavailable(endpoint: &'static str) -> QualityError {
        QualityError::Status {
            endpoint,
            status: 500,
        }
    }
}

#[async_trait]
impl QualityEvaluator for MockQualityEvaluator {
    async fn evaluate_question(&self, _question: &str, _context: &str) -> QualityResult<f64> {
        self.question_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_questions {
            return Err(Self::unavailable("validator/evaluate-question"));
        }
        Ok(self.question_rating)
    }

    async fn evaluate_answer(
        &self,
        _question: &str,
        _answer: &str,
        _context: &str,
    ) -> QualityResult<f64> {
        let previous = self.answer_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_answers_after.is_some_and(|limit| previous >= limit) {
            return Err(Self::unavailable("validator/evaluate-answer"));
        }
        Ok(self.answer_rating)
    }

    async fn uniqueness(&self, _topics: &[String]) -> QualityResult<f64> {
        self.uniqueness_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_uniqueness {
            return Err(Self::unavailable("validator/uniqueness"));
        }
        Ok(self.uniqueness_rating)
    }
}
