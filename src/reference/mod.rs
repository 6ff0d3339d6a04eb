//! Reference documents the submitted contexts are checked against.
//!
//! [`ReferenceFetcher`] is the seam between the verification engine and the
//! encyclopedia. [`WikipediaFetcher`] is the production implementation; a
//! title that resolves to no article is reported as
//! [`ReferenceError::NotFound`] rather than as placeholder text, so the
//! engine aborts on it like any other fetch failure.

pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod sections;
pub mod wikipedia;


use async_trait::async_trait;

pub use error::{ReferenceError, ReferenceResult};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockReferenceFetcher;
pub use sections::ArticleSections;
pub use wikipedia::WikipediaFetcher;

#[async_trait]
/// Source of reference text for an article title.
pub trait ReferenceFetcher: Send + Sync {
    /// Returns the lead section of the article titled exactly `title`.
    async fn fetch(&self, title: &str) -> ReferenceResult<String>;
}
