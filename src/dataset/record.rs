use serde::{Deserialize, Serialize};

/// Reference context a record claims its question/answer pair was drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordContext {
    /// Passage the question is grounded in.
    pub content: String,
    /// Encyclopedia article title the passage was taken from.
    pub title: String,
}

/// One submitted question/answer/context example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The question.
    pub input: String,
    /// The answer.
    pub output: String,
    /// Free-form task label.
    pub task: String,
    pub context: RecordContext,
}

impl Record {
    pub fn new(
        input: impl Into<String>,
        output: impl Into<String>,
        task: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            task: task.into(),
            context: RecordContext {
                content: content.into(),
                title: title.into(),
            },
        }
    }

    /// Article title used to fetch the reference document.
    pub fn title(&self) -> &str {
        &self.context.title
    }
}
