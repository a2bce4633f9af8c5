use crate::RequestId;

/// Side effects requested by [`crate::update`]; executed by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the URL to the question-generation endpoint.
    FetchQuestions { request_id: RequestId, url: String },
    /// POST the aggregated answers to the categorization endpoint.
    Categorize {
        request_id: RequestId,
        user_response: String,
    },
    /// Show a user-visible failure advisory.
    NotifyFailure { notice: Notice },
    /// Bring the end of the output into view; emitted once per transition
    /// of the category from unset to a non-empty label.
    ScrollToEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    QuestionsUnavailable,
    CategorizationFailed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::QuestionsUnavailable => {
                "Failed to retrieve questions. Enter a website without captcha verification"
            }
            Notice::CategorizationFailed => "Failed to categorize. Please try again.",
        }
    }
}
