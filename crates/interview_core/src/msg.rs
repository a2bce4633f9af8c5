use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input.
    UrlInputChanged(String),
    /// User submitted the current URL input.
    UrlSubmitted,
    /// User picked an option for the question at `question_index` (0-based).
    AnswerSelected {
        question_index: usize,
        option: String,
    },
    /// User asked for the recorded answers to be categorized.
    AnswersSubmitted,
    /// Completion of a question-generation request.
    QuestionsLoaded {
        request_id: crate::RequestId,
        result: Result<Vec<crate::Question>, FailureKind>,
    },
    /// Completion of a categorization request.
    CategoryLoaded {
        request_id: crate::RequestId,
        result: Result<String, FailureKind>,
    },
}

/// Why a remote request failed. Both kinds collapse into the same advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The collaborator could not be reached.
    Transport,
    /// The collaborator answered with a non-success status or an unreadable body.
    Remote,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Transport => write!(f, "transport failure"),
            FailureKind::Remote => write!(f, "remote failure"),
        }
    }
}
