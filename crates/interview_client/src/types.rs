use serde::{Deserialize, Serialize};

use crate::ClientError;

pub type RequestId = u64;

/// Body of `POST /generate-questions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateQuestionsRequest<'a> {
    pub url: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionsResponse {
    pub questions: Vec<GeneratedQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQuestion {
    pub question: String,
    pub options: Vec<String>,
}

/// Body of `POST /categorize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorizeRequest<'a> {
    pub user_response: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryResponse {
    pub category: String,
}

/// Error payload the collaborator attaches to failed responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    QuestionsCompleted {
        request_id: RequestId,
        result: Result<Vec<GeneratedQuestion>, ClientError>,
    },
    CategoryCompleted {
        request_id: RequestId,
        result: Result<String, ClientError>,
    },
}
