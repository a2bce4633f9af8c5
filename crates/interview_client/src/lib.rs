//! Interview client: HTTP access to the remote collaborator and a background
//! engine that runs requests off the UI thread.
mod client;
mod engine;
mod error;
mod types;

pub use client::{ClientSettings, InterviewApi, ReqwestClient, DEFAULT_BASE_URL};
pub use engine::{EngineEvents, EngineHandle};
pub use error::ClientError;
pub use types::{
    CategorizeRequest, CategoryResponse, EngineEvent, ErrorBody, GenerateQuestionsRequest,
    GeneratedQuestion, QuestionsResponse, RequestId,
};
