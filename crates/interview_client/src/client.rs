use std::time::Duration;

use interview_logging::{interview_debug, interview_info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::{
    CategorizeRequest, CategoryResponse, ClientError, ErrorBody, GenerateQuestionsRequest,
    GeneratedQuestion, QuestionsResponse,
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

const QUESTIONS_PATH: &str = "generate-questions";
const CATEGORIZE_PATH: &str = "categorize";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    /// `None` leaves the transport default in place.
    pub connect_timeout: Option<Duration>,
    /// `None` leaves the transport default in place.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

/// The two operations offered by the remote collaborator.
#[async_trait::async_trait]
pub trait InterviewApi: Send + Sync {
    async fn generate_questions(&self, url: &str) -> Result<Vec<GeneratedQuestion>, ClientError>;

    async fn categorize(&self, user_response: &str) -> Result<String, ClientError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, ClientError> {
        let base_url = parse_base_url(&settings.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ClientError::Transport(err.to_string()))?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                message: err.to_string(),
            })
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned + Send,
    {
        let endpoint = self.endpoint(path)?;
        interview_debug!("POST {}", endpoint);

        let response = self.client.post(endpoint).json(body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let detail = serde_json::from_slice::<ErrorBody>(&bytes)
                .map(|body| body.error)
                .ok();
            return Err(ClientError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        serde_json::from_slice(&bytes).map_err(|err| ClientError::Decode(err.to_string()))
    }
}

#[async_trait::async_trait]
impl InterviewApi for ReqwestClient {
    async fn generate_questions(&self, url: &str) -> Result<Vec<GeneratedQuestion>, ClientError> {
        let response: QuestionsResponse = self
            .post_json(QUESTIONS_PATH, &GenerateQuestionsRequest { url })
            .await?;
        interview_info!(
            "Received {} questions for url_len={}",
            response.questions.len(),
            url.len()
        );
        Ok(response.questions)
    }

    async fn categorize(&self, user_response: &str) -> Result<String, ClientError> {
        let response: CategoryResponse = self
            .post_json(CATEGORIZE_PATH, &CategorizeRequest { user_response })
            .await?;
        interview_info!("Received category label_len={}", response.category.len());
        Ok(response.category)
    }
}

/// Parses the collaborator address; a trailing slash is added so endpoint
/// paths are appended rather than replacing the last segment.
fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let invalid = |message: String| ClientError::InvalidBaseUrl {
        url: raw.to_string(),
        message,
    };

    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    let url = Url::parse(&with_slash).map_err(|err| invalid(err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_point_at_localhost() {
        let settings = ClientSettings::default();
        assert_eq!(settings.base_url, "http://localhost:5000");
        assert!(settings.request_timeout.is_none());
    }

    #[test]
    fn endpoints_append_to_base_path() {
        let client = ReqwestClient::new(&ClientSettings {
            base_url: "http://api.example.com/v1".to_string(),
            ..ClientSettings::default()
        })
        .unwrap();

        assert_eq!(
            client.endpoint(QUESTIONS_PATH).unwrap().as_str(),
            "http://api.example.com/v1/generate-questions"
        );
        assert_eq!(
            client.endpoint(CATEGORIZE_PATH).unwrap().as_str(),
            "http://api.example.com/v1/categorize"
        );
    }

    #[test]
    fn rejects_non_http_base_url() {
        let err = parse_base_url("ftp://example.com").unwrap_err();
        assert!(matches!(err, ClientError::InvalidBaseUrl { .. }));

        let err = parse_base_url("not a url").unwrap_err();
        assert!(matches!(err, ClientError::InvalidBaseUrl { .. }));
    }
}
