use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use interview_logging::{interview_debug, interview_warn};

use crate::client::{ClientSettings, InterviewApi, ReqwestClient};
use crate::{ClientError, EngineEvent, RequestId};

enum EngineCommand {
    FetchQuestions {
        request_id: RequestId,
        url: String,
    },
    Categorize {
        request_id: RequestId,
        user_response: String,
    },
}

/// Sends requests to the background engine. Cheap to clone.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

/// Receiving side for request completions.
pub struct EngineEvents {
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    /// Starts an engine talking to the collaborator described by `settings`.
    pub fn spawn(settings: &ClientSettings) -> Result<(Self, EngineEvents), ClientError> {
        let api = Arc::new(ReqwestClient::new(settings)?);
        Self::spawn_with_api(api)
    }

    /// Starts an engine over any [`InterviewApi`] implementation.
    pub fn spawn_with_api(
        api: Arc<dyn InterviewApi>,
    ) -> Result<(Self, EngineEvents), ClientError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .map_err(|err| ClientError::Engine(err.to_string()))?;

        thread::spawn(move || {
            // Requests run concurrently; completions are reported in the
            // order they resolve and the caller decides which still apply.
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
            interview_debug!("Engine command channel closed");
        });

        Ok((Self { cmd_tx }, EngineEvents { event_rx }))
    }

    pub fn fetch_questions(&self, request_id: RequestId, url: impl Into<String>) {
        self.send(EngineCommand::FetchQuestions {
            request_id,
            url: url.into(),
        });
    }

    pub fn categorize(&self, request_id: RequestId, user_response: impl Into<String>) {
        self.send(EngineCommand::Categorize {
            request_id,
            user_response: user_response.into(),
        });
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            interview_warn!("Engine is not running; request dropped");
        }
    }
}

impl EngineEvents {
    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next completion; `None` once the engine is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    api: &dyn InterviewApi,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::FetchQuestions { request_id, url } => EngineEvent::QuestionsCompleted {
            request_id,
            result: api.generate_questions(&url).await,
        },
        EngineCommand::Categorize {
            request_id,
            user_response,
        } => EngineEvent::CategoryCompleted {
            request_id,
            result: api.categorize(&user_response).await,
        },
    };
    let _ = event_tx.send(event);
}
