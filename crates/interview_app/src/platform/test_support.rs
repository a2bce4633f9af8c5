//! Test doubles shared by the controller and run-loop tests.

use std::sync::mpsc;
use std::time::Duration;

use interview_client::{ClientError, EngineEvents, EngineHandle, GeneratedQuestion, InterviewApi};
use interview_core::{AppViewModel, Msg};

use super::controller::InterviewController;
use super::effects::EffectRunner;
use super::presenter::Presenter;

pub const WAIT: Duration = Duration::from_secs(5);

#[derive(Default)]
pub struct RecordingPresenter {
    pub renders: Vec<AppViewModel>,
    pub failures: Vec<String>,
    pub scrolls: usize,
}

impl Presenter for RecordingPresenter {
    fn render(&mut self, view: &AppViewModel) {
        self.renders.push(view.clone());
    }

    fn notify_failure(&mut self, message: &str) {
        self.failures.push(message.to_string());
    }

    fn scroll_to_end(&mut self) {
        self.scrolls += 1;
    }
}

/// Returns a fixed question set and upper-cases whatever is categorized.
pub struct FixedApi {
    pub questions: Vec<GeneratedQuestion>,
}

#[async_trait::async_trait]
impl InterviewApi for FixedApi {
    async fn generate_questions(&self, _url: &str) -> Result<Vec<GeneratedQuestion>, ClientError> {
        Ok(self.questions.clone())
    }

    async fn categorize(&self, user_response: &str) -> Result<String, ClientError> {
        Ok(user_response.to_uppercase())
    }
}

/// Never reaches the collaborator.
pub struct FailingApi;

#[async_trait::async_trait]
impl InterviewApi for FailingApi {
    async fn generate_questions(&self, _url: &str) -> Result<Vec<GeneratedQuestion>, ClientError> {
        Err(ClientError::Transport("connection refused".to_string()))
    }

    async fn categorize(&self, _user_response: &str) -> Result<String, ClientError> {
        Err(ClientError::Transport("connection refused".to_string()))
    }
}

pub fn yes_no(text: &str) -> GeneratedQuestion {
    GeneratedQuestion {
        question: text.to_string(),
        options: vec!["Yes".to_string(), "No".to_string()],
    }
}

pub fn controller_over(
    engine: (EngineHandle, EngineEvents),
) -> (InterviewController<RecordingPresenter>, mpsc::Receiver<Msg>) {
    let (engine, events) = engine;
    let (msg_tx, msg_rx) = mpsc::channel();
    let runner = EffectRunner::new(engine);
    runner.spawn_event_loop(events, msg_tx);
    (
        InterviewController::new(runner, RecordingPresenter::default()),
        msg_rx,
    )
}

/// Feeds one engine completion back into the controller.
pub fn pump(controller: &mut InterviewController<RecordingPresenter>, rx: &mpsc::Receiver<Msg>) {
    let msg = rx.recv_timeout(WAIT).expect("engine completion");
    controller.dispatch(msg);
}
