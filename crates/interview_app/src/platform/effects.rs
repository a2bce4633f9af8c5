use std::sync::mpsc;
use std::thread;

use interview_client::{ClientError, EngineEvent, EngineEvents, EngineHandle, GeneratedQuestion};
use interview_core::{Effect, FailureKind, Msg, Question};
use interview_logging::{interview_debug, interview_info, interview_warn};

use super::presenter::Presenter;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>, presenter: &mut dyn Presenter) {
        for effect in effects {
            match effect {
                Effect::FetchQuestions { request_id, url } => {
                    interview_info!(
                        "FetchQuestions request_id={} url_len={} url={}",
                        request_id,
                        url.len(),
                        url
                    );
                    self.engine.fetch_questions(request_id, url);
                }
                Effect::Categorize {
                    request_id,
                    user_response,
                } => {
                    interview_info!(
                        "Categorize request_id={} response_len={}",
                        request_id,
                        user_response.len()
                    );
                    self.engine.categorize(request_id, user_response);
                }
                Effect::NotifyFailure { notice } => {
                    presenter.notify_failure(notice.message());
                }
                Effect::ScrollToEnd => {
                    interview_debug!("Scrolling to category");
                    presenter.scroll_to_end();
                }
            }
        }
    }

    /// Forwards engine completions into the UI loop as [`Msg`]s until either
    /// side of the channel goes away.
    pub fn spawn_event_loop<T>(&self, events: EngineEvents, msg_tx: mpsc::Sender<T>)
    where
        T: From<Msg> + Send + 'static,
    {
        thread::spawn(move || {
            while let Some(event) = events.recv() {
                if msg_tx.send(T::from(map_event(event))).is_err() {
                    break;
                }
            }
        });
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::QuestionsCompleted { request_id, result } => Msg::QuestionsLoaded {
            request_id,
            result: result
                .map(|questions| questions.into_iter().map(map_question).collect())
                .map_err(|err| {
                    interview_warn!("Question request {} failed: {}", request_id, err);
                    failure_kind(&err)
                }),
        },
        EngineEvent::CategoryCompleted { request_id, result } => Msg::CategoryLoaded {
            request_id,
            result: result.map_err(|err| {
                interview_warn!("Category request {} failed: {}", request_id, err);
                failure_kind(&err)
            }),
        },
    }
}

fn map_question(question: GeneratedQuestion) -> Question {
    Question {
        question: question.question,
        options: question.options,
    }
}

fn failure_kind(err: &ClientError) -> FailureKind {
    if err.is_transport() {
        FailureKind::Transport
    } else {
        FailureKind::Remote
    }
}
