use interview_core::{update, AppState, AppViewModel, Msg};

use super::effects::EffectRunner;
use super::presenter::Presenter;

/// Owns the session state and routes messages through `update`, rendering
/// when the state changed and handing effects to the runner.
pub struct InterviewController<P: Presenter> {
    state: AppState,
    runner: EffectRunner,
    presenter: P,
}

impl<P: Presenter> InterviewController<P> {
    pub fn new(runner: EffectRunner, presenter: P) -> Self {
        Self {
            state: AppState::new(),
            runner,
            presenter,
        }
    }

    /// Draws the initial, empty session.
    pub fn start(&mut self) {
        let view = self.state.view();
        self.presenter.render(&view);
    }

    pub fn submit_url(&mut self, url: &str) {
        self.dispatch_all([Msg::UrlInputChanged(url.to_string()), Msg::UrlSubmitted]);
    }

    pub fn record_answer(&mut self, question_index: usize, option: &str) {
        self.dispatch(Msg::AnswerSelected {
            question_index,
            option: option.to_string(),
        });
    }

    pub fn submit_answers(&mut self) {
        self.dispatch(Msg::AnswersSubmitted);
    }

    pub fn dispatch(&mut self, msg: Msg) {
        self.dispatch_all([msg]);
    }

    /// Applies several messages and renders at most once.
    pub fn dispatch_all(&mut self, msgs: impl IntoIterator<Item = Msg>) {
        let mut effects = Vec::new();
        for msg in msgs {
            let state = std::mem::take(&mut self.state);
            let (state, mut produced) = update(state, msg);
            self.state = state;
            effects.append(&mut produced);
        }

        if self.state.consume_dirty() {
            let view = self.state.view();
            self.presenter.render(&view);
        }
        self.runner.run(effects, &mut self.presenter);
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    /// True while a question or categorize request has not settled.
    pub fn has_pending_request(&self) -> bool {
        self.state.is_loading() || self.state.is_categorizing()
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}
