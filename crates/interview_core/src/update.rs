use interview_logging::interview_debug;

use crate::{AppState, Effect, Msg, Notice};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlInputChanged(text) => {
            state.set_url(text);
            Vec::new()
        }
        Msg::UrlSubmitted => {
            let url = state.url().trim().to_owned();
            if url.is_empty() {
                return (state, Vec::new());
            }
            let request_id = state.begin_question_request();
            vec![Effect::FetchQuestions { request_id, url }]
        }
        Msg::AnswerSelected {
            question_index,
            option,
        } => {
            // Answers must always index into the current question set.
            if question_index >= state.questions().len() {
                interview_debug!(
                    "Ignoring answer for question {} ({} questions)",
                    question_index,
                    state.questions().len()
                );
                return (state, Vec::new());
            }
            state.record_answer(question_index, option);
            Vec::new()
        }
        Msg::AnswersSubmitted => {
            if state.is_loading() || state.questions().is_empty() {
                return (state, Vec::new());
            }
            let user_response = state.aggregated_response();
            let request_id = state.begin_category_request();
            vec![Effect::Categorize {
                request_id,
                user_response,
            }]
        }
        Msg::QuestionsLoaded { request_id, result } => {
            if !state.is_current_question_request(request_id) {
                interview_debug!("Dropping stale question response {}", request_id);
                return (state, Vec::new());
            }
            match result {
                Ok(questions) => {
                    state.finish_question_request(questions);
                    Vec::new()
                }
                Err(kind) => {
                    interview_debug!("Question request {} failed: {}", request_id, kind);
                    state.finish_question_request(Vec::new());
                    vec![Effect::NotifyFailure {
                        notice: Notice::QuestionsUnavailable,
                    }]
                }
            }
        }
        Msg::CategoryLoaded { request_id, result } => {
            if !state.is_current_category_request(request_id) {
                interview_debug!("Dropping stale category response {}", request_id);
                return (state, Vec::new());
            }
            match result {
                Ok(label) => {
                    let was_unset = !state.has_category();
                    state.finish_category_request(Some(label));
                    if was_unset && state.has_category() {
                        vec![Effect::ScrollToEnd]
                    } else {
                        Vec::new()
                    }
                }
                Err(kind) => {
                    interview_debug!("Category request {} failed: {}", request_id, kind);
                    state.finish_category_request(None);
                    vec![Effect::NotifyFailure {
                        notice: Notice::CategorizationFailed,
                    }]
                }
            }
        }
    };

    (state, effects)
}
