use std::collections::BTreeMap;

use crate::view_model::{AppViewModel, Phase, QuestionView};

/// Identifies one outbound request; only the latest id of each kind is applied.
pub type RequestId = u64;

/// Separator placed between answer values in the categorization payload.
pub const ANSWER_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
}

/// Session state for one interview. Created empty, mutated only by `update`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    url: String,
    questions: Vec<Question>,
    // Keyed by question index; BTreeMap keeps aggregation in question order.
    answers: BTreeMap<usize, String>,
    category: Option<String>,
    pending_questions: Option<RequestId>,
    pending_category: Option<RequestId>,
    last_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            phase: self.phase(),
            url: self.url.clone(),
            loading: self.is_loading(),
            questions: self
                .questions
                .iter()
                .enumerate()
                .map(|(index, q)| QuestionView {
                    index,
                    question: q.question.clone(),
                    options: q.options.clone(),
                    selected: self.answers.get(&index).cloned(),
                })
                .collect(),
            answered: self.answers.len(),
            category: self.category.clone(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &BTreeMap<usize, String> {
        &self.answers
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// True only while a question-generation request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.pending_questions.is_some()
    }

    pub fn is_categorizing(&self) -> bool {
        self.pending_category.is_some()
    }

    pub fn phase(&self) -> Phase {
        if self.is_loading() {
            Phase::Loading
        } else if self.questions.is_empty() {
            Phase::Idle
        } else if self.is_categorizing() {
            Phase::Categorizing
        } else if self.has_category() {
            Phase::Categorized
        } else {
            Phase::QuestionsReady
        }
    }

    /// Joins the recorded answer values in question-index order.
    pub fn aggregated_response(&self) -> String {
        self.answers
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(ANSWER_SEPARATOR)
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn has_category(&self) -> bool {
        self.category.as_deref().is_some_and(|label| !label.is_empty())
    }

    pub(crate) fn is_current_question_request(&self, request_id: RequestId) -> bool {
        self.pending_questions == Some(request_id)
    }

    pub(crate) fn is_current_category_request(&self, request_id: RequestId) -> bool {
        self.pending_category == Some(request_id)
    }

    pub(crate) fn set_url(&mut self, url: String) {
        if self.url != url {
            self.url = url;
            self.mark_dirty();
        }
    }

    /// Starts a fresh question fetch: everything derived from the previous
    /// URL is dropped, and any outstanding categorization becomes stale.
    pub(crate) fn begin_question_request(&mut self) -> RequestId {
        let request_id = self.next_request_id();
        self.pending_questions = Some(request_id);
        self.pending_category = None;
        self.questions.clear();
        self.answers.clear();
        self.category = None;
        self.mark_dirty();
        request_id
    }

    pub(crate) fn finish_question_request(&mut self, questions: Vec<Question>) {
        self.pending_questions = None;
        self.questions = questions;
        self.answers.clear();
        self.category = None;
        self.mark_dirty();
    }

    pub(crate) fn record_answer(&mut self, question_index: usize, option: String) {
        if self.answers.get(&question_index) != Some(&option) {
            self.answers.insert(question_index, option);
            self.mark_dirty();
        }
    }

    pub(crate) fn begin_category_request(&mut self) -> RequestId {
        let request_id = self.next_request_id();
        self.pending_category = Some(request_id);
        self.mark_dirty();
        request_id
    }

    /// `None` keeps whatever category was shown before the failed request.
    pub(crate) fn finish_category_request(&mut self, category: Option<String>) {
        self.pending_category = None;
        if let Some(label) = category {
            self.category = Some(label);
        }
        self.mark_dirty();
    }

    fn next_request_id(&mut self) -> RequestId {
        self.last_request_id += 1;
        self.last_request_id
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
