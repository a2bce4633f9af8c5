/// Coarse interaction state derived from [`crate::AppState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    QuestionsReady,
    Categorizing,
    Categorized,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: Phase,
    pub url: String,
    pub loading: bool,
    pub questions: Vec<QuestionView>,
    pub answered: usize,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub index: usize,
    pub question: String,
    pub options: Vec<String>,
    pub selected: Option<String>,
}
