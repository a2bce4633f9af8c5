//! Interactive prompts, run on the input thread.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use interview_core::{AppViewModel, QuestionView};

const SUBMIT_ITEM: &str = "Submit Answers";
const NEW_URL_ITEM: &str = "Enter a new URL";
const QUIT_ITEM: &str = "Quit";

/// What the input thread should ask for next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptContext {
    Url,
    Questions(Vec<QuestionView>),
}

impl PromptContext {
    pub fn from_view(view: &AppViewModel) -> Self {
        if view.questions.is_empty() {
            PromptContext::Url
        } else {
            PromptContext::Questions(view.questions.clone())
        }
    }
}

/// A user decision taken at a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SubmitUrl(String),
    SelectOption {
        question_index: usize,
        option: String,
    },
    SubmitAnswers,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Question(usize),
    SubmitAnswers,
    NewUrl,
    Quit,
}

/// Blocks on the terminal until the user takes an action.
pub fn ask(theme: &ColorfulTheme, context: &PromptContext) -> dialoguer::Result<Action> {
    let questions = match context {
        PromptContext::Url => return ask_url(theme),
        PromptContext::Questions(questions) => questions,
    };

    let items = menu_items(questions);
    loop {
        let picked = Select::with_theme(theme)
            .with_prompt("Questions")
            .items(&items)
            .default(0)
            .interact()?;
        match menu_choice(picked, questions.len()) {
            MenuChoice::Question(index) => {
                let question = &questions[index];
                // A question without options has nothing to pick; show the menu again.
                if question.options.is_empty() {
                    continue;
                }
                return ask_option(theme, question);
            }
            MenuChoice::SubmitAnswers => return Ok(Action::SubmitAnswers),
            MenuChoice::NewUrl => return ask_url(theme),
            MenuChoice::Quit => return Ok(Action::Quit),
        }
    }
}

fn ask_url(theme: &ColorfulTheme) -> dialoguer::Result<Action> {
    let text: String = Input::with_theme(theme)
        .with_prompt("Enter URL you wish to scrape (or `quit`)")
        .interact_text()?;
    Ok(url_action(&text))
}

fn ask_option(theme: &ColorfulTheme, question: &QuestionView) -> dialoguer::Result<Action> {
    let picked = Select::with_theme(theme)
        .with_prompt(&question.question)
        .items(&question.options)
        .default(selected_position(question))
        .interact()?;
    Ok(Action::SelectOption {
        question_index: question.index,
        option: question.options[picked].clone(),
    })
}

fn url_action(text: &str) -> Action {
    let text = text.trim();
    if text.eq_ignore_ascii_case("quit") || text.eq_ignore_ascii_case("exit") {
        Action::Quit
    } else {
        Action::SubmitUrl(text.to_string())
    }
}

fn menu_items(questions: &[QuestionView]) -> Vec<String> {
    let mut items: Vec<String> = questions
        .iter()
        .map(|question| match &question.selected {
            Some(answer) => format!("{}. {} [{answer}]", question.index + 1, question.question),
            None => format!("{}. {}", question.index + 1, question.question),
        })
        .collect();
    items.extend([SUBMIT_ITEM, NEW_URL_ITEM, QUIT_ITEM].map(str::to_string));
    items
}

fn menu_choice(picked: usize, question_count: usize) -> MenuChoice {
    match picked.checked_sub(question_count) {
        None => MenuChoice::Question(picked),
        Some(0) => MenuChoice::SubmitAnswers,
        Some(1) => MenuChoice::NewUrl,
        Some(_) => MenuChoice::Quit,
    }
}

/// Cursor starts on the recorded answer; nothing is recorded until the user picks.
fn selected_position(question: &QuestionView) -> usize {
    question
        .selected
        .as_deref()
        .and_then(|answer| question.options.iter().position(|option| option == answer))
        .unwrap_or(0)
}
