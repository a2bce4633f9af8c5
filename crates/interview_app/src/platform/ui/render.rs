use std::fmt::Write;

use interview_core::{AppViewModel, Phase, QuestionView};

pub const TITLE: &str = "Visitor Web Scraper";

/// Renders the full view as terminal text.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {TITLE} ==");
    if !view.url.is_empty() {
        let _ = writeln!(out, "URL: {}", view.url);
    }

    if view.loading {
        let _ = writeln!(out, "Loading questions...");
    }

    if !view.questions.is_empty() {
        let _ = writeln!(out, "\nQuestions");
        for question in &view.questions {
            render_question(&mut out, question);
        }
        let _ = writeln!(
            out,
            "\nAnswered {}/{}. Choose `Submit Answers` when ready.",
            view.answered,
            view.questions.len()
        );
    }

    if view.phase == Phase::Categorizing {
        let _ = writeln!(out, "Categorizing...");
    }

    if let Some(category) = view.category.as_deref().filter(|c| !c.is_empty()) {
        let _ = writeln!(out, "\nYour Category\n  {category}");
    }

    if view.phase == Phase::Idle && !view.loading {
        let _ = writeln!(out, "Enter a URL to generate questions.");
    }
    out
}

fn render_question(out: &mut String, question: &QuestionView) {
    let _ = writeln!(out, "{}. {}", question.index + 1, question.question);
    for (i, option) in question.options.iter().enumerate() {
        let mark = if question.selected.as_deref() == Some(option.as_str()) {
            'x'
        } else {
            ' '
        };
        let _ = writeln!(out, "   [{mark}] {}) {option}", i + 1);
    }
}
