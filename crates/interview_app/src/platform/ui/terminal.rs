use std::io::Write;

use colored::Colorize;
use interview_core::AppViewModel;
use interview_logging::interview_warn;

use super::render;
use crate::platform::presenter::Presenter;

/// Presenter writing the UI to `out` and failure advisories to `err`.
pub struct TerminalPresenter<O: Write, E: Write> {
    out: O,
    err: E,
}

impl<O: Write, E: Write> TerminalPresenter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    fn write_out(&mut self, text: &str) {
        if let Err(err) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            interview_warn!("Failed to write to terminal: {}", err);
        }
    }
}

impl<O: Write, E: Write> Presenter for TerminalPresenter<O, E> {
    fn render(&mut self, view: &AppViewModel) {
        let text = format!("\n{}", render::render(view));
        self.write_out(&text);
    }

    fn notify_failure(&mut self, message: &str) {
        let notice = format!("! {message}").red();
        if let Err(err) = writeln!(self.err, "{notice}").and_then(|_| self.err.flush()) {
            interview_warn!("Failed to write failure notice: {}", err);
        }
    }

    fn scroll_to_end(&mut self) {
        // The category is the last rendered block; flushing keeps it in view.
        self.write_out("\n");
    }
}
