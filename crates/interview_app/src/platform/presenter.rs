use interview_core::AppViewModel;

/// Output side of the interview UI.
pub trait Presenter {
    /// Redraws the whole view; called only when state changed.
    fn render(&mut self, view: &AppViewModel);

    /// Shows a user-visible failure advisory.
    fn notify_failure(&mut self, message: &str);

    /// Brings the end of the output into view.
    fn scroll_to_end(&mut self);
}
