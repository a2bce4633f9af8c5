//! Interview core: pure state machine and view-model helpers.
//!
//! All session state lives in [`AppState`] and only changes through
//! [`update`], which returns the [`Effect`]s the platform layer must run.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, Notice};
pub use msg::{FailureKind, Msg};
pub use state::{AppState, Question, RequestId, ANSWER_SEPARATOR};
pub use update::update;
pub use view_model::{AppViewModel, Phase, QuestionView};
