use std::io;
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use clap::Parser;
use dialoguer::theme::ColorfulTheme;
use interview_client::EngineHandle;
use interview_core::Msg;
use interview_logging::{interview_debug, interview_info};

use super::config::AppConfig;
use super::controller::InterviewController;
use super::effects::EffectRunner;
use super::logging;
use super::presenter::Presenter;
use super::ui::prompt::{self, Action, PromptContext};
use super::ui::terminal::TerminalPresenter;

/// Everything the UI loop reacts to, from the prompter or the engine.
enum LoopEvent {
    Core(Msg),
    Action(Action),
    InputClosed,
}

impl From<Msg> for LoopEvent {
    fn from(msg: Msg) -> Self {
        LoopEvent::Core(msg)
    }
}

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::parse();
    logging::initialize(config.log, &config.log_file, config.log_level);
    interview_info!("Starting interview client against {}", config.server_url);

    let (engine, events) = EngineHandle::spawn(&config.client_settings())
        .with_context(|| format!("failed to start client for {}", config.server_url))?;

    let (loop_tx, loop_rx) = mpsc::channel::<LoopEvent>();
    let runner = EffectRunner::new(engine);
    runner.spawn_event_loop(events, loop_tx.clone());

    let (prompt_tx, prompt_rx) = mpsc::channel::<PromptContext>();
    spawn_prompter(loop_tx, prompt_rx);

    let presenter = TerminalPresenter::new(io::stdout(), io::stderr());
    let mut controller = InterviewController::new(runner, presenter);
    controller.start();
    run_loop(&mut controller, &loop_rx, &prompt_tx);

    interview_info!("Exiting in phase {:?}", controller.view().phase);
    Ok(())
}

/// Single-threaded dispatch. A prompt is handed to the input thread only
/// while no request is pending, so completions render before the next prompt.
/// Once input closes, the loop keeps draining completions until nothing is
/// pending.
fn run_loop<P: Presenter>(
    controller: &mut InterviewController<P>,
    loop_rx: &mpsc::Receiver<LoopEvent>,
    prompt_tx: &mpsc::Sender<PromptContext>,
) {
    let mut input_open = true;
    let mut prompter_idle = true;
    loop {
        let busy = controller.has_pending_request();
        if !input_open && !busy {
            break;
        }
        if input_open && prompter_idle && !busy {
            let context = PromptContext::from_view(&controller.view());
            if prompt_tx.send(context).is_err() {
                input_open = false;
                continue;
            }
            prompter_idle = false;
        }

        let Ok(event) = loop_rx.recv() else {
            break;
        };
        match event {
            LoopEvent::Core(msg) => controller.dispatch(msg),
            LoopEvent::Action(action) => {
                prompter_idle = true;
                match action {
                    Action::Quit => break,
                    Action::SubmitUrl(url) => controller.submit_url(&url),
                    Action::SelectOption {
                        question_index,
                        option,
                    } => controller.record_answer(question_index, &option),
                    Action::SubmitAnswers => controller.submit_answers(),
                }
            }
            LoopEvent::InputClosed => {
                interview_debug!("Input closed; draining pending requests");
                input_open = false;
            }
        }
    }
}

/// Runs the blocking terminal prompts on their own thread.
fn spawn_prompter(loop_tx: mpsc::Sender<LoopEvent>, prompt_rx: mpsc::Receiver<PromptContext>) {
    thread::spawn(move || {
        let theme = ColorfulTheme::default();
        while let Ok(context) = prompt_rx.recv() {
            match prompt::ask(&theme, &context) {
                Ok(action) => {
                    if loop_tx.send(LoopEvent::Action(action)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    interview_debug!("Stopped reading input: {}", err);
                    break;
                }
            }
        }
        let _ = loop_tx.send(LoopEvent::InputClosed);
    });
}
