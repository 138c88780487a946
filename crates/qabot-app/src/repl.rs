//! Interactive loop: reads input lines and drives one hosted session.

use std::io;

use qabot_ai::ModelId;
use qabot_common::{QabotError, SessionId};
use tracing::{debug, info};

use crate::controller::SessionController;
use crate::display::NoticeLevel;
use crate::input::{Input, LineEditor};
use crate::registry::SessionRegistry;
use crate::secret::read_secret;
use crate::session::InitState;

const HELP: &str = "\
Commands:
  /init [model]   initialize the conversation (prompts for the API key)
  /models         list selectable models
  /clear          start the visible conversation over
  /history        re-render the conversation
  /usage          token usage of the current conversation
  /status         session and configuration summary
  /help           this text
  /quit           exit
Anything else is sent as a question.";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Init(Option<String>),
    Models,
    Clear,
    History,
    Usage,
    Status,
    Help,
    Quit,
    Unknown(String),
    Ask(String),
    Empty,
}

/// Map an editor read to a command. Ctrl-D quits, Ctrl-C drops the line.
pub fn command_for(input: Input) -> Command {
    match input {
        Input::Line(line) => parse_line(&line),
        Input::Interrupted => Command::Empty,
        Input::Eof => Command::Quit,
    }
}

pub fn parse_line(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    let Some(rest) = line.strip_prefix('/') else {
        return Command::Ask(line.to_string());
    };

    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or("");
    match name {
        "init" => Command::Init(parts.next().map(str::to_string)),
        "models" => Command::Models,
        "clear" => Command::Clear,
        "history" => Command::History,
        "usage" => Command::Usage,
        "status" => Command::Status,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

/// API key supplied ahead of `/init` by flag or environment.
///
/// Used until an initialization with it fails; after that `/init` prompts.
pub struct PresetKey(Option<String>);

impl PresetKey {
    pub fn new(key: Option<String>) -> Self {
        Self(key.filter(|k| !k.trim().is_empty()))
    }

    pub fn get(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Record how an initialization using this key went.
    ///
    /// Returns true when a rejected key was just discarded.
    pub fn settle(&mut self, init_succeeded: bool) -> bool {
        if init_succeeded {
            return false;
        }
        self.0.take().is_some()
    }
}

pub struct Repl {
    controller: SessionController,
    registry: SessionRegistry,
    session_id: SessionId,
    default_model: ModelId,
    preset_key: PresetKey,
    input_placeholder: String,
    config_json: String,
}

impl Repl {
    pub fn new(
        controller: SessionController,
        default_model: ModelId,
        preset_key: PresetKey,
        input_placeholder: String,
        config_json: String,
    ) -> Self {
        let mut registry = SessionRegistry::new();
        let session_id = registry.insert(controller.new_session());
        Self {
            controller,
            registry,
            session_id,
            default_model,
            preset_key,
            input_placeholder,
            config_json,
        }
    }

    pub async fn run(&mut self) -> Result<(), QabotError> {
        let editor = LineEditor::spawn()?;
        let prompt = format!("{} > ", self.input_placeholder);

        info!(session = %self.session_id.short(), "session started");
        self.controller.render(self.registry.get(&self.session_id)?);

        loop {
            let input = editor.read_line(&prompt).await?;

            match command_for(input) {
                Command::Empty => {}
                Command::Quit => break,
                Command::Help => self.terminal_info(HELP),
                Command::Models => self.show_models(),
                Command::Unknown(name) => self.terminal_error(&format!(
                    "unknown command /{name}, try /help"
                )),
                Command::Init(model) => self.init(model.as_deref()).await?,
                Command::Clear => {
                    let session = self.registry.get_mut(&self.session_id)?;
                    self.controller.clear_history(session);
                    self.controller.render(session);
                }
                Command::History => {
                    self.controller.render(self.registry.get(&self.session_id)?);
                }
                Command::Usage => self.show_usage()?,
                Command::Status => self.show_status()?,
                Command::Ask(text) => {
                    let session = self.registry.get_mut(&self.session_id)?;
                    let outcome = self.controller.submit_turn(session, &text).await;
                    debug!(?outcome, "turn finished");
                }
            }
        }

        if let Some(session) = self.registry.remove(&self.session_id) {
            info!(
                session = %session.id().short(),
                messages = session.messages().len(),
                open_sessions = self.registry.len(),
                "session ended"
            );
        }
        Ok(())
    }

    async fn init(&mut self, model: Option<&str>) -> Result<(), QabotError> {
        let model = match model {
            Some(raw) => match raw.parse::<ModelId>() {
                Ok(m) => m,
                Err(e) => {
                    self.terminal_error(&e.to_string());
                    self.show_models();
                    return Ok(());
                }
            },
            None => self.default_model,
        };

        let preset = self.preset_key.get().map(str::to_string);
        let used_preset = preset.is_some();
        let credential = match preset {
            Some(key) => key,
            None => tokio::task::spawn_blocking(|| read_secret("OpenAI API Key"))
                .await
                .map_err(|e| io::Error::other(e.to_string()))??,
        };

        let session = self.registry.get_mut(&self.session_id)?;
        // Outcome is already shown to the user and logged by the controller
        let result = self
            .controller
            .initialize_conversation(session, &credential, model)
            .await;

        if used_preset && self.preset_key.settle(result.is_ok()) {
            info!("preset API key rejected, later /init will prompt");
            self.terminal_info("The preset API key did not work. Run /init again to enter a key.");
        }
        Ok(())
    }

    fn show_models(&self) {
        let list: Vec<String> = ModelId::ALL
            .iter()
            .map(|m| {
                if *m == self.default_model {
                    format!("{m} (default)")
                } else {
                    m.to_string()
                }
            })
            .collect();
        self.terminal_info(&format!("models: {}", list.join(", ")));
    }

    fn show_usage(&self) -> Result<(), QabotError> {
        let session = self.registry.get(&self.session_id)?;
        let text = match session.handle() {
            Some(handle) => {
                let usage = handle.usage();
                format!(
                    "{} calls, {} input + {} output = {} tokens ({} turns remembered)",
                    usage.call_count(),
                    usage.total().input_tokens,
                    usage.total().output_tokens,
                    usage.total_tokens(),
                    handle.remembered_turns(),
                )
            }
            None => "no active conversation".to_string(),
        };
        self.terminal_info(&text);
        Ok(())
    }

    fn show_status(&self) -> Result<(), QabotError> {
        let session = self.registry.get(&self.session_id)?;
        let state = match session.init_state() {
            InitState::NotAttempted => "not initialized".to_string(),
            InitState::Succeeded => match session.handle() {
                Some(h) => format!(
                    "initialized with {} at {}",
                    h.model(),
                    h.created_at().format("%H:%M:%S")
                ),
                None => "initialized".to_string(),
            },
            InitState::Failed => {
                debug!(reason = ?session.last_init_error(), "last initialization failure");
                "initialization failed".to_string()
            }
        };
        let ready = if session.is_ready() { "ready" } else { "not ready" };
        self.terminal_info(&format!(
            "session {} | {} ({}) | {} messages",
            session.id().short(),
            state,
            ready,
            session.messages().len()
        ));
        self.terminal_info(&self.config_json);
        Ok(())
    }

    fn terminal_info(&self, text: &str) {
        self.controller.display().notify(NoticeLevel::Info, text);
    }

    fn terminal_error(&self, text: &str) {
        self.controller.display().notify(NoticeLevel::Error, text);
    }
}
