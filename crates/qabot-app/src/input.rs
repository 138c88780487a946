//! Line input: a `rustyline` editor on its own thread, awaited from the REPL.

use std::io;
use std::sync::mpsc;
use std::thread;

use rustyline::config::BellStyle;
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor, EditMode};
use tokio::sync::oneshot;
use tracing::debug;

/// One read from the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Ctrl-C: the current line was abandoned.
    Interrupted,
    /// Ctrl-D or end of piped input.
    Eof,
}

pub(crate) fn classify(result: Result<String, ReadlineError>) -> io::Result<Input> {
    match result {
        Ok(line) => Ok(Input::Line(line)),
        Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
        Err(ReadlineError::Eof) => Ok(Input::Eof),
        Err(ReadlineError::Io(e)) => Err(e),
        Err(e) => Err(io::Error::other(e.to_string())),
    }
}

struct ReadRequest {
    prompt: String,
    reply: oneshot::Sender<io::Result<Input>>,
}

/// Handle to the editor thread. Dropping it stops the thread.
pub struct LineEditor {
    requests: mpsc::Sender<ReadRequest>,
}

impl LineEditor {
    /// Start the editor thread with emacs bindings and in-memory history.
    pub fn spawn() -> io::Result<Self> {
        let (requests, incoming) = mpsc::channel::<ReadRequest>();
        let (ready_tx, ready_rx) = mpsc::channel::<io::Result<()>>();

        thread::Builder::new()
            .name("qabot-input".into())
            .spawn(move || {
                let config = Config::builder()
                    .edit_mode(EditMode::Emacs)
                    .auto_add_history(true)
                    .bell_style(BellStyle::None)
                    .build();
                let mut editor = match DefaultEditor::with_config(config) {
                    Ok(editor) => {
                        let _ = ready_tx.send(Ok(()));
                        editor
                    }
                    Err(e) => {
                        let _ = ready_tx.send(classify(Err(e)).map(|_| ()));
                        return;
                    }
                };

                while let Ok(request) = incoming.recv() {
                    let result = classify(editor.readline(&request.prompt));
                    let _ = request.reply.send(result);
                }
                debug!("input thread finished");
            })?;

        ready_rx
            .recv()
            .map_err(|_| io::Error::other("input thread exited during startup"))??;
        Ok(Self { requests })
    }

    /// Read one line. A vanished editor thread reads as end of input.
    pub async fn read_line(&self, prompt: &str) -> io::Result<Input> {
        let (reply, response) = oneshot::channel();
        let request = ReadRequest {
            prompt: prompt.to_string(),
            reply,
        };
        if self.requests.send(request).is_err() {
            return Ok(Input::Eof);
        }
        response.await.unwrap_or(Ok(Input::Eof))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_d_is_end_of_input() {
        assert_eq!(classify(Err(ReadlineError::Eof)).unwrap(), Input::Eof);
    }

    #[test]
    fn ctrl_c_is_interrupted() {
        assert_eq!(
            classify(Err(ReadlineError::Interrupted)).unwrap(),
            Input::Interrupted
        );
    }

    #[test]
    fn lines_pass_through_untrimmed() {
        assert_eq!(
            classify(Ok("  hi ".into())).unwrap(),
            Input::Line("  hi ".into())
        );
    }

    #[test]
    fn io_errors_propagate() {
        let err = classify(Err(ReadlineError::Io(io::Error::new(
            io::ErrorKind::BrokenPipe,
            "gone",
        ))))
        .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
