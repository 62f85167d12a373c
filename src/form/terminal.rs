use std::io::{self, BufRead, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

use super::{FeedbackMode, FormSurface};
use crate::domain::{EMAIL_FIELD, MESSAGE_FIELD, NAME_FIELD, SUBJECT_FIELD};

const PROMPTS: [(&str, &str); 4] = [
    (NAME_FIELD, "Name"),
    (EMAIL_FIELD, "Email"),
    (SUBJECT_FIELD, "Subject"),
    (MESSAGE_FIELD, "Message"),
];

/// A contact form rendered on a terminal: fields are prompted for one line at a
/// time and feedback is printed as it arrives.
pub struct TerminalForm {
    action: String,
    state: Mutex<TerminalState>,
}

struct TerminalState {
    fields: Vec<(String, String)>,
    affordance_enabled: bool,
    output: Box<dyn Write + Send>,
}

impl TerminalForm {
    pub fn new(action: impl Into<String>, output: impl Write + Send + 'static) -> Self {
        Self {
            action: action.into(),
            state: Mutex::new(TerminalState {
                fields: PROMPTS
                    .iter()
                    .map(|(name, _)| (name.to_string(), String::new()))
                    .collect(),
                affordance_enabled: true,
                output: Box::new(output),
            }),
        }
    }

    pub fn stdout(action: impl Into<String>) -> Self {
        Self::new(action, io::stdout())
    }

    /// Prompt for every field. Returns `false` once the input is exhausted.
    pub fn prompt<R: BufRead>(&self, input: &mut R) -> io::Result<bool> {
        for (name, label) in PROMPTS {
            {
                let mut state = self.state();
                write!(state.output, "{}: ", label.bold())?;
                state.output.flush()?;
            }

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(false);
            }
            let value = line.trim_end_matches(['\r', '\n']);

            let mut state = self.state();
            if let Some((_, current)) = state.fields.iter_mut().find(|(field, _)| field == name) {
                *current = value.to_owned();
            }
        }
        Ok(true)
    }

    fn state(&self) -> MutexGuard<'_, TerminalState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn print(&self, line: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.state().output, "{line}") {
            tracing::warn!(error.message = %e, "Failed to write to the terminal");
        }
    }
}

impl FormSurface for TerminalForm {
    fn read_field(&self, name: &str) -> String {
        self.state()
            .fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.clone())
            .unwrap_or_default()
    }

    fn fields(&self) -> Vec<(String, String)> {
        self.state().fields.clone()
    }

    fn action(&self) -> String {
        self.action.clone()
    }

    // Errors are only ever printed, there is nothing to take back
    fn clear_field_errors(&self) {}

    fn set_feedback(&self, mode: FeedbackMode, text: &str) {
        match mode {
            FeedbackMode::Neutral => {}
            FeedbackMode::Error => self.print(format_args!("{} {}", "error:".red().bold(), text)),
            FeedbackMode::Success => self.print(format_args!("{} {}", "sent:".green().bold(), text)),
        }
    }

    fn set_affordance(&self, enabled: bool, label: &str) {
        self.state().affordance_enabled = enabled;
        if !enabled {
            self.print(format_args!("{}", label.dimmed()));
        }
    }

    fn affordance_enabled(&self) -> bool {
        self.state().affordance_enabled
    }

    fn clear_inputs(&self) {
        for (_, value) in self.state().fields.iter_mut() {
            value.clear();
        }
    }
}
