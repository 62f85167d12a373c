use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{FeedbackMode, FormSurface};
use crate::controller::AffordanceLabels;

/// A form that lives entirely in memory. Records what the controller renders so
/// it can be inspected afterwards.
#[derive(Debug)]
pub struct InMemoryForm {
    action: String,
    state: Mutex<FormState>,
}

#[derive(Debug)]
struct FormState {
    fields: Vec<(String, String)>,
    field_errors: BTreeMap<String, String>,
    feedback: (FeedbackMode, String),
    affordance: (bool, String),
    affordance_history: Vec<(bool, String)>,
}

impl InMemoryForm {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            state: Mutex::new(FormState {
                fields: Vec::new(),
                field_errors: BTreeMap::new(),
                feedback: (FeedbackMode::Neutral, String::new()),
                affordance: (true, AffordanceLabels::default().ready),
                affordance_history: Vec::new(),
            }),
        }
    }

    pub fn with_field(self, name: &str, value: &str) -> Self {
        self.set_field(name, value);
        self
    }

    /// Set a field value, appending the field if the form does not have it yet.
    pub fn set_field(&self, name: &str, value: &str) {
        let mut state = self.state();
        match state.fields.iter().position(|(field, _)| field == name) {
            Some(index) => state.fields[index].1 = value.to_owned(),
            None => state.fields.push((name.to_owned(), value.to_owned())),
        }
    }

    pub fn field(&self, name: &str) -> Option<String> {
        self.state()
            .fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.clone())
    }

    pub fn set_field_error(&self, name: &str, message: &str) {
        self.state()
            .field_errors
            .insert(name.to_owned(), message.to_owned());
    }

    pub fn field_error(&self, name: &str) -> Option<String> {
        self.state().field_errors.get(name).cloned()
    }

    pub fn feedback(&self) -> (FeedbackMode, String) {
        self.state().feedback.clone()
    }

    /// Whether the submit affordance is enabled, and its label.
    pub fn affordance(&self) -> (bool, String) {
        self.state().affordance.clone()
    }

    /// Every affordance change, oldest first.
    pub fn affordance_history(&self) -> Vec<(bool, String)> {
        self.state().affordance_history.clone()
    }

    fn state(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FormSurface for InMemoryForm {
    fn read_field(&self, name: &str) -> String {
        self.field(name).unwrap_or_default()
    }

    fn fields(&self) -> Vec<(String, String)> {
        self.state().fields.clone()
    }

    fn action(&self) -> String {
        self.action.clone()
    }

    fn clear_field_errors(&self) {
        self.state().field_errors.clear();
    }

    fn set_feedback(&self, mode: FeedbackMode, text: &str) {
        self.state().feedback = (mode, text.to_owned());
    }

    fn set_affordance(&self, enabled: bool, label: &str) {
        let mut state = self.state();
        state.affordance = (enabled, label.to_owned());
        state.affordance_history.push((enabled, label.to_owned()));
    }

    fn affordance_enabled(&self) -> bool {
        self.state().affordance.0
    }

    fn clear_inputs(&self) {
        for (_, value) in self.state().fields.iter_mut() {
            value.clear();
        }
    }
}
