//! The form the controller is bound to, seen through a small capability
//! interface so the controller does not care what renders it.
mod event;
mod in_memory;
mod terminal;

pub use event::{
    submit_channel, SubmitChannelClosed, SubmitEvent, SubmitHandle, SubmitRequests, SubmitTrigger,
};
pub use in_memory::InMemoryForm;
pub use terminal::TerminalForm;

/// How the feedback region presents its text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedbackMode {
    #[default]
    Neutral,
    Error,
    Success,
}

impl FeedbackMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackMode::Neutral => "neutral",
            FeedbackMode::Error => "error",
            FeedbackMode::Success => "success",
        }
    }
}

/// Operations the controller needs from a form.
///
/// Implementations are driven from one logical thread of control, but are shared
/// with in-flight submissions, hence `&self` receivers and the `Send + Sync` bound.
pub trait FormSurface: Send + Sync + 'static {
    /// Current value of the named field, or an empty string if there is no such field.
    fn read_field(&self, name: &str) -> String;

    /// Every field of the form, in document order, with the values as entered.
    fn fields(&self) -> Vec<(String, String)>;

    /// Destination URL of the form.
    fn action(&self) -> String;

    fn clear_field_errors(&self);

    fn set_feedback(&self, mode: FeedbackMode, text: &str);

    fn set_affordance(&self, enabled: bool, label: &str);

    fn affordance_enabled(&self) -> bool;

    /// Empty every input and textarea of the form.
    fn clear_inputs(&self);
}
