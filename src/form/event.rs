use tokio::sync::mpsc;

/// What raised a submit request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitTrigger {
    /// The user activated the submit affordance. Cannot happen while it is disabled.
    Affordance,
    /// Submission requested from code, or through an alternate control.
    Programmatic,
}

#[derive(Debug)]
pub struct SubmitEvent {
    trigger: SubmitTrigger,
    cancelable: bool,
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new(trigger: SubmitTrigger) -> Self {
        Self {
            trigger,
            cancelable: true,
            default_prevented: false,
        }
    }

    pub fn non_cancelable(trigger: SubmitTrigger) -> Self {
        Self {
            cancelable: false,
            ..Self::new(trigger)
        }
    }

    pub fn trigger(&self) -> SubmitTrigger {
        self.trigger
    }

    pub fn cancelable(&self) -> bool {
        self.cancelable
    }

    /// Suppress the native submission. Has no effect on a non-cancelable event.
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, thiserror::Error)]
#[error("The form is no longer listening for submit requests")]
pub struct SubmitChannelClosed;

/// Raises submit requests for a form.
#[derive(Clone, Debug)]
pub struct SubmitHandle(mpsc::UnboundedSender<SubmitEvent>);

impl SubmitHandle {
    pub fn request_submit(&self, trigger: SubmitTrigger) -> Result<(), SubmitChannelClosed> {
        self.0
            .send(SubmitEvent::new(trigger))
            .map_err(|_| SubmitChannelClosed)
    }
}

pub type SubmitRequests = mpsc::UnboundedReceiver<SubmitEvent>;

pub fn submit_channel() -> (SubmitHandle, SubmitRequests) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (SubmitHandle(sender), receiver)
}
