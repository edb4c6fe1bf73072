//! Trailing debounce on tokio timers

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;

/// Dispatches the most recently scheduled action once no newer one has
/// been scheduled for `delay`.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<AbortHandle>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending action with `action`, restarting the quiet period
    pub fn schedule(&mut self, runtime: &Handle, action: Action, dispatcher: Dispatcher) {
        self.cancel();
        let delay = self.delay;
        let task = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            dispatcher.dispatch(action);
        });
        self.pending = Some(task.abort_handle());
    }

    /// Drop the pending action, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
