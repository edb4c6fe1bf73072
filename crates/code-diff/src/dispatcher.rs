//! Dispatcher for middleware and background tasks
//!
//! Actions dispatched here are queued on an unbounded tokio channel and
//! re-enter the full middleware chain when the store drains the queue. Async
//! tasks (reads, saves, debounce timers) hold a clone and report their
//! results through it.

use crate::actions::Action;
use tokio::sync::mpsc::UnboundedSender;

#[derive(Debug, Clone)]
pub struct Dispatcher {
    action_tx: UnboundedSender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: UnboundedSender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
