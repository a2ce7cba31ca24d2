//! Cancel-and-restart scheduling for search-as-you-type.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Runs only the most recent of a burst of calls, once `wait` has passed
/// without a newer call.
#[derive(Debug)]
pub struct Debouncer {
    wait: Duration,
    pending: Option<CancellationToken>,
}

impl Debouncer {
    pub const fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    /// Schedule `task` to run after the quiet period.
    ///
    /// Cancels the previously scheduled call if it has not started yet. The
    /// returned handle resolves to `None` for a cancelled call. A call whose
    /// timer already fired runs to completion.
    pub fn call<F>(&mut self, task: F) -> JoinHandle<Option<F::Output>>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        self.cancel();

        let token = CancellationToken::new();
        self.pending = Some(token.clone());
        let wait = self.wait;

        tokio::spawn(async move {
            tokio::select! {
                biased;
                () = token.cancelled() => {
                    tracing::trace!("Debounced call superseded");
                    None
                }
                () = tokio::time::sleep(wait) => Some(task.await),
            }
        })
    }

    /// Drop the pending call, if any.
    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
