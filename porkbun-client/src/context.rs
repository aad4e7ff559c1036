//! Per-call cancellation and deadline signal.
//!
//! Every endpoint takes an `Option<&Context>`. Passing `None` is rejected with
//! [`ContextError::Missing`] before anything touches the network; a context
//! that fires while the request is in flight aborts it.

use std::future;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::watch;
use tokio::time::Instant;

/// Why a call was stopped by its context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("context must be non-nil")]
    Missing,
    #[error("context canceled")]
    Cancelled,
    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

/// Cancellation/deadline signal for one or more calls.
///
/// Cheap to clone; clones observe the same cancel handle.
#[derive(Debug, Clone, Default)]
pub struct Context {
    deadline: Option<Instant>,
    cancel: Option<watch::Receiver<bool>>,
}

/// Fires the cancellation of the [`Context`] it was created with.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }
}

impl Context {
    /// A context that never fires.
    pub fn background() -> Self {
        Self::default()
    }

    /// A context that expires `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::background().deadline(Instant::now() + timeout)
    }

    /// A context that can be cancelled through the returned handle.
    pub fn with_cancel() -> (Self, CancelHandle) {
        Self::background().cancellable()
    }

    /// Sets (or tightens) the deadline.
    #[must_use]
    pub fn deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        self
    }

    /// Attaches a fresh cancel handle, replacing any previous one.
    #[must_use]
    pub fn cancellable(mut self) -> (Self, CancelHandle) {
        let (tx, rx) = watch::channel(false);
        self.cancel = Some(rx);
        (self, CancelHandle { tx: Arc::new(tx) })
    }

    pub fn deadline_at(&self) -> Option<Instant> {
        self.deadline
    }

    /// Non-blocking check: `Some(reason)` if the context has already fired.
    pub fn check(&self) -> Option<ContextError> {
        if self.cancel.as_ref().is_some_and(|rx| *rx.borrow()) {
            return Some(ContextError::Cancelled);
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Some(ContextError::DeadlineExceeded);
        }
        None
    }

    /// Resolves once the context fires. Pending forever for a background context.
    pub async fn done(&self) -> ContextError {
        let cancelled = async {
            match &self.cancel {
                Some(rx) => {
                    let mut rx = rx.clone();
                    let fired = rx.wait_for(|cancelled| *cancelled).await.is_ok();
                    if !fired {
                        // handle dropped without cancelling
                        future::pending::<()>().await;
                    }
                }
                None => future::pending::<()>().await,
            }
        };
        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            () = cancelled => ContextError::Cancelled,
            () = expired => ContextError::DeadlineExceeded,
        }
    }
}

/// Unwraps an optional context, rejecting `None` and already-fired contexts.
pub(crate) fn require(ctx: Option<&Context>) -> Result<&Context, ContextError> {
    let ctx = ctx.ok_or(ContextError::Missing)?;
    match ctx.check() {
        Some(reason) => Err(reason),
        None => Ok(ctx),
    }
}
