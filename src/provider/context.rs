use std::{future, sync::Arc, time::Duration};

use tokio::{sync::watch, time::Instant};

use crate::error::CancelReason;

/// Per-call cancellation scope.
///
/// A context carries an optional deadline and an optional cancellation
/// signal. Clones observe the same signal. `Context::background()` never
/// fires.
#[derive(Debug, Clone, Default)]
pub struct Context {
    deadline: Option<Instant>,
    cancelled: Option<watch::Receiver<bool>>,
}

/// Cancels every context derived from the one it was created with.
#[derive(Debug, Clone)]
pub struct CancelHandle(Arc<watch::Sender<bool>>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.send_replace(true);
    }
}

impl Context {
    pub fn background() -> Context {
        Context::default()
    }

    pub fn with_cancel(self) -> (Context, CancelHandle) {
        let (sender, receiver) = watch::channel(false);
        let context = Context {
            deadline: self.deadline,
            cancelled: Some(receiver),
        };

        (context, CancelHandle(Arc::new(sender)))
    }

    /// Keeps the earlier of the existing and the new deadline.
    pub fn with_deadline(self, deadline: Instant) -> Context {
        let deadline = match self.deadline {
            Some(current) if current < deadline => current,
            _ => deadline,
        };

        Context {
            deadline: Some(deadline),
            cancelled: self.cancelled,
        }
    }

    pub fn with_timeout(self, timeout: Duration) -> Context {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns the reason when the context has already stopped.
    pub fn err(&self) -> Option<CancelReason> {
        if let Some(receiver) = &self.cancelled {
            if *receiver.borrow() {
                return Some(CancelReason::Canceled);
            }
        }

        match self.deadline {
            Some(deadline) if deadline <= Instant::now() => {
                Some(CancelReason::DeadlineExceeded)
            },
            _ => None,
        }
    }

    /// Resolves once the context is cancelled or its deadline passes.
    pub async fn done(&self) -> CancelReason {
        let cancelled = async {
            match &self.cancelled {
                Some(receiver) => {
                    let mut receiver = receiver.clone();
                    let fired = receiver
                        .wait_for(|cancelled| *cancelled)
                        .await
                        .is_ok();

                    // every handle dropped without cancelling
                    if !fired {
                        future::pending::<()>().await;
                    }

                    CancelReason::Canceled
                },
                None => future::pending().await,
            }
        };

        let expired = async {
            match self.deadline {
                Some(deadline) => {
                    tokio::time::sleep_until(deadline).await;
                    CancelReason::DeadlineExceeded
                },
                None => future::pending().await,
            }
        };

        tokio::select! {
            reason = cancelled => reason,
            reason = expired => reason,
        }
    }
}
