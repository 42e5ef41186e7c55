//! Resend cooldown countdown. One spawned task ticks the value down once per
//! second; the task is aborted on restart and on drop, and exits on its own at
//! zero.

use std::sync::Arc;
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{interval_at, Duration, Instant},
};
use tracing::debug;

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug)]
pub struct ResendTimer {
    remaining: Arc<watch::Sender<u32>>,
    ticker: Option<JoinHandle<()>>,
}

impl Default for ResendTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResendTimer {
    #[must_use]
    pub fn new() -> Self {
        let (remaining, _) = watch::channel(0);
        Self {
            remaining: Arc::new(remaining),
            ticker: None,
        }
    }

    /// Seconds left before a resend is allowed.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        *self.remaining.borrow()
    }

    /// Observes the countdown, e.g. to render "Resend OTP in N seconds".
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u32> {
        self.remaining.subscribe()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.ticker
            .as_ref()
            .is_some_and(|ticker| !ticker.is_finished())
    }

    /// Restarts the countdown at `seconds`, replacing any running one.
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, seconds: u32) {
        self.cancel();
        self.remaining.send_replace(seconds);

        if seconds == 0 {
            return;
        }

        let remaining = Arc::clone(&self.remaining);
        self.ticker = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + TICK, TICK);

            loop {
                ticker.tick().await;

                let mut left = 0;
                remaining.send_modify(|value| {
                    *value = value.saturating_sub(1);
                    left = *value;
                });

                if left == 0 {
                    debug!("resend cooldown elapsed");
                    break;
                }
            }
        }));
    }

    /// Stops the countdown where it is.
    pub fn cancel(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

impl Drop for ResendTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
