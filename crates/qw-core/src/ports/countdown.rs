//! Countdown port
//!
//! A cancellable once-per-second countdown. The returned handle is the only
//! way to stop it; dropping the handle stops it too.

use std::fmt;
use std::sync::Arc;

/// Receives one call per elapsed second with the seconds still remaining.
#[async_trait::async_trait]
pub trait CountdownSink: Send + Sync {
    async fn on_tick(&self, remaining: u32);
}

pub trait CountdownPort: Send + Sync {
    /// Start a countdown of `secs` seconds. The sink sees `secs - 1, ..., 0`
    /// and the countdown stops by itself after reporting zero.
    fn start(&self, secs: u32, sink: Arc<dyn CountdownSink>) -> CountdownHandle;
}

type CancelFn = Box<dyn FnOnce() + Send + Sync>;

/// Owner of a running countdown.
pub struct CountdownHandle {
    cancel: Option<CancelFn>,
}

impl CountdownHandle {
    pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A handle with nothing to cancel.
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl fmt::Debug for CountdownHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountdownHandle")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
