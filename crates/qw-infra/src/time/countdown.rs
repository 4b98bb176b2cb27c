use std::sync::Arc;

use tokio::time::{sleep, Duration};
use tracing::debug;

use qw_core::ports::{CountdownHandle, CountdownPort, CountdownSink};

/// Once-per-second countdown on the tokio runtime.
///
/// Must be started from within a runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCountdown;

impl TokioCountdown {
    pub fn new() -> Self {
        Self
    }
}

impl CountdownPort for TokioCountdown {
    fn start(&self, secs: u32, sink: Arc<dyn CountdownSink>) -> CountdownHandle {
        if secs == 0 {
            return CountdownHandle::detached();
        }

        let task = tokio::spawn(async move {
            let mut remaining = secs;
            while remaining > 0 {
                sleep(Duration::from_secs(1)).await;
                remaining -= 1;
                sink.on_tick(remaining).await;
            }
            debug!(secs, "countdown finished");
        });

        let abort_handle = task.abort_handle();
        debug!(secs, "countdown started");
        CountdownHandle::new(move || abort_handle.abort())
    }
}
