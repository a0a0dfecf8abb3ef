use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TryRecvError, bounded};

/// Completion handle returned by [`crate::Sink::flush`].
///
/// Completes once the sink's consumer has handed every queued line to the
/// transport and exited. Clones observe the same completion, so any number
/// of threads may wait on it.
#[derive(Debug, Clone)]
pub struct Flushed {
    signals: Vec<Receiver<()>>,
}

impl Flushed {
    /// A pending handle, completed when the returned sender is dropped.
    pub(crate) fn pending() -> (Sender<()>, Self) {
        let (done, signal) = bounded(0);
        (
            done,
            Self {
                signals: vec![signal],
            },
        )
    }

    /// An already completed handle.
    pub fn completed() -> Self {
        Self { signals: vec![] }
    }

    /// Combines several handles into one completing when all of them have.
    pub fn all<I: IntoIterator<Item = Flushed>>(handles: I) -> Self {
        Self {
            signals: handles.into_iter().flat_map(|h| h.signals).collect(),
        }
    }

    /// Blocks until the drain has completed.
    pub fn wait(&self) {
        for signal in &self.signals {
            // Nothing is ever sent: recv only returns once the sender is gone.
            signal.recv().ok();
        }
    }

    /// Blocks until the drain has completed or `timeout` elapsed.
    /// Returns whether the drain completed.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        self.signals.iter().all(|signal| {
            !matches!(
                signal.recv_deadline(deadline),
                Err(RecvTimeoutError::Timeout)
            )
        })
    }

    pub fn is_done(&self) -> bool {
        self.signals
            .iter()
            .all(|signal| matches!(signal.try_recv(), Err(TryRecvError::Disconnected)))
    }
}
