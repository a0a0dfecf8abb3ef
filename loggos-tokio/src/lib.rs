//! # loggos-tokio
//! Helpers for using loggos sinks from tokio runtimes.
//!
//! Sending in best-effort mode never blocks and can be done directly from
//! async code. Audit-mode sends and waiting for a flush can block, so they
//! are moved onto tokio's blocking pool here.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! loggos = "0.1.0"
//! loggos-tokio = "0.1.0"
//! tokio = {version = "1.40.0", features = ["full"]}
//! ```
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use loggos::{JsonMessage, json_logger};
//! use loggos_tokio::{AsyncSinkExt, scope};
//!
//! #[tokio::main]
//! async fn main() {
//!     let logger = Arc::new(json_logger(500));
//!     logger.enable_audit_mode(true);
//!     scope(Arc::clone(&logger), async {
//!         let handles: Vec<_> = (0..5).map(|i| {
//!             let logger = Arc::clone(&logger);
//!             tokio::spawn(async move {
//!                 let msg = JsonMessage::info(format!("Hello from task {i}!"));
//!                 logger.send_async(msg).await;
//!             })
//!         }).collect();
//!         for h in handles { h.await.unwrap(); }
//!     }).await;
//!     // every message has been printed once scope completes
//! }
//! ```

use std::{future::Future, sync::Arc};

use loggos_core::{Flushed, Record, Sink};

/// Waits for a flush to complete without blocking the runtime's workers.
pub async fn wait_flushed(flushed: Flushed) {
    if flushed.is_done() {
        return;
    }
    tokio::task::spawn_blocking(move || flushed.wait()).await.ok();
}

/// Runs `f`, then flushes `sink` and waits until everything sent during `f`
/// has been written.
pub async fn scope<R, F>(sink: Arc<Sink<R>>, f: F) -> F::Output
where
    R: Record,
    F: Future,
{
    let result = f.await;
    wait_flushed(sink.flush()).await;
    result
}

/// Async sending for shared sinks.
pub trait AsyncSinkExt<R> {
    /// Sends `record`. In audit mode the potentially blocking enqueue runs
    /// on the blocking pool; otherwise this is a plain [`Sink::send`].
    fn send_async(&self, record: R) -> impl Future<Output = ()> + Send;
}

impl<R> AsyncSinkExt<R> for Arc<Sink<R>>
where
    R: Record + Send + 'static,
{
    async fn send_async(&self, mut record: R) {
        if !self.is_audit_mode() {
            self.send(&mut record);
            return;
        }
        let sink = Arc::clone(self);
        tokio::task::spawn_blocking(move || sink.send(&mut record))
            .await
            .ok();
    }
}
