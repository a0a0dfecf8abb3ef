use std::sync::Arc;

use loggos::{JsonMessage, LineLogger, json_logger};
use loggos_tokio::{AsyncSinkExt, scope, wait_flushed};
use serde_json::json;

#[tokio::main]
async fn main() {
    let lines = LineLogger::new(100);
    let json = Arc::new(json_logger(100));
    json.add_decoration([("runtime", json!("tokio"))]);
    json.enable_audit_mode(true);
    lines.info("Hello, world!");
    scope(Arc::clone(&json), async {
        let handles: Vec<_> = (0..5)
            .map(|i| {
                let json = Arc::clone(&json);
                tokio::spawn(async move {
                    let mut msg = JsonMessage::warn("MESSAGE RECEIVED: Hello, world!");
                    msg.add("task", i);
                    json.send_async(msg).await;
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }
    })
    .await;
    lines.info("every JSON message has been printed");
    wait_flushed(lines.flush()).await;
}
