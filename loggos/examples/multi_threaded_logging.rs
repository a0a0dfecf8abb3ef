use std::sync::{Arc, mpsc::channel};

use loggos::{JsonMessage, Loggers};
use serde_json::json;

fn main() {
    let loggers = Arc::new(Loggers::new());
    loggers.json().add_decoration([("app", json!("multi_threaded_logging"))]);
    loggers.json().enable_human_timestamps(true);
    loggers.info("Hello, world!");
    // worker threads report what they receive as JSON
    let (handles, senders): (Vec<_>, Vec<_>) = (0..5)
        .map(|i| {
            let (sender, receiver) = channel::<&'static str>();
            let loggers = Arc::clone(&loggers);
            (
                std::thread::spawn(move || {
                    for message in receiver {
                        let mut msg = JsonMessage::warn(format!("MESSAGE RECEIVED: {message}"));
                        msg.add("thread", i);
                        loggers.send_json(&mut msg);
                    }
                }),
                sender,
            )
        })
        .unzip();
    for sender in senders {
        sender.send("Hello, world!").unwrap();
    }
    for handle in handles {
        handle.join().unwrap();
    }
    loggers.info(format_args!(
        "{} JSON messages dropped",
        loggers.json().dropped_messages()
    ));
    loggers.flush().wait();
}
