use std::{thread, time::Duration};

use loggos::{LineLogger, sink_config};

fn main() {
    // a tiny buffer and a slow transport: best-effort drops, audit mode waits
    let slow = |line: &str| {
        thread::sleep(Duration::from_millis(5));
        println!("{line}");
    };
    let best_effort =
        LineLogger::from(sink_config().with_capacity(2).with_transport(slow).build());
    for i in 0..20 {
        best_effort.info(format_args!("best effort {i}"));
    }
    best_effort.flush().wait();
    println!("best effort dropped {}", best_effort.dropped_messages());

    let audit = LineLogger::from(
        sink_config()
            .with_capacity(2)
            .with_audit_mode(true)
            .with_transport(slow)
            .build(),
    );
    for i in 0..20 {
        audit.info(format_args!("audit {i}"));
    }
    audit.flush().wait();
    println!("audit dropped {}", audit.dropped_messages());
}
