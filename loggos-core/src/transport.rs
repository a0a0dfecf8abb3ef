use std::{
    io::Write,
    sync::{Arc, Mutex, PoisonError},
};

/// Destination of rendered log lines.
///
/// Only the sink's consumer thread calls a transport, one line at a time.
pub trait Transport: Send {
    fn send(&mut self, line: &str);

    /// Called once after the last line, when the sink has drained.
    fn flush(&mut self) {}
}

impl<F> Transport for F
where
    F: FnMut(&str) + Send,
{
    fn send(&mut self, line: &str) {
        self(line)
    }
}

/// Default transport: one line per message on the process's stdout.
#[derive(Default, Debug, Clone, Copy)]
pub struct Stdout;

impl Transport for Stdout {
    fn send(&mut self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{line}").ok();
        stdout.flush().ok();
    }

    fn flush(&mut self) {
        std::io::stdout().flush().ok();
    }
}

/// In-memory transport keeping every line it receives.
///
/// Clones share the same buffer, so a clone can be handed to a sink while the
/// original is kept to inspect what was emitted.
#[derive(Default, Debug, Clone)]
pub struct Capture {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Capture {
    /// Lines received so far, in arrival order.
    pub fn show(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn reset(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Transport for Capture {
    fn send(&mut self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}

#[test]
fn test_capture_shares_buffer() {
    let capture = Capture::default();
    let mut clone = capture.clone();
    clone.send("Hello, world!");
    clone.send("rust is awesome !");
    assert_eq!(capture.len(), 2);
    assert_eq!(capture.show()[1], "rust is awesome !");
    capture.reset();
    assert!(clone.is_empty());
}

#[test]
fn test_closure_transport() {
    let mut seen = Vec::new();
    {
        let mut transport = |line: &str| seen.push(line.len());
        transport.send("abc");
        Transport::send(&mut transport, "de");
    }
    assert_eq!(seen, vec![3, 2]);
}
