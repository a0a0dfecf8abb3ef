use std::{
    sync::{
        Arc, Mutex, PoisonError, RwLock,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
    thread,
};

use crossbeam_channel::{Receiver, Sender, TrySendError, bounded};

use crate::{
    flushed::Flushed,
    record::{Mutator, Record},
    transport::{Stdout, Transport},
};

/// Queue capacity used by [`SinkConfig::default`].
pub const DEFAULT_CAPACITY: usize = 500;

type Decoration<V> = Arc<[(String, V)]>;
type PendingTransport = Arc<Mutex<Option<Box<dyn Transport>>>>;

/// Buffered, filtering log sink with a single consumer thread.
///
/// `send` runs the decoration, mutation and debug filtering steps in the
/// caller's thread, renders the record and queues the line. The consumer
/// thread writes queued lines to the transport in the order they were
/// accepted.
///
/// In best-effort mode (the default) a full queue drops the line and bumps
/// [`Sink::dropped_messages`]. In audit mode `send` blocks until the queue
/// has room; there is no timeout, so a stalled transport stalls every
/// audit-mode caller.
pub struct Sink<R: Record> {
    queue: RwLock<Option<Sender<String>>>,
    finished: Flushed,
    shutdown: AtomicBool,
    print_debug: AtomicBool,
    print_pretty: AtomicBool,
    audit_mode: AtomicBool,
    human_timestamps: AtomicBool,
    dropped_messages: AtomicU64,
    decorations: RwLock<Vec<Decoration<R::Value>>>,
    mutators: RwLock<Vec<Box<dyn Mutator<R>>>>,
    transport: PendingTransport,
}

impl<R: Record> Sink<R> {
    /// Creates a sink holding up to `capacity` lines (at least one) and starts
    /// its consumer thread.
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded::<String>(capacity.max(1));
        let (done, finished) = Flushed::pending();
        let transport: PendingTransport = Arc::new(Mutex::new(None));
        spawn_consumer(receiver, Arc::clone(&transport), done);
        Self {
            queue: RwLock::new(Some(sender)),
            finished,
            shutdown: AtomicBool::new(false),
            print_debug: AtomicBool::new(false),
            print_pretty: AtomicBool::new(false),
            audit_mode: AtomicBool::new(false),
            human_timestamps: AtomicBool::new(false),
            dropped_messages: AtomicU64::new(0),
            decorations: RwLock::new(Vec::new()),
            mutators: RwLock::new(Vec::new()),
            transport,
        }
    }

    pub fn enable_debug_logging(&self, toggle: bool) {
        self.print_debug.store(toggle, Ordering::SeqCst);
    }

    pub fn enable_pretty_print(&self, toggle: bool) {
        self.print_pretty.store(toggle, Ordering::SeqCst);
    }

    /// Makes `send` block instead of dropping when the queue is full.
    /// Consider a large capacity when enabling it.
    pub fn enable_audit_mode(&self, toggle: bool) {
        self.audit_mode.store(toggle, Ordering::SeqCst);
    }

    /// Asks every record to derive a human readable timestamp before it is
    /// rendered.
    pub fn enable_human_timestamps(&self, toggle: bool) {
        self.human_timestamps.store(toggle, Ordering::SeqCst);
    }

    /// Number of lines discarded because the queue was full.
    pub fn dropped_messages(&self) -> u64 {
        self.dropped_messages.load(Ordering::SeqCst)
    }

    pub fn is_audit_mode(&self) -> bool {
        self.audit_mode.load(Ordering::SeqCst)
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.print_debug.load(Ordering::SeqCst)
    }

    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// Replaces the output target. The consumer picks it up before writing its
    /// next line and flushes the previous one; lines already handed to the
    /// previous transport are not replayed. Never waits on the transport in
    /// use, so it may be called from inside a transport.
    pub fn override_printer<T: Transport + 'static>(&self, transport: T) {
        *self
            .transport
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(Box::new(transport));
    }

    /// Adds key/value pairs merged into every record sent afterwards.
    /// Later decorations win on key collisions.
    pub fn add_decoration<I, K>(&self, decoration: I)
    where
        I: IntoIterator<Item = (K, R::Value)>,
        K: Into<String>,
    {
        let decoration: Decoration<R::Value> = decoration
            .into_iter()
            .map(|(key, value)| (key.into(), value))
            .collect();
        self.decorations
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(decoration);
    }

    /// Appends a mutator to the chain run on every record.
    ///
    /// A mutator returning `false` discards the record: there is no way to
    /// know how to repair it, so it is up to the mutator to leave the record
    /// in a sendable state.
    pub fn add_mutator<M: Mutator<R> + 'static>(&self, mutator: M) {
        self.mutators
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(mutator));
    }

    /// Decorates, mutates, filters and renders `record`, then queues it.
    /// Silently does nothing once the sink is flushed.
    pub fn send(&self, record: &mut R) {
        if self.is_shutdown() {
            return;
        }
        self.decorate(record);
        if self.human_timestamps.load(Ordering::SeqCst) {
            record.attach_human_timestamp();
        }
        if !self.run_mutations(record) {
            return;
        }
        if record.is_debug() && !self.is_debug_enabled() {
            return;
        }
        let line = if self.print_pretty.load(Ordering::SeqCst) {
            record.render_pretty()
        } else {
            record.render()
        };
        self.enqueue(line);
    }

    /// Stops intake and returns a handle completing once every queued line
    /// has been written. Later calls return an already completed handle.
    pub fn flush(&self) -> Flushed {
        if self.shutdown.swap(true, Ordering::SeqCst) {
            return Flushed::completed();
        }
        // Dropping the last sender closes the queue; the consumer drains it and exits.
        self.queue
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        self.finished.clone()
    }

    fn decorate(&self, record: &mut R) {
        let decorations = self
            .decorations
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        for decoration in decorations.iter() {
            for (key, value) in decoration.iter() {
                record.insert(key, value.clone());
            }
        }
    }

    fn run_mutations(&self, record: &mut R) -> bool {
        self.mutators
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .all(|mutator| mutator.mutate(record))
    }

    fn enqueue(&self, line: String) {
        // Clone the sender so a blocking audit send never holds the lock `flush` needs.
        let Some(queue) = self
            .queue
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        else {
            return;
        };
        if self.is_audit_mode() {
            queue.send(line).ok();
            return;
        }
        if let Err(TrySendError::Full(_)) = queue.try_send(line) {
            self.dropped_messages.fetch_add(1, Ordering::SeqCst);
        }
    }
}

impl<R: Record> Drop for Sink<R> {
    fn drop(&mut self) {
        self.flush();
        self.finished.wait();
    }
}

fn spawn_consumer(receiver: Receiver<String>, pending: PendingTransport, done: Sender<()>) {
    thread::spawn(move || {
        let mut current: Box<dyn Transport> = Box::new(Stdout);
        for line in receiver {
            swap_pending(&pending, &mut current);
            current.send(&line);
        }
        swap_pending(&pending, &mut current);
        current.flush();
        drop(done);
    });
}

/// Installs a transport registered since the last line, flushing the old one.
/// The lock is released before the old transport is flushed.
fn swap_pending(pending: &PendingTransport, current: &mut Box<dyn Transport>) {
    let replacement = pending
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .take();
    if let Some(replacement) = replacement {
        std::mem::replace(current, replacement).flush();
    }
}

/// Builder for configuring a [`Sink`].
pub struct SinkConfig {
    capacity: usize,
    debug: bool,
    pretty: bool,
    audit_mode: bool,
    human_timestamps: bool,
    transport: Option<Box<dyn Transport>>,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            debug: false,
            pretty: false,
            audit_mode: false,
            human_timestamps: false,
            transport: None,
        }
    }
}

impl SinkConfig {
    /// Sets the queue capacity.
    pub fn with_capacity(self, capacity: usize) -> Self {
        Self { capacity, ..self }
    }
    /// Lets debug records through.
    pub fn with_debug(self, yes: bool) -> Self {
        Self { debug: yes, ..self }
    }
    /// Renders records in their indented form.
    pub fn with_pretty_print(self, yes: bool) -> Self {
        Self {
            pretty: yes,
            ..self
        }
    }
    /// Blocks senders instead of dropping when the queue is full.
    pub fn with_audit_mode(self, yes: bool) -> Self {
        Self {
            audit_mode: yes,
            ..self
        }
    }
    /// Derives human readable timestamps on every record.
    pub fn with_human_timestamps(self, yes: bool) -> Self {
        Self {
            human_timestamps: yes,
            ..self
        }
    }
    /// Sets the output target instead of stdout.
    pub fn with_transport<T: Transport + 'static>(self, transport: T) -> Self {
        Self {
            transport: Some(Box::new(transport)),
            ..self
        }
    }
    /// Starts the sink.
    pub fn build<R: Record>(self) -> Sink<R> {
        let Self {
            capacity,
            debug,
            pretty,
            audit_mode,
            human_timestamps,
            transport,
        } = self;
        let sink = Sink::new(capacity);
        sink.enable_debug_logging(debug);
        sink.enable_pretty_print(pretty);
        sink.enable_audit_mode(audit_mode);
        sink.enable_human_timestamps(human_timestamps);
        if let Some(transport) = transport {
            *sink
                .transport
                .lock()
                .unwrap_or_else(PoisonError::into_inner) = Some(transport);
        }
        sink
    }
}

/// Returns a default SinkConfig for configuring a sink.
pub fn sink_config() -> SinkConfig {
    SinkConfig::default()
}

#[cfg(test)]
mod tests {
    use std::{sync::atomic::AtomicUsize, time::Duration};

    use crossbeam_channel::unbounded;

    use super::*;
    use crate::transport::Capture;

    #[derive(Default)]
    struct TestRecord {
        fields: Vec<(String, String)>,
        debug: bool,
    }

    impl TestRecord {
        fn message(text: &str) -> Self {
            let mut record = Self::default();
            record.insert("msg", text.to_string());
            record
        }

        fn debug(text: &str) -> Self {
            Self {
                debug: true,
                ..Self::message(text)
            }
        }

        fn get(&self, key: &str) -> Option<&str> {
            self.fields
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        }
    }

    impl Record for TestRecord {
        type Value = String;

        fn is_debug(&self) -> bool {
            self.debug
        }

        fn insert(&mut self, key: &str, value: String) {
            match self.fields.iter_mut().find(|(k, _)| k == key) {
                Some((_, v)) => *v = value,
                None => self.fields.push((key.to_string(), value)),
            }
        }

        fn attach_human_timestamp(&mut self) {
            if let Some(Ok(nanos)) = self.get("ts").map(str::parse::<i64>) {
                self.insert("human", format!("{}s", nanos / 1_000_000_000));
            }
        }

        fn render(&self) -> String {
            self.fields
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join(",")
        }

        fn render_pretty(&self) -> String {
            self.fields
                .iter()
                .map(|(k, v)| format!("  {k}: {v}"))
                .collect::<Vec<_>>()
                .join("\n")
        }
    }

    /// Transport that reports each line and then waits until released.
    struct Gate {
        entered: Sender<String>,
        release: Receiver<()>,
    }

    /// Returns the gate, the channel reporting lines it received and the
    /// sender whose drop releases it for good.
    fn gate() -> (Gate, Receiver<String>, Sender<()>) {
        let (entered, seen) = unbounded();
        let (open, release) = bounded(0);
        (Gate { entered, release }, seen, open)
    }

    impl Transport for Gate {
        fn send(&mut self, line: &str) {
            self.entered.send(line.to_string()).ok();
            self.release.recv().ok();
        }
    }

    fn capture_sink(capacity: usize) -> (Sink<TestRecord>, Capture) {
        let capture = Capture::default();
        let sink = sink_config()
            .with_capacity(capacity)
            .with_transport(capture.clone())
            .build();
        (sink, capture)
    }

    #[test]
    fn test_fifo_order() {
        let (sink, capture) = capture_sink(1000);
        for i in 0..200 {
            sink.send(&mut TestRecord::message(&format!("{i}")));
        }
        sink.flush().wait();
        let expected: Vec<String> = (0..200).map(|i| format!("msg={i}")).collect();
        assert_eq!(capture.show(), expected);
        assert_eq!(sink.dropped_messages(), 0);
    }

    #[test]
    fn test_concurrent_senders_keep_their_own_order() {
        let capture = Capture::default();
        let sink = Arc::new(
            sink_config()
                .with_audit_mode(true)
                .with_capacity(4)
                .with_transport(capture.clone())
                .build::<TestRecord>(),
        );
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let sink = Arc::clone(&sink);
                thread::spawn(move || {
                    for i in 0..50 {
                        sink.send(&mut TestRecord::message(&format!("{t}-{i}")));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        sink.flush().wait();
        let lines = capture.show();
        assert_eq!(lines.len(), 200);
        for t in 0..4 {
            let own: Vec<_> = lines
                .iter()
                .filter(|l| l.starts_with(&format!("msg={t}-")))
                .cloned()
                .collect();
            let expected: Vec<_> = (0..50).map(|i| format!("msg={t}-{i}")).collect();
            assert_eq!(own, expected);
        }
    }

    #[test]
    fn test_best_effort_drops_when_full() {
        let (transport, seen, open) = gate();
        let sink = Sink::<TestRecord>::new(3);
        sink.override_printer(transport);
        sink.send(&mut TestRecord::message("first"));
        // The consumer is now parked inside the transport with an empty queue.
        assert_eq!(seen.recv().unwrap(), "msg=first");
        for i in 0..4 {
            sink.send(&mut TestRecord::message(&format!("{i}")));
        }
        assert_eq!(sink.dropped_messages(), 1);
        drop(open);
        sink.flush().wait();
        let delivered: Vec<String> = seen.try_iter().collect();
        assert_eq!(delivered, vec!["msg=0", "msg=1", "msg=2"]);
        assert_eq!(sink.dropped_messages(), 1);
    }

    #[test]
    fn test_audit_mode_blocks_instead_of_dropping() {
        let (transport, seen, open) = gate();
        let sink = Arc::new(
            sink_config()
                .with_capacity(1)
                .with_audit_mode(true)
                .with_transport(transport)
                .build::<TestRecord>(),
        );
        sink.send(&mut TestRecord::message("a"));
        assert_eq!(seen.recv().unwrap(), "msg=a");
        sink.send(&mut TestRecord::message("b"));
        let sent = Arc::new(AtomicBool::new(false));
        let blocked = {
            let sink = Arc::clone(&sink);
            let sent = Arc::clone(&sent);
            thread::spawn(move || {
                sink.send(&mut TestRecord::message("c"));
                sent.store(true, Ordering::SeqCst);
            })
        };
        thread::sleep(Duration::from_millis(50));
        assert!(!sent.load(Ordering::SeqCst));
        drop(open);
        blocked.join().unwrap();
        sink.flush().wait();
        let delivered: Vec<String> = seen.try_iter().collect();
        assert_eq!(delivered, vec!["msg=b", "msg=c"]);
        assert_eq!(sink.dropped_messages(), 0);
    }

    #[test]
    fn test_audit_mode_switch_applies_to_later_sends() {
        let (transport, seen, open) = gate();
        let sink = Sink::<TestRecord>::new(1);
        sink.override_printer(transport);
        sink.send(&mut TestRecord::message("a"));
        seen.recv().unwrap();
        sink.send(&mut TestRecord::message("b"));
        sink.send(&mut TestRecord::message("c"));
        assert_eq!(sink.dropped_messages(), 1);
        sink.enable_audit_mode(true);
        drop(open);
        for i in 0..10 {
            sink.send(&mut TestRecord::message(&format!("{i}")));
        }
        sink.flush().wait();
        assert_eq!(seen.try_iter().count(), 11);
        assert_eq!(sink.dropped_messages(), 1);
    }

    #[test]
    fn test_debug_filtering() {
        let (sink, capture) = capture_sink(10);
        sink.send(&mut TestRecord::debug("hidden"));
        sink.enable_debug_logging(true);
        sink.send(&mut TestRecord::debug("shown"));
        sink.flush().wait();
        sink.enable_debug_logging(false);
        sink.send(&mut TestRecord::debug("late"));
        assert_eq!(capture.show(), vec!["msg=shown"]);
    }

    #[test]
    fn test_mutator_veto_only_drops_its_record() {
        let (sink, capture) = capture_sink(10);
        let calls = Arc::new(AtomicUsize::new(0));
        sink.add_mutator(|record: &mut TestRecord| record.get("msg") != Some("M"));
        {
            let calls = Arc::clone(&calls);
            sink.add_mutator(move |_: &mut TestRecord| {
                calls.fetch_add(1, Ordering::SeqCst);
                true
            });
        }
        for text in ["before", "M", "after"] {
            sink.send(&mut TestRecord::message(text));
        }
        sink.flush().wait();
        assert_eq!(capture.show(), vec!["msg=before", "msg=after"]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(sink.dropped_messages(), 0);
    }

    #[test]
    fn test_mutator_can_rewrite_record() {
        let (sink, capture) = capture_sink(10);
        sink.add_mutator(|record: &mut TestRecord| {
            record.insert("msg", "redacted".to_string());
            record.insert("magic", "here".to_string());
            true
        });
        sink.send(&mut TestRecord::message("secret"));
        sink.flush().wait();
        assert_eq!(capture.show(), vec!["msg=redacted,magic=here"]);
    }

    #[test]
    fn test_decorations_last_registration_wins() {
        let (sink, capture) = capture_sink(10);
        sink.add_decoration([("k", "1".to_string()), ("a", "x".to_string())]);
        sink.add_decoration([("k", "2".to_string())]);
        sink.send(&mut TestRecord::message("hi"));
        sink.flush().wait();
        assert_eq!(capture.show(), vec!["msg=hi,k=2,a=x"]);
    }

    #[test]
    fn test_decorations_are_visible_to_mutators() {
        let (sink, capture) = capture_sink(10);
        sink.add_decoration([("env", "test".to_string())]);
        sink.add_mutator(|record: &mut TestRecord| record.get("env") != Some("test"));
        sink.send(&mut TestRecord::message("hi"));
        sink.flush().wait();
        assert!(capture.is_empty());
    }

    #[test]
    fn test_human_timestamps_and_pretty_print() {
        let (sink, capture) = capture_sink(10);
        sink.enable_human_timestamps(true);
        sink.enable_pretty_print(true);
        let mut record = TestRecord::message("hi");
        record.insert("ts", "3000000000".to_string());
        sink.send(&mut record);
        let mut malformed = TestRecord::message("bad");
        malformed.insert("ts", "yesterday".to_string());
        sink.send(&mut malformed);
        sink.flush().wait();
        assert_eq!(
            capture.show(),
            vec![
                "  msg: hi\n  ts: 3000000000\n  human: 3s",
                "  msg: bad\n  ts: yesterday"
            ]
        );
    }

    #[test]
    fn test_flush_is_idempotent() {
        let (sink, capture) = capture_sink(10);
        for i in 0..5 {
            sink.send(&mut TestRecord::message(&format!("{i}")));
        }
        let first = sink.flush();
        let second = sink.flush();
        assert!(second.is_done());
        first.wait();
        second.wait();
        assert!(first.is_done());
        assert_eq!(capture.len(), 5);
    }

    #[test]
    fn test_send_after_flush_is_noop() {
        let (sink, capture) = capture_sink(1);
        sink.send(&mut TestRecord::message("kept"));
        sink.flush().wait();
        let dropped = sink.dropped_messages();
        for _ in 0..10 {
            sink.send(&mut TestRecord::message("ignored"));
        }
        sink.flush().wait();
        assert!(sink.is_shutdown());
        assert_eq!(capture.show(), vec!["msg=kept"]);
        assert_eq!(sink.dropped_messages(), dropped);
    }

    #[test]
    fn test_override_printer_hot_swap() {
        let (first_tx, first_rx) = unbounded::<String>();
        let sink = Sink::<TestRecord>::new(10);
        sink.override_printer(move |line: &str| {
            first_tx.send(line.to_string()).ok();
        });
        sink.send(&mut TestRecord::message("one"));
        assert_eq!(first_rx.recv().unwrap(), "msg=one");
        let capture = Capture::default();
        sink.override_printer(capture.clone());
        sink.send(&mut TestRecord::message("two"));
        sink.flush().wait();
        assert_eq!(capture.show(), vec!["msg=two"]);
        assert!(first_rx.try_recv().is_err());
    }

    #[test]
    fn test_override_printer_does_not_wait_for_stalled_transport() {
        let (transport, seen, open) = gate();
        let sink = Sink::<TestRecord>::new(10);
        sink.override_printer(transport);
        sink.send(&mut TestRecord::message("stuck"));
        assert_eq!(seen.recv().unwrap(), "msg=stuck");
        // The consumer is parked inside the gate.
        let capture = Capture::default();
        sink.override_printer(capture.clone());
        sink.send(&mut TestRecord::message("next"));
        drop(open);
        sink.flush().wait();
        assert_eq!(capture.show(), vec!["msg=next"]);
        assert!(seen.try_recv().is_err());
    }

    #[test]
    fn test_transport_can_swap_itself_out() {
        let sink = Arc::new(Sink::<TestRecord>::new(10));
        let capture = Capture::default();
        let (first_tx, first_rx) = unbounded::<String>();
        {
            let weak = Arc::downgrade(&sink);
            let capture = capture.clone();
            sink.override_printer(move |line: &str| {
                first_tx.send(line.to_string()).ok();
                if let Some(sink) = weak.upgrade() {
                    sink.override_printer(capture.clone());
                }
            });
        }
        sink.send(&mut TestRecord::message("one"));
        assert_eq!(first_rx.recv().unwrap(), "msg=one");
        sink.send(&mut TestRecord::message("two"));
        sink.flush().wait();
        assert_eq!(capture.show(), vec!["msg=two"]);
        assert!(first_rx.try_recv().is_err());
    }

    #[test]
    fn test_registration_during_concurrent_sends() {
        let (sink, capture) = capture_sink(10_000);
        let sink = Arc::new(sink);
        let senders: Vec<_> = (0..4)
            .map(|t| {
                let sink = Arc::clone(&sink);
                thread::spawn(move || {
                    for i in 0..250 {
                        sink.send(&mut TestRecord::message(&format!("{t}-{i}")));
                    }
                })
            })
            .collect();
        let registrar = {
            let sink = Arc::clone(&sink);
            thread::spawn(move || {
                for d in 0..20 {
                    sink.add_decoration([(format!("d{d}"), d.to_string())]);
                    sink.add_mutator(|_: &mut TestRecord| true);
                    thread::yield_now();
                }
            })
        };
        for h in senders {
            h.join().unwrap();
        }
        registrar.join().unwrap();
        sink.flush().wait();
        let lines = capture.show();
        assert_eq!(lines.len(), 1000);
        for line in lines {
            let fields: Vec<&str> = line.split(',').collect();
            assert!(fields[0].starts_with("msg="), "unexpected line {line:?}");
            let expected: Vec<String> = (0..fields.len() - 1)
                .map(|d| format!("d{d}={d}"))
                .collect();
            assert_eq!(fields[1..], expected[..], "unexpected line {line:?}");
        }
    }

    #[test]
    fn test_drop_drains_queue() {
        let capture = Capture::default();
        {
            let sink = Sink::<TestRecord>::new(10);
            sink.override_printer(capture.clone());
            sink.send(&mut TestRecord::message("last words"));
        }
        assert_eq!(capture.show(), vec!["msg=last words"]);
    }

    #[test]
    fn test_zero_capacity_is_raised() {
        let (sink, capture) = capture_sink(0);
        sink.enable_audit_mode(true);
        sink.send(&mut TestRecord::message("a"));
        sink.send(&mut TestRecord::message("b"));
        sink.flush().wait();
        assert_eq!(capture.len(), 2);
    }
}
