/// A log record the sink can decorate, filter and render.
pub trait Record {
    /// Value type accepted by [`Record::insert`], used for decorations.
    type Value: Clone + Send + Sync;

    /// Whether the record is debug level.
    fn is_debug(&self) -> bool;

    /// Attaches `value` under `key`, replacing any previous value.
    fn insert(&mut self, key: &str, value: Self::Value);

    /// Derives a human readable timestamp from the stored timestamp, if any.
    ///
    /// Records without a parseable timestamp must leave themselves untouched.
    fn attach_human_timestamp(&mut self) {}

    /// Compact wire form. Must not fail: encoding errors are rendered into the
    /// returned string instead.
    fn render(&self) -> String;

    /// Indented wire form.
    fn render_pretty(&self) -> String {
        self.render()
    }
}

/// Transforms a record before it is queued.
///
/// Returning `false` discards the record and stops the mutator chain.
pub trait Mutator<R>: Send + Sync {
    fn mutate(&self, record: &mut R) -> bool;
}

impl<R, F> Mutator<R> for F
where
    F: Fn(&mut R) -> bool + Send + Sync,
{
    fn mutate(&self, record: &mut R) -> bool {
        self(record)
    }
}
