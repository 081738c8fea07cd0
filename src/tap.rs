use super::stage::Stage;

/// Pipeline stage that runs a side effect and passes the element through
///
/// The callback observes each element reaching this pipeline position. It can
/// never alter the value and never discards it.
pub struct Tap<F> {
    callback: F,
}

impl<F> Tap<F> {
    pub fn new(callback: F) -> Self {
        Tap { callback }
    }
}

impl<T, F> Stage<T> for Tap<F>
where
    F: FnMut(&T),
{
    fn apply(&mut self, value: T) -> Option<T> {
        (self.callback)(&value);
        Some(value)
    }
}
