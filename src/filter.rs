use super::stage::Stage;

/// Pipeline stage that discards elements failing a predicate
///
/// Elements for which the predicate returns `true` pass through unchanged;
/// everything else becomes "no value" and traversal retries at the next raw
/// position.
pub struct Filter<F> {
    predicate: F,
}

impl<F> Filter<F> {
    pub fn new(predicate: F) -> Self {
        Filter { predicate }
    }
}

impl<T, F> Stage<T> for Filter<F>
where
    F: FnMut(&T) -> bool,
{
    fn apply(&mut self, value: T) -> Option<T> {
        if (self.predicate)(&value) {
            Some(value)
        } else {
            None
        }
    }
}
