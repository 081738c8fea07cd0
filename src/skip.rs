use super::stage::Stage;

/// Pipeline stage that discards the first `n` elements reaching it
///
/// The counter belongs to this stage instance and counts elements arriving at
/// this pipeline position, not raw collection indices. Once exhausted the
/// stage passes everything through.
pub struct Skip {
    remaining: usize,
}

impl Skip {
    pub fn new(count: usize) -> Self {
        Skip { remaining: count }
    }
}

impl<T> Stage<T> for Skip {
    fn apply(&mut self, value: T) -> Option<T> {
        if self.remaining > 0 {
            self.remaining -= 1;
            None
        } else {
            Some(value)
        }
    }
}
