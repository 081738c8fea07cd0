use super::stage::Stage;

/// Pipeline stage that passes only the first `n` elements reaching it
///
/// After the quota is spent every later element yields "no value"; the quota
/// never replenishes for the lifetime of the stage.
pub struct Take {
    remaining: usize,
}

impl Take {
    pub fn new(count: usize) -> Self {
        Take { remaining: count }
    }
}

impl<T> Stage<T> for Take {
    fn apply(&mut self, value: T) -> Option<T> {
        if self.remaining > 0 {
            self.remaining -= 1;
            Some(value)
        } else {
            None
        }
    }
}
