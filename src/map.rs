use super::stage::Stage;

/// Pipeline stage that transforms each element with a mapping function
///
/// `Map` never discards an element on its own: whatever the mapper returns
/// is passed along to the next stage.
pub struct Map<F> {
    mapper: F,
}

impl<F> Map<F> {
    pub fn new(mapper: F) -> Self {
        Map { mapper }
    }
}

impl<T, F> Stage<T> for Map<F>
where
    F: FnMut(T) -> T,
{
    fn apply(&mut self, value: T) -> Option<T> {
        Some((self.mapper)(value))
    }
}
