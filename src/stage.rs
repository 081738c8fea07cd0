/// Core trait for pipeline stages
///
/// A stage is one registered transformation step in a cursor's pipeline.
/// Traversal feeds each raw element through every registered stage in
/// registration order; the first stage to return `None` ends evaluation for
/// that element and the cursor moves on to the next raw position.
pub trait Stage<T> {
    /// Apply this stage to a single element
    ///
    /// Returns `Some` with the (possibly transformed) value to hand to the
    /// next stage, or `None` to discard the element. Stages may carry their
    /// own mutable state (e.g. skip/take counters), which is why `apply`
    /// takes `&mut self`.
    fn apply(&mut self, value: T) -> Option<T>;
}
