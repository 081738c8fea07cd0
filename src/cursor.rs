use crate::filter::Filter;
use crate::map::Map;
use crate::skip::Skip;
use crate::stage::Stage;
use crate::take::Take;
use crate::tap::Tap;
use log::{debug, trace};
use std::fmt;

/// Lazy bidirectional cursor over a fixed backing collection
///
/// A cursor owns an ordered collection, a position into it, and an ordered
/// pipeline of deferred stages. Combinators (`map`, `filter`, `tap`, `skip`,
/// `take`) only register stages; nothing is evaluated until a traversal call
/// (`next`, `prev`) or a terminal (`collect`, `some`, `every`, `find`) pulls
/// elements through the pipeline. The backing collection is never resized,
/// reordered, or mutated after construction.
///
/// The cursor is a plain single-threaded value: sharing one across threads
/// requires external mutual exclusion supplied by the caller.
pub struct Cursor<T> {
    elements: Vec<T>,
    position: usize,
    pipeline: Vec<Box<dyn Stage<T>>>,
}

impl<T> Cursor<T> {
    /// Create a cursor over `elements`, positioned at the start with an
    /// empty pipeline
    pub fn new(elements: Vec<T>) -> Self {
        Cursor {
            elements,
            position: 0,
            pipeline: Vec::new(),
        }
    }

    /// Restore the cursor to its initial state: position 0, no pipeline
    ///
    /// The backing collection is kept, so the same data can be traversed
    /// again with a fresh combinator chain.
    pub fn reset(&mut self) {
        debug!(
            "cursor reset (position was {}, {} stages dropped)",
            self.position,
            self.pipeline.len()
        );
        self.position = 0;
        self.pipeline.clear();
    }

    /// True while raw elements remain ahead of the position
    pub fn has_next(&self) -> bool {
        self.position < self.elements.len()
    }

    /// True while raw elements remain behind the position
    pub fn has_prev(&self) -> bool {
        self.position > 0
    }

    /// Preview the raw element `next()` would read, without advancing
    ///
    /// Deliberately asymmetric from `next`/`prev`: the element is returned
    /// as stored, bypassing the pipeline entirely.
    pub fn peek(&self) -> Option<&T> {
        self.elements.get(self.position)
    }
}

impl<T: Clone + 'static> Cursor<T> {
    /// Produce the next pipeline-transformed element moving forward
    ///
    /// Raw elements are read and consumed one at a time; an element the
    /// pipeline discards is skipped silently and the read continues at the
    /// following position. Returns `None` once no remaining raw element
    /// survives the pipeline.
    pub fn next(&mut self) -> Option<T> {
        while self.has_next() {
            let read_at = self.position;
            let raw = self.elements[read_at].clone();
            self.position += 1;
            match self.run_pipeline(raw) {
                Some(value) => return Some(value),
                None => trace!("pipeline discarded raw element at position {read_at}"),
            }
        }
        debug_assert!(!self.has_next(), "forward traversal exited early");
        None
    }

    /// Produce the next pipeline-transformed element moving backward
    ///
    /// Symmetric to `next`: the position is decremented before each read,
    /// and discarded elements are skipped until one survives the pipeline
    /// or the front of the collection is reached.
    pub fn prev(&mut self) -> Option<T> {
        while self.has_prev() {
            self.position -= 1;
            let read_at = self.position;
            let raw = self.elements[read_at].clone();
            match self.run_pipeline(raw) {
                Some(value) => return Some(value),
                None => trace!("pipeline discarded raw element at position {read_at}"),
            }
        }
        debug_assert!(!self.has_prev(), "backward traversal exited early");
        None
    }

    /// Register a transformation stage
    pub fn map<F>(mut self, mapper: F) -> Self
    where
        F: FnMut(T) -> T + 'static,
    {
        self.pipeline.push(Box::new(Map::new(mapper)));
        self
    }

    /// Register a predicate stage that discards non-matching elements
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: FnMut(&T) -> bool + 'static,
    {
        self.pipeline.push(Box::new(Filter::new(predicate)));
        self
    }

    /// Register a side-effect stage that observes elements unchanged
    pub fn tap<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&T) + 'static,
    {
        self.pipeline.push(Box::new(Tap::new(callback)));
        self
    }

    /// Register a stage that discards the first `count` elements reaching it
    ///
    /// Counting happens per stage instance at its pipeline position, so
    /// `skip(3).take(1)` and `take(3).skip(1)` select different elements.
    pub fn skip(mut self, count: usize) -> Self {
        self.pipeline.push(Box::new(Skip::new(count)));
        self
    }

    /// Register a stage that passes only the first `count` elements reaching
    /// it; the quota never replenishes
    pub fn take(mut self, count: usize) -> Self {
        self.pipeline.push(Box::new(Take::new(count)));
        self
    }

    /// Test whether some remaining element satisfies `predicate`
    ///
    /// The predicate is appended to the pipeline as a permanent filter stage
    /// before a single `next()` is attempted. Both effects are observable
    /// afterwards: the position has moved past everything consumed, and the
    /// stage keeps filtering all later traversal. Chained `some` calls
    /// therefore narrow on the already-filtered remainder.
    pub fn some<F>(&mut self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool + 'static,
    {
        self.pipeline.push(Box::new(Filter::new(predicate)));
        self.next().is_some()
    }

    /// Find the first remaining element satisfying `predicate`
    ///
    /// Shares `some`'s contract: the predicate stays registered as a filter
    /// stage after the call returns.
    pub fn find<F>(&mut self, predicate: F) -> Option<T>
    where
        F: FnMut(&T) -> bool + 'static,
    {
        self.pipeline.push(Box::new(Filter::new(predicate)));
        self.next()
    }

    /// Test whether every remaining element satisfies `predicate`
    ///
    /// Terminal: drains forward traversal, stopping at the first failure.
    /// True on an empty remainder. Unlike `some`/`find`, no stage is left
    /// behind in the pipeline.
    pub fn every<F>(&mut self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        while let Some(value) = self.next() {
            if !predicate(&value) {
                return false;
            }
        }
        true
    }

    /// Drain all remaining forward traversal into a `Vec`, encounter order
    ///
    /// Position and pipeline are left as the drain ends; call `reset` to
    /// start over.
    pub fn collect(&mut self) -> Vec<T> {
        let mut output = Vec::new();
        while self.has_next() {
            if let Some(value) = self.next() {
                output.push(value);
            }
        }
        output
    }

    fn run_pipeline(&mut self, raw: T) -> Option<T> {
        let mut value = raw;
        for stage in &mut self.pipeline {
            value = stage.apply(value)?;
        }
        Some(value)
    }
}

impl<T> Default for Cursor<T> {
    fn default() -> Self {
        Cursor::new(Vec::new())
    }
}

impl<T> From<Vec<T>> for Cursor<T> {
    fn from(elements: Vec<T>) -> Self {
        Cursor::new(elements)
    }
}

impl<T> FromIterator<T> for Cursor<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Cursor::new(iter.into_iter().collect())
    }
}

impl<T: fmt::Debug> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("elements", &self.elements)
            .field("position", &self.position)
            .field("stages", &self.pipeline.len())
            .finish()
    }
}
