//! # LazySeq - Lazy Sequence Cursor Library
//!
//! A lazy, chainable sequence-transformation library built around a
//! bidirectional cursor over a fixed backing collection.
//!
//! Combinators register deferred pipeline stages; traversal pulls one raw
//! element at a time and pushes it through every stage in registration order
//! before surfacing it. The library emphasizes:
//!
//! - **Zero panics**: exhaustion and filtered-out elements are `None`, never
//!   errors or panics
//! - **Lazy evaluation**: `map`/`filter`/`tap`/`skip`/`take` do no work until
//!   `next`, `prev`, or a terminal operation pulls an element through
//! - **Bidirectional traversal**: the same pipeline serves forward and
//!   backward walks
//! - **Composability**: stages implement one small trait and combine in
//!   registration order

pub mod cursor;
pub mod filter;
pub mod map;
pub mod skip;
pub mod stage;
pub mod take;
pub mod tap;

pub use cursor::Cursor;
pub use filter::Filter;
pub use map::Map;
pub use skip::Skip;
pub use stage::Stage;
pub use take::Take;
pub use tap::Tap;
