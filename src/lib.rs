//! A singly linked list anchored by a sentinel node.
//!
//! [`SequentialList`] keeps its nodes in an owned arena and links them by
//! index, with an O(1) tail cursor for `push_back`. Positional and
//! predicate-based operations walk from the head.
//!
//! Heads up: [`SequentialList::front`] returns the **last** element and
//! [`SequentialList::back`] returns the **first**.
//!
//! The list does no locking. Share it between threads by wrapping it in a
//! `Mutex` yourself.

mod errors;
mod iter;
mod logger;
mod node;
mod seq_list;

pub use errors::ListError;
pub use iter::{IntoIter, Iter};
pub use logger::setup_logger;
pub use seq_list::SequentialList;
