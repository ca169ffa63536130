//! Forest of binomial trees where two trees of equal degree are combined like a carry in binary
//! addition.

mod list;
mod node;
mod queue;

pub use self::queue::{BinomialQueue, BinomialQueueIntoIter, BinomialQueueIter};
