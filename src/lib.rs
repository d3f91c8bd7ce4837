//! A FIFO queue over a singly linked chain of nodes.

mod error;
mod queue;

pub use error::QueueError;
pub use queue::LinkedQueue;
