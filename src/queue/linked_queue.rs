use super::node::{Link, Node};
use crate::error::QueueError;

use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;

use tracing::trace;

/// A FIFO queue backed by a singly linked list.
///
/// `head` owns the chain; `tail` aliases its last node so that
/// [`enqueue`](LinkedQueue::enqueue) is O(1). Every operation is O(1)
/// except [`clear`](LinkedQueue::clear) and drop.
pub struct LinkedQueue<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    // invariant: len == 0 <=> head.is_none() <=> tail.is_none()
    _marker: PhantomData<Box<Node<T>>>,
}

unsafe impl<T: Send> Send for LinkedQueue<T> {}
unsafe impl<T: Sync> Sync for LinkedQueue<T> {}

impl<T> LinkedQueue<T> {
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn size(&self) -> usize {
        self.len
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Appends `elem` to the back of the queue.
    pub fn enqueue(&mut self, elem: T) {
        let node_ptr = Node::alloc(elem, None);
        match self.tail {
            None => {
                trace!("linked queue became non-empty");
                self.head = Some(node_ptr);
            }
            Some(mut tail_ptr) => unsafe { tail_ptr.as_mut().set_next(Some(node_ptr)) },
        }
        self.tail = Some(node_ptr);
        self.len += 1;
    }

    /// Removes and returns the longest-waiting element.
    ///
    /// Fails with [`QueueError::Empty`] and leaves the queue untouched
    /// when there is nothing to remove.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        let head_ptr = self.head.ok_or(QueueError::Empty)?;
        let (elem, next) = unsafe { Node::consume(head_ptr) };
        self.head = next;
        self.len -= 1;
        if self.head.is_none() {
            trace!("linked queue drained");
            self.tail = None;
        }
        Ok(elem)
    }

    /// Returns the front element without removing it.
    pub fn first(&self) -> Result<&T, QueueError> {
        match self.head {
            Some(head_ptr) => Ok(unsafe { head_ptr.as_ref() }.elem()),
            None => Err(QueueError::Empty),
        }
    }

    pub fn first_mut(&mut self) -> Result<&mut T, QueueError> {
        match self.head {
            Some(mut head_ptr) => Ok(unsafe { head_ptr.as_mut() }.elem_mut()),
            None => Err(QueueError::Empty),
        }
    }

    pub fn clear(&mut self) {
        let mut link = self.head.take();
        let len = self.len;
        self.tail = None;
        self.len = 0;
        while let Some(ptr) = link {
            let (elem, next) = unsafe { Node::consume(ptr) };
            drop(elem);
            link = next;
        }
        if len != 0 {
            trace!(released = len, "linked queue cleared");
        }
    }
}

impl<T> Drop for LinkedQueue<T> {
    fn drop(&mut self) {
        self.clear()
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.enqueue(elem);
        }
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedQueue")
            .field("len", &self.len)
            .field("first", &self.first().ok())
            .finish()
    }
}
