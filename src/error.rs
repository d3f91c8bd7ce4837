use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("queue is empty")]
    Empty,
}

#[cfg(test)]
mod test {
    use super::QueueError;

    #[test]
    fn test_display() {
        assert_eq!(QueueError::Empty.to_string(), "queue is empty");
    }
}
