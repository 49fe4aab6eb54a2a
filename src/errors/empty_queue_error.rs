use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Queue is empty")]
pub(crate) struct EmptyQueueError;
