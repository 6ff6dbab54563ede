//! Error type for heap operations.

use thiserror::Error;

/// Result type for fallible [`MinHeap`](crate::MinHeap) operations.
pub type Result<T> = std::result::Result<T, HeapError>;

/// Errors returned by [`MinHeap`](crate::MinHeap).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// An element was requested from a heap holding zero elements.
    #[error("heap is empty")]
    EmptyContainer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_container_display() {
        assert_eq!(HeapError::EmptyContainer.to_string(), "heap is empty");
    }

    #[test]
    fn empty_container_debug() {
        let dbg = format!("{:?}", HeapError::EmptyContainer);
        assert_eq!(dbg, "EmptyContainer");
    }

    #[test]
    fn implements_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<HeapError>();
    }

    #[test]
    fn converts_into_anyhow() {
        let err: anyhow::Error = HeapError::EmptyContainer.into();
        assert!(err.downcast_ref::<HeapError>().is_some());
    }
}
