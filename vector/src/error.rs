use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    #[error("could not allocate storage for {capacity} elements")]
    AllocationFailed { capacity: usize },

    #[error("capacity overflow while growing from {capacity} elements")]
    CapacityOverflow { capacity: usize },

    #[error("Index {index} out of bounds for array of size {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Cannot pop from empty array")]
    Empty,
}

pub type Result<T> = std::result::Result<T, VectorError>;
