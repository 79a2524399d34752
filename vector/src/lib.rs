pub mod constants;
pub mod error;
pub mod vector;

pub use error::{Result, VectorError};
pub use vector::DynamicArray;
