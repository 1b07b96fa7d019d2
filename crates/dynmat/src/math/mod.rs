//! Heap-backed containers: `DynamicVector` (1D) and `DynamicMatrix`
//! (square 2D, a vector of row vectors).
//!
//! Every container exclusively owns its storage, so clones are deep and
//! moves never reallocate.
pub mod matrix;
pub mod vector;

pub use matrix::DynamicMatrix;
pub use vector::DynamicVector;
