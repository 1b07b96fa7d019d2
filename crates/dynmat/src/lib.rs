//! dynmat: dynamic vectors and square matrices with value semantics.
//!
//! The crate provides a fixed-length numeric vector over an exclusively
//! owned buffer and a square matrix composed of such vectors, with
//! bounds-checked access, elementwise and linear-algebra operators, and a
//! plain whitespace-separated text format.
//!
//! Every failing operation returns a `LinalgError` and produces no partial
//! result.
pub mod error;
pub mod io;
pub mod limits;
pub mod math;
pub mod scalar;

pub use error::{LinalgError, Result};
pub use io::TokenReader;
pub use limits::{Limits, MAX_MATRIX_SIZE, MAX_VECTOR_SIZE};
pub use math::{DynamicMatrix, DynamicVector};
pub use scalar::Scalar;
