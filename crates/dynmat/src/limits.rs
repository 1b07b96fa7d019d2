//! Size bounds applied when containers are constructed.
//!
//! The bounds guard against accidental huge allocations coming from
//! malformed input. `Limits::default()` carries the library-wide constants;
//! callers that read sizes from untrusted sources can load tighter limits
//! from a JSON config.
use serde::{Deserialize, Serialize};

use crate::error::{LinalgError, Result};

pub const MAX_VECTOR_SIZE: usize = 100_000_000;
pub const MAX_MATRIX_SIZE: usize = 10_000;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    #[serde(default = "default_max_vector_size")]
    pub max_vector_size: usize,
    #[serde(default = "default_max_matrix_size")]
    pub max_matrix_size: usize,
}

fn default_max_vector_size() -> usize {
    MAX_VECTOR_SIZE
}

fn default_max_matrix_size() -> usize {
    MAX_MATRIX_SIZE
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_vector_size: MAX_VECTOR_SIZE,
            max_matrix_size: MAX_MATRIX_SIZE,
        }
    }
}

impl Limits {
    pub fn new(max_vector_size: usize, max_matrix_size: usize) -> Self {
        Self {
            max_vector_size,
            max_matrix_size,
        }
    }

    /// Rejects limits under which no container could ever be built.
    pub fn validate(&self) -> Result<()> {
        if self.max_vector_size == 0 {
            return Err(LinalgError::InvalidArgument(
                "max_vector_size must be at least 1".to_string(),
            ));
        }
        if self.max_matrix_size == 0 {
            return Err(LinalgError::InvalidArgument(
                "max_matrix_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn check_vector_size(&self, size: usize) -> Result<()> {
        check_size(size, self.max_vector_size)
    }

    pub fn check_matrix_size(&self, size: usize) -> Result<()> {
        check_size(size, self.max_matrix_size)
    }
}

fn check_size(size: usize, max: usize) -> Result<()> {
    if size == 0 || size > max {
        log::trace!("rejecting size {} (max {})", size, max);
        return Err(LinalgError::InvalidSize {
            requested: size,
            max,
        });
    }
    Ok(())
}
