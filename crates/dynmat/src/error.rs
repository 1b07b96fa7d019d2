use std::error::Error;
use std::fmt;
use std::io;

/// Failures raised by vector and matrix operations.
#[derive(Debug)]
pub enum LinalgError {
    /// Requested size is zero or exceeds the configured bound.
    InvalidSize { requested: usize, max: usize },
    /// Checked access outside `[0, size)`.
    OutOfRange { index: usize, size: usize },
    /// Operands of a binary operator disagree on their dimension.
    SizeMismatch { left: usize, right: usize },
    /// A required input was absent or inconsistent with its declared length.
    InvalidArgument(String),
    /// A wide-operand result does not fit the element type.
    NumericCast,
    /// A text token could not be parsed as the element type.
    Parse { position: usize, token: String },
    /// The text input ended before every element was read.
    UnexpectedEof { expected: usize, read: usize },
    Io(io::Error),
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinalgError::InvalidSize { requested, max } => {
                write!(f, "invalid size {}: must be in [1, {}]", requested, max)
            }
            LinalgError::OutOfRange { index, size } => {
                write!(f, "index {} out of range for size {}", index, size)
            }
            LinalgError::SizeMismatch { left, right } => {
                write!(f, "sizes are not equal: {} vs {}", left, right)
            }
            LinalgError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            LinalgError::NumericCast => {
                write!(f, "scalar result is not representable in the element type")
            }
            LinalgError::Parse { position, token } => {
                write!(f, "cannot parse token {:?} at element {}", token, position)
            }
            LinalgError::UnexpectedEof { expected, read } => write!(
                f,
                "input ended after {} of {} expected elements",
                read, expected
            ),
            LinalgError::Io(err) => write!(f, "i/o error: {}", err),
        }
    }
}

impl Error for LinalgError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LinalgError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for LinalgError {
    fn from(err: io::Error) -> Self {
        LinalgError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, LinalgError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_sizes() {
        let err = LinalgError::SizeMismatch { left: 3, right: 5 };
        assert_eq!(err.to_string(), "sizes are not equal: 3 vs 5");

        let err = LinalgError::InvalidSize {
            requested: 0,
            max: 10,
        };
        assert!(err.to_string().contains("[1, 10]"));
    }

    #[test]
    fn io_errors_keep_their_source() {
        let err: LinalgError = io::Error::new(io::ErrorKind::UnexpectedEof, "eof").into();
        assert!(err.source().is_some());
        assert!(LinalgError::NumericCast.source().is_none());
    }
}
