use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn length_mismatch(values_len: usize, counts_len: usize) -> Error {
        Error(
            ErrorKind::LengthMismatch {
                values_len,
                counts_len,
            }
            .into(),
        )
    }

    pub fn unsupported_element_type(type_name: impl Into<String>) -> Error {
        Error(
            ErrorKind::UnsupportedElementType {
                type_name: type_name.into(),
            }
            .into(),
        )
    }

    pub fn window_out_of_bounds(start: u64, width: u64, len: u64) -> Error {
        Error(ErrorKind::WindowOutOfBounds { start, width, len }.into())
    }

    pub fn index_out_of_bounds(index: usize, len: usize) -> Error {
        Error(ErrorKind::IndexOutOfBounds { index, len }.into())
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("values length {values_len} does not match counts length {counts_len}")]
    LengthMismatch {
        values_len: usize,
        counts_len: usize,
    },

    #[error("run-length computation is not implemented for '{type_name}'")]
    UnsupportedElementType { type_name: String },

    #[error("window (start: {start}, width: {width}) exceeds sequence bounds ({len})")]
    WindowOutOfBounds { start: u64, width: u64, len: u64 },

    #[error("index {index} is out of bounds for a sequence of {len} elements")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
