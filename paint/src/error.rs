//! The common error type for paint operations.

use std::fmt;

/// An error that can occur while looking up, configuring or drawing on a canvas.
#[derive(Debug)]
pub struct Error(Box<ErrorKind>);

#[derive(Debug)]
pub enum ErrorKind {
    /// No element matched the given id or selector.
    NotFound(String),
    /// The element exists but has no 2D drawing context.
    NotACanvas(String),
    /// Nothing is stored in the registry under this id.
    Unset(String),
    /// The registry holds a value of a different type under this id.
    WrongType(String),
    InvalidInput,
    BackendError(Box<dyn std::error::Error>),
}

/// Create a new error of the given kind.
pub fn new_error(kind: ErrorKind) -> Error {
    Error(Box::new(kind))
}

impl Error {
    /// The kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.0
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self.0 {
            ErrorKind::NotFound(ref what) => write!(f, "No element found for {:?}", what),
            ErrorKind::NotACanvas(ref what) => write!(f, "Element {:?} is not a canvas", what),
            ErrorKind::Unset(ref id) => write!(f, "Nothing registered under {:?}", id),
            ErrorKind::WrongType(ref id) => {
                write!(f, "Value registered under {:?} has an unexpected type", id)
            }
            ErrorKind::InvalidInput => write!(f, "Invalid input"),
            ErrorKind::BackendError(ref e) => {
                write!(f, "Backend error: ")?;
                e.fmt(f)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Box<dyn std::error::Error>> for Error {
    fn from(e: Box<dyn std::error::Error>) -> Error {
        new_error(ErrorKind::BackendError(e))
    }
}
