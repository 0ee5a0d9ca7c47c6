use crate::file_error::FileError;
use crate::rand_error::RandError;
use crate::size_utils::SizeError;
use crate::stdout_error::StdoutError;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum ErrorKind {
    FileError(FileError),
    RandError(RandError),
    SizeError(SizeError),
    StdoutError(StdoutError),
    Message(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Error {
    kind : ErrorKind,
}

impl Error {
    pub fn new(kind : ErrorKind) -> Error {
        Error { kind }
    }

    pub fn with_message(msg : &str) -> Error {
        Error {
            kind : ErrorKind::Message(String::from(msg)),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn is_invalid_argument(&self) -> bool {
        match self.kind {
            ErrorKind::SizeError(_) => true,
            _                       => false,
        }
    }
}

impl From<SizeError> for Error {
    fn from(e : SizeError) -> Error {
        Error::new(ErrorKind::SizeError(e))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f : &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ErrorKind::FileError(ref e)   => write!(f, "File error : {}", e),
            ErrorKind::RandError(ref e)   => write!(f, "Random error : {}", e),
            ErrorKind::SizeError(ref e)   => write!(f, "Invalid size : {}", e),
            ErrorKind::StdoutError(ref e) => write!(f, "Output error : {}", e),
            ErrorKind::Message(ref m)     => write!(f, "{}", m),
        }
    }
}

impl std::error::Error for Error {}
