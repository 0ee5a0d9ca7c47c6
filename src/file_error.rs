pub use std::io::ErrorKind;
use std::fmt;
use std::io;

#[derive(Clone, Debug, PartialEq)]
pub struct FileError {
    pub kind : ErrorKind,
    path     : String,
}

impl FileError {
    pub fn new(kind : ErrorKind, path : &str) -> FileError {
        FileError {
            kind,
            path : String::from(path),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

pub fn to_err(e : FileError) -> super::Error {
    use super::{Error, ErrorKind};
    Error::new(ErrorKind::FileError(e))
}

impl fmt::Display for FileError {
    fn fmt(&self, f : &mut fmt::Formatter) -> fmt::Result {
        use self::ErrorKind::*;
        match self.kind {
            NotFound          => write!(f, "file \"{}\" not found (missing directory?)", self.path),
            PermissionDenied  => write!(f, "file \"{}\" permission denied", self.path),
            AlreadyExists     => write!(f, "file \"{}\" already exists", self.path),
            InvalidInput      => write!(f, "file \"{}\" invalid path", self.path),
            TimedOut          => write!(f, "file \"{}\" operation timed out", self.path),
            WriteZero         => write!(f, "file \"{}\" failed write", self.path),
            Interrupted       => write!(f, "file \"{}\" operation interrupted", self.path),
            UnexpectedEof     => write!(f, "file \"{}\" unexpected EOF", self.path),
            Other             => write!(f, "file \"{}\" unknown error", self.path),
            kind              => write!(f, "file \"{}\" {}", self.path, io::Error::from(kind)),
        }
    }
}
