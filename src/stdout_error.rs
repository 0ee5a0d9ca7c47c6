use std::fmt;
use std::io;
pub use std::io::ErrorKind;

#[derive(Clone, Debug, PartialEq)]
pub struct StdoutError {
    pub kind : ErrorKind,
}

impl StdoutError {
    pub fn new(kind : ErrorKind) -> StdoutError {
        StdoutError { kind }
    }
}

pub fn to_err(e : StdoutError) -> super::Error {
    use super::{Error, ErrorKind};
    Error::new(ErrorKind::StdoutError(e))
}

impl fmt::Display for StdoutError {
    fn fmt(&self, f : &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ErrorKind::BrokenPipe  => write!(f, "stdout closed"),
            ErrorKind::Interrupted => write!(f, "stdout operation interrupted"),
            kind                   => write!(f, "stdout {}", io::Error::from(kind)),
        }
    }
}
