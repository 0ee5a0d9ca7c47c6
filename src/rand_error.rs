use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct RandError {
    msg : String,
}

impl RandError {
    pub fn new(msg : &str) -> RandError {
        RandError {
            msg : String::from(msg),
        }
    }
}

impl From<rand::Error> for RandError {
    fn from(e : rand::Error) -> RandError {
        RandError::new(&e.to_string())
    }
}

pub fn to_err(e : RandError) -> super::Error {
    use super::{Error, ErrorKind};
    Error::new(ErrorKind::RandError(e))
}

impl fmt::Display for RandError {
    fn fmt(&self, f : &mut fmt::Formatter) -> fmt::Result {
        write!(f, "random source failed : {}", self.msg)
    }
}
