#[cfg(test)]
#[macro_use]
extern crate quickcheck;
#[cfg(test)]
extern crate tempfile;

extern crate chrono;
extern crate clap;
extern crate rand;

pub mod file_error;
pub mod rand_error;
pub mod stdout_error;

mod general_error;
pub use crate::general_error::Error;
pub use crate::general_error::ErrorKind;

#[macro_use]
mod cli_macros;

pub mod file_utils;
pub mod rand_utils;
pub mod size_utils;
mod time_utils;

mod file_writer;
pub mod writer;

#[cfg(test)]
mod test_utils;

pub mod gen_core;

mod cli_utils;

pub mod cli_gen;
mod cli_gen_tests;
