use crate::file_error::{to_err, FileError};
use crate::general_error::Error;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::Write;

pub struct FileWriter {
    file : File,
    path : String,
}

impl FileWriter {
    /// Creates `path`, or truncates it if it already exists.
    /// Parent directories are never created.
    pub fn new(path : &str) -> Result<FileWriter, Error> {
        let file =
            OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path);
        let file = match file {
            Ok(f)  => f,
            Err(e) => { return Err(to_err(FileError::new(e.kind(), path))); }
        };
        Ok(FileWriter {
            file,
            path : String::from(path),
        })
    }

    pub fn write_all(&mut self, buf : &[u8]) -> Result<(), Error> {
        match self.file.write_all(buf) {
            Ok(()) => Ok(()),
            Err(e) => Err(to_err(FileError::new(e.kind(), &self.path)))
        }
    }

    pub fn get_file_size(&self) -> Result<u64, Error> {
        match self.file.metadata() {
            Ok(m)  => Ok(m.len()),
            Err(e) => Err(to_err(FileError::new(e.kind(), &self.path)))
        }
    }

    /// Syncs the written data to storage and releases the handle, so
    /// write-back failures surface here. Dropping the writer without calling
    /// this still closes the file, but such errors are lost.
    pub fn close(self) -> Result<(), Error> {
        match self.file.sync_all() {
            Ok(()) => Ok(()),
            Err(e) => Err(to_err(FileError::new(e.kind(), &self.path)))
        }
    }
}
