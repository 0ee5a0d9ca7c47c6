use crate::file_writer::FileWriter;
use crate::general_error::Error;

/// Sink for generated chunks. Each call receives one whole chunk.
pub trait Writer {
    fn write_chunk(&mut self, buf : &[u8]) -> Result<(), Error>;
}

impl Writer for FileWriter {
    fn write_chunk(&mut self, buf : &[u8]) -> Result<(), Error> {
        self.write_all(buf)
    }
}
