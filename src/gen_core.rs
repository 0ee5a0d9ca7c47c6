use std::cmp::min;
use std::fmt;
use std::io;
use std::io::Write;

use rand::rngs::OsRng;
use rand::RngCore;

use crate::file_writer::FileWriter;
use crate::general_error::Error;
use crate::rand_utils;
use crate::size_utils;
use crate::size_utils::CHUNK_SIZE;
use crate::stdout_error::{to_err, StdoutError};
use crate::time_utils;
use crate::writer::Writer;

pub const DEFAULT_OUT_FILE : &str = "random_1gb_file.bin";

pub const DEFAULT_SIZE_IN_GIBIBYTES : f64 = 1.;

#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    pub out_file          : String,
    pub size_in_gibibytes : f64,
    pub size_text         : String,
    pub chunk_size        : usize,
}

impl Param {
    pub fn new(out_file          : &str,
               size_in_gibibytes : f64) -> Param {
        Param {
            out_file : String::from(out_file),
            size_in_gibibytes,
            size_text  : format!("{}", size_in_gibibytes),
            chunk_size : CHUNK_SIZE,
        }
    }

    /// Size as the user typed it, used verbatim in the completion notice.
    pub fn with_size_text(mut self, size_text : &str) -> Param {
        self.size_text = String::from(size_text);
        self
    }

    pub fn with_chunk_size(mut self, chunk_size : usize) -> Param {
        self.chunk_size = chunk_size;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stats {
    pub target_bytes   : u64,
    pub bytes_written  : u64,
    pub chunks_written : u64,
    pub chunk_size     : usize,
    start_time         : f64,
    end_time           : f64,
}

impl Stats {
    fn new(param : &Param, target_bytes : u64) -> Stats {
        Stats {
            target_bytes,
            bytes_written  : 0,
            chunks_written : 0,
            chunk_size     : param.chunk_size,
            start_time     : time_utils::get_time_now(),
            end_time       : 0.,
        }
    }

    pub fn time_elapsed(&self) -> f64 {
        self.end_time - self.start_time
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f : &mut fmt::Formatter) -> fmt::Result {
        let time_elapsed = self.time_elapsed() as i64;

        writeln!(f, "Target size                  : {} bytes", self.target_bytes)?;
        writeln!(f, "Bytes written                : {}", self.bytes_written)?;
        writeln!(f, "Chunks written               : {}", self.chunks_written)?;
        writeln!(f, "Chunk size                   : {} bytes", self.chunk_size)?;
        write!(f,   "Time elapsed                 : {}", time_utils::format_hms(time_elapsed))
    }
}

pub fn completion_message(param : &Param) -> String {
    format!("File '{}' of {}GB has been created.", param.out_file, param.size_text)
}

/// Writes `target_bytes` random bytes to `writer`, at most `chunk_size` bytes
/// per write, returning the number of chunks written.
///
/// Every chunk is handed to the writer in one call. All chunks are
/// `chunk_size` bytes except the last, which carries the remainder.
pub fn write_random_chunks<W, R>(writer       : &mut W,
                                 rng          : &mut R,
                                 target_bytes : u64,
                                 chunk_size   : usize)
                                 -> Result<u64, Error>
    where W : Writer,
          R : RngCore
{
    let chunk_count     = size_utils::calc_chunk_count(target_bytes, chunk_size)?;
    let last_chunk_size = size_utils::calc_last_chunk_size(target_bytes, chunk_size)?;

    let mut buffer : Vec<u8> =
        vec![0u8; min(chunk_size as u64, target_bytes) as usize];

    for chunk_index in 0..chunk_count {
        let n =
            if chunk_index + 1 == chunk_count {
                last_chunk_size
            } else {
                chunk_size
            };

        let chunk = &mut buffer[..n];

        rand_utils::fill_random_bytes(rng, chunk)?;

        writer.write_chunk(chunk)?;
    }

    Ok(chunk_count)
}

pub fn gen_file(param : &Param) -> Result<Stats, Error> {
    // reject bad sizes before the output file is touched
    let target_bytes = size_utils::gib_to_bytes(param.size_in_gibibytes)?;
    size_utils::calc_chunk_count(target_bytes, param.chunk_size)?;

    let mut stats = Stats::new(param, target_bytes);

    let mut writer = FileWriter::new(&param.out_file)?;

    stats.chunks_written =
        write_random_chunks(&mut writer,
                            &mut OsRng,
                            target_bytes,
                            param.chunk_size)?;

    stats.bytes_written = writer.get_file_size()?;

    writer.close()?;

    stats.end_time = time_utils::get_time_now();

    Ok(stats)
}

/// Runs `gen_file` and, only if it succeeds, writes the completion notice
/// to `output`.
pub fn gen_file_and_report<O : Write>(param  : &Param,
                                      output : &mut O) -> Result<Stats, Error> {
    let stats = gen_file(param)?;

    match writeln!(output, "{}", completion_message(param)) {
        Ok(()) => Ok(stats),
        Err(e) => Err(to_err(StdoutError::new(e.kind()))),
    }
}

/// Writes `floor(size_in_gibibytes * 1024^3)` random bytes to `out_file` and
/// prints a completion notice on success.
pub fn write_random_file(out_file          : &str,
                         size_in_gibibytes : f64) -> Result<Stats, Error> {
    gen_file_and_report(&Param::new(out_file, size_in_gibibytes),
                        &mut io::stdout())
}
