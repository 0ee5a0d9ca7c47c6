use std::fmt;
use std::str::FromStr;

pub const GIB : u64 = 1024 * 1024 * 1024;

/// Upper bound on the random bytes held in memory at once.
pub const CHUNK_SIZE : usize = 1024 * 1024;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SizeError {
    NotANumber,
    NotFinite,
    Negative,
    TooLarge,
    ZeroChunkSize,
}

impl fmt::Display for SizeError {
    fn fmt(&self, f : &mut fmt::Formatter) -> fmt::Result {
        use self::SizeError::*;
        match *self {
            NotANumber    => write!(f, "size is not a number"),
            NotFinite     => write!(f, "size must be a finite number"),
            Negative      => write!(f, "size must not be negative"),
            TooLarge      => write!(f, "size exceeds the largest representable byte count"),
            ZeroChunkSize => write!(f, "chunk size must be greater than zero"),
        }
    }
}

pub fn parse_size(string : &str) -> Result<f64, SizeError> {
    match f64::from_str(string.trim()) {
        Ok(x)  => { check_size(x)?; Ok(x) },
        Err(_) => Err(SizeError::NotANumber),
    }
}

pub fn check_size(size_in_gibibytes : f64) -> Result<(), SizeError> {
    if !size_in_gibibytes.is_finite() {
        return Err(SizeError::NotFinite);
    }
    if size_in_gibibytes < 0. {
        return Err(SizeError::Negative);
    }

    Ok(())
}

/// Converts a GiB count into a byte count, flooring any fractional byte.
pub fn gib_to_bytes(size_in_gibibytes : f64) -> Result<u64, SizeError> {
    check_size(size_in_gibibytes)?;

    let bytes = (size_in_gibibytes * GIB as f64).floor();

    // 2^64 is exactly representable, anything at or above it does not fit
    if bytes >= 18_446_744_073_709_551_616. {
        return Err(SizeError::TooLarge);
    }

    Ok(bytes as u64)
}

pub fn calc_chunk_count(target_bytes : u64,
                        chunk_size   : usize) -> Result<u64, SizeError> {
    if chunk_size == 0 {
        return Err(SizeError::ZeroChunkSize);
    }

    let chunk_size = chunk_size as u64;

    Ok(target_bytes / chunk_size
       + if target_bytes % chunk_size == 0 { 0 } else { 1 })
}

/// Size of the final chunk, which carries whatever the full chunks leave over.
pub fn calc_last_chunk_size(target_bytes : u64,
                            chunk_size   : usize) -> Result<usize, SizeError> {
    if chunk_size == 0 {
        return Err(SizeError::ZeroChunkSize);
    }

    if target_bytes == 0 {
        return Ok(0);
    }

    match (target_bytes % chunk_size as u64) as usize {
        0 => Ok(chunk_size),
        r => Ok(r),
    }
}
