//! Compression for loose objects.
//!
//! Each loose object file holds the object's envelope compressed as a
//! single zlib stream, exactly as command-line git writes it.

use std::io::{self, Write};

use flate2::{
    write::ZlibEncoder, Compression, Decompress, DecompressError, FlushDecompress, Status,
};
use thiserror::Error;

/// Describes why stored bytes could not be decompressed.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid zlib data: {0}")]
    Corrupt(#[from] DecompressError),

    #[error("zlib stream ends early")]
    Truncated,
}

/// Compresses `data` for storage.
pub fn encode(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Reverses `encode`.
///
/// The input must contain a complete zlib stream, through its trailing
/// checksum. Anything that stops short of that is reported as `Truncated`.
pub fn decode(data: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut inflater = Decompress::new(true);
    let mut out = Vec::with_capacity(data.len().saturating_mul(2).max(64));

    loop {
        if out.len() == out.capacity() {
            out.reserve(out.capacity());
        }

        let consumed = inflater.total_in() as usize;
        let produced = inflater.total_out();

        let status =
            inflater.decompress_vec(&data[consumed..], &mut out, FlushDecompress::Finish)?;

        match status {
            Status::StreamEnd => return Ok(out),
            Status::Ok | Status::BufError => {
                let stalled = inflater.total_in() as usize == consumed
                    && inflater.total_out() == produced
                    && out.len() < out.capacity();

                if stalled {
                    return Err(DecodeError::Truncated);
                }
            }
        }
    }
}
