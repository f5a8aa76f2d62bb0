// SPDX-License-Identifier: MIT
//! Streaming PIQ container writer

use crate::format::PiqHeader;
use std::io::Write;

/// Errors that can occur during writing
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Chunk count {0} exceeds the signed 32-bit range")]
    TooManyChunks(usize),

    #[error("Chunk of {0} bytes exceeds the signed 32-bit length field")]
    ChunkTooLarge(usize),

    #[error("Declared {declared} chunks but {written} were written")]
    ChunkCountMismatch { declared: i32, written: i32 },
}

/// Single-pass writer for PIQ containers
///
/// The header is written up front with the declared chunk count, then one
/// length-prefixed chunk per `write_chunk` call, strictly append-only: the
/// writer never seeks or rewrites. The container is structurally complete
/// only once `finish` succeeds; an abandoned writer leaves whatever was
/// already written (header plus a prefix of the chunks) in the underlying
/// sink.
pub struct ContainerWriter<W: Write> {
    inner: W,
    declared: i32,
    written: i32,
}

impl<W: Write> ContainerWriter<W> {
    /// Create a writer over `inner`, declaring `chunk_count` chunks
    ///
    /// The 9-byte header is written immediately. Counts above `i32::MAX`
    /// are rejected rather than wrapped.
    pub fn new(mut inner: W, chunk_count: usize) -> Result<Self, WriteError> {
        let declared =
            i32::try_from(chunk_count).map_err(|_| WriteError::TooManyChunks(chunk_count))?;
        PiqHeader::new(declared).write_to(&mut inner)?;

        Ok(Self {
            inner,
            declared,
            written: 0,
        })
    }

    /// Append one chunk: a 4-byte little-endian signed length followed by
    /// the raw bytes, unmodified
    ///
    /// Chunks longer than `i32::MAX` bytes are rejected rather than letting
    /// the length field wrap.
    pub fn write_chunk(&mut self, data: &[u8]) -> Result<(), WriteError> {
        let len = i32::try_from(data.len()).map_err(|_| WriteError::ChunkTooLarge(data.len()))?;
        self.inner.write_all(&len.to_le_bytes())?;
        self.inner.write_all(data)?;
        self.written += 1;
        Ok(())
    }

    /// Number of chunks written so far
    pub fn chunks_written(&self) -> i32 {
        self.written
    }

    /// Flush and return the inner writer
    ///
    /// Fails if the number of chunks written differs from the declared
    /// count; the header is never rewritten to match.
    pub fn finish(mut self) -> Result<W, WriteError> {
        if self.written != self.declared {
            return Err(WriteError::ChunkCountMismatch {
                declared: self.declared,
                written: self.written,
            });
        }

        self.inner.flush()?;
        Ok(self.inner)
    }
}
