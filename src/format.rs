// SPDX-License-Identifier: MIT
//! PIQ container format specification
//!
//! Defines the binary layout shared by the writer and the tests.

use std::io::{Read, Write};

/// PIQ format magic bytes
pub const PIQ_MAGIC: &[u8; 4] = b"PIQ!";

/// PIQ format version
pub const PIQ_VERSION: u8 = 1;

/// Header size in bytes (magic + version + chunk count)
pub const PIQ_HEADER_SIZE: usize = 9;

/// PIQ file header (9 bytes, little-endian)
///
/// The chunk count is a signed 32-bit integer, matching the per-chunk
/// length fields that follow the header on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PiqHeader {
    /// Magic bytes: "PIQ!"
    pub magic: [u8; 4],

    /// Format version (currently 1)
    pub version: u8,

    /// Number of chunks following the header
    pub chunk_count: i32,
}

impl PiqHeader {
    /// Create a header declaring `chunk_count` chunks
    pub fn new(chunk_count: i32) -> Self {
        Self {
            magic: *PIQ_MAGIC,
            version: PIQ_VERSION,
            chunk_count,
        }
    }

    /// Parse a header from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, String> {
        if bytes.len() != PIQ_HEADER_SIZE {
            return Err(format!(
                "Header must be {} bytes, got {}",
                PIQ_HEADER_SIZE,
                bytes.len()
            ));
        }

        let magic = bytes[0..4].try_into().unwrap();
        let version = bytes[4];
        let chunk_count = i32::from_le_bytes(bytes[5..9].try_into().unwrap());

        Ok(Self {
            magic,
            version,
            chunk_count,
        })
    }

    /// Validate the header
    pub fn validate(&self) -> Result<(), String> {
        if self.magic != *PIQ_MAGIC {
            return Err("Invalid magic bytes".to_string());
        }

        if self.version != PIQ_VERSION {
            return Err(format!(
                "Unsupported version: expected {}, got {}",
                PIQ_VERSION, self.version
            ));
        }

        if self.chunk_count < 0 {
            return Err(format!("Negative chunk count: {}", self.chunk_count));
        }

        Ok(())
    }

    /// Read a header from a reader
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self, std::io::Error> {
        let mut header = [0u8; PIQ_HEADER_SIZE];
        reader.read_exact(&mut header)?;
        Self::from_bytes(&header)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Convert to bytes for writing
    pub fn to_bytes(&self) -> [u8; PIQ_HEADER_SIZE] {
        let mut bytes = [0u8; PIQ_HEADER_SIZE];

        bytes[0..4].copy_from_slice(&self.magic);
        bytes[4] = self.version;
        bytes[5..9].copy_from_slice(&self.chunk_count.to_le_bytes());

        bytes
    }

    /// Write the header to a writer
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), std::io::Error> {
        writer.write_all(&self.to_bytes())
    }
}
