// SPDX-License-Identifier: MIT
//! # PIQ Container
//!
//! A minimal length-prefixed binary container format for bundling a picture
//! sequence (or arbitrary binary payloads) into a single file for downstream
//! decoding.
//!
//! ## Format Overview
//!
//! PIQ trades features for simplicity: a fixed 9-byte header followed by raw
//! length-prefixed chunks. There is no central directory, no per-chunk
//! metadata, no compression, and no checksums. Sequential writing is a
//! single forward-only pass, and total file size is always
//! `9 + sum(4 + len(chunk))`.
//!
//! ## Format Specification
//!
//! ```text
//! PIQ Container Format v1
//! =======================
//!
//! Header (9 bytes, little-endian):
//! - Magic: "PIQ!" (4 bytes)
//! - Version: 1 (1 byte)
//! - Chunk count: i32, N >= 0 (4 bytes)
//!
//! Chunks (N, variable size, in input order):
//! - Length: i32 (4 bytes)
//! - Data: raw bytes, unmodified
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use piq_container::ContainerWriter;
//!
//! // Bundle two payloads into an in-memory container
//! let mut writer = ContainerWriter::new(Vec::new(), 2).unwrap();
//! writer.write_chunk(&[0xFF]).unwrap();
//! writer.write_chunk(&[0x01, 0x02, 0x03]).unwrap();
//!
//! let bytes = writer.finish().unwrap();
//! assert_eq!(&bytes[..5], b"PIQ!\x01");
//! assert_eq!(bytes.len(), 9 + (4 + 1) + (4 + 3));
//! ```
//!
//! For file bundling, `resolve_inputs` expands a glob pattern into a
//! deterministically ordered path list (sorted by path string, independent
//! of directory enumeration order) and the `makepiq` binary drives the
//! writer over it.

pub mod format;
pub mod resolver;
pub mod writer;

// Re-export main types
pub use format::PiqHeader;
pub use format::{PIQ_HEADER_SIZE, PIQ_MAGIC, PIQ_VERSION};
pub use resolver::{resolve_inputs, ResolveError};
pub use writer::{ContainerWriter, WriteError};
