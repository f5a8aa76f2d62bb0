// SPDX-License-Identifier: MIT
//! Property-based tests using proptest
//!
//! These tests generate many random chunk sequences to check the invariants
//! that must hold for every container the writer produces.

use proptest::prelude::*;

use piq_container::{ContainerWriter, PiqHeader, PIQ_HEADER_SIZE};

/// Strategy for generating chunk sequences (including empty ones)
fn chunks_strategy() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(any::<u8>(), 0..512), 0..16)
}

fn write_container(chunks: &[Vec<u8>]) -> Vec<u8> {
    let mut writer = ContainerWriter::new(Vec::new(), chunks.len()).unwrap();
    for chunk in chunks {
        writer.write_chunk(chunk).unwrap();
    }
    writer.finish().unwrap()
}

fn parse_container(bytes: &[u8]) -> Vec<Vec<u8>> {
    let header = PiqHeader::from_bytes(&bytes[..PIQ_HEADER_SIZE]).unwrap();
    header.validate().unwrap();

    let mut chunks = Vec::new();
    let mut offset = PIQ_HEADER_SIZE;
    for _ in 0..header.chunk_count {
        let len = i32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap());
        offset += 4;
        chunks.push(bytes[offset..offset + len as usize].to_vec());
        offset += len as usize;
    }
    assert_eq!(offset, bytes.len());
    chunks
}

proptest! {
    /// Encoding N chunks and parsing the container yields the same chunks
    /// in the same order
    #[test]
    fn container_round_trips(chunks in chunks_strategy()) {
        let bytes = write_container(&chunks);
        let parsed = parse_container(&bytes);
        prop_assert_eq!(parsed, chunks);
    }

    /// Container size is exactly 9 + sum(4 + len(chunk))
    #[test]
    fn container_size_law(chunks in chunks_strategy()) {
        let bytes = write_container(&chunks);
        let expected = PIQ_HEADER_SIZE + chunks.iter().map(|c| 4 + c.len()).sum::<usize>();
        prop_assert_eq!(bytes.len(), expected);
    }

    /// The declared chunk count always matches the number of chunks written
    #[test]
    fn header_count_matches_chunks(chunks in chunks_strategy()) {
        let bytes = write_container(&chunks);
        let header = PiqHeader::from_bytes(&bytes[..PIQ_HEADER_SIZE]).unwrap();
        prop_assert_eq!(header.chunk_count as usize, chunks.len());
    }
}
