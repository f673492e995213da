//! GLB binary container
//!
//! Layout (all integers little-endian):
//!
//! ```text
//! header   magic "glTF" | version 2 | total length
//! chunk 0  length | "JSON"   | JSON payload, space padded to 4 bytes
//! chunk 1  length | "BIN\0"  | binary payload, zero padded to 4 bytes
//! ```

use crate::{Error, Result};

/// `glTF` as a little-endian u32.
pub const MAGIC: u32 = 0x4654_6C67;
pub const VERSION: u32 = 2;
pub const CHUNK_JSON: u32 = 0x4E4F_534A;
pub const CHUNK_BIN: u32 = 0x004E_4942;

const HEADER_LEN: usize = 12;
const CHUNK_HEADER_LEN: usize = 8;

/// A decoded GLB container.
#[derive(Debug, Clone, PartialEq)]
pub struct Glb {
    pub version: u32,
    /// JSON chunk payload, including trailing space padding.
    pub json: Vec<u8>,
    /// BIN chunk payload, including trailing zero padding. Empty if absent.
    pub bin: Vec<u8>,
}

fn padded_len(len: usize) -> usize {
    len.div_ceil(4) * 4
}

fn push_chunk(out: &mut Vec<u8>, kind: u32, payload: &[u8], pad: u8) {
    let len = padded_len(payload.len());
    out.extend_from_slice(&(len as u32).to_le_bytes());
    out.extend_from_slice(&kind.to_le_bytes());
    out.extend_from_slice(payload);
    out.resize(out.len() + (len - payload.len()), pad);
}

/// Wrap a JSON document and a binary buffer into a GLB container.
pub fn encode(json: &[u8], bin: &[u8]) -> Vec<u8> {
    let total = HEADER_LEN
        + CHUNK_HEADER_LEN
        + padded_len(json.len())
        + CHUNK_HEADER_LEN
        + padded_len(bin.len());

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(&MAGIC.to_le_bytes());
    out.extend_from_slice(&VERSION.to_le_bytes());
    out.extend_from_slice(&(total as u32).to_le_bytes());
    push_chunk(&mut out, CHUNK_JSON, json, b' ');
    push_chunk(&mut out, CHUNK_BIN, bin, 0);

    debug_assert_eq!(out.len(), total);
    out
}

fn read_u32(bytes: &[u8], offset: usize) -> Result<u32> {
    bytes
        .get(offset..offset + 4)
        .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .ok_or(Error::Truncated(offset))
}

/// Split a GLB container back into its JSON and BIN payloads.
pub fn decode(bytes: &[u8]) -> Result<Glb> {
    if bytes.len() < HEADER_LEN {
        return Err(Error::Truncated(bytes.len()));
    }
    let magic = read_u32(bytes, 0)?;
    if magic != MAGIC {
        return Err(Error::BadMagic(magic));
    }
    let version = read_u32(bytes, 4)?;
    if version != VERSION {
        return Err(Error::UnsupportedVersion(version));
    }
    let total = read_u32(bytes, 8)? as usize;
    if total != bytes.len() {
        return Err(Error::LengthMismatch {
            header: total,
            actual: bytes.len(),
        });
    }

    let mut offset = HEADER_LEN;
    let mut json = None;
    let mut bin = Vec::new();

    while offset < total {
        let len = read_u32(bytes, offset)? as usize;
        let kind = read_u32(bytes, offset + 4)?;
        let start = offset + CHUNK_HEADER_LEN;
        let payload = bytes
            .get(start..start + len)
            .ok_or(Error::Truncated(start))?;

        match (kind, json.is_some()) {
            (CHUNK_JSON, false) => json = Some(payload.to_vec()),
            (CHUNK_JSON, true) => return Err(Error::Chunk("duplicate JSON chunk".into())),
            (_, false) => return Err(Error::Chunk("first chunk must be JSON".into())),
            (CHUNK_BIN, true) if bin.is_empty() => bin = payload.to_vec(),
            // Unknown chunk types are skipped.
            _ => {}
        }
        offset = start + len;
    }

    let json = json.ok_or_else(|| Error::Chunk("missing JSON chunk".into()))?;
    Ok(Glb { version, json, bin })
}
