//! VarStr: a CompactSize length prefix followed by that many opaque bytes.

use alloc::vec::Vec;

use crate::compact_size::{compact_size_len, parse_compact_size, put_compact_size};
use crate::error::{reject, WireError};

/// Appends `VarInt(bytes.len()) || bytes` to `buf`.
#[inline]
pub fn write_var_str(buf: &mut Vec<u8>, bytes: &[u8]) -> Result<(), WireError> {
    match put_var_str(buf, bytes) {
        Ok(()) => Ok(()),
        Err(e) => reject("var-str", bytes.len(), e),
    }
}

pub fn encode_var_str(bytes: &[u8]) -> Result<Vec<u8>, WireError> {
    let header_len = match compact_size_len(bytes.len() as u64) {
        Ok(len) => len,
        Err(e) => return reject("var-str", bytes.len(), e),
    };
    let mut out = Vec::with_capacity(header_len + bytes.len());
    put_var_str(&mut out, bytes)?;
    Ok(out)
}

/// Decodes a VarStr from the start of `data`.
/// Returns a view of the payload and the total bytes consumed (header + payload).
#[inline]
pub fn read_var_str(data: &[u8]) -> Result<(&[u8], usize), WireError> {
    match parse_var_str(data) {
        Ok(decoded) => Ok(decoded),
        Err(e) => reject("var-str", data.len(), e),
    }
}

/// Owned variant of [`read_var_str`]; trailing bytes are ignored.
pub fn decode_var_str(data: &[u8]) -> Result<Vec<u8>, WireError> {
    read_var_str(data).map(|(bytes, _)| bytes.to_vec())
}

pub(crate) fn put_var_str(buf: &mut Vec<u8>, bytes: &[u8]) -> Result<(), WireError> {
    put_compact_size(buf, bytes.len() as u64)?;
    buf.extend_from_slice(bytes);
    Ok(())
}

pub(crate) fn parse_var_str(data: &[u8]) -> Result<(&[u8], usize), WireError> {
    let (len, header_len) = parse_compact_size(data)?;
    let rest = &data[header_len..];
    // len <= 2^48 - 1, so it only fails to fit on 32-bit targets; treat that as truncation.
    let needed = usize::try_from(len).map_err(|_| WireError::TruncatedInput {
        needed: usize::MAX,
        available: data.len(),
    })?;
    if rest.len() < needed {
        return Err(WireError::TruncatedInput {
            needed: header_len.saturating_add(needed),
            available: data.len(),
        });
    }
    Ok((&rest[..needed], header_len + needed))
}
