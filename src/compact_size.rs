//! Bitcoin CompactSize (VarInt) encoding for consensus-critical serialization.
//! Used by var_str (item lengths) and witness (item counts).
//!
//! Magnitude is capped at 48 bits: the 0xFF tier carries 6 little-endian bytes
//! followed by two zero bytes instead of a full u64.

use alloc::vec::Vec;

use byteorder::ByteOrder;
use byteorder::LittleEndian;

use crate::error::{reject, reject_value, WireError};

/// Largest value accepted by [`write_compact_size`] (2^48 - 1).
pub const MAX_COMPACT_SIZE: u64 = 0xFFFF_FFFF_FFFF;

const TAG_U16: u8 = 0xfd;
const TAG_U32: u8 = 0xfe;
const TAG_U48: u8 = 0xff;

/// Number of bytes `n` occupies once encoded: 1, 3, 5 or 9.
#[inline]
pub fn compact_size_len(n: u64) -> Result<usize, WireError> {
    if n < 0xfd {
        Ok(1)
    } else if n < 0x1_0000 {
        Ok(3)
    } else if n < 0x1_0000_0000 {
        Ok(5)
    } else if n <= MAX_COMPACT_SIZE {
        Ok(9)
    } else {
        Err(WireError::ValueTooLarge(n))
    }
}

/// Encodes `n` as Bitcoin CompactSize and appends to `buf`.
/// 0–252: 1 byte; 253–0xFFFF: 0xFD + 2B LE; 0x10000–0xFFFFFFFF: 0xFE + 4B LE;
/// up to 2^48 - 1: 0xFF + 6B LE + 2 zero bytes.
///
/// `buf` is left untouched when `n` is out of range.
#[inline]
pub fn write_compact_size(buf: &mut Vec<u8>, n: u64) -> Result<(), WireError> {
    match put_compact_size(buf, n) {
        Ok(()) => Ok(()),
        Err(e) => reject_value("compact-size", n, e),
    }
}

/// Encodes `n` into a fresh buffer.
pub fn encode_compact_size(n: u64) -> Result<Vec<u8>, WireError> {
    let len = match compact_size_len(n) {
        Ok(len) => len,
        Err(e) => return reject_value("compact-size", n, e),
    };
    let mut out = Vec::with_capacity(len);
    put_compact_size(&mut out, n)?;
    Ok(out)
}

/// Decodes Bitcoin CompactSize from the start of `data`.
/// Returns `(value, num_bytes_consumed)`.
#[inline]
pub fn read_compact_size(data: &[u8]) -> Result<(u64, usize), WireError> {
    match parse_compact_size(data) {
        Ok(decoded) => Ok(decoded),
        Err(e) => reject("compact-size", data.len(), e),
    }
}

// Silent workers shared by the composite codecs, which report failures themselves.

pub(crate) fn put_compact_size(buf: &mut Vec<u8>, n: u64) -> Result<(), WireError> {
    if n < 0xfd {
        buf.push(n as u8);
    } else if n < 0x1_0000 {
        buf.push(TAG_U16);
        let mut b = [0u8; 2];
        LittleEndian::write_u16(&mut b, n as u16);
        buf.extend_from_slice(&b);
    } else if n < 0x1_0000_0000 {
        buf.push(TAG_U32);
        let mut b = [0u8; 4];
        LittleEndian::write_u32(&mut b, n as u32);
        buf.extend_from_slice(&b);
    } else if n <= MAX_COMPACT_SIZE {
        buf.push(TAG_U48);
        let mut b = [0u8; 8];
        LittleEndian::write_u48(&mut b[..6], n);
        buf.extend_from_slice(&b);
    } else {
        return Err(WireError::ValueTooLarge(n));
    }
    Ok(())
}

pub(crate) fn parse_compact_size(data: &[u8]) -> Result<(u64, usize), WireError> {
    let Some(&b) = data.first() else {
        return Err(WireError::EmptyInput);
    };
    let consumed = match b {
        TAG_U16 => 3,
        TAG_U32 => 5,
        TAG_U48 => 9,
        _ => return Ok((b as u64, 1)),
    };
    if data.len() < consumed {
        return Err(WireError::TruncatedInput {
            needed: consumed,
            available: data.len(),
        });
    }
    let n = match b {
        TAG_U16 => LittleEndian::read_u16(&data[1..3]) as u64,
        TAG_U32 => LittleEndian::read_u32(&data[1..5]) as u64,
        // Only the low 6 bytes carry value; bytes 7..9 are padding.
        _ => LittleEndian::read_u48(&data[1..7]),
    };
    Ok((n, consumed))
}
