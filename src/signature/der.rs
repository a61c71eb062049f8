// src/signature/der.rs
//
// Strict DER (BIP66) parsing and encoding of `0x30 len 0x02 lenR R 0x02 lenS S` plus
// the trailing hash type byte carried by script pushes.

use alloc::vec::Vec;

use crate::error::{reject, WireError};
use crate::signature::{ScriptSignature, SigHashType};

/// Minimum DER payload length (hash type excluded).
pub const MIN_DER_PAYLOAD_LEN: usize = 8;
/// Maximum DER payload length (hash type excluded).
pub const MAX_DER_PAYLOAD_LEN: usize = 72;

const TAG_SEQUENCE: u8 = 0x30;
const TAG_INTEGER: u8 = 0x02;

/// Decodes `DER || hashType` into a raw 64-byte `r || s` and the hash type.
///
/// The input is never modified; R and S are copied out.
pub fn decode(buffer: &[u8]) -> Result<ScriptSignature, WireError> {
    match decode_inner(buffer) {
        Ok(sig) => Ok(sig),
        Err(e) => reject("der-signature", buffer.len(), e),
    }
}

/// True when `buffer` passes every check in [`decode`].
pub fn is_valid_encoding(buffer: &[u8]) -> bool {
    decode_inner(buffer).is_ok()
}

fn decode_inner(buffer: &[u8]) -> Result<ScriptSignature, WireError> {
    let Some((&hash_type, payload)) = buffer.split_last() else {
        return Err(WireError::TooShort);
    };
    let sighash_type = SigHashType::try_from(hash_type)?;

    let (r, s) = check_strict_der(payload)?;
    let mut signature = [0u8; 64];
    signature[..32].copy_from_slice(&to_u256(r));
    signature[32..].copy_from_slice(&to_u256(s));

    Ok(ScriptSignature {
        signature,
        hash_type,
        sighash_type,
    })
}

/// Runs the BIP66 checks in order and returns views of R and S.
/// Each offset is only read once the length fields guarding it have passed.
fn check_strict_der(der: &[u8]) -> Result<(&[u8], &[u8]), WireError> {
    let len = der.len();
    if len < MIN_DER_PAYLOAD_LEN {
        return Err(WireError::TooShort);
    }
    if len > MAX_DER_PAYLOAD_LEN {
        return Err(WireError::TooLong);
    }
    if der[0] != TAG_SEQUENCE {
        return Err(WireError::ExpectedSequence);
    }
    if der[1] as usize != len - 2 {
        return Err(WireError::InvalidSequenceLength);
    }
    if der[2] != TAG_INTEGER {
        return Err(WireError::ExpectedInteger);
    }

    let len_r = der[3] as usize;
    if len_r == 0 {
        return Err(WireError::RLengthZero);
    }
    if 5 + len_r >= len {
        return Err(WireError::RLengthTooLong);
    }
    if der[4 + len_r] != TAG_INTEGER {
        return Err(WireError::ExpectedInteger2);
    }

    let len_s = der[5 + len_r] as usize;
    if len_s == 0 {
        return Err(WireError::SLengthZero);
    }
    if 6 + len_r + len_s != len {
        return Err(WireError::SLengthInvalid);
    }

    if der[4] & 0x80 != 0 {
        return Err(WireError::RNegative);
    }
    if len_r > 1 && der[4] == 0x00 && der[5] & 0x80 == 0 {
        return Err(WireError::RExcessivelyPadded);
    }
    if der[len_r + 6] & 0x80 != 0 {
        return Err(WireError::SNegative);
    }
    if len_s > 1 && der[len_r + 6] == 0x00 && der[len_r + 7] & 0x80 == 0 {
        return Err(WireError::SExcessivelyPadded);
    }

    Ok((&der[4..4 + len_r], &der[6 + len_r..6 + len_r + len_s]))
}

/// Fits a DER integer into 32 big-endian bytes: drop one 0x00 sign guard,
/// then left-pad, or keep the low-order 32 bytes if still longer.
fn to_u256(int: &[u8]) -> [u8; 32] {
    let int = match int {
        [0x00, rest @ ..] => rest,
        _ => int,
    };
    let mut out = [0u8; 32];
    if int.len() > 32 {
        out.copy_from_slice(&int[int.len() - 32..]);
    } else {
        out[32 - int.len()..].copy_from_slice(int);
    }
    out
}

/// Minimal DER integer body for a 32-byte big-endian value.
/// Leading zeros go, a 0x00 guard is added when the top bit is set, zero is `00`.
fn to_der_int(value: &[u8; 32]) -> Vec<u8> {
    let start = value.iter().position(|&b| b != 0).unwrap_or(31);
    let trimmed = &value[start..];
    let mut out = Vec::with_capacity(33);
    if trimmed[0] & 0x80 != 0 {
        out.push(0x00);
    }
    out.extend_from_slice(trimmed);
    out
}

/// Encodes a raw `r || s` signature and hash type as strict `DER || hashType`.
pub fn encode(signature: &[u8; 64], hash_type: u8) -> Result<Vec<u8>, WireError> {
    match SigHashType::try_from(hash_type) {
        Ok(_) => Ok(encode_unchecked(signature, hash_type)),
        Err(e) => reject("der-encode", signature.len(), e),
    }
}

pub(crate) fn encode_unchecked(signature: &[u8; 64], hash_type: u8) -> Vec<u8> {
    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&signature[..32]);
    s.copy_from_slice(&signature[32..]);
    encode_der(&to_der_int(&r), &to_der_int(&s), hash_type)
}

// Integer bodies are at most 33 bytes, so every length fits in one byte.
fn encode_der(r: &[u8], s: &[u8], hash_type: u8) -> Vec<u8> {
    let body_len = 2 + r.len() + 2 + s.len();
    let mut out = Vec::with_capacity(2 + body_len + 1);
    out.push(TAG_SEQUENCE);
    out.push(body_len as u8);
    out.push(TAG_INTEGER);
    out.push(r.len() as u8);
    out.extend_from_slice(r);
    out.push(TAG_INTEGER);
    out.push(s.len() as u8);
    out.extend_from_slice(s);
    out.push(hash_type);
    out
}
