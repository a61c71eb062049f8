//! Script-pushed ECDSA signatures: strict DER plus a trailing hash type byte.
//!
//! Decoding yields a fixed 64-byte `r || s` (each half big-endian, zero-padded)
//! and the hash type with its ANYONECANPAY bit preserved. No curve arithmetic
//! happens here; [`ScriptSignature::is_low_s`] is a plain byte comparison.

use core::fmt;

use alloc::vec::Vec;

use crate::error::{reject, WireError};

pub mod der;

pub use der::{decode, encode, is_valid_encoding, MAX_DER_PAYLOAD_LEN, MIN_DER_PAYLOAD_LEN};

/// SIGHASH_ANYONECANPAY modifier bit.
pub const SIGHASH_ANYONECANPAY: u8 = 0x80;

/// Half the secp256k1 group order, big-endian. S above this is "high".
const HALF_CURVE_ORDER: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d, 0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b,
    0x20, 0xa0,
];

/// Base signature hash type, i.e. the hash type with ANYONECANPAY masked off.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SigHashType {
    All = 0x01,
    None = 0x02,
    Single = 0x03,
}

impl SigHashType {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl core::convert::TryFrom<u8> for SigHashType {
    type Error = WireError;
    fn try_from(byte: u8) -> Result<Self, WireError> {
        match byte & !SIGHASH_ANYONECANPAY {
            0x01 => Ok(SigHashType::All),
            0x02 => Ok(SigHashType::None),
            0x03 => Ok(SigHashType::Single),
            _ => Err(WireError::InvalidHashType(byte)),
        }
    }
}

/// A decoded script signature: raw `r || s` plus the full hash type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScriptSignature {
    signature: [u8; 64],
    hash_type: u8,
    sighash_type: SigHashType,
}

impl ScriptSignature {
    /// Builds from a raw `r || s`. Fails if the hash type is not 1..=3 (ignoring 0x80).
    pub fn new(signature: [u8; 64], hash_type: u8) -> Result<Self, WireError> {
        match SigHashType::try_from(hash_type) {
            Ok(sighash_type) => Ok(Self { signature, hash_type, sighash_type }),
            Err(e) => reject("script-signature", signature.len(), e),
        }
    }

    pub fn signature(&self) -> &[u8; 64] {
        &self.signature
    }

    pub fn r(&self) -> [u8; 32] {
        let mut r = [0u8; 32];
        r.copy_from_slice(&self.signature[..32]);
        r
    }

    pub fn s(&self) -> [u8; 32] {
        let mut s = [0u8; 32];
        s.copy_from_slice(&self.signature[32..]);
        s
    }

    pub fn hash_type(&self) -> u8 {
        self.hash_type
    }

    /// Base hash type, resolved once when the signature was built.
    pub fn sighash_type(&self) -> SigHashType {
        self.sighash_type
    }

    pub fn anyone_can_pay(&self) -> bool {
        self.hash_type & SIGHASH_ANYONECANPAY != 0
    }

    /// S is at most half the curve order (BIP62/BIP146 canonical form).
    pub fn is_low_s(&self) -> bool {
        // Equal-length big-endian arrays compare numerically.
        self.s() <= HALF_CURVE_ORDER
    }

    pub fn ensure_low_s(&self) -> Result<(), WireError> {
        if self.is_low_s() {
            Ok(())
        } else {
            Err(WireError::HighS)
        }
    }

    /// Re-encodes as minimal strict `DER || hashType`.
    pub fn to_der(&self) -> Vec<u8> {
        der::encode_unchecked(&self.signature, self.hash_type)
    }

    pub fn into_parts(self) -> ([u8; 64], u8) {
        (self.signature, self.hash_type)
    }
}

/// Hex of the canonical `DER || hashType` form, as it appears in a script.
impl fmt::Display for ScriptSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_der()))
    }
}
