//! Type shims: conversions to and from the `bitcoin` and `k256` types that carry
//! the same data. Each half is compiled only with its feature.

#[cfg(feature = "bitcoin")]
mod bitcoin_shim {
    use alloc::vec::Vec;

    use bitcoin::Witness;

    use crate::error::WireError;
    use crate::signature::ScriptSignature;

    /// Builds a `bitcoin::Witness` holding the same items in the same order.
    pub fn to_bitcoin_witness<T: AsRef<[u8]>>(items: &[T]) -> Witness {
        Witness::from_slice(items)
    }

    /// Copies the items out of a `bitcoin::Witness`.
    pub fn from_bitcoin_witness(witness: &Witness) -> Vec<Vec<u8>> {
        witness.to_vec()
    }

    impl ScriptSignature {
        /// Converts a parsed `bitcoin::ecdsa::Signature` (compact r || s + sighash type).
        pub fn from_bitcoin_ecdsa(sig: &bitcoin::ecdsa::Signature) -> Result<Self, WireError> {
            let compact = sig.signature.serialize_compact();
            Self::new(compact, sig.sighash_type.to_u32() as u8)
        }
    }
}

#[cfg(feature = "k256")]
mod k256_shim {
    use k256::ecdsa::Signature;

    use crate::error::{reject, WireError};
    use crate::signature::ScriptSignature;

    impl ScriptSignature {
        /// Interprets `r || s` as a k256 signature. Zero or out-of-range scalars are rejected.
        pub fn to_k256(&self) -> Result<Signature, WireError> {
            match Signature::from_slice(self.signature()) {
                Ok(sig) => Ok(sig),
                Err(_) => reject("k256", self.signature().len(), WireError::InvalidScalar),
            }
        }

        pub fn from_k256(sig: &Signature, hash_type: u8) -> Result<Self, WireError> {
            let mut raw = [0u8; 64];
            raw.copy_from_slice(&sig.to_bytes());
            Self::new(raw, hash_type)
        }
    }
}

#[cfg(feature = "bitcoin")]
pub use bitcoin_shim::*;
