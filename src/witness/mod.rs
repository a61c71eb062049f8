//! Witness stack serialization: `VarInt(count) || VarStr(item)*`.
//!
//! Items are opaque byte strings. The external (persisted/transmitted) form is
//! standard padded base64 of the raw serialization.

pub mod reader;

use alloc::string::String;
use alloc::vec::Vec;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::compact_size::{compact_size_len, put_compact_size};
use crate::error::{reject, WireError};
use crate::var_str::put_var_str;

pub use reader::WitnessReader;

/// Serializes `items` in order. An empty stack encodes as a single `0x00`.
pub fn serialize<T: AsRef<[u8]>>(items: &[T]) -> Result<Vec<u8>, WireError> {
    match write_items(items) {
        Ok(raw) => Ok(raw),
        Err(e) => reject("witness", items.len(), e),
    }
}

fn write_items<T: AsRef<[u8]>>(items: &[T]) -> Result<Vec<u8>, WireError> {
    let mut cap = compact_size_len(items.len() as u64)?;
    for item in items {
        let len = item.as_ref().len();
        cap += compact_size_len(len as u64)? + len;
    }

    let mut out = Vec::with_capacity(cap);
    put_compact_size(&mut out, items.len() as u64)?;
    for item in items {
        put_var_str(&mut out, item.as_ref())?;
    }
    Ok(out)
}

/// [`serialize`], then standard base64.
pub fn serialize_base64<T: AsRef<[u8]>>(items: &[T]) -> Result<String, WireError> {
    serialize(items).map(|raw| STANDARD.encode(raw))
}

/// Parses a raw witness stack. Bytes after the declared items are ignored.
pub fn deserialize(data: &[u8]) -> Result<Vec<Vec<u8>>, WireError> {
    match collect_items(data) {
        Ok(items) => Ok(items),
        Err(e) => reject("witness", data.len(), e),
    }
}

/// Base64-decodes `text`, then [`deserialize`]s it.
pub fn deserialize_base64(text: &str) -> Result<Vec<Vec<u8>>, WireError> {
    let raw = match STANDARD.decode(text) {
        Ok(raw) => raw,
        Err(_) => return reject("witness-base64", text.len(), WireError::InvalidBase64),
    };
    deserialize(&raw)
}

fn collect_items(data: &[u8]) -> Result<Vec<Vec<u8>>, WireError> {
    let mut reader = WitnessReader::open(data)?;
    let mut items = Vec::with_capacity(reader.capacity_hint());
    while !reader.is_done() {
        items.push(reader.read_item()?.to_vec());
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn empty_stack() {
        let raw = serialize::<Vec<u8>>(&[]).unwrap();
        assert_eq!(raw, vec![0x00]);
        assert_eq!(deserialize(&raw), Ok(Vec::<Vec<u8>>::new()));
        assert_eq!(serialize_base64::<Vec<u8>>(&[]).unwrap(), "AA==");
    }

    #[test]
    fn p2wpkh_shaped_stack() {
        let sig = vec![0x30u8; 72];
        let pubkey = vec![0x02u8; 33];
        let raw = serialize(&[sig.clone(), pubkey.clone()]).unwrap();
        assert_eq!(raw[0], 0x02);
        assert_eq!(raw[1], 72);
        assert_eq!(raw[74], 33);
        assert_eq!(raw.len(), 1 + 1 + 72 + 1 + 33);
        assert_eq!(deserialize(&raw).unwrap(), vec![sig, pubkey]);
    }

    #[test]
    fn base64_round_trip() {
        let items: [&[u8]; 3] = [b"", b"\x01\x02", &[0xffu8; 260]];
        let text = serialize_base64(&items).unwrap();
        let decoded = deserialize_base64(&text).unwrap();
        assert_eq!(decoded.len(), 3);
        for (got, want) in decoded.iter().zip(items.iter()) {
            assert_eq!(got.as_slice(), *want);
        }
    }

    #[test]
    fn known_base64_vector() {
        // Two items: 0x01 and 0x0203.
        assert_eq!(deserialize_base64("AgEBAgID"), Ok(vec![vec![0x01], vec![0x02, 0x03]]));
    }

    #[test]
    fn rejects_bad_base64() {
        assert_eq!(deserialize_base64("not base64!"), Err(WireError::InvalidBase64));
        // URL-safe alphabet is not accepted.
        assert_eq!(deserialize_base64("Af-_"), Err(WireError::InvalidBase64));
    }

    #[test]
    fn truncated_stack() {
        assert_eq!(deserialize(&[]), Err(WireError::EmptyInput));
        assert_eq!(
            deserialize(&[0x03, 0x00, 0x00]),
            Err(WireError::TruncatedInput { needed: 4, available: 3 })
        );
    }

    #[test]
    fn trailing_garbage_is_ignored() {
        let mut raw = serialize(&[[0xaau8, 0xbb]]).unwrap();
        raw.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(deserialize(&raw), Ok(vec![vec![0xaa, 0xbb]]));
    }
}
