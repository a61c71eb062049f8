//! Conformance tests: fixture vectors for strict-DER signatures and witness stacks.

mod common;

use bitwire::signature::{decode, is_valid_encoding};
use bitwire::witness::{deserialize, deserialize_base64, serialize, serialize_base64};
use bitwire::SigHashType;

use common::{decode_hex, error_name, load_der_vectors, load_witness_vectors};

#[test]
fn der_valid_vectors_decode_to_expected_r_and_s() {
    let vectors = load_der_vectors();
    assert!(!vectors.valid.is_empty(), "fixture must carry valid signatures");

    for v in &vectors.valid {
        let bytes = decode_hex(&v.hex);
        assert!(
            (9..=73).contains(&bytes.len()),
            "{}: fixture length {} outside 9..=73",
            v.description,
            bytes.len()
        );
        let sig = decode(&bytes).unwrap_or_else(|e| panic!("{}: {}", v.description, e));

        assert_eq!(hex::encode(sig.r()), v.r, "{}: R", v.description);
        assert_eq!(hex::encode(sig.s()), v.s, "{}: S", v.description);
        assert_eq!(&sig.signature()[..32], sig.r().as_slice());
        assert_eq!(&sig.signature()[32..], sig.s().as_slice());
        assert_eq!(sig.hash_type(), v.hash_type, "{}: hash type", v.description);

        // Fixtures are canonical DER, so re-encoding reproduces them.
        assert_eq!(sig.to_der(), bytes, "{}: re-encode", v.description);
        assert_eq!(sig.to_string(), v.hex, "{}: display", v.description);
        assert!(is_valid_encoding(&bytes));
    }
}

#[test]
fn der_invalid_vectors_fail_with_matching_error() {
    let vectors = load_der_vectors();
    for v in &vectors.invalid {
        let bytes = decode_hex(&v.hex);
        let err = decode(&bytes).expect_err(&v.description);
        assert_eq!(error_name(&err), v.error, "{}: got {:?}", v.description, err);
        assert!(!is_valid_encoding(&bytes));
    }
}

#[test]
fn der_hash_type_modifier_is_preserved() {
    let vectors = load_der_vectors();
    let guarded = vectors
        .valid
        .iter()
        .find(|v| v.hash_type == 0x83)
        .expect("fixture with SINGLE|ANYONECANPAY");
    let sig = decode(&decode_hex(&guarded.hex)).unwrap();
    assert_eq!(sig.hash_type(), 0x83);
    assert_eq!(sig.sighash_type(), SigHashType::Single);
    assert!(sig.anyone_can_pay());
}

#[test]
fn der_decode_does_not_touch_input() {
    let vectors = load_der_vectors();
    let bytes = decode_hex(&vectors.valid[0].hex);
    let before = bytes.clone();
    let _ = decode(&bytes).unwrap();
    assert_eq!(bytes, before);
}

#[test]
fn witness_vectors_serialize_exactly() {
    for v in load_witness_vectors() {
        let items: Vec<Vec<u8>> = v.items.iter().map(|i| decode_hex(i)).collect();

        let raw = serialize(&items).unwrap_or_else(|e| panic!("{}: {}", v.description, e));
        assert_eq!(hex::encode(&raw), v.hex, "{}: raw bytes", v.description);
        assert_eq!(serialize_base64(&items).unwrap(), v.base64, "{}: base64", v.description);

        assert_eq!(deserialize(&raw).unwrap(), items, "{}: raw decode", v.description);
        assert_eq!(
            deserialize_base64(&v.base64).unwrap(),
            items,
            "{}: base64 decode",
            v.description
        );
    }
}

#[test]
fn witness_with_fd_tier_item_uses_three_byte_length() {
    let vectors = load_witness_vectors();
    let mixed = vectors
        .iter()
        .find(|v| v.items.iter().any(|i| i.len() / 2 >= 253))
        .expect("fixture with an item of 253+ bytes");
    let raw = decode_hex(&mixed.hex);
    // The 253-byte item carries header fd fd 00.
    let needle = [0xfd, 0xfd, 0x00];
    assert!(raw.windows(3).any(|w| w == needle));
}

#[test]
fn witness_truncated_anywhere_is_rejected() {
    let vectors = load_witness_vectors();
    let v = vectors
        .iter()
        .find(|v| v.items.len() >= 2)
        .expect("multi-item fixture");
    let raw = decode_hex(&v.hex);
    for cut in 0..raw.len() {
        assert!(
            deserialize(&raw[..cut]).is_err(),
            "{}: prefix of {} bytes must not decode",
            v.description,
            cut
        );
    }
}
