//! Shared test helpers: JSON fixture loading for DER signature and witness vectors.
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use bitwire::WireError;

#[derive(Debug, Deserialize)]
pub struct DerVectors {
    pub valid: Vec<ValidSignature>,
    pub invalid: Vec<InvalidSignature>,
}

#[derive(Debug, Deserialize)]
pub struct ValidSignature {
    pub description: String,
    pub hex: String,
    pub r: String,
    pub s: String,
    pub hash_type: u8,
}

#[derive(Debug, Deserialize)]
pub struct InvalidSignature {
    pub description: String,
    pub hex: String,
    /// Variant name of the expected `WireError`.
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct WitnessVector {
    pub description: String,
    pub items: Vec<String>,
    pub hex: String,
    pub base64: String,
}

fn vectors_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/vectors")
}

pub fn load_der_vectors() -> DerVectors {
    let path = vectors_dir().join("der_signatures.json");
    let contents = fs::read_to_string(&path).expect("read der_signatures.json");
    serde_json::from_str(&contents).expect("parse der_signatures.json")
}

pub fn load_witness_vectors() -> Vec<WitnessVector> {
    let path = vectors_dir().join("witness_stacks.json");
    let contents = fs::read_to_string(&path).expect("read witness_stacks.json");
    serde_json::from_str(&contents).expect("parse witness_stacks.json")
}

/// `InvalidHashType(4)` -> `InvalidHashType`.
pub fn error_name(err: &WireError) -> String {
    let debug = format!("{:?}", err);
    debug
        .split(|c: char| c == '(' || c == ' ')
        .next()
        .unwrap_or_default()
        .to_string()
}

pub fn decode_hex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap_or_else(|e| panic!("bad hex {:?}: {}", s, e))
}
