#![no_std]

#[cfg(feature = "std")]
extern crate std;

// Needed for Vec
extern crate alloc;

pub mod compact_size;
pub mod error;
pub mod signature;
pub mod types;
pub mod var_str;
pub mod witness;

pub use compact_size::{
    compact_size_len, encode_compact_size, read_compact_size, write_compact_size, MAX_COMPACT_SIZE,
};
pub use error::WireError;
pub use signature::{ScriptSignature, SigHashType};
pub use var_str::{decode_var_str, encode_var_str, read_var_str, write_var_str};
pub use witness::WitnessReader;
