// src/witness/reader.rs

use crate::compact_size::parse_compact_size;
use crate::error::{reject, WireError};
use crate::var_str::parse_var_str;

/// Walks a serialized witness stack (`VarInt(count) || VarStr*`) and yields
/// each item as a view into the input, without copying.
///
/// Bytes after the last declared item are left unread; see [`WitnessReader::trailing`].
#[derive(Debug, Clone)]
pub struct WitnessReader<'a> {
    data: &'a [u8],
    declared: u64,
    read: u64,
    consumed: usize,
    failed: bool,
}

impl<'a> WitnessReader<'a> {
    /// Reads the item-count header. Fails with `EmptyInput` on an empty buffer.
    pub fn new(data: &'a [u8]) -> Result<Self, WireError> {
        match Self::open(data) {
            Ok(reader) => Ok(reader),
            Err(e) => reject("witness-reader", data.len(), e),
        }
    }

    pub(super) fn open(data: &'a [u8]) -> Result<Self, WireError> {
        let (declared, header_len) = parse_compact_size(data)?;
        Ok(Self {
            data,
            declared,
            read: 0,
            consumed: header_len,
            failed: false,
        })
    }

    /// Item count announced by the header.
    pub fn declared_len(&self) -> u64 {
        self.declared
    }

    /// Bytes consumed so far, header included.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Everything after the last consumed byte.
    pub fn trailing(&self) -> &'a [u8] {
        &self.data[self.consumed..]
    }

    /// Upper bound for pre-allocation. Every item takes at least one byte,
    /// so a hostile count cannot exceed what the input can actually hold.
    pub fn capacity_hint(&self) -> usize {
        let left = self.declared - self.read;
        let bytes_left = self.trailing().len() as u64;
        left.min(bytes_left) as usize
    }

    pub(super) fn is_done(&self) -> bool {
        self.failed || self.read >= self.declared
    }

    /// Reads the next item without reporting failures; the caller does.
    pub(super) fn read_item(&mut self) -> Result<&'a [u8], WireError> {
        let rest = self.trailing();
        if rest.is_empty() {
            return Err(WireError::TruncatedInput {
                needed: self.consumed + 1,
                available: self.data.len(),
            });
        }
        let (item, used) = parse_var_str(rest).map_err(|e| match e {
            // Re-base the counts on the whole witness buffer.
            WireError::TruncatedInput { needed, .. } => WireError::TruncatedInput {
                needed: self.consumed.saturating_add(needed),
                available: self.data.len(),
            },
            other => other,
        })?;
        self.consumed += used;
        self.read += 1;
        Ok(item)
    }
}

impl<'a> Iterator for WitnessReader<'a> {
    type Item = Result<&'a [u8], WireError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_done() {
            return None;
        }
        match self.read_item() {
            Ok(item) => Some(Ok(item)),
            Err(e) => {
                self.failed = true;
                Some(reject("witness-reader", self.data.len(), e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        (0, Some(self.capacity_hint().saturating_add(1)))
    }
}
