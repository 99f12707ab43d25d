//! The on-disk layout of a compressed file.
//!
//! ```text
//! magic            VLI, always 9731
//! entry_count      VLI
//! entries          entry_count pairs of (symbol code point VLI, frequency VLI),
//!                  in the order the tree was built from
//! bit_length       VLI, meaningful bits in the payload
//! payload          ceil(bit_length / 8) bytes, MSB-first, zero padded
//! ```

use std::collections::HashSet;

use crate::bitvec::{least_bytes_repr_for_bits, BitVec};
use crate::error::{FormatError, Result};
use crate::frequency::FrequencyEntry;
use crate::symbol::Symbol;
use crate::vli::{write_vli, VliReader};


pub const MAGIC: u64 = 9731;


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container<T> {

    /// Symbol frequencies, sorted by descending count
    pub entries: Vec<FrequencyEntry<T>>,
    pub payload: BitVec

}

impl<T> Container<T>
where
    T: Symbol
{

    pub fn serialize(&self) -> Vec<u8> {

        let (payload_bytes, _) = self.payload.as_padded_bytes();

        let mut buf = Vec::with_capacity(4 + self.entries.len() * 4 + 10 + payload_bytes.len());

        write_vli(MAGIC, &mut buf);
        write_vli(self.entries.len() as u64, &mut buf);

        for entry in &self.entries {
            write_vli(entry.symbol.code_point(), &mut buf);
            write_vli(entry.count, &mut buf);
        }

        write_vli(self.payload.len_bits() as u64, &mut buf);
        buf.extend_from_slice(payload_bytes);

        buf
    }


    pub fn parse(bytes: &[u8]) -> Result<Self> {

        let mut reader = VliReader::new(bytes);

        let magic = reader.read_vli("magic")?;
        if magic != MAGIC {
            return Err(FormatError::BadMagic { found: magic }.into());
        }

        let entry_count = reader.read_vli("entry count")?;

        // Every entry takes at least two bytes
        let capacity = (entry_count as usize).min(reader.remaining().len() / 2);
        let mut entries = Vec::with_capacity(capacity);
        let mut seen = HashSet::with_capacity(capacity);

        for _ in 0..entry_count {

            let code_point = reader.read_vli("symbol")?;
            let count = reader.read_vli("frequency")?;

            let symbol = T::from_code_point(code_point)
                .ok_or(FormatError::InvalidSymbol { code_point })?;

            if count == 0 {
                return Err(FormatError::ZeroFrequency { code_point }.into());
            }

            if !seen.insert(symbol) {
                return Err(FormatError::DuplicateSymbol { code_point }.into());
            }

            entries.push(FrequencyEntry::new(symbol, count));
        }

        let bit_length = reader.read_vli("bit length")?;

        let remaining = reader.remaining();

        let truncated = || FormatError::TruncatedPayload {
            expected: usize::try_from(bit_length).map_or(usize::MAX, least_bytes_repr_for_bits),
            actual: remaining.len()
        };

        let bit_length = usize::try_from(bit_length).map_err(|_| truncated())?;

        let payload = BitVec::from_packed_bytes(remaining, bit_length)
            .ok_or_else(truncated)?;

        let extra = remaining.len() - payload.least_len_bytes();
        if extra > 0 {
            log::warn!("Ignoring {} trailing bytes after the payload", extra);
        }

        log::debug!("Parsed container with {} entries and {} payload bits", entries.len(), bit_length);

        Ok(Self {
            entries,
            payload
        })
    }

}
