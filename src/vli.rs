//! Little-endian base-128 variable-length integers.
//!
//! Every byte carries 7 bits of the value, least significant group first.
//! The high bit is set on every byte except the last one.

use crate::error::{FormatError, Result};


const CONTINUATION_BIT: u8 = 0x80;
const GROUP_MASK: u8 = 0x7f;


/// Appends the encoding of `value` to `buf`.
pub fn write_vli(mut value: u64, buf: &mut Vec<u8>) {

    while value >= CONTINUATION_BIT as u64 {
        buf.push((value as u8 & GROUP_MASK) | CONTINUATION_BIT);
        value >>= 7;
    }

    buf.push(value as u8);
}


pub fn encode_vli(value: u64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(10);
    write_vli(value, &mut buf);
    buf
}


/// Decodes the integer at the start of `bytes`.
/// Returns the value and how many bytes it took.
pub fn decode_vli(bytes: &[u8]) -> std::result::Result<(u64, usize), FormatError> {

    let mut value: u64 = 0;

    for (i, &byte) in bytes.iter().enumerate() {

        let group = (byte & GROUP_MASK) as u64;
        let shift = u32::try_from(i)
            .ok()
            .and_then(|i| i.checked_mul(7))
            .unwrap_or(u32::MAX);

        if group != 0 && (shift >= u64::BITS || group.leading_zeros() < shift) {
            return Err(FormatError::VliOverflow);
        }

        if shift < u64::BITS {
            value |= group << shift;
        }

        if byte & CONTINUATION_BIT == 0 {
            return Ok((value, i + 1));
        }
    }

    Err(FormatError::UnexpectedEof { field: "variable-length integer" })
}


/// Reads consecutive fields out of a byte buffer.
#[derive(Debug, Clone)]
pub struct VliReader<'a> {

    data: &'a [u8],
    position: usize

}

impl<'a> VliReader<'a> {

    pub const fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            position: 0
        }
    }


    /// Reads the next integer. `field` names it in the error if the data ends too early.
    pub fn read_vli(&mut self, field: &'static str) -> Result<u64> {

        let (value, len) = decode_vli(&self.data[self.position..])
            .map_err(|err| match err {
                FormatError::UnexpectedEof { .. } => FormatError::UnexpectedEof { field },
                other => other,
            })?;

        self.position += len;

        Ok(value)
    }


    /// Everything that has not been read yet.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.position..]
    }


    pub const fn position(&self) -> usize {
        self.position
    }

}
