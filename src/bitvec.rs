use std::fmt;


/// Bits packed MSB-first into bytes.
/// Padding bits at the end of the last byte are always zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitVec {

    /// The actual raw bits
    raw_data: Vec<u8>,
    /// How many bits of padding the last byte contains.
    /// Padding bits have no meaning
    last_byte_padding: u8

}

impl BitVec {

    pub const fn new() -> Self {
        Self {
            raw_data: Vec::new(),
            last_byte_padding: 0
        }
    }


    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            raw_data: Vec::with_capacity(least_bytes_repr_for_bits(capacity)),
            last_byte_padding: 0
        }
    }


    /// Unpacks the first `bit_len` bits of `bytes`.
    /// Returns `None` if `bytes` holds fewer than `bit_len` bits.
    pub fn from_packed_bytes(bytes: &[u8], bit_len: usize) -> Option<Self> {

        let byte_len = least_bytes_repr_for_bits(bit_len);

        let mut raw_data = bytes.get(..byte_len)?.to_vec();

        let last_byte_padding = (byte_len * 8 - bit_len) as u8;

        if let Some(last_byte) = raw_data.last_mut() {
            // Clear whatever the padding contained
            *last_byte &= 0xff_u8 << last_byte_padding;
        }

        Some(Self {
            raw_data,
            last_byte_padding
        })
    }


    pub fn len_bits(&self) -> usize {
        self.raw_data.len() * 8 - self.last_byte_padding as usize
    }


    pub fn least_len_bytes(&self) -> usize {
        self.raw_data.len()
    }


    pub fn is_empty(&self) -> bool {
        self.raw_data.is_empty()
    }


    pub fn clear(&mut self) {
        self.raw_data.clear();
        self.last_byte_padding = 0;
    }


    pub fn append_bit(&mut self, bit: bool) {

        if self.last_byte_padding == 0 {

            self.raw_data.push((bit as u8) << 7);
            self.last_byte_padding = 7;

        } else {

            let last_index = self.raw_data.len() - 1;

            self.raw_data[last_index] |= (bit as u8) << (self.last_byte_padding - 1);

            self.last_byte_padding -= 1;
        }
    }


    pub fn extend_from_bits(&mut self, other: &BitVec) {

        if self.last_byte_padding == 0 {

            // Byte aligned, the other vector's padding becomes ours

            self.raw_data.extend_from_slice(&other.raw_data);
            self.last_byte_padding = other.last_byte_padding;

        } else {

            for bit in other.iter_bits() {
                self.append_bit(bit)
            }

        }
    }


    pub fn iter_bits(&self) -> BitIterator<'_> {
        BitIterator {
            bits: self,
            i: 0,
        }
    }


    /// Returns `true` if `self` is a prefix of `other`. Every vector is a prefix of itself.
    pub fn is_prefix_of(&self, other: &BitVec) -> bool {
        self.len_bits() <= other.len_bits()
            && self.iter_bits().zip(other.iter_bits()).all(|(a, b)| a == b)
    }


    /// The packed bytes, with the zero padding of the last byte.
    pub fn as_padded_bytes(&self) -> (&[u8], u8) {
        (
            &self.raw_data,
            self.last_byte_padding
        )
    }


    pub fn from_bool_slice(bools: &[bool]) -> Self {

        let mut res = Self::with_capacity(bools.len());

        for &b in bools {
            res.append_bit(b)
        }

        res
    }


    pub fn to_bool_slice(&self) -> Box<[bool]> {
        self.iter_bits()
            .collect()
    }

}


impl fmt::Display for BitVec {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter_bits() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }

}


pub const fn least_bytes_repr_for_bits(bit_count: usize) -> usize {
    bit_count / 8 + (bit_count % 8 != 0) as usize
}


pub struct BitIterator<'a> {

    bits: &'a BitVec,
    i: usize

}

impl Iterator for BitIterator<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {

        if self.i >= self.bits.len_bits() {
            return None;
        }

        let byte = self.bits.raw_data[self.i / 8];

        let bit_in_byte_i = (self.i % 8) as u8;

        self.i += 1;

        Some(
            (byte & (1_u8 << (7 - bit_in_byte_i))) != 0
        )
    }


    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bits.len_bits().saturating_sub(self.i);
        (remaining, Some(remaining))
    }
}
