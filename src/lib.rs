//! Huffman compression of character and byte streams.
//!
//! ```
//! let compressed = huffer::encode("aabbbcc").unwrap();
//! assert_eq!(huffer::decode(&compressed).unwrap(), "aabbbcc");
//! ```

pub mod bitvec;
pub mod code_table;
pub mod container;
pub mod error;
pub mod frequency;
pub mod symbol;
pub mod tree;
pub mod vli;

pub use bitvec::BitVec;
pub use code_table::{CodeTable, DecodeTable};
pub use container::{Container, MAGIC};
pub use error::{FormatError, HufferError, Result};
pub use frequency::FrequencyEntry;
pub use symbol::Symbol;
pub use tree::{HuffmanTree, Node};

use frequency::{sort_frequencies, value_frequencies};


/// Compresses `data` into a container.
/// Empty data gives a container with no entries and no payload.
pub fn compress<T>(data: impl Iterator<Item = T> + Clone) -> Result<Vec<u8>>
where
    T: Symbol
{

    let mut entries = value_frequencies(data.clone());
    sort_frequencies(&mut entries);

    let payload = if entries.is_empty() {
        BitVec::new()
    } else {
        let tree = HuffmanTree::build(&entries)?;
        CodeTable::from_tree(&tree).encode(data)?
    };

    log::debug!("Encoded {} distinct symbols into {} bits", entries.len(), payload.len_bits());

    Ok(Container { entries, payload }.serialize())
}


pub fn decompress<T>(bytes: &[u8]) -> Result<Vec<T>>
where
    T: Symbol
{

    let Container { entries, payload } = Container::<T>::parse(bytes)?;

    if entries.is_empty() {
        return if payload.is_empty() {
            Ok(Vec::new())
        } else {
            Err(HufferError::CorruptPayload { position: 0, pending_bits: payload.len_bits() })
        };
    }

    let tree = HuffmanTree::build(&entries)?;

    let decoded = CodeTable::from_tree(&tree)
        .invert()
        .decode(&payload)?;

    log::debug!("Decoded {} symbols from {} bits", decoded.len(), payload.len_bits());

    Ok(decoded)
}


pub fn encode(text: &str) -> Result<Vec<u8>> {
    compress(text.chars())
}


pub fn decode(bytes: &[u8]) -> Result<String> {
    Ok(decompress::<char>(bytes)?.into_iter().collect())
}
