use std::collections::HashMap;

use crate::bitvec::BitVec;
use crate::error::{HufferError, Result};
use crate::symbol::Symbol;
use crate::tree::{HuffmanTree, Node};


/// Maps every leaf symbol of a tree to the path leading to it.
/// Stepping right is a `1`, stepping left a `0`.
#[derive(Debug, Clone)]
pub struct CodeTable<T> {

    codes: HashMap<T, BitVec>

}

impl<T> CodeTable<T>
where
    T: Symbol
{

    pub fn from_tree(tree: &HuffmanTree<T>) -> Self {

        let mut codes = HashMap::new();

        match tree.root() {

            // A lone symbol would otherwise get an empty code
            Node::Leaf { symbol, .. } => {
                codes.insert(*symbol, BitVec::from_bool_slice(&[false]));
            },

            root => assign_codes(root, BitVec::new(), &mut codes),
        }

        Self { codes }
    }


    pub fn get(&self, symbol: &T) -> Option<&BitVec> {
        self.codes.get(symbol)
    }


    pub fn len(&self) -> usize {
        self.codes.len()
    }


    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }


    pub fn iter(&self) -> impl Iterator<Item = (&T, &BitVec)> {
        self.codes.iter()
    }


    /// Concatenates the codes of every symbol in `data`.
    pub fn encode(&self, data: impl Iterator<Item = T>) -> Result<BitVec> {

        let mut encoded = BitVec::new();

        for symbol in data {

            let code = self.get(&symbol)
                .ok_or(HufferError::UnknownSymbol { code_point: symbol.code_point() })?;

            encoded.extend_from_bits(code);
        }

        Ok(encoded)
    }


    pub fn invert(&self) -> DecodeTable<T> {
        DecodeTable {
            symbols: self.codes.iter()
                .map(|(symbol, code)| (code.clone(), *symbol))
                .collect(),
            max_code_len: self.codes.values()
                .map(BitVec::len_bits)
                .max()
                .unwrap_or(0)
        }
    }

}


fn assign_codes<T>(node: &Node<T>, path: BitVec, codes: &mut HashMap<T, BitVec>)
where
    T: Symbol
{
    match node {

        Node::Internal { left, right, .. } => {

            let mut right_path = path.clone();
            right_path.append_bit(true);
            assign_codes(right, right_path, codes);

            let mut left_path = path;
            left_path.append_bit(false);
            assign_codes(left, left_path, codes);
        },

        Node::Leaf { symbol, .. } => {
            log::trace!("{:?} -> {}", symbol, path);
            codes.insert(*symbol, path);
        },
    }
}


/// Maps codes back to their symbols.
#[derive(Debug, Clone)]
pub struct DecodeTable<T> {

    symbols: HashMap<BitVec, T>,
    /// No run of pending bits longer than this can still become a code
    max_code_len: usize

}

impl<T> DecodeTable<T>
where
    T: Symbol
{

    pub fn get(&self, code: &BitVec) -> Option<T> {
        self.symbols.get(code).copied()
    }


    pub const fn max_code_len(&self) -> usize {
        self.max_code_len
    }


    /// Scans `encoded` one bit at a time, emitting a symbol whenever the bits read
    /// since the last one form a complete code.
    /// Fails as soon as the pending bits grow longer than any code.
    pub fn decode(&self, encoded: &BitVec) -> Result<Vec<T>> {

        let mut decoded = Vec::new();
        let mut pending = BitVec::new();
        let mut pending_start = 0;

        for (i, bit) in encoded.iter_bits().enumerate() {

            pending.append_bit(bit);

            if let Some(symbol) = self.get(&pending) {
                decoded.push(symbol);
                pending.clear();
                pending_start = i + 1;
            } else if pending.len_bits() >= self.max_code_len {
                break;
            }
        }

        if !pending.is_empty() {
            return Err(HufferError::CorruptPayload {
                position: pending_start,
                pending_bits: pending.len_bits()
            });
        }

        Ok(decoded)
    }

}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::frequency::{sort_frequencies, value_frequencies, FrequencyEntry};


    fn table_for(text: &str) -> CodeTable<char> {
        let mut frequencies = value_frequencies(text.chars());
        sort_frequencies(&mut frequencies);
        CodeTable::from_tree(&HuffmanTree::build(&frequencies).unwrap())
    }


    fn bits(s: &str) -> BitVec {
        BitVec::from_bool_slice(&s.chars().map(|c| c == '1').collect::<Vec<bool>>())
    }


    fn assert_prefix_free(table: &CodeTable<char>) {
        for (a, code_a) in table.iter() {
            for (b, code_b) in table.iter() {
                if a != b {
                    assert!(!code_a.is_prefix_of(code_b), "{a:?} = {code_a} is a prefix of {b:?} = {code_b}");
                }
            }
        }
    }


    #[test]
    fn check_paths() {

        let table = table_for("aabbbcc");

        // root: left = b, right = (left = c, right = a)
        assert_eq!(table.get(&'b'), Some(&bits("0")));
        assert_eq!(table.get(&'a'), Some(&bits("11")));
        assert_eq!(table.get(&'c'), Some(&bits("10")));
    }


    #[test]
    fn check_single_symbol() {

        let table = table_for("aaaa");

        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&'a'), Some(&bits("0")));

        let encoded = table.encode("aaaa".chars()).unwrap();
        assert_eq!(encoded, bits("0000"));
        assert_eq!(table.invert().decode(&encoded).unwrap(), vec!['a'; 4]);
    }


    #[test]
    fn check_prefix_free() {

        assert_prefix_free(&table_for("aabbbcc"));
        assert_prefix_free(&table_for("the quick brown fox jumps over the lazy dog"));
        assert_prefix_free(&table_for("abcdefghijklmnopqrstuvwxyz0123456789"));
    }


    #[test]
    fn check_code_length_is_depth() {

        // Fibonacci weights give the deepest possible tree
        let frequencies: Vec<FrequencyEntry<char>> = [('a', 13), ('b', 8), ('c', 5), ('d', 3), ('e', 2), ('f', 1), ('g', 1)]
            .into_iter()
            .map(|(symbol, count)| FrequencyEntry::new(symbol, count))
            .collect();

        let table = CodeTable::from_tree(&HuffmanTree::build(&frequencies).unwrap());

        let mut lengths: Vec<usize> = table.iter().map(|(_, code)| code.len_bits()).collect();
        lengths.sort();

        assert_eq!(lengths, [1, 2, 3, 4, 5, 6, 6]);
    }


    #[test]
    fn check_unknown_symbol() {

        let table = table_for("abc");

        assert!(matches!(
            table.encode("abz".chars()),
            Err(HufferError::UnknownSymbol { code_point: 122 })
        ));
    }


    #[test]
    fn check_decode() {

        let table = table_for("aabbbcc");
        let encoded = table.encode("aabbbcc".chars()).unwrap();

        assert_eq!(encoded.to_string(), "11110001010");

        let decoded: String = table.invert().decode(&encoded).unwrap().into_iter().collect();
        assert_eq!(decoded, "aabbbcc");
    }


    #[test]
    fn check_dangling_bits() {

        let table = table_for("aabbbcc");

        // "1" alone is not a code
        let err = table.invert().decode(&bits("0111")).unwrap_err();

        assert!(matches!(err, HufferError::CorruptPayload { position: 3, pending_bits: 1 }));
    }


    #[test]
    fn check_max_code_len() {
        assert_eq!(table_for("aabbbcc").invert().max_code_len(), 2);
        assert_eq!(table_for("aaaa").invert().max_code_len(), 1);
    }


    #[test]
    fn check_unmatched_bits_fail_fast() {

        // The only code is "0", so the first "1" can never complete a code
        let decoder = table_for("aaaa").invert();

        let mut encoded = bits("00");
        encoded.extend_from_bits(&BitVec::from_bool_slice(&vec![true; 1 << 20]));

        let err = decoder.decode(&encoded).unwrap_err();
        assert!(matches!(err, HufferError::CorruptPayload { position: 2, pending_bits: 1 }));
    }

}
