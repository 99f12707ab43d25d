use std::collections::HashMap;

use crate::symbol::Symbol;


/// How many times a symbol occurs in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyEntry<T> {

    pub symbol: T,
    pub count: u64

}

impl<T> FrequencyEntry<T> {

    pub const fn new(symbol: T, count: u64) -> Self {
        Self {
            symbol,
            count
        }
    }

}


/// Counts every distinct symbol of `data`.
/// Entries are returned in order of first appearance.
pub fn value_frequencies<T>(data: impl Iterator<Item = T>) -> Vec<FrequencyEntry<T>>
where
    T: Symbol
{

    let mut indices: HashMap<T, usize> = HashMap::new();
    let mut frequencies: Vec<FrequencyEntry<T>> = Vec::new();

    for symbol in data {

        let next_index = frequencies.len();
        let index = *indices.entry(symbol).or_insert(next_index);

        if index == next_index {
            frequencies.push(FrequencyEntry::new(symbol, 1));
        } else {
            frequencies[index].count += 1;
        }
    }

    frequencies
}


/// Sorts by descending count. The sort is stable, so equal counts keep their current order.
pub fn sort_frequencies<T>(frequencies: &mut [FrequencyEntry<T>]) {
    frequencies.sort_by(|a, b| b.count.cmp(&a.count))
}
