use crate::error::{HufferError, Result};
use crate::frequency::FrequencyEntry;


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<T> {

    Internal { weight: u64, left: Box<Node<T>>, right: Box<Node<T>> },
    Leaf { weight: u64, symbol: T },

}

impl<T> Node<T> {

    pub const fn weight(&self) -> u64 {
        match self {
            Node::Internal { weight, .. } |
            Node::Leaf { weight, .. }
                => *weight
        }
    }


    pub const fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }


    fn combine(left: Node<T>, right: Node<T>) -> Self {
        Node::Internal {
            weight: left.weight().saturating_add(right.weight()),
            left: Box::new(left),
            right: Box::new(right)
        }
    }


    fn count_leaves(&self) -> usize {
        match self {
            Node::Internal { left, right, .. } => left.count_leaves() + right.count_leaves(),
            Node::Leaf { .. } => 1,
        }
    }

}


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<T> {

    root: Node<T>

}

impl<T> HuffmanTree<T>
where
    T: Copy
{

    /// Builds the tree from entries sorted by descending count.
    ///
    /// The two items at the tail of the working list are merged, the first one taken
    /// becoming the left child, and the list is stably re-sorted by descending weight.
    /// The decoder depends on replaying exactly this merge order, so items of equal
    /// weight must keep their relative order.
    pub fn build(frequencies: &[FrequencyEntry<T>]) -> Result<Self> {

        let mut nodes: Vec<Node<T>> = frequencies.iter()
            .map(|entry| Node::Leaf { weight: entry.count, symbol: entry.symbol })
            .collect();

        while nodes.len() > 1 {

            // The loop condition guarantees two items
            let (Some(left), Some(right)) = (nodes.pop(), nodes.pop()) else {
                unreachable!()
            };

            nodes.push(Node::combine(left, right));

            // Only the pushed node can be out of place
            nodes.sort_by(|a, b| b.weight().cmp(&a.weight()));
        }

        let root = nodes.pop().ok_or(HufferError::EmptyInput)?;

        log::debug!("Built a tree with {} leaves and total weight {}", root.count_leaves(), root.weight());

        Ok(Self { root })
    }


    pub const fn root(&self) -> &Node<T> {
        &self.root
    }


    pub fn leaf_count(&self) -> usize {
        self.root.count_leaves()
    }

}
