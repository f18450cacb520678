use log::{debug, trace};

use super::priority_queue::MinHeap;
use crate::error::{HuffError, Result};
use crate::tools::freq_count::Frequencies;
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(char),
}

/// A node of the coding tree. Internal nodes always have exactly two kids.
#[derive(Debug, Clone)]
pub struct Node {
    /// Sum of the frequencies of every leaf below (or the count itself on a leaf)
    pub weight: usize,
    /// Smallest symbol below this node, used to break ties between equal weights
    pub low: char,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new leaf
    pub fn leaf(symbol: char, weight: usize) -> Node {
        Node {
            weight,
            low: symbol,
            node_data: NodeData::Leaf(symbol),
        }
    }

    /// Join two nodes under a new parent. The first becomes the left (0) child.
    pub fn merge(left: Node, right: Node) -> Node {
        Node {
            weight: left.weight + right.weight,
            low: left.low.min(right.low),
            node_data: NodeData::Kids(Box::new(left), Box::new(right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }

    /// The symbol held by a leaf, None for internal nodes.
    pub fn symbol(&self) -> Option<char> {
        match self.node_data {
            NodeData::Leaf(c) => Some(c),
            NodeData::Kids(..) => None,
        }
    }

    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match &self.node_data {
            NodeData::Leaf(_) => 1,
            NodeData::Kids(left, right) => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Length of the longest path from this node to a leaf.
    pub fn depth(&self) -> usize {
        match &self.node_data {
            NodeData::Leaf(_) => 0,
            NodeData::Kids(left, right) => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Equality is on the ordering key (weight, low) only, not on tree structure.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    /// Sort Nodes by increasing weight, then by increasing lowest symbol. Nodes in the queue
    /// never share a symbol, so no two of them compare equal.
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.low.cmp(&other.low))
    }
}

/// Build a Huffman tree from symbol frequencies by merging the two lightest nodes until one
/// remains. Returns None for an empty table, and a lone leaf when there is only one symbol.
pub fn build_tree(frequencies: &Frequencies) -> Result<Option<Node>> {
    if let Some((c, _)) = frequencies.iter().find(|(_, &n)| n == 0) {
        return Err(HuffError::InvalidInput(format!(
            "symbol {:?} has a count of zero",
            c
        )));
    }

    let mut heap = MinHeap::with_capacity(frequencies.len());
    frequencies
        .iter()
        .for_each(|(&c, &n)| heap.insert(Node::leaf(c, n)));

    if heap.is_empty() {
        debug!("No symbols, so no tree.");
        return Ok(None);
    }

    while heap.len() > 1 {
        let left = heap.extract_min()?;
        let right = heap.extract_min()?;
        trace!(
            "Merging {:?}({}) and {:?}({})",
            left.low,
            left.weight,
            right.low,
            right.weight
        );
        heap.insert(Node::merge(left, right));
    }

    let root = heap.extract_min()?;
    debug!(
        "Built tree with {} leaves, depth {}, weight {}.",
        root.leaf_count(),
        root.depth(),
        root.weight
    );
    Ok(Some(root))
}

#[cfg(test)]
mod test {
    use super::{build_tree, Node, NodeData};
    use crate::error::HuffError;
    use crate::tools::freq_count::{freqs, Frequencies};

    /// Same weights, same symbols, same left/right arrangement all the way down.
    fn same_tree(a: &Node, b: &Node) -> bool {
        a.weight == b.weight
            && a.low == b.low
            && match (&a.node_data, &b.node_data) {
                (NodeData::Leaf(x), NodeData::Leaf(y)) => x == y,
                (NodeData::Kids(al, ar), NodeData::Kids(bl, br)) => {
                    same_tree(al, bl) && same_tree(ar, br)
                }
                _ => false,
            }
    }

    #[test]
    fn empty_test() {
        assert!(build_tree(&Frequencies::default()).unwrap().is_none());
    }

    #[test]
    fn single_symbol_test() {
        let root = build_tree(&freqs("zzzz")).unwrap().unwrap();
        assert!(root.is_leaf());
        assert_eq!(root.symbol(), Some('z'));
        assert_eq!(root.weight, 4);
    }

    #[test]
    fn zero_count_test() {
        let mut f = freqs("ab");
        f.insert('c', 0);
        assert!(matches!(build_tree(&f), Err(HuffError::InvalidInput(_))));
    }

    #[test]
    fn aaabbc_shape_test() {
        // c(1) and b(2) merge first. The new node (3, low 'b') then ties with a(3), and a wins.
        let root = build_tree(&freqs("aaabbc")).unwrap().unwrap();
        assert_eq!(root.weight, 6);
        match &root.node_data {
            NodeData::Kids(left, right) => {
                assert_eq!(left.symbol(), Some('a'));
                assert_eq!(right.weight, 3);
                match &right.node_data {
                    NodeData::Kids(rl, rr) => {
                        assert_eq!(rl.symbol(), Some('c'));
                        assert_eq!(rr.symbol(), Some('b'));
                    }
                    NodeData::Leaf(_) => panic!("expected an internal node"),
                }
            }
            NodeData::Leaf(_) => panic!("expected an internal node"),
        }
    }

    #[test]
    fn weight_conservation_test() {
        let text = "she sells sea shells by the sea shore";
        let root = build_tree(&freqs(text)).unwrap().unwrap();
        assert_eq!(root.weight, text.chars().count());
        assert_eq!(root.leaf_count(), freqs(text).len());
    }

    #[test]
    fn order_test() {
        assert!(Node::leaf('b', 1) < Node::leaf('a', 2));
        assert!(Node::leaf('a', 2) < Node::leaf('b', 2));
        let joined = Node::merge(Node::leaf('x', 1), Node::leaf('c', 1));
        assert_eq!(joined.low, 'c');
        assert!(Node::leaf('b', 2) < joined);
        assert!(joined < Node::leaf('d', 2));
    }

    #[test]
    fn deterministic_test() {
        let text = "abcdefgh abcdefgh";
        let a = build_tree(&freqs(text)).unwrap().unwrap();
        let b = build_tree(&freqs(text)).unwrap().unwrap();
        assert!(same_tree(&a, &b));
    }

    #[test]
    fn equality_is_ordering_key_test() {
        // Same weight and low symbol but different shapes
        let ab = Node::merge(Node::leaf('a', 1), Node::leaf('b', 1));
        let ac = Node::merge(Node::leaf('a', 1), Node::leaf('c', 1));
        assert!(ab == ac);
        assert!(!same_tree(&ab, &ac));
        assert!(same_tree(&ab, &ab.clone()));
    }
}
