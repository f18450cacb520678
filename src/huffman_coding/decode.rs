//! Decoding walks the rebuilt tree one bit at a time. Each time a leaf is reached its symbol
//! is emitted and the walk starts again at the root.
//!
//! Two quirks are kept on purpose:
//! - A bit with no matching child is dropped. Nothing is emitted and the walk stays put.
//! - The packed stream does not say how many padding bits end it. Zero padding that happens to
//!   spell out the all-zeros code decodes as extra copies of that symbol (up to 7). Use
//!   decode_exact() when the bit count is known.

use log::{debug, trace};

use super::code_table::CodeTable;
use super::rebuild::{rebuild_tree, DecodeTree};
use crate::bitstream::bitreader::BitReader;
use crate::error::Result;

/// Decode a sequence of bits against a rebuilt tree.
pub fn decode_bits<I: IntoIterator<Item = bool>>(bits: I, tree: &DecodeTree) -> String {
    let mut result = String::new();
    let mut node = DecodeTree::ROOT;
    let mut dropped = 0_usize;

    for bit in bits {
        match tree.child(node, bit) {
            Some(next) => match tree.symbol(next) {
                Some(symbol) => {
                    result.push(symbol);
                    node = DecodeTree::ROOT;
                }
                None => node = next,
            },
            None => {
                trace!("No branch for bit {} at node {}, dropped.", bit as u8, node);
                dropped += 1;
            }
        }
    }

    if dropped > 0 {
        debug!("Dropped {} bits with no matching branch.", dropped);
    }
    if node != DecodeTree::ROOT {
        debug!("Stream ended part way through a code.");
    }
    result
}

/// Decode every bit of a packed stream, padding included.
pub fn decode(bytes: &[u8], tree: &DecodeTree) -> String {
    decode_bits(BitReader::new(bytes), tree)
}

/// Decode only the first `bit_len` bits of a packed stream, so padding is never read.
pub fn decode_exact(bytes: &[u8], bit_len: usize, tree: &DecodeTree) -> String {
    decode_bits(BitReader::new(bytes).take(bit_len), tree)
}

/// Rebuild the tree from `codes` and decode the whole stream with it.
pub fn decode_with_codes(bytes: &[u8], codes: &CodeTable) -> Result<String> {
    let tree = rebuild_tree(codes)?;
    Ok(decode(bytes, &tree))
}
