use log::debug;

use super::code_table::CodeTable;
use crate::error::{HuffError, Result};

#[derive(Debug, Clone, Default)]
struct Slot {
    symbol: Option<char>,
    /// Index of the 0 and 1 child in the arena
    kids: [Option<usize>; 2],
}

/// Tree shape recovered from a code table alone, for decoding. No weights are kept.
///
/// Nodes live in an arena with the root at index 0. A code table does not have to describe a
/// full tree (a one-symbol table has a single code), so children may be missing.
#[derive(Debug, Clone)]
pub struct DecodeTree {
    slots: Vec<Slot>,
}

impl DecodeTree {
    pub const ROOT: usize = 0;

    /// Index of the child reached from `node` by `bit`, if there is one.
    pub fn child(&self, node: usize, bit: bool) -> Option<usize> {
        self.slots.get(node)?.kids[bit as usize]
    }

    /// Symbol held at `node` if it is a leaf.
    pub fn symbol(&self, node: usize) -> Option<char> {
        self.slots.get(node)?.symbol
    }
}

/// Rebuild a tree from symbol→code pairs. Each code is walked from the root, creating nodes
/// as needed, and the last node gets the symbol.
///
/// Fails if the table is empty, a code is empty or not binary, or one code is a prefix of
/// (or equal to) another.
pub fn rebuild_tree(codes: &CodeTable) -> Result<DecodeTree> {
    if codes.is_empty() {
        return Err(HuffError::InvalidCodeTable("no entries".to_string()));
    }
    let mut slots = vec![Slot::default()];

    for (&symbol, code) in codes {
        if code.is_empty() {
            return Err(HuffError::InvalidCodeTable(format!(
                "symbol {:?} has an empty code",
                symbol
            )));
        }
        let mut node = DecodeTree::ROOT;
        for b in code.chars() {
            let bit = match b {
                '0' => 0,
                '1' => 1,
                _ => {
                    return Err(HuffError::InvalidCodeTable(format!(
                        "code {:?} for {:?} is not binary",
                        code, symbol
                    )))
                }
            };
            if let Some(other) = slots[node].symbol {
                return Err(prefix_error(other, symbol));
            }
            node = match slots[node].kids[bit] {
                Some(next) => next,
                None => {
                    slots.push(Slot::default());
                    let next = slots.len() - 1;
                    slots[node].kids[bit] = Some(next);
                    next
                }
            };
        }
        // Landing on a node that already has a symbol or kids means the codes overlap.
        if let Some(other) = slots[node].symbol {
            return Err(prefix_error(other, symbol));
        }
        if slots[node].kids.iter().any(Option::is_some) {
            return Err(HuffError::InvalidCodeTable(format!(
                "code {:?} for {:?} is a prefix of another code",
                code, symbol
            )));
        }
        slots[node].symbol = Some(symbol);
    }

    debug!(
        "Rebuilt tree with {} nodes for {} symbols.",
        slots.len(),
        codes.len()
    );
    Ok(DecodeTree { slots })
}

fn prefix_error(a: char, b: char) -> HuffError {
    HuffError::InvalidCodeTable(format!("codes for {:?} and {:?} overlap", a, b))
}
