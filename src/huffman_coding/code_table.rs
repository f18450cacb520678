//! Symbol to code mapping derived from a coding tree, and its text form.
//!
//! The text form is `{a=0, c=10, b=11}`: entries of `<symbol>=<bits>` separated by `", "`.
//! Symbols are written raw, so a table can contain `=`, `,`, spaces, or braces as symbols.
//! The parser finds each `=` that is *not* followed by another `=` and treats it as the
//! separator; the character right before it is the symbol and the run of `0`/`1` after it is
//! the code. That is how `==10` reads as the symbol `=` with code `10`.

use std::collections::btree_map::{BTreeMap, Iter};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use super::tree::{Node, NodeData};
use crate::error::HuffError;

/// Code given to the only symbol of a one-symbol text, whose tree is a bare leaf.
pub const SINGLE_SYMBOL_CODE: &str = "1";

/// Symbol to bit string ('0'/'1') mapping, ordered by symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable(BTreeMap<char, String>);

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, symbol: char) -> Option<&str> {
        self.0.get(&symbol).map(String::as_str)
    }

    /// Returns the previous code if the symbol was already present.
    pub fn insert(&mut self, symbol: char, code: String) -> Option<String> {
        self.0.insert(symbol, code)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, char, String> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a CodeTable {
    type Item = (&'a char, &'a String);
    type IntoIter = Iter<'a, char, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(char, String)> for CodeTable {
    fn from_iter<I: IntoIterator<Item = (char, String)>>(iter: I) -> Self {
        CodeTable(iter.into_iter().collect())
    }
}

/// Walk the tree and give every leaf the path that leads to it (left = 0, right = 1).
///
/// A tree that is a single leaf would give its symbol an empty code. That symbol gets
/// [`SINGLE_SYMBOL_CODE`] instead, so every occurrence still costs one bit and zero padding
/// after it can't decode as extra symbols.
pub fn assign_codes(root: Option<&Node>) -> CodeTable {
    let mut table = CodeTable::new();
    match root {
        None => {}
        Some(Node {
            node_data: NodeData::Leaf(c),
            ..
        }) => {
            table.insert(*c, SINGLE_SYMBOL_CODE.to_string());
        }
        Some(node) => return_codes(node, &mut String::new(), &mut table),
    }
    table
}

/// Recursively walk the tree, recording the path to each leaf. Depth is bounded by the
/// alphabet size.
fn return_codes(node: &Node, path: &mut String, table: &mut CodeTable) {
    match &node.node_data {
        NodeData::Kids(left, right) => {
            path.push('0');
            return_codes(left, path, table);
            path.pop();
            path.push('1');
            return_codes(right, path, table);
            path.pop();
        }
        NodeData::Leaf(c) => {
            table.insert(*c, path.clone());
        }
    }
}

impl Display for CodeTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (c, code)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", c, code)?;
        }
        write!(f, "}}")
    }
}

impl FromStr for CodeTable {
    type Err = HuffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input: Vec<char> = s.chars().collect();
        let mut table = CodeTable::new();
        let mut i = 0;

        while i < input.len() {
            // An '=' followed by another '=' is the symbol '=' itself, not a separator.
            if input[i] != '=' || input.get(i + 1) == Some(&'=') {
                i += 1;
                continue;
            }
            let symbol = match i.checked_sub(1).map(|k| input[k]) {
                Some(c) => c,
                None => {
                    return Err(HuffError::InvalidCodeTable(
                        "separator with no symbol before it".to_string(),
                    ))
                }
            };
            i += 1;
            let start = i;
            while i < input.len() && (input[i] == '0' || input[i] == '1') {
                i += 1;
            }
            if i == start {
                return Err(HuffError::InvalidCodeTable(format!(
                    "symbol {:?} has no code",
                    symbol
                )));
            }
            let code: String = input[start..i].iter().collect();
            if table.insert(symbol, code).is_some() {
                return Err(HuffError::InvalidCodeTable(format!(
                    "symbol {:?} appears twice",
                    symbol
                )));
            }
        }

        if table.is_empty() {
            return Err(HuffError::InvalidCodeTable("no entries".to_string()));
        }
        Ok(table)
    }
}
