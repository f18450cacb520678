use super::code_table::{assign_codes, CodeTable};
use super::decode::decode_exact;
use super::encode::encode_packed;
use super::rebuild::rebuild_tree;
use super::tree::{build_tree, Node};
use crate::error::Result;
use crate::tools::freq_count::freqs;

/// A text run through the whole pipeline: its tree, its code table, and the packed bits.
#[derive(Debug, Clone)]
pub struct CodingTree {
    /// Symbol to code mapping, the part that gets persisted next to the bits
    pub codes: CodeTable,
    /// The text encoded with `codes`, zero padded to a whole byte
    pub bits: Vec<u8>,
    /// Meaningful bits in `bits`, padding excluded
    pub bit_len: usize,
    root: Option<Node>,
}

impl CodingTree {
    /// Count, build, assign codes, and encode `text`.
    pub fn new(text: &str) -> Result<Self> {
        let root = build_tree(&freqs(text))?;
        let codes = assign_codes(root.as_ref());
        let packed = encode_packed(text, &codes)?;
        Ok(CodingTree {
            codes,
            bit_len: packed.bit_len(),
            bits: packed.output,
            root,
        })
    }

    /// Root of the Huffman tree, None for an empty text.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Decode `bits` back into the text. Uses the stored bit count, so padding causes no
    /// trouble here.
    pub fn decode(&self) -> Result<String> {
        if self.codes.is_empty() {
            return Ok(String::new());
        }
        let tree = rebuild_tree(&self.codes)?;
        Ok(decode_exact(&self.bits, self.bit_len, &tree))
    }
}

#[cfg(test)]
mod test {
    use super::CodingTree;

    #[test]
    fn empty_text_test() {
        let ct = CodingTree::new("").unwrap();
        assert!(ct.root().is_none());
        assert!(ct.codes.is_empty());
        assert!(ct.bits.is_empty());
        assert_eq!(ct.bit_len, 0);
        assert_eq!(ct.decode().unwrap(), "");
    }

    #[test]
    fn aaabbc_test() {
        let ct = CodingTree::new("aaabbc").unwrap();
        assert_eq!(ct.root().unwrap().weight, 6);
        assert_eq!(ct.codes.to_string(), "{a=0, b=11, c=10}");
        assert_eq!(ct.bits, vec![0b0001_1111, 0]);
        assert_eq!(ct.bit_len, 9);
        assert_eq!(ct.decode().unwrap(), "aaabbc");
    }

    #[test]
    fn single_symbol_test() {
        let ct = CodingTree::new("zzzz").unwrap();
        assert!(ct.root().unwrap().is_leaf());
        assert_eq!(ct.codes.get('z'), Some("1"));
        assert_eq!(ct.bits, vec![0b1111_0000]);
        assert_eq!(ct.decode().unwrap(), "zzzz");
    }

    #[test]
    fn prose_test() {
        let text = "Well, Prince, so Genoa and Lucca are now just family estates of the \
                    Buonapartes. But I warn you, if you don't tell me that this means war...";
        let ct = CodingTree::new(text).unwrap();
        assert!(ct.bits.len() < text.len());
        assert_eq!(ct.decode().unwrap(), text);
    }
}
