use log::debug;
use rustc_hash::FxHashMap;

use super::code_table::CodeTable;
use crate::bitstream::bitpacker::BitPacker;
use crate::error::{HuffError, Result};

/// Bits carried by each out24 word.
const WORD_BITS: usize = 24;

/// Turn a '0'/'1' code string into out24 words of up to 24 bits each. Most codes fit in one.
fn pack_code(symbol: char, code: &str) -> Result<Vec<u32>> {
    let bits = code.as_bytes();
    bits.chunks(WORD_BITS)
        .map(|chunk| {
            chunk
                .iter()
                .try_fold(0_u32, |word, &b| match b {
                    b'0' => Ok(word << 1),
                    b'1' => Ok(word << 1 | 1),
                    _ => Err(HuffError::InvalidCodeTable(format!(
                        "code {:?} for {:?} is not binary",
                        code, symbol
                    ))),
                })
                .map(|data| (chunk.len() as u32) << 24 | data)
        })
        .collect()
}

/// Look up table from symbol to its packed out24 words.
fn compile(codes: &CodeTable) -> Result<FxHashMap<char, Vec<u32>>> {
    codes
        .iter()
        .map(|(&c, code)| pack_code(c, code).map(|words| (c, words)))
        .collect()
}

/// Encode a text with the given codes. Codes are concatenated in text order and packed eight
/// bits to a byte; a final partial byte is padded with zeros in its low bits. An empty text
/// gives an empty Vec.
pub fn encode(text: &str, codes: &CodeTable) -> Result<Vec<u8>> {
    encode_packed(text, codes).map(|bp| bp.output)
}

/// Like encode(), but hands back the BitPacker so callers can see the bit count and padding.
pub(crate) fn encode_packed(text: &str, codes: &CodeTable) -> Result<BitPacker> {
    let table = compile(codes)?;
    let mut bp = BitPacker::new(text.len() / 2 + 1);

    for c in text.chars() {
        let words = table.get(&c).ok_or(HuffError::MissingCode(c))?;
        words.iter().for_each(|&w| bp.out24(w));
    }
    bp.flush();

    debug!(
        "Encoded {} bits into {} bytes ({} padding bits).",
        bp.bit_len(),
        bp.output.len(),
        (8 - bp.last_bits) % 8
    );
    Ok(bp)
}

/// Number of code bits encode() would produce for this text, before padding.
pub fn encoded_len(text: &str, codes: &CodeTable) -> Result<usize> {
    text.chars().try_fold(0, |sum, c| {
        codes
            .get(c)
            .map(|code| sum + code.len())
            .ok_or(HuffError::MissingCode(c))
    })
}

#[cfg(test)]
mod test {
    use super::{encode, encode_packed, encoded_len, pack_code};
    use crate::error::HuffError;
    use crate::huffman_coding::code_table::{assign_codes, CodeTable};
    use crate::huffman_coding::tree::build_tree;
    use crate::tools::freq_count::freqs;

    fn table_for(text: &str) -> CodeTable {
        assign_codes(build_tree(&freqs(text)).unwrap().as_ref())
    }

    #[test]
    fn pack_code_test() {
        assert_eq!(pack_code('a', "0").unwrap(), vec![1 << 24]);
        assert_eq!(pack_code('a', "1011").unwrap(), vec![(4 << 24) | 0b1011]);
        let long = "1".repeat(30);
        assert_eq!(
            pack_code('a', &long).unwrap(),
            vec![(24 << 24) | 0xff_ffff, (6 << 24) | 0b11_1111]
        );
        assert!(pack_code('a', "").unwrap().is_empty());
        assert!(matches!(
            pack_code('a', "012"),
            Err(HuffError::InvalidCodeTable(_))
        ));
    }

    #[test]
    fn aaabbc_test() {
        // a=0 a=0 a=0 b=11 b=11 c=10 -> 000111110 + 7 bits of padding
        let codes = table_for("aaabbc");
        assert_eq!(
            encode("aaabbc", &codes).unwrap(),
            vec![0b0001_1111, 0b0000_0000]
        );
        let bp = encode_packed("aaabbc", &codes).unwrap();
        assert_eq!(bp.bit_len(), 9);
        assert_eq!(bp.last_bits, 1);
    }

    #[test]
    fn empty_text_test() {
        assert!(encode("", &CodeTable::new()).unwrap().is_empty());
        assert!(encode("", &table_for("abc")).unwrap().is_empty());
    }

    #[test]
    fn no_padding_byte_when_aligned_test() {
        // a=0 b=11 c=10, so "abcab" is exactly 8 bits
        let codes = table_for("aaabbc");
        assert_eq!(encoded_len("abcaba", &codes).unwrap(), 9);
        assert_eq!(encoded_len("abcab", &codes).unwrap(), 8);
        assert_eq!(encode("abcab", &codes).unwrap(), vec![0b0111_0011]);
    }

    #[test]
    fn single_symbol_test() {
        let codes = table_for("zzzz");
        assert_eq!(encode("zzzz", &codes).unwrap(), vec![0b1111_0000]);
    }

    #[test]
    fn missing_code_test() {
        let codes = table_for("aaabbc");
        assert!(matches!(
            encode("abd", &codes),
            Err(HuffError::MissingCode('d'))
        ));
        assert!(matches!(
            encoded_len("xa", &codes),
            Err(HuffError::MissingCode('x'))
        ));
    }
}
