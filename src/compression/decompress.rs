use std::fs;
use std::io::Write;

use log::{info, warn};

use super::compress::open_output;
use crate::error::Result;
use crate::huffman_coding::code_table::CodeTable;
use crate::huffman_coding::coding_tree::CodingTree;
use crate::huffman_coding::decode::decode;
use crate::huffman_coding::rebuild::rebuild_tree;
use crate::tools::cli::HuffOpts;
use crate::tools::freq_count::freqs;
use crate::tools::report::Timer;

/// Decompress the file specified in opts using its code table file. Returns the text.
pub fn decompress(opts: &HuffOpts) -> Result<String> {
    let mut timer = Timer::new();

    let bytes = fs::read(&opts.file)?;
    // An empty text leaves an empty code table, which can't be rebuilt. Nothing to decode anyway.
    let text = if bytes.is_empty() {
        warn!("{} is empty, writing an empty file.", opts.file);
        String::new()
    } else {
        let codes: CodeTable = fs::read_to_string(opts.codes_path())?.parse()?;
        timer.mark("read");
        let tree = rebuild_tree(&codes)?;
        timer.mark("rebuild");
        decode(&bytes, &tree)
    };
    timer.mark("decode");

    let out_path = opts.output_path();
    let mut f_out = open_output(&out_path, opts.force_overwrite)?;
    f_out.write_all(text.as_bytes())?;
    timer.mark("write");
    info!(
        "Decoded {} bytes into {} characters in {}.",
        bytes.len(),
        text.chars().count(),
        out_path
    );
    Ok(text)
}

/// Outcome of a round trip through the persisted forms of the code table and bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundTrip {
    /// Positions, within the original length, where the decoded text differs
    pub differing: usize,
    /// Decoded characters past the end of the original (padding that decoded as symbols)
    pub extra: usize,
    /// Original characters the decoded text never reached
    pub missing: usize,
}

impl RoundTrip {
    pub fn is_exact(&self) -> bool {
        *self == RoundTrip::default()
    }
}

/// Encode `text`, render and re-parse its code table, decode every packed bit, and compare.
pub fn round_trip(text: &str) -> Result<RoundTrip> {
    let coding_tree = CodingTree::new(text)?;
    if coding_tree.codes.is_empty() {
        return Ok(RoundTrip::default());
    }
    let codes: CodeTable = coding_tree.codes.to_string().parse()?;
    let decoded = decode(&coding_tree.bits, &rebuild_tree(&codes)?);

    let original_len = text.chars().count();
    let decoded_len = decoded.chars().count();
    Ok(RoundTrip {
        differing: text
            .chars()
            .zip(decoded.chars())
            .filter(|(a, b)| a != b)
            .count(),
        extra: decoded_len.saturating_sub(original_len),
        missing: original_len.saturating_sub(decoded_len),
    })
}

/// Test mode: round trip the input file in memory and report the differences.
pub fn self_test(opts: &HuffOpts) -> Result<RoundTrip> {
    let text = fs::read_to_string(&opts.file)?;
    info!("Testing {} distinct symbols.", freqs(&text).len());
    let result = round_trip(&text)?;

    println!("Number of different characters: {}", result.differing);
    if result.extra > 0 {
        println!(
            "Trailing padding decoded as {} extra characters",
            result.extra
        );
    }
    if result.missing > 0 {
        warn!("{} characters were not recovered.", result.missing);
    }
    Ok(result)
}

#[cfg(test)]
mod test {
    use super::{round_trip, RoundTrip};

    #[test]
    fn empty_round_trip_test() {
        assert!(round_trip("").unwrap().is_exact());
    }

    #[test]
    fn single_symbol_round_trip_test() {
        assert!(round_trip("zzzz").unwrap().is_exact());
    }

    #[test]
    fn padding_round_trip_test() {
        // 9 bits of code, the 7 zero pad bits spell "a" seven times
        assert_eq!(
            round_trip("aaabbc").unwrap(),
            RoundTrip {
                differing: 0,
                extra: 7,
                missing: 0
            }
        );
    }

    #[test]
    fn awkward_symbols_round_trip_test() {
        let r = round_trip("a=b, {c}=={=}\n0 1,=").unwrap();
        assert_eq!(r.differing, 0);
        assert_eq!(r.missing, 0);
        assert!(r.extra < 8);
    }
}
