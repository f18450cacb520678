//! The compression module is the file driver of huffcode. The coding itself lives in
//! huffman_coding; this reads the input, writes the results, and reports.
//!
//! Compression reads a UTF-8 text file and writes two files:
//! - The code table, as one line of text: `{a=0, b=11, c=10}`.
//! - The packed bits, as raw bytes.
//!
//! Decompression reads both back, rebuilds the tree from the code table, and decodes every bit
//! of the packed file. The bit count is not stored, so padding at the end of the last byte can
//! decode as a few extra characters (see huffman_coding::decode).
//!
//! Test mode runs the same round trip in memory and counts differences, as a self check.
//!

pub mod compress;
pub mod decompress;
