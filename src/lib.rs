//! Huffman coding of text, with a small file compressor on top.
//!
//! Builds a prefix-free variable length binary code for the characters of a text with Huffman's
//! algorithm, packs the text into bytes with it, and reverses the process given the code table
//! and the bytes.
//!
//! ```
//! use huffcode::huffman_coding::coding_tree::CodingTree;
//! use huffcode::huffman_coding::decode::decode_with_codes;
//!
//! let coding_tree = CodingTree::new("aaabbc")?;
//! assert_eq!(coding_tree.codes.to_string(), "{a=0, b=11, c=10}");
//! assert_eq!(coding_tree.decode()?, "aaabbc");
//!
//! // Without the bit count, the zero padding decodes as extra 'a's
//! let text = decode_with_codes(&coding_tree.bits, &coding_tree.codes)?;
//! assert!(text.starts_with("aaabbc"));
//! # Ok::<(), huffcode::error::HuffError>(())
//! ```
//!
//! Basic usage of the binary to compress a file is as follows:
//!
//! `$> huffcode -z book.txt`
//!
//! This writes the code table to book.txt.codes and the packed text to book.txt.huf.
//! `$> huffcode -d book.txt.huf` reads both back and writes book.txt.out.
//!
#![warn(rust_2018_idioms)]

pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;
