//! The huffman_coding module is the code construction and codec engine of huffcode.
//!
//! Compression goes:
//! - Frequency count (in tools): how often each symbol appears.
//! - Tree build: repeatedly merge the two lightest nodes, held in a binary min-heap, until one
//!   root remains. Ties are broken by the smallest symbol under each node, so the same text
//!   always gives the same tree.
//! - Code assignment: walk the tree, left = 0, right = 1.
//! - Encode: concatenate the codes and pack them into bytes, zero padding the last one.
//!
//! Decompression needs only the code table and the bytes:
//! - Rebuild: recover the tree shape from the codes.
//! - Decode: walk the rebuilt tree bit by bit.
//!
//! Everything here is in memory and single threaded. Merge order is sequential by nature.
//!

pub mod code_table;
pub mod coding_tree;
pub mod decode;
pub mod encode;
pub mod priority_queue;
pub mod rebuild;
pub mod tree;
