//! The bitstream module is the bit level I/O subsystem for huffcode.
//!
//! Codes are variable length, so the encoder hands them to a BitPacker, which queues bits and
//! emits whole bytes (most significant bit first), zero padding the last one. The decoder goes
//! the other way with a BitReader, taking one bit at a time from the packed bytes.
//!
//! Neither side records how many padding bits were added. See the decoder for what that means.
//!
pub mod bitpacker;
pub mod bitreader;
