use log::error;

/// Packs variable length codes into bytes, most significant bit first.
pub struct BitPacker {
    pub output: Vec<u8>,
    /// Meaningful bits in the final byte after flush(), 0 if the stream ended on a byte boundary.
    pub last_bits: u8,
    queue: u64,
    q_bits: u8,
    /// Total bits put on the stream, not counting padding.
    bits: usize,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of size specified. Call flush() to flush
    /// the bit queue to the buffer before using the output.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            last_bits: 0,
            queue: 0,
            q_bits: 0,
            bits: 0,
        }
    }

    /// Internal bitstream write function common to all out.XX functions.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /*
    NOTE: out24 takes a u32. The 8 most significant bits of the word indicate how
    many of the least significant bits will be written. Those bits must be aligned to
    the least signficant bit. (The middle bits are masked out.)

    Eg 00000100_00000000_00000000_00000010 writes out 0010.
    */
    /// Writes 0-24 bits encoded with the number of bits to write in the most
    /// significant byte of a 32 bit word.
    pub fn out24(&mut self, data: u32) {
        let depth = (data >> 24) as u8; //get bit length by shifting out the 24 data bits
        if depth == 0 {
            return;
        }
        self.queue <<= depth; //shift queue by bit length
        self.queue |= (data & (0xffffffff >> (32 - depth))) as u64; //add data portion to queue
        self.q_bits += depth; //update depth of queue bits
        self.bits += depth as usize;
        self.write_stream();
    }

    /// Flushes the remaining bits (1-7) from the buffer, padding with 0s in the least
    /// signficant bits
    pub fn flush(&mut self) {
        self.last_bits = self.q_bits % 8;
        if self.q_bits > 0 {
            self.queue <<= 8 - self.q_bits; //pad the queue with zeros
            self.q_bits += 8 - self.q_bits;
            self.write_stream(); // write out all that is left
            if self.q_bits > 0 {
                error!("Stuff left in the BitPacker queue.");
            }
        }
    }

    /// Number of code bits written so far, excluding padding.
    pub fn bit_len(&self) -> usize {
        self.bits
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format! {"[{}.{}]", self.bits / 8, self.bits % 8}
    }
}

#[cfg(test)]
mod test {
    use super::BitPacker;

    #[test]
    fn out24_and_loc_test() {
        let mut bw = BitPacker::new(100);
        let data = 0b00001000_00000000_00000000_00100001;
        bw.out24(data);
        assert_eq!("[1.0]", &bw.loc());
        bw.flush();
        assert_eq!(&bw.output, "!".as_bytes());
        assert_eq!(bw.last_bits, 0);
        let data = 0b00011000_00000000_00000000_00000011;
        bw.out24(data);
        bw.flush();
        assert_eq!(&bw.output, &[33, 0, 0, 3]);
        assert_eq!("[4.0]", &bw.loc());
    }

    #[test]
    fn padding_test() {
        let mut bw = BitPacker::new(4);
        // 111 then 1 then 0: five bits, three bits of padding
        bw.out24((3 << 24) | 0b111);
        bw.out24((1 << 24) | 1);
        bw.out24(1 << 24);
        assert_eq!(bw.bit_len(), 5);
        bw.flush();
        assert_eq!(bw.output, vec![0b1111_0000]);
        assert_eq!(bw.last_bits, 5);
    }

    #[test]
    fn crosses_bytes_test() {
        let mut bw = BitPacker::new(4);
        bw.out24((7 << 24) | 0b1010101);
        bw.out24((3 << 24) | 0b011);
        bw.flush();
        assert_eq!(bw.output, vec![0b1010_1010, 0b1100_0000]);
        assert_eq!(bw.last_bits, 2);
    }

    #[test]
    fn empty_flush_test() {
        let mut bw = BitPacker::new(0);
        bw.out24(0);
        bw.flush();
        assert!(bw.output.is_empty());
        assert_eq!(bw.last_bits, 0);
    }
}
