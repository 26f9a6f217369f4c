//! The 288-bit cipher register.

use crate::bits::{crosswrite_back, crosswrite_fwd, get_bit, put_bit};

/// The size in bytes of the register.
pub(crate) const STATE_SIZE: usize = 36;

/// Clocks discarded after loading the key and IV, before any
/// keystream output.
pub(crate) const WARMUP_CLOCKS: usize = 4 * 288;

/// The cipher register.
///
/// Bits are addressed 0..288, byte-major, MSB-first within each byte:
///
/// ```text
/// bits   0..=79   key, byte-aligned
/// bits  80..=92   zero
/// bits  93..=172  IV, three bits past the byte-11/12 boundary
/// bits 173..=284  zero
/// bits 285..=287  one
/// ```
#[derive(Clone)]
pub(crate) struct State {
    s: [u8; STATE_SIZE],
}

impl State {
    /// Loads the key and IV and runs the warm-up.
    pub fn new(key: &[u8; 10], iv: &[u8; 10]) -> Self {
        let mut state = Self::load(key, iv);
        for _ in 0..WARMUP_CLOCKS {
            state.clock();
        }
        state
    }

    /// Packs the key and IV into a fresh register, without warming
    /// it up.
    fn load(key: &[u8; 10], iv: &[u8; 10]) -> Self {
        let mut s = [0u8; STATE_SIZE];

        s[..10].copy_from_slice(key);

        // Bytes 10 and 11 stay zero. The IV is written one byte at
        // a time into bytes 12..=21, each byte then crosswritten
        // back by three bits, so its leading bits spill into the
        // low bits of the previous byte and the whole 80-bit field
        // lands at offsets 93..=172.
        for (i, &byte) in iv.iter().enumerate() {
            #[allow(
                clippy::indexing_slicing,
                clippy::arithmetic_side_effects,
                reason = "The IV occupies bytes 12..=21 of the 36-byte register"
            )]
            {
                s[12 + i] = byte;
                crosswrite_back(&mut s, 12 + i, 3);
            }
        }

        // Bytes 22..=34 stay zero; the register ends in 00000111.
        s[STATE_SIZE - 1] = 0x07;

        Self { s }
    }

    /// Runs one cipher clock and returns the emitted keystream bit.
    ///
    /// Computes the output bit from the six tap pairs, derives the
    /// three feedback bits, shifts the whole register one bit toward
    /// higher offsets, then injects the feedback at offsets 0, 93,
    /// and 177 (the section heads), overwriting whatever the shift
    /// placed there.
    pub fn clock(&mut self) -> u8 {
        let t1 = self.bit(65) ^ self.bit(92);
        let t2 = self.bit(161) ^ self.bit(176);
        let t3 = self.bit(242) ^ self.bit(287);

        let z = t1 ^ t2 ^ t3;

        let f1 = t1 ^ (self.bit(90) & self.bit(91)) ^ self.bit(170);
        let f2 = t2 ^ (self.bit(174) & self.bit(175)) ^ self.bit(263);
        let f3 = t3 ^ (self.bit(285) & self.bit(286)) ^ self.bit(68);

        self.shift();

        put_bit(&mut self.s, 0, f3);
        put_bit(&mut self.s, 93, f1);
        put_bit(&mut self.s, 177, f2);

        z
    }

    /// Shifts the register one bit toward higher offsets. Bit 287
    /// falls off the end; bit 0 becomes zero.
    fn shift(&mut self) {
        self.s[STATE_SIZE - 1] >>= 1;
        for split in (1..STATE_SIZE).rev() {
            crosswrite_fwd(&mut self.s, split, 1);
        }
    }

    /// Returns the next keystream byte.
    ///
    /// Eight clocks; the first emitted bit lands in the byte's least
    /// significant position.
    pub fn keystream_byte(&mut self) -> u8 {
        let mut z = 0;
        for bit in 0..8 {
            z |= self.clock() << bit;
        }
        z
    }

    #[inline(always)]
    fn bit(&self, offset: usize) -> u8 {
        get_bit(&self.s, offset)
    }
}

#[cfg(feature = "zeroize")]
impl Drop for State {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        self.s.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::ZeroizeOnDrop for State {}
