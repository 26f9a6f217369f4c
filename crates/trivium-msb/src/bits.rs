//! Flat bit addressing and byte-boundary bit moves.
//!
//! Offsets are byte-major with MSB-first numbering: offset 0 is the
//! most significant bit of the first byte, offset 8 the most
//! significant bit of the second, and so on.

/// Returns the bit at `offset`.
#[inline(always)]
pub(crate) fn get_bit(buf: &[u8], offset: usize) -> u8 {
    #[allow(
        clippy::indexing_slicing,
        reason = "Offsets into the cipher state are literals below 288"
    )]
    let byte = buf[offset / 8];
    (byte >> (7 - (offset % 8))) & 0x01
}

/// Writes the low bit of `bit` at `offset`, leaving the rest of that
/// byte untouched.
#[inline(always)]
pub(crate) fn put_bit(buf: &mut [u8], offset: usize, bit: u8) {
    let shift = 7 - (offset % 8);
    let mask = 0x01 << shift;
    #[allow(
        clippy::indexing_slicing,
        reason = "Offsets into the cipher state are literals below 288"
    )]
    let byte = &mut buf[offset / 8];
    *byte = (*byte & !mask) | ((bit << shift) & mask);
}

/// Moves the low `n` bits of `buf[split - 1]` into the high `n` bits
/// of `buf[split]`, then shifts `buf[split - 1]` right by `n`.
///
/// `n` must be in 1..=7 and `split` in 1..buf.len(). Bits of
/// `buf[split]` outside the run are preserved; the vacated high bits
/// of `buf[split - 1]` become zero.
#[inline(always)]
pub(crate) fn crosswrite_fwd(buf: &mut [u8], split: usize, n: u32) {
    // e.g. for n = 3, 11111111 becomes 11100000
    let mask = 0xFFu8 << (8 - n);
    #[allow(
        clippy::indexing_slicing,
        reason = "Callers pass split boundaries inside the 36-byte state"
    )]
    {
        let carried = buf[split - 1] << (8 - n);
        buf[split] = (buf[split] & !mask) | (carried & mask);
        buf[split - 1] >>= n;
    }
}

/// Moves the high `n` bits of `buf[split]` into the low `n` bits of
/// `buf[split - 1]`, then shifts `buf[split]` left by `n`.
///
/// The mirror image of [`crosswrite_fwd`], with the same contract.
#[inline(always)]
pub(crate) fn crosswrite_back(buf: &mut [u8], split: usize, n: u32) {
    // e.g. for n = 3, 00000111
    let mask = (0x01u8 << n).wrapping_sub(1);
    #[allow(
        clippy::indexing_slicing,
        reason = "Callers pass split boundaries inside the 36-byte state"
    )]
    {
        let carried = buf[split] >> (8 - n);
        buf[split - 1] = (buf[split - 1] & !mask) | (carried & mask);
        buf[split] <<= n;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_bit() {
        let buf = [0b1000_0001, 0b0100_0000];
        assert_eq!(get_bit(&buf, 0), 1);
        assert_eq!(get_bit(&buf, 1), 0);
        assert_eq!(get_bit(&buf, 7), 1);
        assert_eq!(get_bit(&buf, 8), 0);
        assert_eq!(get_bit(&buf, 9), 1);
        assert_eq!(get_bit(&buf, 15), 0);
    }

    #[test]
    fn test_put_bit() {
        let mut buf = [0u8; 2];
        put_bit(&mut buf, 0, 1);
        put_bit(&mut buf, 9, 1);
        assert_eq!(buf, [0b1000_0000, 0b0100_0000]);

        // Only the low bit of the value is written.
        put_bit(&mut buf, 15, 0xFE);
        assert_eq!(buf, [0b1000_0000, 0b0100_0000]);

        // Clearing leaves the other bits alone.
        put_bit(&mut buf, 0, 0);
        assert_eq!(buf, [0b0000_0000, 0b0100_0000]);
    }

    #[test]
    fn test_put_get_round_trip() {
        let mut buf = [0u8; 4];
        for offset in 0..32 {
            put_bit(&mut buf, offset, 1);
            assert_eq!(get_bit(&buf, offset), 1, "offset {offset}");
            put_bit(&mut buf, offset, 0);
            assert_eq!(get_bit(&buf, offset), 0, "offset {offset}");
            assert_eq!(buf, [0u8; 4], "offset {offset}");
        }
    }

    #[test]
    fn test_crosswrite_fwd() {
        // Low 3 bits of the first byte move into the high 3 bits of
        // the second.
        let mut buf = [0b0000_0101, 0b0001_1111];
        crosswrite_fwd(&mut buf, 1, 3);
        assert_eq!(buf, [0b0000_0000, 0b1011_1111]);

        // n = 1, as used by the per-clock register shift.
        let mut buf = [0b0000_0001, 0b0111_1110];
        crosswrite_fwd(&mut buf, 1, 1);
        assert_eq!(buf, [0b0000_0000, 0b1111_1110]);
    }

    #[test]
    fn test_crosswrite_back() {
        // High 3 bits of the second byte move into the low 3 bits of
        // the first, as used by IV insertion.
        let mut buf = [0b1111_1000, 0b1010_0001];
        crosswrite_back(&mut buf, 1, 3);
        assert_eq!(buf, [0b1111_1101, 0b0000_1000]);
    }

    #[test]
    fn test_crosswrite_preserves_neighbors() {
        // Only the two bytes at the boundary change.
        let mut buf = [0x12, 0x34, 0x56, 0x78];
        crosswrite_fwd(&mut buf, 2, 1);
        assert_eq!(buf[0], 0x12);
        assert_eq!(buf[3], 0x78);

        let mut buf = [0x12, 0x34, 0x56, 0x78];
        crosswrite_back(&mut buf, 2, 3);
        assert_eq!(buf[0], 0x12);
        assert_eq!(buf[3], 0x78);
    }
}
