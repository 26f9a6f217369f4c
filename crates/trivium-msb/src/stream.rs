use core::{error, fmt};

use inout::InOutBuf;

use crate::state::State;

/// The size in bytes of a key.
pub const KEY_SIZE: usize = 10;

/// The size in bytes of an IV.
pub const IV_SIZE: usize = 10;

/// The size in bytes of the cipher register.
pub const STATE_SIZE: usize = crate::state::STATE_SIZE;

/// The maximum number of keystream bytes that one `(key, IV)`
/// session may produce (2^64 bits, the Trivium design limit).
pub const MAX_BYTES: u64 = 1 << 61;

/// An error returned by [`Trivium`] when it's reached the end of
/// its keystream.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Error;

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "end of Trivium keystream")
    }
}

/// A byte-oriented, MSB-first variant of the Trivium stream cipher.
///
/// Each instance is one `(key, IV)` session: construction loads the
/// 288-bit register and runs the 1152-clock warm-up, after which the
/// keystream is consumed destructively. Sessions are never implicitly
/// reset or reused; start a new session for each `(key, IV)` pair.
///
/// Key and IV bytes are used exactly as supplied. For data produced
/// with the byte-reversed convention, see [`Trivium::new_reversed`].
#[derive(Clone)]
pub struct Trivium {
    state: State,
    /// Number of remaining keystream bytes.
    remaining: u64,
}

impl Trivium {
    /// Creates a cipher session, using the key and IV bytes in the
    /// order supplied.
    #[inline]
    pub fn new(key: &[u8; KEY_SIZE], iv: &[u8; IV_SIZE]) -> Self {
        Self {
            state: State::new(key, iv),
            remaining: MAX_BYTES,
        }
    }

    /// Creates a cipher session, reversing the key and IV byte order
    /// first.
    ///
    /// Some deployments treat the key and IV as big-endian 80-bit
    /// numerals and feed the cipher their bytes back to front. The
    /// two conventions are not cross-compatible.
    #[inline]
    pub fn new_reversed(key: &[u8; KEY_SIZE], iv: &[u8; IV_SIZE]) -> Self {
        let mut key = *key;
        let mut iv = *iv;
        key.reverse();
        iv.reverse();
        Self::new(&key, &iv)
    }

    /// Returns the number of keystream bytes left in the session.
    #[inline]
    pub fn remaining_bytes(&self) -> u64 {
        self.remaining
    }

    /// XORs each byte in the remainder of the keystream with the
    /// corresponding byte in `data`.
    #[inline]
    pub fn apply_keystream(mut self, data: InOutBuf<'_, '_, u8>) -> Result<(), Error> {
        self.apply_keystream_bytes(data)
    }

    /// XORs each byte in `data` with the corresponding byte in the
    /// keystream.
    #[inline]
    pub fn apply_keystream_bytes(&mut self, data: InOutBuf<'_, '_, u8>) -> Result<(), Error> {
        let n = u64::try_from(data.len()).map_err(|_| Error)?;
        self.remaining = self.remaining.checked_sub(n).ok_or(Error)?;
        for mut byte in data {
            let z = self.state.keystream_byte();
            let v = *byte.get_in() ^ z;
            *byte.get_out() = v;
        }
        Ok(())
    }

    /// Writes the next keystream bytes to `dst`.
    #[inline]
    pub fn write_keystream(&mut self, dst: &mut [u8]) -> Result<(), Error> {
        let n = u64::try_from(dst.len()).map_err(|_| Error)?;
        self.remaining = self.remaining.checked_sub(n).ok_or(Error)?;
        for byte in dst {
            *byte = self.state.keystream_byte();
        }
        Ok(())
    }
}

impl fmt::Debug for Trivium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trivium").finish_non_exhaustive()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::ZeroizeOnDrop for Trivium {}

/// Encrypts `data` in place.
#[inline]
pub fn encrypt_in_place(
    key: &[u8; KEY_SIZE],
    iv: &[u8; IV_SIZE],
    data: &mut [u8],
) -> Result<(), Error> {
    Trivium::new(key, iv).apply_keystream(data.into())
}

/// Decrypts `data` in place.
///
/// Encryption and decryption are the same operation: a pure XOR with
/// a keystream determined by the key, IV, and byte position.
#[inline]
pub fn decrypt_in_place(
    key: &[u8; KEY_SIZE],
    iv: &[u8; IV_SIZE],
    data: &mut [u8],
) -> Result<(), Error> {
    encrypt_in_place(key, iv, data)
}

/// Encrypts `data`, returning the ciphertext.
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
#[inline]
pub fn encrypt(
    key: &[u8; KEY_SIZE],
    iv: &[u8; IV_SIZE],
    data: &[u8],
) -> Result<alloc::vec::Vec<u8>, Error> {
    let mut out = alloc::vec::Vec::from(data);
    encrypt_in_place(key, iv, &mut out)?;
    Ok(out)
}

/// Decrypts `data`, returning the plaintext.
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
#[inline]
pub fn decrypt(
    key: &[u8; KEY_SIZE],
    iv: &[u8; IV_SIZE],
    data: &[u8],
) -> Result<alloc::vec::Vec<u8>, Error> {
    encrypt(key, iv, data)
}
