//! A byte-oriented variant of the [Trivium] stream cipher.
//!
//! This is *not* the eSTREAM reference cipher: the key and IV are
//! loaded byte-major with MSB-first bit addressing, the IV is packed
//! three bits past a byte boundary, and keystream bits fill each
//! output byte starting at its least significant position. Ciphertext
//! is incompatible with standard Trivium implementations.
//!
//! [Trivium]: https://www.ecrypt.eu.org/stream/e2-trivium.html

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(test, doctest, feature = "std")), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod bits;
pub mod rust_crypto;
mod state;
mod stream;

pub use stream::*;
