//! RustCrypto bindings.
//!
//! [RustCrypto]: https://github.com/rustcrypto

#![cfg(feature = "rust-crypto")]
#![cfg_attr(docsrs, doc(cfg(feature = "rust-crypto")))]

use core::fmt;

use cipher::{
    typenum::U1, AlgorithmName, Block, BlockSizeUser, ParBlocksSizeUser, StreamBackend,
    StreamCipherCore, StreamCipherError, StreamClosure,
};
use inout::InOutBuf;

use crate::Trivium;

impl AlgorithmName for Trivium {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Trivium (MSB-first variant)")
    }
}

impl StreamCipherCore for Trivium {
    #[inline]
    fn remaining_blocks(&self) -> Option<usize> {
        let blocks = usize::try_from(self.remaining_bytes()).unwrap_or(usize::MAX);
        Some(blocks)
    }

    #[inline(always)]
    fn process_with_backend(&mut self, f: impl StreamClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut Backend { cipher: self });
    }

    #[inline]
    fn try_apply_keystream_partial(
        self,
        buf: InOutBuf<'_, '_, u8>,
    ) -> Result<(), StreamCipherError> {
        self.apply_keystream(buf).map_err(|_| StreamCipherError)
    }
}

// The engine is byte-oriented, so a "block" is a single byte.
impl BlockSizeUser for Trivium {
    type BlockSize = U1;
}

struct Backend<'a> {
    cipher: &'a mut Trivium,
}

impl BlockSizeUser for Backend<'_> {
    type BlockSize = U1;
}

impl ParBlocksSizeUser for Backend<'_> {
    type ParBlocksSize = U1;
}

impl StreamBackend for Backend<'_> {
    #[inline(always)]
    fn gen_ks_block(&mut self, block: &mut Block<Self>) {
        let _ = self.cipher.write_keystream(block.as_mut_slice());
    }
}
