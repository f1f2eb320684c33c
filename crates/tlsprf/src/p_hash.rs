// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `P_hash` data expansion per RFC 2246 Section 5
//!
//! A(0) = seed
//! A(i) = HMAC_hash(secret, A(i-1))
//! P_hash(secret, seed) = HMAC_hash(secret, A(1) || seed) ||
//!                        HMAC_hash(secret, A(2) || seed) || ...

use hmac::digest::{KeyInit, Mac, Output, OutputSizeUser};
use tlsprf_util::xor_in_place;
use zeroize::Zeroize;

use crate::error::PrfError;

/// Lazy `P_hash` block stream over a keyed-hash primitive `M`.
///
/// `M` is any RustCrypto MAC, normally `hmac::Hmac<D>`. The stream is
/// infinite: iterating yields one digest-sized block per step, and
/// [`fill`](Self::fill) / [`xor_into`](Self::xor_into) pull exactly as many
/// blocks as the output needs. Bytes of a block past the end of the output
/// are dropped, never carried into the next call.
///
/// The seed is given as parts which are fed to the MAC in order, so the
/// result equals running `P_hash` over their concatenation.
pub struct PHash<'a, M: Mac + KeyInit + Clone> {
    /// MAC keyed with the secret, cloned for every evaluation.
    /// Its pad state is not wiped on drop; `hmac` does not expose it.
    keyed: M,

    /// Seed parts, in order
    seed: &'a [&'a [u8]],

    /// A(i) backing the next block
    chain: Output<M>,

    /// false until the first block has used A(1)
    advance: bool,
}

impl<'a, M: Mac + KeyInit + Clone> PHash<'a, M> {
    /// Keys the MAC with `secret` and computes A(1).
    ///
    /// # Errors
    /// Returns [`PrfError::Primitive`] if the MAC rejects the secret.
    pub fn new(secret: &[u8], seed: &'a [&'a [u8]]) -> Result<Self, PrfError> {
        let keyed = <M as KeyInit>::new_from_slice(secret)?;

        let mut mac = keyed.clone();
        for part in seed {
            mac.update(part);
        }
        let chain = mac.finalize().into_bytes();

        Ok(Self {
            keyed,
            seed,
            chain,
            advance: false,
        })
    }

    /// Size of one block in bytes (the MAC output size).
    pub fn block_len() -> usize {
        <M as OutputSizeUser>::output_size()
    }

    fn next_block(&mut self) -> Output<M> {
        if self.advance {
            let mut mac = self.keyed.clone();
            mac.update(&self.chain);
            let mut next = mac.finalize().into_bytes();
            self.chain.copy_from_slice(&next);
            next.as_mut_slice().zeroize();
        }
        self.advance = true;

        let mut mac = self.keyed.clone();
        mac.update(&self.chain);
        for part in self.seed {
            mac.update(part);
        }
        mac.finalize().into_bytes()
    }

    /// Overwrites `out` with the next `out.len()` bytes of the stream.
    pub fn fill(&mut self, out: &mut [u8]) {
        for chunk in out.chunks_mut(Self::block_len()) {
            let mut block = self.next_block();
            chunk.copy_from_slice(&block[..chunk.len()]);
            block.as_mut_slice().zeroize();
        }
    }

    /// XORs the next `out.len()` bytes of the stream into `out`.
    pub fn xor_into(&mut self, out: &mut [u8]) {
        for chunk in out.chunks_mut(Self::block_len()) {
            let mut block = self.next_block();
            xor_in_place(chunk, &block);
            block.as_mut_slice().zeroize();
        }
    }
}

impl<M: Mac + KeyInit + Clone> Iterator for PHash<'_, M> {
    type Item = Output<M>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_block())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<M: Mac + KeyInit + Clone> Drop for PHash<'_, M> {
    fn drop(&mut self) {
        self.chain.as_mut_slice().zeroize();
    }
}
