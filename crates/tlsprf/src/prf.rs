// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Single- and dual-hash PRF output generation

use core::fmt;
use core::str::FromStr;

use alloc::vec;
use alloc::vec::Vec;

use crate::error::PrfError;
use crate::expander::Expander;
use crate::mode::PrfMode;
use crate::split::split_secret;

/// A PRF bound to one [`PrfMode`].
///
/// Stateless apart from the mode: every call takes the secret and seed
/// explicitly, so one `Prf` can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prf {
    mode: PrfMode,
}

impl Prf {
    /// Creates a PRF for `mode`.
    pub const fn new(mode: PrfMode) -> Self {
        Self { mode }
    }

    /// Creates a PRF from a mode name such as `"sha1"` or `"md5/sha1"`.
    ///
    /// # Errors
    /// Returns [`PrfError::InvalidMode`] for unknown names.
    pub fn from_name(name: &str) -> Result<Self, PrfError> {
        name.parse()
    }

    /// The mode this PRF runs.
    pub const fn mode(&self) -> PrfMode {
        self.mode
    }

    /// Fills all of `out` with PRF output for `secret` and the concatenated
    /// `seed` parts.
    ///
    /// In dual mode the secret is split with [`split_secret`] and the two
    /// streams are XORed. Both streams are keyed before `out` is written, so
    /// on error `out` is left untouched.
    ///
    /// # Errors
    /// Returns [`PrfError::Primitive`] if a keyed-hash primitive rejects its
    /// key.
    pub fn generate(&self, out: &mut [u8], secret: &[u8], seed: &[&[u8]]) -> Result<(), PrfError> {
        tracing::trace!(mode = %self.mode, len = out.len(), "generating PRF output");

        match self.mode {
            PrfMode::Single(hash) => {
                let mut stream = Expander::new(hash, secret, seed)?;
                stream.fill(out);
            }
            PrfMode::Dual(first, second) => {
                let (s1, s2) = split_secret(secret);
                let mut first = Expander::new(first, s1, seed)?;
                let mut second = Expander::new(second, s2, seed)?;
                first.fill(out);
                second.xor_into(out);
            }
        }

        Ok(())
    }

    /// Fills the first `len` bytes of `out`, leaving the rest unchanged.
    ///
    /// # Errors
    /// Returns [`PrfError::OutputTooSmall`] before any computation if
    /// `len > out.len()`, otherwise as [`generate`](Self::generate).
    pub fn generate_into(
        &self,
        out: &mut [u8],
        len: usize,
        secret: &[u8],
        seed: &[&[u8]],
    ) -> Result<(), PrfError> {
        if len > out.len() {
            return Err(PrfError::OutputTooSmall {
                requested: len,
                available: out.len(),
            });
        }

        self.generate(&mut out[..len], secret, seed)
    }

    /// Returns `len` bytes of PRF output in a new vector.
    ///
    /// # Errors
    /// As [`generate`](Self::generate).
    pub fn generate_vec(&self, len: usize, secret: &[u8], seed: &[&[u8]]) -> Result<Vec<u8>, PrfError> {
        let mut out = vec![0u8; len];
        self.generate(&mut out, secret, seed)?;
        Ok(out)
    }
}

impl From<PrfMode> for Prf {
    fn from(mode: PrfMode) -> Self {
        Self::new(mode)
    }
}

impl FromStr for Prf {
    type Err = PrfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<PrfMode>().map(Self::new)
    }
}

impl fmt::Display for Prf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.mode, f)
    }
}

/// Fills `out` with PRF output, selecting the mode by name.
///
/// `mode` is one digest name (`"md5"`, `"sha1"`, `"sha256"`, ...) or two
/// joined by a slash (`"md5/sha1"` for TLS 1.0/1.1). The seed is the
/// concatenation of `seed` parts in order.
///
/// # Errors
/// Returns [`PrfError::InvalidMode`] for an unknown mode name, in which
/// case `out` is not written.
///
/// # Example
///
/// ```
/// let mut out = [0u8; 54];
/// tlsprf::generate(&mut out, "md5/sha1", b"secret key", &[b"seed1", b"seed2"])
///     .expect("Failed to generate(..)");
/// assert_eq!(&out[..4], &[0xb6, 0x75, 0xac, 0x71]);
/// ```
pub fn generate(out: &mut [u8], mode: &str, secret: &[u8], seed: &[&[u8]]) -> Result<(), PrfError> {
    Prf::from_name(mode)?.generate(out, secret, seed)
}
