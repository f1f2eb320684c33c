// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hash selection for the PRF.
//!
//! Mode names follow the digest naming of the TLS PRF bindings this crate
//! replaces: a single digest (`"sha1"`) runs one `P_hash` stream, two
//! digests joined by a slash (`"md5/sha1"`) run two streams over the split
//! secret and XOR them.

use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;

use crate::error::PrfError;

/// Keyed-hash primitive driving one `P_hash` stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrfHash {
    /// HMAC-MD5, 16-byte blocks
    Md5,
    /// HMAC-SHA1, 20-byte blocks
    Sha1,
    /// HMAC-SHA224, 28-byte blocks
    Sha224,
    /// HMAC-SHA256, 32-byte blocks
    Sha256,
    /// HMAC-SHA384, 48-byte blocks
    Sha384,
    /// HMAC-SHA512, 64-byte blocks
    Sha512,
}

impl PrfHash {
    /// Every supported primitive, in name order.
    pub const ALL: [PrfHash; 6] = [
        PrfHash::Md5,
        PrfHash::Sha1,
        PrfHash::Sha224,
        PrfHash::Sha256,
        PrfHash::Sha384,
        PrfHash::Sha512,
    ];

    /// Canonical lowercase digest name.
    pub const fn name(self) -> &'static str {
        match self {
            PrfHash::Md5 => "md5",
            PrfHash::Sha1 => "sha1",
            PrfHash::Sha224 => "sha224",
            PrfHash::Sha256 => "sha256",
            PrfHash::Sha384 => "sha384",
            PrfHash::Sha512 => "sha512",
        }
    }

    /// Digest size in bytes, i.e. the size of one `P_hash` block.
    pub const fn block_len(self) -> usize {
        match self {
            PrfHash::Md5 => 16,
            PrfHash::Sha1 => 20,
            PrfHash::Sha224 => 28,
            PrfHash::Sha256 => 32,
            PrfHash::Sha384 => 48,
            PrfHash::Sha512 => 64,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|hash| hash.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for PrfHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrfHash {
    type Err = PrfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| PrfError::InvalidMode(s.to_string()))
    }
}

/// How the output stream is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrfMode {
    /// One `P_hash` stream keyed with the whole secret.
    Single(PrfHash),
    /// Two `P_hash` streams keyed with the two secret halves, XORed together.
    Dual(PrfHash, PrfHash),
}

impl PrfMode {
    /// `P_MD5` alone.
    pub const MD5: PrfMode = PrfMode::Single(PrfHash::Md5);
    /// `P_SHA1` alone.
    pub const SHA1: PrfMode = PrfMode::Single(PrfHash::Sha1);
    /// The TLS 1.0/1.1 PRF: `P_MD5(S1) XOR P_SHA1(S2)`.
    pub const MD5_SHA1: PrfMode = PrfMode::Dual(PrfHash::Md5, PrfHash::Sha1);
}

impl fmt::Display for PrfMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrfMode::Single(hash) => write!(f, "{hash}"),
            PrfMode::Dual(first, second) => write!(f, "{first}/{second}"),
        }
    }
}

impl FromStr for PrfMode {
    type Err = PrfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut names = s.split('/');
        let first = names.next().and_then(PrfHash::from_name);
        let second = names.next().map(PrfHash::from_name);

        let mode = match (first, second, names.next()) {
            (Some(hash), None, None) => Some(PrfMode::Single(hash)),
            (Some(first), Some(Some(second)), None) => Some(PrfMode::Dual(first, second)),
            _ => None,
        };

        mode.ok_or_else(|| {
            tracing::debug!(mode = s, "rejected PRF mode name");
            PrfError::InvalidMode(s.to_string())
        })
    }
}
