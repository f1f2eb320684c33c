// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Labelled PRF as used by TLS
//!
//! `PRF(secret, label, seed)` runs the PRF over the seed `label || seed`.
//!
//! References:
//! - RFC 2246 Section 5 (TLS 1.0), RFC 4346 Section 5 (TLS 1.1)
//!   <https://datatracker.ietf.org/doc/html/rfc2246#section-5>
//! - RFC 5246 Section 5 (TLS 1.2)
//!   <https://datatracker.ietf.org/doc/html/rfc5246#section-5>

use crate::error::PrfError;
use crate::mode::{PrfHash, PrfMode};
use crate::prf::Prf;

/// Label for deriving the master secret from the pre-master secret
pub const MASTER_SECRET_LABEL: &[u8] = b"master secret";

/// Label for deriving the key block from the master secret
pub const KEY_EXPANSION_LABEL: &[u8] = b"key expansion";

/// Label for the client Finished verify data
pub const CLIENT_FINISHED_LABEL: &[u8] = b"client finished";

/// Label for the server Finished verify data
pub const SERVER_FINISHED_LABEL: &[u8] = b"server finished";

/// TLS 1.0/1.1 PRF: `P_MD5(S1, label || seed) XOR P_SHA1(S2, label || seed)`.
pub fn tls10_prf(out: &mut [u8], secret: &[u8], label: &[u8], seed: &[u8]) -> Result<(), PrfError> {
    Prf::new(PrfMode::MD5_SHA1).generate(out, secret, &[label, seed])
}

/// TLS 1.2 PRF: `P_<hash>(secret, label || seed)`.
///
/// The cipher suite picks `hash`; SHA-256 unless the suite says otherwise.
pub fn tls12_prf(
    out: &mut [u8],
    hash: PrfHash,
    secret: &[u8],
    label: &[u8],
    seed: &[u8],
) -> Result<(), PrfError> {
    Prf::new(PrfMode::Single(hash)).generate(out, secret, &[label, seed])
}
