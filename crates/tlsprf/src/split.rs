// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Splits a secret into the two halves keying a dual-hash PRF.
///
/// Both halves are `ceil(n / 2)` bytes long: `S1` is taken from the front,
/// `S2` from the back. For an odd-length secret the middle byte belongs to
/// both halves (RFC 2246 Section 5), so the halves overlap by one byte.
///
/// # Example
///
/// ```
/// use tlsprf::split_secret;
///
/// let (s1, s2) = split_secret(b"abcde");
/// assert_eq!(s1, b"abc");
/// assert_eq!(s2, b"cde");
/// ```
pub fn split_secret(secret: &[u8]) -> (&[u8], &[u8]) {
    let half = secret.len().div_ceil(2);
    (&secret[..half], &secret[secret.len() - half..])
}
