// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte helpers for PRF output handling.
//!
//! Kept dependency-free so both the PRF crate and its tests can share them.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;

/// XORs `src` into `dst` byte by byte.
///
/// Only the common prefix `min(dst.len(), src.len())` is touched; trailing
/// bytes of the longer slice are left as they are.
///
/// # Example
///
/// ```
/// use tlsprf_util::xor_in_place;
///
/// let mut dst = [0xf0u8, 0x0f, 0xaa];
/// xor_in_place(&mut dst, &[0xff, 0xff]);
/// assert_eq!(dst, [0x0f, 0xf0, 0xaa]);
/// ```
#[inline]
pub fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= *s;
    }
}

/// Parses a hexadecimal string into bytes.
///
/// The string must have an even number of characters and contain only
/// valid hexadecimal digits (0-9, a-f, A-F).
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or has odd length.
///
/// # Example
///
/// ```
/// use tlsprf_util::hex_to_bytes;
///
/// let bytes = hex_to_bytes("d471");
/// assert_eq!(bytes, vec![0xd4, 0x71]);
/// ```
#[inline]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    assert!(hex.len() % 2 == 0, "hex string has odd length");

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("invalid hex digit"))
        .collect()
}
