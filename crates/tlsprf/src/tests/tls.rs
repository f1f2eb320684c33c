// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use tlsprf_util::hex_to_bytes;

use super::support::{MD5_SHA1_54, SECRET, reference_prf};
use crate::mode::{PrfHash, PrfMode};
use crate::tls::{KEY_EXPANSION_LABEL, MASTER_SECRET_LABEL, tls10_prf, tls12_prf};

#[test]
fn test_tls10_prf_prepends_label() {
    let mut out = [0u8; 54];
    tls10_prf(&mut out, SECRET, b"seed1", b"seed2").expect("Failed to tls10_prf(..)");

    assert_eq!(out.to_vec(), hex_to_bytes(MD5_SHA1_54));
}

#[test]
fn test_tls10_master_secret_shape() {
    let pre_master = [0x03u8; 48];
    let randoms = [0x20u8; 64];

    let mut master = [0u8; 48];
    tls10_prf(&mut master, &pre_master, MASTER_SECRET_LABEL, &randoms)
        .expect("Failed to tls10_prf(..)");

    let mut seed = MASTER_SECRET_LABEL.to_vec();
    seed.extend_from_slice(&randoms);
    assert_eq!(master.to_vec(), reference_prf(PrfMode::MD5_SHA1, &pre_master, &seed, 48));
}

#[test]
fn test_tls12_prf_matches_single_mode() {
    let secret = [0x9bu8; 16];
    let randoms = [0xa0u8; 16];

    for hash in [PrfHash::Sha256, PrfHash::Sha384] {
        let mut out = [0u8; 100];
        tls12_prf(&mut out, hash, &secret, KEY_EXPANSION_LABEL, &randoms)
            .expect("Failed to tls12_prf(..)");

        let mut seed = KEY_EXPANSION_LABEL.to_vec();
        seed.extend_from_slice(&randoms);
        assert_eq!(out.to_vec(), reference_prf(PrfMode::Single(hash), &secret, &seed, 100));
    }
}

#[test]
fn test_labels_separate_outputs() {
    let mut a = [0u8; 32];
    let mut b = [0u8; 32];
    tls12_prf(&mut a, PrfHash::Sha256, SECRET, MASTER_SECRET_LABEL, b"r")
        .expect("Failed to tls12_prf(..)");
    tls12_prf(&mut b, PrfHash::Sha256, SECRET, KEY_EXPANSION_LABEL, b"r")
        .expect("Failed to tls12_prf(..)");

    assert_ne!(a, b);
}
