// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared fixtures and a straightforward `P_hash` used as an oracle

use hmac::Hmac;
use hmac::digest::{KeyInit, Mac};
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

use crate::mode::{PrfHash, PrfMode};
use crate::split::split_secret;

pub(crate) const SECRET: &[u8] = b"secret key";
pub(crate) const SEED: [&[u8]; 2] = [b"seed1", b"seed2"];

pub(crate) const SHA1_54: &str = "d471667498bb6f11a606fd87a618c43499d867dc8295e041ba42001f28625af2\
                                  00b1e2c5329322650e2133e78e1679b35c6cd906b3aa";
pub(crate) const MD5_54: &str = "9408236c96e99feba4ce5beedac3ab9a17a071f83999ba38f045a0c259edb1c4\
                                 5362bdee5037357bba12a7cedebe075921ec853f959f";
pub(crate) const MD5_SHA1_54: &str = "b675ac71c6ee825319a8734fe16785eab7a8990cf4a4c3d7ad67cdfb1290c048\
                                      dd23cdb47bebfbc26cd0ad5dd3b00fae513ad069cdd4";

fn hmac_once<M: Mac + KeyInit>(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = <M as KeyInit>::new_from_slice(key).expect("Failed to new_from_slice(..)");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// `P_hash` written directly from the RFC, with an explicitly joined seed.
pub(crate) fn reference_p_hash<M: Mac + KeyInit>(secret: &[u8], seed: &[u8], len: usize) -> Vec<u8> {
    let mut a = seed.to_vec();
    let mut out = Vec::new();

    while out.len() < len {
        a = hmac_once::<M>(secret, &a);

        let mut input = a.clone();
        input.extend_from_slice(seed);
        out.extend_from_slice(&hmac_once::<M>(secret, &input));
    }

    out.truncate(len);
    out
}

pub(crate) fn reference_single(hash: PrfHash, secret: &[u8], seed: &[u8], len: usize) -> Vec<u8> {
    match hash {
        PrfHash::Md5 => reference_p_hash::<Hmac<Md5>>(secret, seed, len),
        PrfHash::Sha1 => reference_p_hash::<Hmac<Sha1>>(secret, seed, len),
        PrfHash::Sha224 => reference_p_hash::<Hmac<Sha224>>(secret, seed, len),
        PrfHash::Sha256 => reference_p_hash::<Hmac<Sha256>>(secret, seed, len),
        PrfHash::Sha384 => reference_p_hash::<Hmac<Sha384>>(secret, seed, len),
        PrfHash::Sha512 => reference_p_hash::<Hmac<Sha512>>(secret, seed, len),
    }
}

pub(crate) fn reference_prf(mode: PrfMode, secret: &[u8], seed: &[u8], len: usize) -> Vec<u8> {
    match mode {
        PrfMode::Single(hash) => reference_single(hash, secret, seed, len),
        PrfMode::Dual(first, second) => {
            let (s1, s2) = split_secret(secret);
            let a = reference_single(first, s1, seed, len);
            let b = reference_single(second, s2, seed, len);
            a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect()
        }
    }
}

/// Every single and dual mode over the supported hashes.
pub(crate) fn all_modes() -> Vec<PrfMode> {
    let mut modes: Vec<PrfMode> = PrfHash::ALL.into_iter().map(PrfMode::Single).collect();
    for first in PrfHash::ALL {
        for second in PrfHash::ALL {
            modes.push(PrfMode::Dual(first, second));
        }
    }
    modes
}
