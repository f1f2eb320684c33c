// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Runtime dispatch from [`PrfHash`] to a concrete `P_hash` stream.

use hmac::Hmac;
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

use crate::error::PrfError;
use crate::mode::PrfHash;
use crate::p_hash::PHash;

pub(crate) enum Expander<'a> {
    Md5(PHash<'a, Hmac<Md5>>),
    Sha1(PHash<'a, Hmac<Sha1>>),
    Sha224(PHash<'a, Hmac<Sha224>>),
    Sha256(PHash<'a, Hmac<Sha256>>),
    Sha384(PHash<'a, Hmac<Sha384>>),
    Sha512(PHash<'a, Hmac<Sha512>>),
}

/// Runs `$body` with `$stream` bound to whichever `PHash` the expander holds.
macro_rules! with_stream {
    ($expander:expr, $stream:ident => $body:expr) => {
        match $expander {
            Expander::Md5($stream) => $body,
            Expander::Sha1($stream) => $body,
            Expander::Sha224($stream) => $body,
            Expander::Sha256($stream) => $body,
            Expander::Sha384($stream) => $body,
            Expander::Sha512($stream) => $body,
        }
    };
}

impl<'a> Expander<'a> {
    pub(crate) fn new(
        hash: PrfHash,
        secret: &[u8],
        seed: &'a [&'a [u8]],
    ) -> Result<Self, PrfError> {
        let expander = match hash {
            PrfHash::Md5 => Expander::Md5(PHash::new(secret, seed)?),
            PrfHash::Sha1 => Expander::Sha1(PHash::new(secret, seed)?),
            PrfHash::Sha224 => Expander::Sha224(PHash::new(secret, seed)?),
            PrfHash::Sha256 => Expander::Sha256(PHash::new(secret, seed)?),
            PrfHash::Sha384 => Expander::Sha384(PHash::new(secret, seed)?),
            PrfHash::Sha512 => Expander::Sha512(PHash::new(secret, seed)?),
        };
        Ok(expander)
    }

    pub(crate) fn fill(&mut self, out: &mut [u8]) {
        with_stream!(self, stream => stream.fill(out))
    }

    pub(crate) fn xor_into(&mut self, out: &mut [u8]) {
        with_stream!(self, stream => stream.xor_into(out))
    }
}
