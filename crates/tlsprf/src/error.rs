// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;

use hmac::digest::InvalidLength;
use thiserror::Error;

/// PRF error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrfError {
    /// Mode name does not name one or two supported digests
    #[error("invalid digest type: {0}")]
    InvalidMode(String),

    /// Requested output length does not fit the output buffer
    #[error("requested {requested} output bytes but the buffer holds {available}")]
    OutputTooSmall {
        /// Bytes the caller asked for
        requested: usize,
        /// Bytes the buffer can hold
        available: usize,
    },

    /// The keyed-hash primitive rejected the secret
    #[error("keyed hash rejected the secret: {0}")]
    Primitive(InvalidLength),
}

impl From<InvalidLength> for PrfError {
    fn from(err: InvalidLength) -> Self {
        Self::Primitive(err)
    }
}
