// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Secret generation from the operating system's CSPRNG

use crate::constants::defaults::MAX_SECRET_LENGTH;
use crate::error::{ProvisionerError, Result};
use crate::types::GeneratedSecret;
use rand::rngs::OsRng;
use rand::RngCore;

/// Generate a lowercase hex secret of exactly `length` characters.
///
/// Draws enough bytes from the OS random source to cover `length` hex
/// characters and keeps the first `length` of them. Lengths outside
/// `1..=MAX_SECRET_LENGTH` are rejected. A failing random source is an error;
/// there is no fallback generator.
pub fn generate_secret(length: usize) -> Result<GeneratedSecret> {
    if length == 0 || length > MAX_SECRET_LENGTH {
        return Err(ProvisionerError::InvalidRequest(format!(
            "secret length must be between 1 and {}, got {}",
            MAX_SECRET_LENGTH, length
        )));
    }

    let mut bytes = vec![0u8; length.div_ceil(2)];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| ProvisionerError::Randomness(e.to_string()))?;

    let mut encoded = hex::encode(&bytes);
    encoded.truncate(length);

    Ok(GeneratedSecret::new(encoded))
}
