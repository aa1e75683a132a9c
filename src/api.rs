//! The pipeline-facing surface. Failures collapse to an absent result:
//! callers cannot distinguish a capacity failure from invalid input, and a
//! missing HMAC key fails before any computation. A missing message is the
//! empty message.

use crate::base64::{self, Variant};
use crate::hashing::{self, Algorithm, HmacAlgorithm};

pub fn base64_encode(variant: Variant, message: Option<&[u8]>, as_hex: bool) -> Option<String> {
    let message = message.unwrap_or_default();
    if as_hex {
        base64::encode_hex(variant, message).ok()
    } else {
        Some(base64::encode(variant, message))
    }
}

pub fn base64_decode(variant: Variant, message: Option<&str>) -> Option<Vec<u8>> {
    base64::decode(variant, message.unwrap_or_default()).ok()
}

pub fn hash(algorithm: Algorithm, message: Option<&[u8]>) -> String {
    hashing::hash(algorithm, message.unwrap_or_default())
}

pub fn hmac(algorithm: HmacAlgorithm, key: Option<&[u8]>, message: Option<&[u8]>) -> Option<String> {
    let key = key?;
    Some(hashing::hmac(algorithm, key, message.unwrap_or_default()))
}

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
