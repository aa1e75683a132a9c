//! Digest, HMAC and base64 primitives for a request-processing pipeline.
//!
//! The base64 codec is the original work here: three fixed alphabets
//! (standard, URL-safe padded, URL-safe unpadded), a hex-string input mode,
//! and bounded writes into caller-owned buffers. Hashing and HMAC delegate
//! to their registry implementations and only format the output.

pub mod api;
pub mod base64;
pub mod hashing;
pub mod hex;

pub use self::{
    api::{base64_decode, base64_encode, hash, hmac, version},
    base64::Variant,
    hashing::{Algorithm, HmacAlgorithm},
};
