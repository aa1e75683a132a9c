pub mod alphabet;
pub mod decode;
pub mod encode;

pub use alphabet::Alphabet;
pub use decode::{decode, decode_into, decoded_len, Decoder};
pub use encode::{encode, encode_hex, encode_hex_into, encode_into, encoded_len, encoded_len_hex, Encoder};

pub const STANDARD: Alphabet =
    match Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/", Some(b'=')) {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("Could not build alphabet"),
    };

pub const URL: Alphabet =
    match Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_", Some(b'=')) {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("Could not build alphabet"),
    };

pub const URL_NOPAD: Alphabet =
    match Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_", None) {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("Could not build alphabet"),
    };

/// Selects one of the three fixed alphabets.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Variant {
    Standard,
    Url,
    UrlNopad,
}

impl Variant {
    pub fn alphabet(self) -> &'static Alphabet {
        match self {
            Variant::Standard => &STANDARD,
            Variant::Url => &URL,
            Variant::UrlNopad => &URL_NOPAD,
        }
    }
}
