use super::{Alphabet, Variant};
use crate::hex;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    InvalidHexCharacter { character: char, index: usize },
    OddHexLength,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
            Error::InvalidHexCharacter { character, index } => {
                write!(f, "Invalid hex character {:?} at position {}", character, index)
            }
            Error::OddHexLength => write!(f, "Odd number of hex digits"),
        }
    }
}

impl From<hex::Error> for Error {
    fn from(error: hex::Error) -> Self {
        match error {
            hex::Error::InvalidHexCharacter { character, index } => Error::InvalidHexCharacter { character, index },
            hex::Error::OddLength => Error::OddHexLength,
        }
    }
}

/// Capacity needed to encode `length` input bytes, including the terminator.
pub const fn encoded_len(length: usize) -> usize {
    (length + 2) / 3 * 4 + 1
}

/// Capacity needed to encode a hex string input, including the terminator.
/// An upper bound only; the encoder re-verifies capacity group by group.
pub fn encoded_len_hex(input: &[u8]) -> usize {
    encoded_len(hex::digits(input).len() / 2)
}

pub struct Encoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Encodes into a caller-owned buffer. The output is NUL-terminated and
    /// the returned count includes the terminator; on failure the buffer
    /// contents are unspecified.
    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        self.encode_groups(input.as_ref().iter().map(|&value| Ok(value)), output.as_mut())
    }

    /// Encodes a hex string (optional `0x` prefix) as if its digit pairs were
    /// the input bytes. A dangling odd digit fails the call.
    pub fn encode_hex_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        self.encode_groups(hex::Pairs::new(input.as_ref()).map(|value| value.map_err(Error::from)), output.as_mut())
    }

    fn encode_groups(&self, mut input: impl Iterator<Item = Result<u8, Error>>, output: &mut [u8]) -> Result<usize, Error> {
        let mut index = 0;
        loop {
            let b0 = match input.next() {
                Some(value) => value?,
                None => break,
            };
            // 4 symbols plus the reserved terminator must fit before the
            // group is emitted; a failed call never leaves a partial group.
            if output.len() < index + 5 {
                return Err(Error::BufferTooSmall);
            }
            let b1 = input.next().transpose()?;
            let b2 = match b1 {
                Some(_) => input.next().transpose()?,
                None => None,
            };
            output[index] = self.alphabet.encode(b0 >> 2);
            output[index + 1] = self.alphabet.encode((b0 << 4 | b1.unwrap_or(0) >> 4) & 0x3f);
            index += 2;
            match b1 {
                Some(b1) => {
                    output[index] = self.alphabet.encode((b1 << 2 | b2.unwrap_or(0) >> 6) & 0x3f);
                    index += 1;
                }
                None => {
                    if let Some(padding) = self.alphabet.padding() {
                        output[index] = padding;
                        index += 1;
                    }
                }
            }
            match b2 {
                Some(b2) => {
                    output[index] = self.alphabet.encode(b2 & 0x3f);
                    index += 1;
                }
                None => {
                    if let Some(padding) = self.alphabet.padding() {
                        output[index] = padding;
                        index += 1;
                    }
                }
            }
        }
        match output.get_mut(index) {
            Some(value) => *value = 0,
            None => return Err(Error::BufferTooSmall),
        }
        Ok(index + 1)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let input = input.as_ref();
        let mut output = vec![0u8; encoded_len(input.len())];
        let len = self.encode_into(input, &mut output).unwrap();
        output.truncate(len - 1);
        unsafe { String::from_utf8_unchecked(output) }
    }

    pub fn encode_hex(&self, input: impl AsRef<[u8]>) -> Result<String, Error> {
        let input = input.as_ref();
        let mut output = vec![0u8; encoded_len_hex(input)];
        let len = self.encode_hex_into(input, &mut output)?;
        output.truncate(len - 1);
        Ok(unsafe { String::from_utf8_unchecked(output) })
    }
}

pub fn encode_into(variant: Variant, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::new(variant.alphabet()).encode_into(input, output)
}

pub fn encode_hex_into(variant: Variant, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::new(variant.alphabet()).encode_hex_into(input, output)
}

pub fn encode(variant: Variant, input: impl AsRef<[u8]>) -> String {
    Encoder::new(variant.alphabet()).encode(input)
}

pub fn encode_hex(variant: Variant, input: impl AsRef<[u8]>) -> Result<String, Error> {
    Encoder::new(variant.alphabet()).encode_hex(input)
}
