use super::{alphabet, Alphabet, Variant};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    NonAsciiCharacter { character: u8, index: usize },
    InvalidCharacter { character: char, index: usize },
    CharacterAfterPadding { character: char, index: usize },
    IncompleteGroup,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooSmall => write!(f, "Output buffer too small"),
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Self::CharacterAfterPadding { character, index } => {
                write!(f, "Character '{}' after padding at index {}", character, index)
            }
            Self::IncompleteGroup => write!(f, "Trailing group holds less than one byte"),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
            alphabet::DecodeError::NonAsciiCharacter { character, index } => Error::NonAsciiCharacter { character, index },
        }
    }
}

/// Capacity needed to decode `length` input symbols, including the
/// terminator. An upper bound; padding reduces the actual output.
pub const fn decoded_len(length: usize) -> usize {
    (length + 3) / 4 * 3 + 1
}

pub struct Decoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Decodes 4 symbols at a time. Input exhaustion inside a group counts as
    /// padding, so unpadded input is accepted for every variant. Trailing
    /// pads contribute zero bits and suppress their output bytes. The output
    /// is NUL-terminated; the returned count excludes the terminator.
    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        let mut index = 0;
        let mut offset = 0;
        while offset < input.len() {
            let mut accumulator: u32 = 0;
            let mut data = 0;
            let mut padded = false;
            for position in 0..4 {
                accumulator <<= 6;
                let value = match input.get(offset + position) {
                    Some(&value) => value,
                    None => {
                        padded = true;
                        continue;
                    }
                };
                if self.alphabet.is_padding(value) {
                    padded = true;
                    continue;
                }
                if padded {
                    return Err(Error::CharacterAfterPadding {
                        character: value as char,
                        index: offset + position,
                    });
                }
                accumulator |= self.alphabet.decode(value, offset + position)? as u32;
                data += 1;
            }
            if data < 2 {
                return Err(Error::IncompleteGroup);
            }
            for _ in 0..data - 1 {
                if index + 1 >= output.len() {
                    return Err(Error::BufferTooSmall);
                }
                output[index] = (accumulator >> 16) as u8;
                accumulator <<= 8;
                index += 1;
            }
            offset += 4;
        }
        match output.get_mut(index) {
            Some(value) => *value = 0,
            None => return Err(Error::BufferTooSmall),
        }
        Ok(index)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let input = input.as_ref();
        let mut output = vec![0u8; decoded_len(input.len())];
        let len = self.decode_into(input, &mut output)?;
        output.truncate(len);
        Ok(output)
    }
}

pub fn decode_into(variant: Variant, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::new(variant.alphabet()).decode_into(input, output)
}

pub fn decode(variant: Variant, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::new(variant.alphabet()).decode(input)
}

#[cfg(test)]
mod tests {
    use crate::base64::Variant;

    #[test]
    fn decode() {
        assert_eq!(super::decode(Variant::Standard, ""), Ok(vec![]));
        assert_eq!(super::decode(Variant::Standard, "Zg=="), Ok(b"f".to_vec()));
        assert_eq!(super::decode(Variant::Standard, "Zm8="), Ok(b"fo".to_vec()));
        assert_eq!(super::decode(Variant::Standard, "Zm9v"), Ok(b"foo".to_vec()));
        assert_eq!(super::decode(Variant::Standard, "Zm9vYg=="), Ok(b"foob".to_vec()));
        assert_eq!(super::decode(Variant::Standard, "Zm9vYmFy"), Ok(b"foobar".to_vec()));
        assert_eq!(super::decode(Variant::Standard, "FPucA9l+"), Ok(vec![0x14, 0xfb, 0x9c, 0x03, 0xd9, 0x7e]));
    }

    #[test]
    fn decode_missing_padding() {
        assert_eq!(super::decode(Variant::Standard, "Zg"), Ok(b"f".to_vec()));
        assert_eq!(super::decode(Variant::Standard, "Zm8"), Ok(b"fo".to_vec()));
        assert_eq!(super::decode(Variant::Standard, "Zm9vYg"), Ok(b"foob".to_vec()));
        assert_eq!(super::decode(Variant::UrlNopad, "Zm9v"), Ok(b"foo".to_vec()));
        assert_eq!(super::decode(Variant::UrlNopad, "Zm8"), Ok(b"fo".to_vec()));
        assert_eq!(super::decode(Variant::UrlNopad, "-_8"), Ok(vec![0xfb, 0xff]));
        assert_eq!(super::decode(Variant::Url, "-_8="), Ok(vec![0xfb, 0xff]));
    }

    #[test]
    fn decode_invalid() {
        assert_eq!(
            super::decode(Variant::Standard, "Zm9!"),
            Err(super::Error::InvalidCharacter { character: '!', index: 3 })
        );
        assert_eq!(
            super::decode(Variant::Standard, [0x5a, 0x6d, 0x39, 0xff]),
            Err(super::Error::NonAsciiCharacter { character: 0xff, index: 3 })
        );
        assert_eq!(super::decode(Variant::Standard, "Z"), Err(super::Error::IncompleteGroup));
        assert_eq!(super::decode(Variant::Standard, "===="), Err(super::Error::IncompleteGroup));
        assert_eq!(
            super::decode(Variant::Standard, "Zm=v"),
            Err(super::Error::CharacterAfterPadding { character: 'v', index: 3 })
        );
        // '=' is not part of the unpadded alphabet
        assert_eq!(
            super::decode(Variant::UrlNopad, "Zm8="),
            Err(super::Error::InvalidCharacter { character: '=', index: 3 })
        );
    }

    #[test]
    fn decode_into() {
        let mut output = [0u8; 4];
        assert_eq!(super::decode_into(Variant::Standard, "Zm9v", &mut output), Ok(3));
        assert_eq!(&output, b"foo\0");
        let mut output = [0u8; 3];
        assert_eq!(super::decode_into(Variant::Standard, "Zm9v", &mut output), Err(super::Error::BufferTooSmall));
        let mut output = [0u8; 3];
        assert_eq!(super::decode_into(Variant::Standard, "Zm8=", &mut output), Ok(2));
        assert_eq!(&output, b"fo\0");
        let mut output = [0u8; 2];
        assert_eq!(super::decode_into(Variant::Standard, "Zm8=", &mut output), Err(super::Error::BufferTooSmall));
    }

    #[test]
    fn decode_empty_into() {
        let mut output = [0u8; 1];
        assert_eq!(super::decode_into(Variant::Standard, "", &mut output), Ok(0));
        assert_eq!(output, [0]);
        let mut output = [0u8; 0];
        assert_eq!(super::decode_into(Variant::Standard, "", &mut output), Err(super::Error::BufferTooSmall));
    }
}
