use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonAsciiCharacter { character: u8, index: usize },
    PaddingCollision { character: char },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    NonAsciiCharacter { character: u8, index: usize },
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character '{}' at indexes {} and {}", character, first, second)
            }
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
            Self::PaddingCollision { character } => write!(f, "Padding character '{}' is part of the alphabet", character),
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

/// A base64 alphabet: 64 symbols, the reverse lookup over every ASCII byte,
/// and an optional padding character. When padding is configured, the padding
/// byte reverse-maps to sextet 0 so that a pad in decoder input zero-fills
/// instead of failing.
#[derive(Debug, Eq, PartialEq)]
pub struct Alphabet {
    symbols: [u8; 64],
    reverse: [Option<u8>; 128],
    padding: Option<u8>,
}

impl Alphabet {
    pub const fn new(symbols: &[u8; 64], padding: Option<u8>) -> Result<Self, Error> {
        let mut encode = [0u8; 64];
        let mut reverse: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < encode.len() {
            let character = symbols[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { character, index });
            }
            if let Some(first) = reverse[character as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: first as usize,
                    second: index,
                });
            }
            encode[index] = character;
            reverse[character as usize] = Some(index as u8);
            index += 1;
        }

        if let Some(character) = padding {
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { character, index: 0 });
            }
            if reverse[character as usize].is_some() {
                return Err(Error::PaddingCollision { character: character as char });
            }
            reverse[character as usize] = Some(0);
        }

        Ok(Self {
            symbols: encode,
            reverse,
            padding,
        })
    }

    pub fn encode(&self, sextet: u8) -> u8 {
        self.symbols[sextet as usize]
    }

    pub fn decode(&self, value: u8, index: usize) -> Result<u8, DecodeError> {
        if value >= 128 {
            return Err(DecodeError::NonAsciiCharacter { character: value, index });
        }
        match self.reverse[value as usize] {
            Some(value) => Ok(value),
            None => Err(DecodeError::InvalidCharacter {
                character: value as char,
                index,
            }),
        }
    }

    pub const fn padding(&self) -> Option<u8> {
        self.padding
    }

    pub fn is_padding(&self, value: u8) -> bool {
        self.padding == Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Alphabet, DecodeError, Error};

    const SYMBOLS: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    #[test]
    fn build() {
        let alphabet = Alphabet::new(SYMBOLS, Some(b'=')).unwrap();
        assert_eq!(alphabet.encode(0), b'A');
        assert_eq!(alphabet.encode(26), b'a');
        assert_eq!(alphabet.encode(63), b'/');
        assert_eq!(alphabet.decode(b'A', 0), Ok(0));
        assert_eq!(alphabet.decode(b'/', 0), Ok(63));
        assert_eq!(alphabet.padding(), Some(b'='));
        assert!(alphabet.is_padding(b'='));
    }

    #[test]
    fn padding_reverse_maps_to_zero() {
        let alphabet = Alphabet::new(SYMBOLS, Some(b'=')).unwrap();
        assert_eq!(alphabet.decode(b'=', 7), Ok(0));
    }

    #[test]
    fn unpadded() {
        let alphabet = Alphabet::new(SYMBOLS, None).unwrap();
        assert_eq!(alphabet.padding(), None);
        assert!(!alphabet.is_padding(b'='));
        assert_eq!(
            alphabet.decode(b'=', 3),
            Err(DecodeError::InvalidCharacter { character: '=', index: 3 })
        );
    }

    #[test]
    fn invalid_symbols() {
        let mut symbols = *SYMBOLS;
        symbols[10] = b'A';
        assert_eq!(
            Alphabet::new(&symbols, None),
            Err(Error::DuplicateCharacter { character: 'A', first: 0, second: 10 })
        );
        assert_eq!(
            Alphabet::new(SYMBOLS, Some(b'A')),
            Err(Error::PaddingCollision { character: 'A' })
        );
        let mut symbols = *SYMBOLS;
        symbols[5] = 0xc3;
        assert_eq!(
            Alphabet::new(&symbols, None),
            Err(Error::NonAsciiCharacter { character: 0xc3, index: 5 })
        );
    }

    #[test]
    fn rebuild_is_identical() {
        let first = Alphabet::new(SYMBOLS, Some(b'=')).unwrap();
        let second = Alphabet::new(SYMBOLS, Some(b'=')).unwrap();
        for value in 0..64u8 {
            assert_eq!(first.encode(value), second.encode(value));
        }
        for value in 0..128u8 {
            assert_eq!(first.decode(value, 0), second.decode(value, 0));
        }
    }
}
