use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidHexCharacter { character: char, index: usize },
    OddLength,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidHexCharacter { character, index } => {
                write!(f, "Invalid character {:?} at position {}", character, index)
            }
            Error::OddLength => write!(f, "Odd number of digits"),
        }
    }
}

const fn value(character: u8, index: usize) -> Result<u8, Error> {
    match character {
        b'A'..=b'F' => Ok(character - b'A' + 10),
        b'a'..=b'f' => Ok(character - b'a' + 10),
        b'0'..=b'9' => Ok(character - b'0'),
        _ => Err(Error::InvalidHexCharacter {
            character: character as char,
            index,
        }),
    }
}

const TABLE: &[u8; 16] = b"0123456789abcdef";

pub fn encode(input: impl AsRef<[u8]>) -> String {
    let input = input.as_ref();
    let mut output = Vec::with_capacity(input.len() * 2);
    for byte in input {
        output.push(TABLE[(byte >> 4) as usize]);
        output.push(TABLE[(byte & 0x0F) as usize]);
    }
    unsafe { String::from_utf8_unchecked(output) }
}

/// Strips an optional `0x` / `0X` prefix.
pub fn digits(input: &[u8]) -> &[u8] {
    match input {
        [b'0', b'x' | b'X', rest @ ..] => rest,
        _ => input,
    }
}

/// Iterates over the digit pairs of a hex string (optional `0x` prefix),
/// yielding one byte per pair. A dangling odd digit yields `OddLength`;
/// indexes in errors are relative to the first digit after the prefix.
pub struct Pairs<'a> {
    digits: &'a [u8],
    offset: usize,
}

impl<'a> Pairs<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            digits: digits(input),
            offset: 0,
        }
    }
}

impl Iterator for Pairs<'_> {
    type Item = Result<u8, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let high = *self.digits.get(self.offset)?;
        let low = match self.digits.get(self.offset + 1) {
            Some(&low) => low,
            None => {
                self.offset = self.digits.len();
                return Some(Err(Error::OddLength));
            }
        };
        let index = self.offset;
        self.offset += 2;
        let result = match (value(high, index), value(low, index + 1)) {
            (Ok(high), Ok(low)) => Ok(high << 4 | low),
            (Err(error), _) | (_, Err(error)) => Err(error),
        };
        Some(result)
    }
}
